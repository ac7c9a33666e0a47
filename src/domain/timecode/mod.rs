//! Critical Timecode Invariants:
//!
//! 1. Frames is always a valid index for the timecode's standard
//! 2. (H, M, S, F) and total frames always agree
//! 3. Timecodes are never mutated in place
//! 4. Parsing accepts only HH:MM:SS:FF and Display only produces it
//! 5. Cross-standard comparisons tolerate less than 1ms of drift

pub mod invariants;
pub mod value_object;

#[cfg(test)]
mod property_tests;

pub use value_object::Timecode;
