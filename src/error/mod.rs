// src/error/mod.rs
//
// Application error types.
// Domain errors pass through untouched; everything else is storage or plumbing.

pub mod types;

pub use types::{AppError, AppResult};
