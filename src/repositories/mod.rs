// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO event emission
// - NO cross-repository calls
// - save() replaces the whole aggregate (last writer wins)

pub mod show_reel_repository;
pub mod video_clip_repository;

pub use show_reel_repository::{InMemoryShowReelRepository, ShowReelRepository};
pub use video_clip_repository::{InMemoryVideoClipRepository, VideoClipRepository};

#[cfg(test)]
pub use show_reel_repository::MockShowReelRepository;
#[cfg(test)]
pub use video_clip_repository::MockVideoClipRepository;
