// src/services/mod.rs
//
// Services Module - Orchestration Layer
//
// Services load aggregates, call domain operations, persist the result
// and emit events. No business rule lives here.

pub mod show_reel_service;
pub mod video_clip_service;


pub use show_reel_service::{CreateShowReelRequest, ShowReelService};
pub use video_clip_service::{CreateVideoClipRequest, VideoClipService};
