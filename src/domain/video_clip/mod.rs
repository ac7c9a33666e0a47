pub mod entity;
pub mod invariants;

pub use entity::{CreateVideoClipParams, ReconstructVideoClipParams, VideoClip};
pub use invariants::validate_video_clip;
