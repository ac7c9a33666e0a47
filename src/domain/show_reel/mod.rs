pub mod entity;
pub mod invariants;

pub use entity::{CreateShowReelParams, ReconstructShowReelParams, ShowReel};
pub use invariants::validate_show_reel;
