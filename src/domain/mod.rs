// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod clock;
pub mod ids;
pub mod show_reel;
pub mod timecode;
pub mod video_clip;
pub mod video_format;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Value objects
pub use ids::{ShowReelId, VideoClipId};
pub use timecode::Timecode;
pub use video_format::{VideoDefinition, VideoStandard};

// Time source
pub use clock::{Clock, FixedClock, SystemClock};

// Video Clip Entity
pub use video_clip::{validate_video_clip, CreateVideoClipParams, ReconstructVideoClipParams, VideoClip};

// Show Reel Aggregate
pub use show_reel::{validate_show_reel, CreateShowReelParams, ReconstructShowReelParams, ShowReel};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants.
/// Every failure is raised before any state is mutated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Invalid timecode \"{value}\": {reason}")]
    InvalidTimecode { value: String, reason: String },

    #[error("Timecode cannot be negative: {0}")]
    NegativeTimecode(String),

    #[error("Invalid video standard: \"{0}\" (expected PAL or NTSC)")]
    InvalidVideoStandard(String),

    #[error("Invalid video definition: \"{0}\" (expected SD or HD)")]
    InvalidVideoDefinition(String),

    #[error("{entity} name cannot be empty")]
    EmptyName { entity: &'static str },

    #[error("End timecode {end} must be after start timecode {start}")]
    InvalidTimecodeRange { start: String, end: String },

    #[error(
        "Clip {clip_id} ({clip_standard}/{clip_definition}) is incompatible with show reel \
         ({reel_standard}/{reel_definition})"
    )]
    IncompatibleClip {
        clip_id: VideoClipId,
        clip_standard: VideoStandard,
        clip_definition: VideoDefinition,
        reel_standard: VideoStandard,
        reel_definition: VideoDefinition,
    },

    #[error("Clip {0} not found in show reel")]
    ClipNotFound(VideoClipId),

    #[error("Clip index {index} out of bounds (clip count {len})")]
    ClipIndexOutOfBounds { index: isize, len: usize },

    #[error("Cannot sum durations across video standards: expected {expected}, found {found}")]
    MixedVideoStandard {
        expected: VideoStandard,
        found: VideoStandard,
    },

    #[error("{kind} id cannot be blank")]
    InvalidId { kind: &'static str },
}

impl DomainError {
    /// Stable machine-readable code for this failure kind
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::InvalidTimecode { .. } => "INVALID_TIMECODE",
            DomainError::NegativeTimecode(_) => "NEGATIVE_TIMECODE",
            DomainError::InvalidVideoStandard(_) => "INVALID_VIDEO_STANDARD",
            DomainError::InvalidVideoDefinition(_) => "INVALID_VIDEO_DEFINITION",
            DomainError::EmptyName { .. } => "EMPTY_NAME",
            DomainError::InvalidTimecodeRange { .. } => "INVALID_TIMECODE_RANGE",
            DomainError::IncompatibleClip { .. } => "INCOMPATIBLE_CLIP",
            DomainError::ClipNotFound(_) => "CLIP_NOT_FOUND",
            DomainError::ClipIndexOutOfBounds { .. } => "CLIP_INDEX_OUT_OF_BOUNDS",
            DomainError::MixedVideoStandard { .. } => "MIXED_VIDEO_STANDARD",
            DomainError::InvalidId { .. } => "INVALID_ID",
        }
    }
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;

/// Trims a name and rejects it when nothing is left.
/// Shared by every entity that carries a display name.
pub(crate) fn validate_name(name: &str, entity: &'static str) -> DomainResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyName { entity });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_trims() {
        assert_eq!(validate_name("  Demo Reel \n", "Show reel").unwrap(), "Demo Reel");
    }

    #[test]
    fn test_validate_name_rejects_blank() {
        let err = validate_name(" \t ", "Video clip").unwrap_err();
        assert_eq!(err, DomainError::EmptyName { entity: "Video clip" });
        assert_eq!(err.to_string(), "Video clip name cannot be empty");
    }

    #[test]
    fn test_incompatible_clip_message_names_both_sides() {
        let err = DomainError::IncompatibleClip {
            clip_id: VideoClipId::from_string("clip-1").unwrap(),
            clip_standard: VideoStandard::Ntsc,
            clip_definition: VideoDefinition::Hd,
            reel_standard: VideoStandard::Pal,
            reel_definition: VideoDefinition::Sd,
        };
        let message = err.to_string();
        assert!(message.contains("NTSC/HD"));
        assert!(message.contains("PAL/SD"));
        assert_eq!(err.code(), "INCOMPATIBLE_CLIP");
    }
}
