use super::entity::ShowReel;
use crate::domain::video_clip::VideoClip;
use crate::domain::video_format::{VideoDefinition, VideoStandard};
use crate::domain::{validate_name, DomainError, DomainResult};

pub(crate) const ENTITY_NAME: &str = "Show reel";

/// Validates all ShowReel invariants.
/// Useful for auditing reels that were reconstructed from storage.
pub fn validate_show_reel(reel: &ShowReel) -> DomainResult<()> {
    validate_name(reel.name(), ENTITY_NAME)?;
    for clip in reel.clips() {
        ensure_compatible(reel.video_standard(), reel.video_definition(), clip)?;
    }
    Ok(())
}

/// A clip may only join a reel with exactly the same standard and definition.
/// Never converted, never coerced.
pub(crate) fn ensure_compatible(
    standard: VideoStandard,
    definition: VideoDefinition,
    clip: &VideoClip,
) -> DomainResult<()> {
    if !clip.is_compatible_with_standard_and_definition(standard, definition) {
        return Err(DomainError::IncompatibleClip {
            clip_id: clip.id().clone(),
            clip_standard: clip.video_standard(),
            clip_definition: clip.video_definition(),
            reel_standard: standard,
            reel_definition: definition,
        });
    }
    Ok(())
}

/// Critical ShowReel Invariants:
///
/// 1. Name is never blank and is stored trimmed
/// 2. Every clip matches the reel's standard AND definition
/// 3. Clip order is meaningful; the same clip may appear more than once
/// 4. Total duration is derived, never stored
/// 5. Every successful mutation bumps updated_at
/// 6. A rejected mutation leaves the reel untouched
/// 7. created_at never changes
