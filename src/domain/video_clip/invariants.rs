use super::entity::VideoClip;
use crate::domain::timecode::Timecode;
use crate::domain::video_format::VideoStandard;
use crate::domain::{validate_name, DomainError, DomainResult};

pub(crate) const ENTITY_NAME: &str = "Video clip";

/// Validates all VideoClip invariants
/// Reconstructed clips skip this; it is applied on creation.
pub fn validate_video_clip(clip: &VideoClip) -> DomainResult<()> {
    validate_name(clip.name(), ENTITY_NAME)?;
    validate_timecode_standards(clip.video_standard(), clip.start_timecode(), clip.end_timecode())?;
    validate_range(clip.start_timecode(), clip.end_timecode())?;
    Ok(())
}

/// Both timecodes must be expressed in the clip's own standard
pub(crate) fn validate_timecode_standards(
    standard: VideoStandard,
    start: &Timecode,
    end: &Timecode,
) -> DomainResult<()> {
    for timecode in [start, end] {
        if timecode.video_standard() != standard {
            return Err(DomainError::MixedVideoStandard {
                expected: standard,
                found: timecode.video_standard(),
            });
        }
    }
    Ok(())
}

/// End must be strictly after start
pub(crate) fn validate_range(start: &Timecode, end: &Timecode) -> DomainResult<()> {
    if !end.is_greater_than(start) {
        return Err(DomainError::InvalidTimecodeRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    Ok(())
}

/// Critical VideoClip Invariants:
///
/// 1. Name is never blank and is stored trimmed
/// 2. Start and end share the clip's VideoStandard
/// 3. End is strictly after start, so duration is never zero
/// 4. Clips are immutable once built
/// 5. Equality is by id only
/// 6. The soft-delete marker is persistence bookkeeping, not an invariant

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::video_clip::{CreateVideoClipParams, ReconstructVideoClipParams};
    use crate::domain::{VideoClipId, VideoDefinition};

    fn pal(text: &str) -> Timecode {
        Timecode::parse(text, VideoStandard::Pal).unwrap()
    }

    #[test]
    fn test_valid_clip() {
        let clip = VideoClip::create(CreateVideoClipParams {
            id: None,
            name: "Intro".to_string(),
            description: None,
            video_standard: VideoStandard::Pal,
            video_definition: VideoDefinition::Sd,
            start_timecode: pal("00:00:00:00"),
            end_timecode: pal("00:00:05:00"),
        })
        .unwrap();
        assert!(validate_video_clip(&clip).is_ok());
    }

    #[test]
    fn test_reconstructed_invalid_clip_is_detected() {
        let clip = VideoClip::reconstruct(ReconstructVideoClipParams {
            id: VideoClipId::from_string("legacy").unwrap(),
            name: "  ".to_string(),
            description: None,
            video_standard: VideoStandard::Pal,
            video_definition: VideoDefinition::Sd,
            start_timecode: pal("00:00:05:00"),
            end_timecode: pal("00:00:01:00"),
            deleted_at: None,
        });
        assert_eq!(validate_video_clip(&clip).unwrap_err().code(), "EMPTY_NAME");
    }

    #[test]
    fn test_equal_timecodes_are_not_a_range() {
        let err = validate_range(&pal("00:00:01:00"), &pal("00:00:01:00")).unwrap_err();
        assert_eq!(err.code(), "INVALID_TIMECODE_RANGE");
    }
}
