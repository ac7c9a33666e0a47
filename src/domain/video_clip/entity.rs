use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::invariants::{validate_range, validate_timecode_standards, ENTITY_NAME};
use crate::domain::timecode::Timecode;
use crate::domain::video_format::{VideoDefinition, VideoStandard};
use crate::domain::{validate_name, DomainError, DomainResult, VideoClipId};

/// A bounded time range of footage within one standard and definition.
/// Clips are immutable; equality is by id only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoClip {
    id: VideoClipId,
    name: String,
    description: Option<String>,
    video_standard: VideoStandard,
    video_definition: VideoDefinition,
    start_timecode: Timecode,
    end_timecode: Timecode,
    /// Soft-delete marker owned by the storage layer
    deleted_at: Option<DateTime<Utc>>,
}

/// Input for a validated clip creation
#[derive(Debug, Clone)]
pub struct CreateVideoClipParams {
    /// A fresh id is generated when absent
    pub id: Option<VideoClipId>,
    pub name: String,
    pub description: Option<String>,
    pub video_standard: VideoStandard,
    pub video_definition: VideoDefinition,
    pub start_timecode: Timecode,
    pub end_timecode: Timecode,
}

/// Input for trusted rehydration from storage
#[derive(Debug, Clone)]
pub struct ReconstructVideoClipParams {
    pub id: VideoClipId,
    pub name: String,
    pub description: Option<String>,
    pub video_standard: VideoStandard,
    pub video_definition: VideoDefinition,
    pub start_timecode: Timecode,
    pub end_timecode: Timecode,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl VideoClip {
    /// Create a new clip, enforcing every invariant
    pub fn create(params: CreateVideoClipParams) -> DomainResult<Self> {
        let name = validate_name(&params.name, ENTITY_NAME)?;
        validate_timecode_standards(
            params.video_standard,
            &params.start_timecode,
            &params.end_timecode,
        )?;
        validate_range(&params.start_timecode, &params.end_timecode)?;

        Ok(Self {
            id: params.id.unwrap_or_else(VideoClipId::generate),
            name,
            description: params.description,
            video_standard: params.video_standard,
            video_definition: params.video_definition,
            start_timecode: params.start_timecode,
            end_timecode: params.end_timecode,
            deleted_at: None,
        })
    }

    /// Rebuild a clip from storage without revalidating
    pub fn reconstruct(params: ReconstructVideoClipParams) -> Self {
        Self {
            id: params.id,
            name: params.name,
            description: params.description,
            video_standard: params.video_standard,
            video_definition: params.video_definition,
            start_timecode: params.start_timecode,
            end_timecode: params.end_timecode,
            deleted_at: params.deleted_at,
        }
    }

    pub fn id(&self) -> &VideoClipId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn video_standard(&self) -> VideoStandard {
        self.video_standard
    }

    pub fn video_definition(&self) -> VideoDefinition {
        self.video_definition
    }

    pub fn start_timecode(&self) -> &Timecode {
        &self.start_timecode
    }

    pub fn end_timecode(&self) -> &Timecode {
        &self.end_timecode
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// end - start. Only fails for reconstructed clips whose range is inverted.
    pub fn duration(&self) -> DomainResult<Timecode> {
        self.end_timecode.subtract(&self.start_timecode)
    }

    /// Both standard and definition must match exactly
    pub fn is_compatible_with_standard_and_definition(
        &self,
        standard: VideoStandard,
        definition: VideoDefinition,
    ) -> bool {
        self.video_standard == standard && self.video_definition == definition
    }

    /// Copy of this clip carrying a soft-delete marker
    pub fn with_deleted_at(&self, deleted_at: DateTime<Utc>) -> Self {
        Self {
            deleted_at: Some(deleted_at),
            ..self.clone()
        }
    }

    /// Sum the durations of `clips`, all of which must be in `standard`.
    /// No implicit conversion happens: a clip in another standard is an error.
    pub fn total_duration_of(standard: VideoStandard, clips: &[VideoClip]) -> DomainResult<Timecode> {
        clips
            .iter()
            .try_fold(Timecode::zero(standard), |total, clip| {
                if clip.video_standard != standard {
                    return Err(DomainError::MixedVideoStandard {
                        expected: standard,
                        found: clip.video_standard,
                    });
                }
                Ok(total.add(&clip.duration()?))
            })
    }
}

impl PartialEq for VideoClip {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for VideoClip {}

impl std::fmt::Display for VideoClip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{} - {}] {}/{}",
            self.name, self.start_timecode, self.end_timecode, self.video_standard, self.video_definition
        )
    }
}
