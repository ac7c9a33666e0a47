use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::invariants::{ensure_compatible, ENTITY_NAME};
use crate::domain::timecode::Timecode;
use crate::domain::video_clip::VideoClip;
use crate::domain::video_format::{VideoDefinition, VideoStandard};
use crate::domain::{validate_name, DomainError, DomainResult, ShowReelId, VideoClipId};

/// An ordered sequence of clips sharing one standard and definition.
/// This is the aggregate root: all changes to the sequence go through it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowReel {
    id: ShowReelId,
    name: String,
    video_standard: VideoStandard,
    video_definition: VideoDefinition,
    /// Ordered, duplicates allowed
    clips: Vec<VideoClip>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateShowReelParams {
    /// A fresh id is generated when absent
    pub id: Option<ShowReelId>,
    pub name: String,
    pub video_standard: VideoStandard,
    pub video_definition: VideoDefinition,
}

#[derive(Debug, Clone)]
pub struct ReconstructShowReelParams {
    pub id: ShowReelId,
    pub name: String,
    pub video_standard: VideoStandard,
    pub video_definition: VideoDefinition,
    pub clips: Vec<VideoClip>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ShowReel {
    /// Create an empty reel
    pub fn create(params: CreateShowReelParams, now: DateTime<Utc>) -> DomainResult<Self> {
        let name = validate_name(&params.name, ENTITY_NAME)?;
        Ok(Self {
            id: params.id.unwrap_or_else(ShowReelId::generate),
            name,
            video_standard: params.video_standard,
            video_definition: params.video_definition,
            clips: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuild a reel from storage. Clips are trusted as-is.
    pub fn reconstruct(params: ReconstructShowReelParams) -> Self {
        Self {
            id: params.id,
            name: params.name,
            video_standard: params.video_standard,
            video_definition: params.video_definition,
            clips: params.clips,
            created_at: params.created_at,
            updated_at: params.updated_at,
        }
    }

    // ------------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------------

    pub fn rename(&mut self, new_name: &str, now: DateTime<Utc>) -> DomainResult<()> {
        self.name = validate_name(new_name, ENTITY_NAME)?;
        self.updated_at = now;
        Ok(())
    }

    /// Append a clip. The same clip may be added any number of times.
    pub fn add_clip(&mut self, clip: VideoClip, now: DateTime<Utc>) -> DomainResult<()> {
        ensure_compatible(self.video_standard, self.video_definition, &clip)?;
        self.clips.push(clip);
        self.updated_at = now;
        Ok(())
    }

    /// Remove the first occurrence of `clip_id` and return it
    pub fn remove_clip(&mut self, clip_id: &VideoClipId, now: DateTime<Utc>) -> DomainResult<VideoClip> {
        let position = self
            .clips
            .iter()
            .position(|clip| clip.id() == clip_id)
            .ok_or_else(|| DomainError::ClipNotFound(clip_id.clone()))?;

        let removed = self.clips.remove(position);
        self.updated_at = now;
        Ok(removed)
    }

    /// Remove the clip at `index` and return it
    pub fn remove_clip_at(&mut self, index: isize, now: DateTime<Utc>) -> DomainResult<VideoClip> {
        let len = self.clips.len();
        let position = usize::try_from(index)
            .ok()
            .filter(|&position| position < len)
            .ok_or(DomainError::ClipIndexOutOfBounds { index, len })?;

        let removed = self.clips.remove(position);
        self.updated_at = now;
        Ok(removed)
    }

    /// Rebuild the sequence in the order given by `clip_ids`.
    ///
    /// Each id is resolved to the first clip carrying it, without consuming
    /// matches. With duplicate ids in the reel, the resulting sequence
    /// follows the caller's list exactly: an id listed twice yields two
    /// copies, an id left out is dropped.
    pub fn reorder_clips(&mut self, clip_ids: &[VideoClipId], now: DateTime<Utc>) -> DomainResult<()> {
        let reordered = clip_ids
            .iter()
            .map(|clip_id| {
                self.clips
                    .iter()
                    .find(|clip| clip.id() == clip_id)
                    .cloned()
                    .ok_or_else(|| DomainError::ClipNotFound(clip_id.clone()))
            })
            .collect::<DomainResult<Vec<_>>>()?;

        self.clips = reordered;
        self.updated_at = now;
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn id(&self) -> &ShowReelId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn video_standard(&self) -> VideoStandard {
        self.video_standard
    }

    pub fn video_definition(&self) -> VideoDefinition {
        self.video_definition
    }

    pub fn clips(&self) -> &[VideoClip] {
        &self.clips
    }

    pub fn clip_ids(&self) -> Vec<VideoClipId> {
        self.clips.iter().map(|clip| clip.id().clone()).collect()
    }

    pub fn clip_count(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn has_clip(&self, clip_id: &VideoClipId) -> bool {
        self.clips.iter().any(|clip| clip.id() == clip_id)
    }

    /// None when out of range
    pub fn get_clip_at(&self, index: usize) -> Option<&VideoClip> {
        self.clips.get(index)
    }

    pub fn can_add_clip(&self, clip: &VideoClip) -> bool {
        clip.is_compatible_with_standard_and_definition(self.video_standard, self.video_definition)
    }

    /// Sum of clip durations in the reel's standard.
    /// Clips all share that standard, so no conversion happens here.
    pub fn total_duration(&self) -> DomainResult<Timecode> {
        self.clips
            .iter()
            .try_fold(Timecode::zero(self.video_standard), |total, clip| {
                Ok(total.add(&clip.duration()?))
            })
    }
}

impl PartialEq for ShowReel {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ShowReel {}

impl std::fmt::Display for ShowReel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
