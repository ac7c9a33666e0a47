// src/services/video_clip_service.rs
use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::domain::{
    Clock, CreateVideoClipParams, Timecode, VideoClip, VideoClipId, VideoDefinition, VideoStandard,
};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, VideoClipCreated, VideoClipDeleted};
use crate::repositories::VideoClipRepository;

#[derive(Debug, Clone)]
pub struct CreateVideoClipRequest {
    pub name: String,
    pub description: Option<String>,
    pub video_standard: String,
    pub video_definition: String,
    /// HH:MM:SS:FF in the clip's standard
    pub start_timecode: String,
    pub end_timecode: String,
}

pub struct VideoClipService {
    clip_repo: Arc<dyn VideoClipRepository>,
    event_bus: Arc<EventBus>,
    clock: Arc<dyn Clock>,
    config: ServiceConfig,
}

impl VideoClipService {
    pub fn new(
        clip_repo: Arc<dyn VideoClipRepository>,
        event_bus: Arc<EventBus>,
        clock: Arc<dyn Clock>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            clip_repo,
            event_bus,
            clock,
            config,
        }
    }

    pub fn create_clip(&self, request: CreateVideoClipRequest) -> AppResult<VideoClip> {
        let clip = Self::build_clip(request)
            .inspect_err(|e| log::warn!("Video clip creation rejected [{}]: {}", e.code(), e))?;
        let duration = clip.duration()?;

        self.clip_repo.save(&clip)?;
        log::info!(
            "Created video clip {} \"{}\" ({}/{}, {})",
            clip.id(),
            clip.name(),
            clip.video_standard(),
            clip.video_definition(),
            duration
        );

        self.event_bus.emit(VideoClipCreated::new(
            clip.id().clone(),
            clip.name().to_string(),
            clip.video_standard(),
            clip.video_definition(),
            duration.to_string(),
            self.clock.now(),
        ));
        Ok(clip)
    }

    fn build_clip(request: CreateVideoClipRequest) -> AppResult<VideoClip> {
        let video_standard: VideoStandard = request.video_standard.parse()?;
        let video_definition: VideoDefinition = request.video_definition.parse()?;
        let start_timecode = Timecode::parse(&request.start_timecode, video_standard)?;
        let end_timecode = Timecode::parse(&request.end_timecode, video_standard)?;

        Ok(VideoClip::create(CreateVideoClipParams {
            id: None,
            name: request.name,
            description: request.description,
            video_standard,
            video_definition,
            start_timecode,
            end_timecode,
        })?)
    }

    /// Soft-deleted clips are hidden
    pub fn get_clip(&self, clip_id: &VideoClipId) -> AppResult<Option<VideoClip>> {
        log::debug!("Loading video clip {}", clip_id);
        Ok(self
            .clip_repo
            .find_by_id(clip_id)?
            .filter(|clip| !clip.is_deleted()))
    }

    pub fn list_clips(&self) -> AppResult<Vec<VideoClip>> {
        let clips = self.clip_repo.find_all()?;
        Ok(clips.into_iter().filter(|clip| !clip.is_deleted()).collect())
    }

    /// Soft or hard delete depending on configuration
    pub fn delete_clip(&self, clip_id: &VideoClipId) -> AppResult<()> {
        let clip = self
            .get_clip(clip_id)?
            .ok_or_else(|| AppError::not_found("Video clip", clip_id))?;
        let now = self.clock.now();

        if self.config.soft_delete_clips {
            self.clip_repo.save(&clip.with_deleted_at(now))?;
        } else {
            self.clip_repo.delete(clip_id)?;
        }

        log::info!(
            "Deleted video clip {} ({})",
            clip_id,
            if self.config.soft_delete_clips { "soft" } else { "hard" }
        );
        self.event_bus.emit(VideoClipDeleted::new(
            clip_id.clone(),
            self.config.soft_delete_clips,
            now,
        ));
        Ok(())
    }

    /// Sum the durations of the given clips, in the first clip's standard.
    /// Clips from another standard are refused rather than converted.
    pub fn total_duration_of(&self, clip_ids: &[VideoClipId]) -> AppResult<Option<Timecode>> {
        let clips = clip_ids
            .iter()
            .map(|id| {
                self.get_clip(id)?
                    .ok_or_else(|| AppError::not_found("Video clip", id))
            })
            .collect::<AppResult<Vec<_>>>()?;

        let Some(first) = clips.first() else {
            return Ok(None);
        };

        let total = VideoClip::total_duration_of(first.video_standard(), &clips)
            .inspect_err(|e| log::warn!("Duration aggregation rejected [{}]: {}", e.code(), e))?;
        Ok(Some(total))
    }
}
