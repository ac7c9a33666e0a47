// src/services/show_reel_service.rs
//
// Show Reel use cases: load -> mutate -> save -> emit.
//
// The repository replaces the whole aggregate on save, so two overlapping
// cycles on the same reel would lose one side's change. Every cycle here
// holds a per-reel lock for its full duration.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::{
    Clock, CreateShowReelParams, ShowReel, ShowReelId, Timecode, VideoClipId, VideoDefinition,
    VideoStandard,
};
use crate::error::{AppError, AppResult};
use crate::events::{
    ClipAddedToShowReel, ClipRemovedFromShowReel, EventBus, ShowReelClipsReordered,
    ShowReelCreated, ShowReelDeleted, ShowReelRenamed,
};
use crate::repositories::{ShowReelRepository, VideoClipRepository};

#[derive(Debug, Clone)]
pub struct CreateShowReelRequest {
    pub name: String,
    /// "PAL" or "NTSC", any case
    pub video_standard: String,
    /// "SD" or "HD", any case
    pub video_definition: String,
}

pub struct ShowReelService {
    reel_repo: Arc<dyn ShowReelRepository>,
    clip_repo: Arc<dyn VideoClipRepository>,
    event_bus: Arc<EventBus>,
    clock: Arc<dyn Clock>,
    reel_locks: Mutex<HashMap<ShowReelId, Arc<Mutex<()>>>>,
}

impl ShowReelService {
    pub fn new(
        reel_repo: Arc<dyn ShowReelRepository>,
        clip_repo: Arc<dyn VideoClipRepository>,
        event_bus: Arc<EventBus>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            reel_repo,
            clip_repo,
            event_bus,
            clock,
            reel_locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn create_show_reel(&self, request: CreateShowReelRequest) -> AppResult<ShowReel> {
        let video_standard: VideoStandard = request.video_standard.parse()?;
        let video_definition: VideoDefinition = request.video_definition.parse()?;
        let now = self.clock.now();

        let reel = ShowReel::create(
            CreateShowReelParams {
                id: None,
                name: request.name,
                video_standard,
                video_definition,
            },
            now,
        )
        .inspect_err(|e| log::warn!("Show reel creation rejected [{}]: {}", e.code(), e))?;

        self.reel_repo.save(&reel)?;
        log::info!(
            "Created show reel {} \"{}\" ({}/{})",
            reel.id(),
            reel.name(),
            video_standard,
            video_definition
        );

        self.event_bus.emit(ShowReelCreated::new(
            reel.id().clone(),
            reel.name().to_string(),
            video_standard,
            video_definition,
            now,
        ));

        Ok(reel)
    }

    pub fn get_show_reel(&self, reel_id: &ShowReelId) -> AppResult<Option<ShowReel>> {
        log::debug!("Loading show reel {}", reel_id);
        self.reel_repo.find_by_id(reel_id)
    }

    pub fn list_show_reels(&self) -> AppResult<Vec<ShowReel>> {
        self.reel_repo.find_all()
    }

    pub fn rename_show_reel(&self, reel_id: &ShowReelId, new_name: &str) -> AppResult<ShowReel> {
        let (reel, (previous_name, now)) = self.mutate(reel_id, "rename", |reel, now| {
            let previous_name = reel.name().to_string();
            reel.rename(new_name, now)?;
            Ok((previous_name, now))
        })?;

        log::info!("Renamed show reel {} to \"{}\"", reel.id(), reel.name());
        self.event_bus.emit(ShowReelRenamed::new(
            reel.id().clone(),
            previous_name,
            reel.name().to_string(),
            now,
        ));
        Ok(reel)
    }

    /// Append a stored clip to the reel.
    /// Unknown and soft-deleted clips are reported as not found.
    pub fn add_clip(&self, reel_id: &ShowReelId, clip_id: &VideoClipId) -> AppResult<ShowReel> {
        let clip = self
            .clip_repo
            .find_by_id(clip_id)?
            .filter(|clip| !clip.is_deleted())
            .ok_or_else(|| AppError::not_found("Video clip", clip_id))?;

        let (reel, now) = self.mutate(reel_id, "add clip", |reel, now| {
            reel.add_clip(clip, now)?;
            Ok(now)
        })?;

        let position = reel.clip_count() - 1;
        log::info!(
            "Added clip {} to show reel {} at position {}",
            clip_id,
            reel.id(),
            position
        );
        self.event_bus.emit(ClipAddedToShowReel::new(
            reel.id().clone(),
            clip_id.clone(),
            position,
            now,
        ));
        Ok(reel)
    }

    /// Remove the first occurrence of a clip
    pub fn remove_clip(&self, reel_id: &ShowReelId, clip_id: &VideoClipId) -> AppResult<ShowReel> {
        let (reel, now) = self.mutate(reel_id, "remove clip", |reel, now| {
            reel.remove_clip(clip_id, now)?;
            Ok(now)
        })?;

        log::info!("Removed clip {} from show reel {}", clip_id, reel.id());
        self.event_bus
            .emit(ClipRemovedFromShowReel::new(reel.id().clone(), clip_id.clone(), now));
        Ok(reel)
    }

    pub fn remove_clip_at(&self, reel_id: &ShowReelId, index: isize) -> AppResult<ShowReel> {
        let (reel, (removed, now)) = self.mutate(reel_id, "remove clip at", |reel, now| {
            let removed = reel.remove_clip_at(index, now)?;
            Ok((removed, now))
        })?;

        log::info!(
            "Removed clip {} at position {} from show reel {}",
            removed.id(),
            index,
            reel.id()
        );
        self.event_bus.emit(ClipRemovedFromShowReel::new(
            reel.id().clone(),
            removed.id().clone(),
            now,
        ));
        Ok(reel)
    }

    pub fn reorder_clips(&self, reel_id: &ShowReelId, clip_ids: &[VideoClipId]) -> AppResult<ShowReel> {
        let (reel, now) = self.mutate(reel_id, "reorder clips", |reel, now| {
            reel.reorder_clips(clip_ids, now)?;
            Ok(now)
        })?;

        log::info!("Reordered {} clips in show reel {}", reel.clip_count(), reel.id());
        self.event_bus
            .emit(ShowReelClipsReordered::new(reel.id().clone(), reel.clip_ids(), now));
        Ok(reel)
    }

    pub fn delete_show_reel(&self, reel_id: &ShowReelId) -> AppResult<()> {
        {
            let lock = self.lock_for(reel_id)?;
            let _guard = lock.lock()?;

            if !self.reel_repo.exists(reel_id)? {
                return Err(AppError::not_found("Show reel", reel_id));
            }
            self.reel_repo.delete(reel_id)?;
        }
        self.reel_locks.lock()?.remove(reel_id);

        log::info!("Deleted show reel {}", reel_id);
        self.event_bus
            .emit(ShowReelDeleted::new(reel_id.clone(), self.clock.now()));
        Ok(())
    }

    pub fn total_duration(&self, reel_id: &ShowReelId) -> AppResult<Timecode> {
        let reel = self.load(reel_id)?;
        Ok(reel.total_duration()?)
    }

    fn load(&self, reel_id: &ShowReelId) -> AppResult<ShowReel> {
        self.reel_repo
            .find_by_id(reel_id)?
            .ok_or_else(|| AppError::not_found("Show reel", reel_id))
    }

    fn lock_for(&self, reel_id: &ShowReelId) -> AppResult<Arc<Mutex<()>>> {
        let mut locks = self.reel_locks.lock()?;
        Ok(Arc::clone(locks.entry(reel_id.clone()).or_default()))
    }

    /// One serialized load -> mutate -> save cycle.
    /// Nothing is saved when `change` fails.
    fn mutate<T, F>(&self, reel_id: &ShowReelId, action: &str, change: F) -> AppResult<(ShowReel, T)>
    where
        F: FnOnce(&mut ShowReel, DateTime<Utc>) -> AppResult<T>,
    {
        let lock = self.lock_for(reel_id)?;
        let _guard = lock.lock()?;

        let mut reel = self.load(reel_id)?;
        let outcome = change(&mut reel, self.clock.now()).inspect_err(|e| {
            log::warn!(
                "Show reel {} {} rejected [{}]: {}",
                reel_id,
                action,
                e.code(),
                e
            )
        })?;

        log::debug!("Saving show reel {} after {}", reel_id, action);
        self.reel_repo.save(&reel)?;
        Ok((reel, outcome))
    }
}
