// src/repositories/video_clip_repository.rs

use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::{VideoClip, VideoClipId};
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait VideoClipRepository: Send + Sync {
    fn find_by_id(&self, id: &VideoClipId) -> AppResult<Option<VideoClip>>;
    /// Soft-deleted clips are included; filtering is the caller's call
    fn find_all(&self) -> AppResult<Vec<VideoClip>>;
    fn save(&self, clip: &VideoClip) -> AppResult<()>;
    fn delete(&self, id: &VideoClipId) -> AppResult<()>;
    fn exists(&self, id: &VideoClipId) -> AppResult<bool>;
}

#[derive(Debug, Default)]
pub struct InMemoryVideoClipRepository {
    clips: RwLock<HashMap<VideoClipId, VideoClip>>,
}

impl InMemoryVideoClipRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VideoClipRepository for InMemoryVideoClipRepository {
    fn find_by_id(&self, id: &VideoClipId) -> AppResult<Option<VideoClip>> {
        let clips = self.clips.read()?;
        Ok(clips.get(id).cloned())
    }

    fn find_all(&self) -> AppResult<Vec<VideoClip>> {
        let clips = self.clips.read()?;
        let mut all: Vec<VideoClip> = clips.values().cloned().collect();
        all.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.id().cmp(b.id())));
        Ok(all)
    }

    fn save(&self, clip: &VideoClip) -> AppResult<()> {
        let mut clips = self.clips.write()?;
        clips.insert(clip.id().clone(), clip.clone());
        Ok(())
    }

    fn delete(&self, id: &VideoClipId) -> AppResult<()> {
        let mut clips = self.clips.write()?;
        clips.remove(id);
        Ok(())
    }

    fn exists(&self, id: &VideoClipId) -> AppResult<bool> {
        let clips = self.clips.read()?;
        Ok(clips.contains_key(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CreateVideoClipParams, Timecode, VideoDefinition, VideoStandard};

    fn clip(name: &str) -> VideoClip {
        VideoClip::create(CreateVideoClipParams {
            id: None,
            name: name.to_string(),
            description: None,
            video_standard: VideoStandard::Ntsc,
            video_definition: VideoDefinition::Sd,
            start_timecode: Timecode::zero(VideoStandard::Ntsc),
            end_timecode: Timecode::parse("00:00:03:00", VideoStandard::Ntsc).unwrap(),
        })
        .unwrap()
    }

    #[test]
    fn test_round_trip_through_store() {
        let repo = InMemoryVideoClipRepository::new();
        let clip = clip("Opening");
        repo.save(&clip).unwrap();

        assert!(repo.exists(clip.id()).unwrap());
        let found = repo.find_by_id(clip.id()).unwrap().unwrap();
        assert_eq!(found.end_timecode().to_string(), "00:00:03:00");
    }

    #[test]
    fn test_find_all_sorted_by_name_and_includes_deleted() {
        let repo = InMemoryVideoClipRepository::new();
        repo.save(&clip("Zebra")).unwrap();
        repo.save(&clip("Alpha").with_deleted_at(chrono::Utc::now())).unwrap();

        let all = repo.find_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name(), "Alpha");
        assert!(all[0].is_deleted());
    }

    #[test]
    fn test_delete() {
        let repo = InMemoryVideoClipRepository::new();
        let clip = clip("Temp");
        repo.save(&clip).unwrap();
        repo.delete(clip.id()).unwrap();
        assert!(!repo.exists(clip.id()).unwrap());
    }
}
