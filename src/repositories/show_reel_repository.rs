// src/repositories/show_reel_repository.rs

use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::{ShowReel, ShowReelId};
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait ShowReelRepository: Send + Sync {
    fn find_by_id(&self, id: &ShowReelId) -> AppResult<Option<ShowReel>>;
    fn find_all(&self) -> AppResult<Vec<ShowReel>>;
    /// Replaces the whole stored aggregate, clip order included
    fn save(&self, reel: &ShowReel) -> AppResult<()>;
    fn delete(&self, id: &ShowReelId) -> AppResult<()>;
    fn exists(&self, id: &ShowReelId) -> AppResult<bool>;
}

/// Process-local store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryShowReelRepository {
    reels: RwLock<HashMap<ShowReelId, ShowReel>>,
}

impl InMemoryShowReelRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShowReelRepository for InMemoryShowReelRepository {
    fn find_by_id(&self, id: &ShowReelId) -> AppResult<Option<ShowReel>> {
        let reels = self.reels.read()?;
        Ok(reels.get(id).cloned())
    }

    fn find_all(&self) -> AppResult<Vec<ShowReel>> {
        let reels = self.reels.read()?;
        let mut all: Vec<ShowReel> = reels.values().cloned().collect();
        all.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().cmp(b.id()))
        });
        Ok(all)
    }

    fn save(&self, reel: &ShowReel) -> AppResult<()> {
        let mut reels = self.reels.write()?;
        reels.insert(reel.id().clone(), reel.clone());
        Ok(())
    }

    fn delete(&self, id: &ShowReelId) -> AppResult<()> {
        let mut reels = self.reels.write()?;
        reels.remove(id);
        Ok(())
    }

    fn exists(&self, id: &ShowReelId) -> AppResult<bool> {
        let reels = self.reels.read()?;
        Ok(reels.contains_key(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CreateShowReelParams, VideoDefinition, VideoStandard};
    use chrono::{Duration, TimeZone, Utc};

    fn reel(name: &str, minutes: i64) -> ShowReel {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        ShowReel::create(
            CreateShowReelParams {
                id: None,
                name: name.to_string(),
                video_standard: VideoStandard::Pal,
                video_definition: VideoDefinition::Hd,
            },
            t0 + Duration::minutes(minutes),
        )
        .unwrap()
    }

    #[test]
    fn test_save_and_find() {
        let repo = InMemoryShowReelRepository::new();
        let reel = reel("One", 0);

        assert!(!repo.exists(reel.id()).unwrap());
        repo.save(&reel).unwrap();

        assert!(repo.exists(reel.id()).unwrap());
        let found = repo.find_by_id(reel.id()).unwrap().unwrap();
        assert_eq!(found.name(), "One");
    }

    #[test]
    fn test_save_replaces_whole_aggregate() {
        let repo = InMemoryShowReelRepository::new();
        let mut reel = reel("Before", 0);
        repo.save(&reel).unwrap();

        reel.rename("After", Utc::now()).unwrap();
        repo.save(&reel).unwrap();

        assert_eq!(repo.find_all().unwrap().len(), 1);
        assert_eq!(repo.find_by_id(reel.id()).unwrap().unwrap().name(), "After");
    }

    #[test]
    fn test_find_all_ordered_by_creation() {
        let repo = InMemoryShowReelRepository::new();
        repo.save(&reel("Late", 10)).unwrap();
        repo.save(&reel("Early", 1)).unwrap();

        let names: Vec<String> = repo
            .find_all()
            .unwrap()
            .iter()
            .map(|r| r.name().to_string())
            .collect();
        assert_eq!(names, vec!["Early", "Late"]);
    }

    #[test]
    fn test_delete() {
        let repo = InMemoryShowReelRepository::new();
        let reel = reel("Gone", 0);
        repo.save(&reel).unwrap();
        repo.delete(reel.id()).unwrap();
        assert!(repo.find_by_id(reel.id()).unwrap().is_none());
        // deleting twice is harmless
        repo.delete(reel.id()).unwrap();
    }
}
