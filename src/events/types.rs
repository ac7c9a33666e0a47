// events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{ShowReelId, VideoClipId, VideoDefinition, VideoStandard};

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! impl_domain_event {
    ($event:ident) => {
        impl DomainEvent for $event {
            fn event_id(&self) -> Uuid {
                self.event_id
            }
            fn occurred_at(&self) -> DateTime<Utc> {
                self.occurred_at
            }
            fn event_type(&self) -> &'static str {
                stringify!($event)
            }
        }
    };
}

// ============================================================================
// SHOW REEL EVENTS
// ============================================================================

/// Emitted when a new ShowReel is created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowReelCreated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub show_reel_id: ShowReelId,
    pub name: String,
    pub video_standard: VideoStandard,
    pub video_definition: VideoDefinition,
}

impl ShowReelCreated {
    pub fn new(
        show_reel_id: ShowReelId,
        name: String,
        video_standard: VideoStandard,
        video_definition: VideoDefinition,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at,
            show_reel_id,
            name,
            video_standard,
            video_definition,
        }
    }
}

impl_domain_event!(ShowReelCreated);

/// Emitted when a ShowReel is renamed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowReelRenamed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub show_reel_id: ShowReelId,
    pub previous_name: String,
    pub new_name: String,
}

impl ShowReelRenamed {
    pub fn new(
        show_reel_id: ShowReelId,
        previous_name: String,
        new_name: String,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at,
            show_reel_id,
            previous_name,
            new_name,
        }
    }
}

impl_domain_event!(ShowReelRenamed);

/// Emitted when a clip is appended to a ShowReel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipAddedToShowReel {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub show_reel_id: ShowReelId,
    pub clip_id: VideoClipId,
    /// Position the clip landed at
    pub position: usize,
}

impl ClipAddedToShowReel {
    pub fn new(
        show_reel_id: ShowReelId,
        clip_id: VideoClipId,
        position: usize,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at,
            show_reel_id,
            clip_id,
            position,
        }
    }
}

impl_domain_event!(ClipAddedToShowReel);

/// Emitted when a clip is taken out of a ShowReel (by id or by position)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipRemovedFromShowReel {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub show_reel_id: ShowReelId,
    pub clip_id: VideoClipId,
}

impl ClipRemovedFromShowReel {
    pub fn new(show_reel_id: ShowReelId, clip_id: VideoClipId, occurred_at: DateTime<Utc>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at,
            show_reel_id,
            clip_id,
        }
    }
}

impl_domain_event!(ClipRemovedFromShowReel);

/// Emitted when the clip sequence of a ShowReel is replaced by a new order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowReelClipsReordered {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub show_reel_id: ShowReelId,
    pub clip_ids: Vec<VideoClipId>,
}

impl ShowReelClipsReordered {
    pub fn new(show_reel_id: ShowReelId, clip_ids: Vec<VideoClipId>, occurred_at: DateTime<Utc>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at,
            show_reel_id,
            clip_ids,
        }
    }
}

impl_domain_event!(ShowReelClipsReordered);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowReelDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub show_reel_id: ShowReelId,
}

impl ShowReelDeleted {
    pub fn new(show_reel_id: ShowReelId, occurred_at: DateTime<Utc>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at,
            show_reel_id,
        }
    }
}

impl_domain_event!(ShowReelDeleted);

// ============================================================================
// VIDEO CLIP EVENTS
// ============================================================================

/// Emitted when a new VideoClip is registered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoClipCreated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub clip_id: VideoClipId,
    pub name: String,
    pub video_standard: VideoStandard,
    pub video_definition: VideoDefinition,
    /// Canonical HH:MM:SS:FF
    pub duration: String,
}

impl VideoClipCreated {
    pub fn new(
        clip_id: VideoClipId,
        name: String,
        video_standard: VideoStandard,
        video_definition: VideoDefinition,
        duration: String,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at,
            clip_id,
            name,
            video_standard,
            video_definition,
            duration,
        }
    }
}

impl_domain_event!(VideoClipCreated);

/// Emitted when a VideoClip is deleted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoClipDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub clip_id: VideoClipId,
    /// true when only the soft-delete marker was set
    pub soft: bool,
}

impl VideoClipDeleted {
    pub fn new(clip_id: VideoClipId, soft: bool, occurred_at: DateTime<Utc>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at,
            clip_id,
            soft,
        }
    }
}

impl_domain_event!(VideoClipDeleted);
