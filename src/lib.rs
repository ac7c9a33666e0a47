// src/lib.rs
// Showreel - video clip and show reel management around SMPTE-style timecodes
//
// Architecture:
// - Domain-centric: timecode arithmetic, clips and reels own every rule
// - Event-driven: services announce facts after a successful save
// - Explicit: no implicit standard conversion, no magic
// - Storage behind repository traits; in-memory stores ship with the crate

// ============================================================================
// MODULES
// ============================================================================

pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_show_reel,
    validate_video_clip,
    // Time source
    Clock,
    CreateShowReelParams,
    CreateVideoClipParams,
    DomainError,
    DomainResult,
    FixedClock,
    ReconstructShowReelParams,
    ReconstructVideoClipParams,
    // Show Reel
    ShowReel,
    ShowReelId,
    SystemClock,
    // Timecode
    Timecode,
    // Video Clip
    VideoClip,
    VideoClipId,
    VideoDefinition,
    VideoStandard,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    ClipAddedToShowReel, ClipRemovedFromShowReel, DomainEvent, EventBus, ShowReelClipsReordered,
    ShowReelCreated, ShowReelDeleted, ShowReelRenamed, VideoClipCreated, VideoClipDeleted,
};

// ============================================================================
// PUBLIC API - Repositories and Services
// ============================================================================

pub use config::ServiceConfig;

pub use repositories::{
    InMemoryShowReelRepository, InMemoryVideoClipRepository, ShowReelRepository,
    VideoClipRepository,
};

pub use services::{
    CreateShowReelRequest, CreateVideoClipRequest, ShowReelService, VideoClipService,
};
