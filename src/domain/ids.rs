// src/domain/ids.rs
//
// Opaque entity identifiers.
// Freshly generated ids are UUID v4 strings; ids coming from outside
// only have to be non-blank.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a fresh random identifier
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Build an identifier from external input.
            /// Surrounding whitespace is dropped; blank input is rejected.
            pub fn from_string(value: &str) -> DomainResult<Self> {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::InvalidId { kind: $kind });
                }
                Ok(Self(trimmed.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identity of a ShowReel aggregate
    ShowReelId,
    "Show reel"
);

entity_id!(
    /// Identity of a VideoClip entity
    VideoClipId,
    "Video clip"
);
