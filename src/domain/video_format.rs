// src/domain/video_format.rs
//
// Video Format Value Objects
//
// Closed enumerations describing how a clip was shot:
// - VideoStandard: broadcast frame-rate family (PAL, NTSC)
// - VideoDefinition: resolution category (SD, HD)
//
// NTSC is an exact integer 30fps here. There is no drop-frame handling.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::{DomainError, DomainResult};

// ============================================================================
// VIDEO STANDARD
// ============================================================================

/// Broadcast frame-rate family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VideoStandard {
    /// 25 frames per second
    Pal,
    /// 30 frames per second (non drop-frame)
    Ntsc,
}

impl VideoStandard {
    pub fn pal() -> Self {
        VideoStandard::Pal
    }

    pub fn ntsc() -> Self {
        VideoStandard::Ntsc
    }

    /// Every supported standard, in declaration order
    pub fn all() -> [VideoStandard; 2] {
        [VideoStandard::Pal, VideoStandard::Ntsc]
    }

    /// Frames per second as an exact integer
    pub fn fps(self) -> u32 {
        match self {
            VideoStandard::Pal => 25,
            VideoStandard::Ntsc => 30,
        }
    }

    /// Real-world duration of a single frame in milliseconds
    /// (40ms for PAL, 33.333...ms for NTSC)
    pub fn frame_duration_ms(self) -> f64 {
        1000.0 / self.fps() as f64
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VideoStandard::Pal => "PAL",
            VideoStandard::Ntsc => "NTSC",
        }
    }
}

impl FromStr for VideoStandard {
    type Err = DomainError;

    /// Case-insensitive match against the closed set
    fn from_str(token: &str) -> DomainResult<Self> {
        match token.to_ascii_uppercase().as_str() {
            "PAL" => Ok(VideoStandard::Pal),
            "NTSC" => Ok(VideoStandard::Ntsc),
            _ => Err(DomainError::InvalidVideoStandard(token.to_string())),
        }
    }
}

impl std::fmt::Display for VideoStandard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// VIDEO DEFINITION
// ============================================================================

/// Resolution category. Used purely as a compatibility tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VideoDefinition {
    Sd,
    Hd,
}

impl VideoDefinition {
    pub fn sd() -> Self {
        VideoDefinition::Sd
    }

    pub fn hd() -> Self {
        VideoDefinition::Hd
    }

    pub fn all() -> [VideoDefinition; 2] {
        [VideoDefinition::Sd, VideoDefinition::Hd]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VideoDefinition::Sd => "SD",
            VideoDefinition::Hd => "HD",
        }
    }
}

impl FromStr for VideoDefinition {
    type Err = DomainError;

    fn from_str(token: &str) -> DomainResult<Self> {
        match token.to_ascii_uppercase().as_str() {
            "SD" => Ok(VideoDefinition::Sd),
            "HD" => Ok(VideoDefinition::Hd),
            _ => Err(DomainError::InvalidVideoDefinition(token.to_string())),
        }
    }
}

impl std::fmt::Display for VideoDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_from_str_is_case_insensitive() {
        assert_eq!("pal".parse::<VideoStandard>().unwrap(), VideoStandard::Pal);
        assert_eq!("PAL".parse::<VideoStandard>().unwrap(), VideoStandard::Pal);
        assert_eq!("Ntsc".parse::<VideoStandard>().unwrap(), VideoStandard::Ntsc);
    }

    #[test]
    fn test_unknown_standard_carries_token() {
        let err = "SECAM".parse::<VideoStandard>().unwrap_err();
        match err {
            DomainError::InvalidVideoStandard(token) => assert_eq!(token, "SECAM"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_padded_token_is_rejected() {
        assert!(" PAL".parse::<VideoStandard>().is_err());
        assert!("".parse::<VideoDefinition>().is_err());
    }

    #[test]
    fn test_frame_rates() {
        assert_eq!(VideoStandard::pal().fps(), 25);
        assert_eq!(VideoStandard::ntsc().fps(), 30);
        assert!((VideoStandard::Pal.frame_duration_ms() - 40.0).abs() < f64::EPSILON);
        assert!((VideoStandard::Ntsc.frame_duration_ms() - 33.333_333).abs() < 0.001);
    }

    #[test]
    fn test_definition_from_str() {
        assert_eq!("hd".parse::<VideoDefinition>().unwrap(), VideoDefinition::hd());
        assert_eq!("SD".parse::<VideoDefinition>().unwrap(), VideoDefinition::sd());
        let err = "4K".parse::<VideoDefinition>().unwrap_err();
        assert_eq!(err.code(), "INVALID_VIDEO_DEFINITION");
    }

    #[test]
    fn test_serde_uses_uppercase_tokens() {
        assert_eq!(serde_json::to_string(&VideoStandard::Ntsc).unwrap(), "\"NTSC\"");
        assert_eq!(serde_json::to_string(&VideoDefinition::Hd).unwrap(), "\"HD\"");
        let parsed: VideoStandard = serde_json::from_str("\"PAL\"").unwrap();
        assert_eq!(parsed, VideoStandard::Pal);
    }

    #[test]
    fn test_display_matches_token() {
        for standard in VideoStandard::all() {
            assert_eq!(standard.to_string().parse::<VideoStandard>().unwrap(), standard);
        }
        for definition in VideoDefinition::all() {
            assert_eq!(definition.to_string().parse::<VideoDefinition>().unwrap(), definition);
        }
    }
}
