// src/domain/timecode/value_object.rs
//
// Timecode Value Object
//
// HH:MM:SS:FF bound to the VideoStandard it was built against.
//
// CRITICAL RULES:
// - Immutable: every operation returns a new value
// - (H, M, S, F) and total frames are always consistent
// - Frame rate is an exact integer (no drop-frame)
// - Cross-standard math goes through milliseconds and tolerates < 1ms of error

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::invariants::{
    split_components, split_stored_components, validate_components, validate_stored_components,
};
use crate::domain::video_format::VideoStandard;
use crate::domain::{DomainError, DomainResult};

/// Differences below this many milliseconds count as equal across standards
const MILLISECOND_TOLERANCE: f64 = 1.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "TimecodeRecord", into = "TimecodeRecord")]
pub struct Timecode {
    hours: u64,
    minutes: u32,
    seconds: u32,
    frames: u32,
    video_standard: VideoStandard,
}

/// Wire shape: `{ "value": "HH:MM:SS:FF", "standard": "PAL" }`.
/// Sums past 99 hours are written with more hour digits and read back as such.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TimecodeRecord {
    value: String,
    standard: VideoStandard,
}

impl TryFrom<TimecodeRecord> for Timecode {
    type Error = DomainError;

    fn try_from(record: TimecodeRecord) -> DomainResult<Self> {
        let components = split_stored_components(&record.value)?;
        validate_stored_components(&record.value, &components, record.standard)?;

        Ok(Self {
            hours: components.hours,
            minutes: components.minutes,
            seconds: components.seconds,
            frames: components.frames,
            video_standard: record.standard,
        })
    }
}

impl From<Timecode> for TimecodeRecord {
    fn from(timecode: Timecode) -> Self {
        TimecodeRecord {
            value: timecode.to_string(),
            standard: timecode.video_standard,
        }
    }
}

impl Timecode {
    // ------------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------------

    /// 00:00:00:00 in the given standard
    pub fn zero(standard: VideoStandard) -> Self {
        Self::from_frame_count(0, standard)
    }

    /// Parse the canonical `HH:MM:SS:FF` form.
    /// Hours are limited to 99 here even though arithmetic results are not.
    pub fn parse(text: &str, standard: VideoStandard) -> DomainResult<Self> {
        let components = split_components(text)?;
        validate_components(text, &components, standard)?;

        Ok(Self {
            hours: components.hours,
            minutes: components.minutes,
            seconds: components.seconds,
            frames: components.frames,
            video_standard: standard,
        })
    }

    /// Build from an absolute frame count. Hours never wrap.
    pub fn from_frames(total_frames: i64, standard: VideoStandard) -> DomainResult<Self> {
        if total_frames < 0 {
            return Err(DomainError::NegativeTimecode(format!(
                "{} frames",
                total_frames
            )));
        }
        Ok(Self::from_frame_count(total_frames as u64, standard))
    }

    /// Build from a millisecond duration, rounding half-up to the nearest frame.
    /// NaN and infinities are rejected along with negative values.
    pub fn from_milliseconds(milliseconds: f64, standard: VideoStandard) -> DomainResult<Self> {
        if !milliseconds.is_finite() {
            return Err(DomainError::InvalidTimecode {
                value: format!("{} ms", milliseconds),
                reason: "duration must be a finite number of milliseconds".to_string(),
            });
        }
        if milliseconds < 0.0 {
            return Err(DomainError::NegativeTimecode(format!(
                "{} ms",
                milliseconds
            )));
        }
        Ok(Self::from_frame_count(
            frames_for_milliseconds(milliseconds, standard),
            standard,
        ))
    }

    fn from_frame_count(total_frames: u64, standard: VideoStandard) -> Self {
        let fps = standard.fps() as u64;
        let frames_per_hour = fps * 3600;
        let frames_per_minute = fps * 60;

        let hours = total_frames / frames_per_hour;
        let remainder = total_frames % frames_per_hour;
        let minutes = remainder / frames_per_minute;
        let remainder = remainder % frames_per_minute;
        let seconds = remainder / fps;
        let frames = remainder % fps;

        Self {
            hours,
            minutes: minutes as u32,
            seconds: seconds as u32,
            frames: frames as u32,
            video_standard: standard,
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn hours(&self) -> u64 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn video_standard(&self) -> VideoStandard {
        self.video_standard
    }

    pub fn total_frames(&self) -> u64 {
        let fps = self.video_standard.fps() as u64;
        self.hours * 3600 * fps
            + self.minutes as u64 * 60 * fps
            + self.seconds as u64 * fps
            + self.frames as u64
    }

    /// May be fractional for NTSC
    pub fn total_milliseconds(&self) -> f64 {
        self.total_frames() as f64 * self.video_standard.frame_duration_ms()
    }

    pub fn total_seconds(&self) -> f64 {
        self.total_milliseconds() / 1000.0
    }

    pub fn is_zero(&self) -> bool {
        self.total_frames() == 0
    }

    // ------------------------------------------------------------------------
    // Arithmetic
    // ------------------------------------------------------------------------

    /// Sum, expressed in this timecode's standard.
    /// `other` is converted first when its standard differs.
    pub fn add(&self, other: &Timecode) -> Timecode {
        let other = other.convert_to(self.video_standard);
        Self::from_frame_count(self.total_frames() + other.total_frames(), self.video_standard)
    }

    /// Difference, expressed in this timecode's standard.
    /// Fails rather than clamping when `other` is larger.
    pub fn subtract(&self, other: &Timecode) -> DomainResult<Timecode> {
        let other = other.convert_to(self.video_standard);
        let (lhs, rhs) = (self.total_frames(), other.total_frames());
        if rhs > lhs {
            return Err(DomainError::NegativeTimecode(format!(
                "{} - {} would be {} frames",
                self,
                other,
                lhs as i128 - rhs as i128
            )));
        }
        Ok(Self::from_frame_count(lhs - rhs, self.video_standard))
    }

    /// Absolute difference, expressed in this timecode's standard
    pub fn diff(&self, other: &Timecode) -> Timecode {
        let other = other.convert_to(self.video_standard);
        Self::from_frame_count(
            self.total_frames().abs_diff(other.total_frames()),
            self.video_standard,
        )
    }

    /// Re-express this duration in another standard.
    /// Lossy below one frame: converting A -> B -> A may land one frame off.
    pub fn convert_to(&self, target: VideoStandard) -> Timecode {
        if target == self.video_standard {
            return *self;
        }
        Self::from_frame_count(
            frames_for_milliseconds(self.total_milliseconds(), target),
            target,
        )
    }

    // ------------------------------------------------------------------------
    // Comparison
    // ------------------------------------------------------------------------

    /// Exact frame equality within a standard, < 1ms tolerance across standards
    pub fn equals(&self, other: &Timecode) -> bool {
        if self.video_standard == other.video_standard {
            return self.total_frames() == other.total_frames();
        }
        (self.total_milliseconds() - other.total_milliseconds()).abs() < MILLISECOND_TOLERANCE
    }

    /// Orders by real-world duration; differences under 1ms compare equal
    pub fn compare_to(&self, other: &Timecode) -> Ordering {
        let delta = self.total_milliseconds() - other.total_milliseconds();
        if delta.abs() < MILLISECOND_TOLERANCE {
            Ordering::Equal
        } else if delta < 0.0 {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }

    pub fn is_greater_than(&self, other: &Timecode) -> bool {
        self.compare_to(other) == Ordering::Greater
    }

    pub fn is_less_than(&self, other: &Timecode) -> bool {
        self.compare_to(other) == Ordering::Less
    }

    pub fn is_greater_than_or_equal(&self, other: &Timecode) -> bool {
        self.compare_to(other) != Ordering::Less
    }

    pub fn is_less_than_or_equal(&self, other: &Timecode) -> bool {
        self.compare_to(other) != Ordering::Greater
    }
}

/// round(ms / frame duration), halves rounding up
fn frames_for_milliseconds(milliseconds: f64, standard: VideoStandard) -> u64 {
    (milliseconds / standard.frame_duration_ms() + 0.5).floor() as u64
}

impl PartialEq for Timecode {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl PartialOrd for Timecode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare_to(other))
    }
}

impl std::fmt::Display for Timecode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds, self.frames
        )
    }
}
