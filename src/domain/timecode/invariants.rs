use regex::Regex;
use std::sync::LazyLock;

use crate::domain::video_format::VideoStandard;
use crate::domain::{DomainError, DomainResult};

/// Canonical textual form: HH:MM:SS:FF, every field exactly two digits
static TIMECODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2}):([0-9]{2}):([0-9]{2}):([0-9]{2})$").expect("timecode pattern is valid")
});

/// Stored form: as canonical, but hours may run past two digits
static STORED_TIMECODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2,}):([0-9]{2}):([0-9]{2}):([0-9]{2})$")
        .expect("stored timecode pattern is valid")
});

pub const MAX_HOURS: u64 = 99;
pub const MAX_MINUTES: u32 = 59;
pub const MAX_SECONDS: u32 = 59;

/// Raw components split out of a timecode string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TimecodeComponents {
    pub hours: u64,
    pub minutes: u32,
    pub seconds: u32,
    pub frames: u32,
}

/// Splits `text` into its four components.
/// Only the shape is checked here; ranges are checked by `validate_components`.
pub(crate) fn split_components(text: &str) -> DomainResult<TimecodeComponents> {
    split_with(&TIMECODE_PATTERN, text)
}

/// Like `split_components`, for values written back out by `Display`
pub(crate) fn split_stored_components(text: &str) -> DomainResult<TimecodeComponents> {
    split_with(&STORED_TIMECODE_PATTERN, text)
}

fn split_with(pattern: &Regex, text: &str) -> DomainResult<TimecodeComponents> {
    let captures = pattern
        .captures(text)
        .ok_or_else(|| invalid(text, "expected format HH:MM:SS:FF"))?;

    let field = |idx: usize| -> DomainResult<u32> {
        captures[idx]
            .parse::<u32>()
            .map_err(|e| invalid(text, &format!("unreadable component: {}", e)))
    };
    let hours = captures[1]
        .parse::<u64>()
        .map_err(|e| invalid(text, &format!("unreadable hours: {}", e)))?;

    Ok(TimecodeComponents {
        hours,
        minutes: field(2)?,
        seconds: field(3)?,
        frames: field(4)?,
    })
}

/// Component range invariants:
/// 1. hours in [0, 99]
/// 2. minutes in [0, 59]
/// 3. seconds in [0, 59]
/// 4. frames in [0, fps - 1] for the given standard
pub(crate) fn validate_components(
    text: &str,
    components: &TimecodeComponents,
    standard: VideoStandard,
) -> DomainResult<()> {
    if components.hours > MAX_HOURS {
        return Err(invalid(text, &format!("hours must be between 0 and {}", MAX_HOURS)));
    }
    validate_clock_fields(text, components, standard)
}

/// Stored values keep invariants 2-4; hours are bounded only by
/// what a frame count can hold.
pub(crate) fn validate_stored_components(
    text: &str,
    components: &TimecodeComponents,
    standard: VideoStandard,
) -> DomainResult<()> {
    let max_stored_hours = u64::MAX / (3600 * standard.fps() as u64) - 1;
    if components.hours > max_stored_hours {
        return Err(invalid(
            text,
            &format!("hours must be between 0 and {}", max_stored_hours),
        ));
    }
    validate_clock_fields(text, components, standard)
}

fn validate_clock_fields(
    text: &str,
    components: &TimecodeComponents,
    standard: VideoStandard,
) -> DomainResult<()> {
    if components.minutes > MAX_MINUTES {
        return Err(invalid(text, &format!("minutes must be between 0 and {}", MAX_MINUTES)));
    }
    if components.seconds > MAX_SECONDS {
        return Err(invalid(text, &format!("seconds must be between 0 and {}", MAX_SECONDS)));
    }
    let max_frame = standard.fps() - 1;
    if components.frames > max_frame {
        return Err(invalid(
            text,
            &format!("frames must be between 0 and {} for {}", max_frame, standard),
        ));
    }
    Ok(())
}

fn invalid(text: &str, reason: &str) -> DomainError {
    DomainError::InvalidTimecode {
        value: text.to_string(),
        reason: reason.to_string(),
    }
}
