//! Property-based tests for Timecode arithmetic using proptest.
//!
//! - Round trip: parse(to_string(parse(s))) == s
//! - Frame inverse: from_frames(n).total_frames() == n
//! - Additive inverse: a + b - b == a (same standard)
//! - Commutativity: a + b == b + a (same standard)

use proptest::prelude::*;

use super::Timecode;
use crate::domain::video_format::VideoStandard;

fn standard() -> impl Strategy<Value = VideoStandard> {
    prop_oneof![Just(VideoStandard::Pal), Just(VideoStandard::Ntsc)]
}

/// A well-formed timecode string that is in range for `standard`
fn timecode_text(standard: VideoStandard) -> impl Strategy<Value = String> {
    (0u32..=99, 0u32..=59, 0u32..=59, 0u32..standard.fps())
        .prop_map(|(h, m, s, f)| format!("{:02}:{:02}:{:02}:{:02}", h, m, s, f))
}

fn standard_and_text() -> impl Strategy<Value = (VideoStandard, String)> {
    standard().prop_flat_map(|std| (Just(std), timecode_text(std)))
}

/// Two frame counts in one standard, bounded well below overflow
fn standard_and_pair() -> impl Strategy<Value = (VideoStandard, i64, i64)> {
    (standard(), 0i64..100_000_000, 0i64..100_000_000)
}

proptest! {
    #[test]
    fn prop_string_round_trip((std, text) in standard_and_text()) {
        let parsed = Timecode::parse(&text, std).unwrap();
        let reparsed = Timecode::parse(&parsed.to_string(), std).unwrap();
        prop_assert_eq!(reparsed.to_string(), text);
    }

    #[test]
    fn prop_frame_inverse(std in standard(), n in 0i64..1_000_000_000) {
        let tc = Timecode::from_frames(n, std).unwrap();
        prop_assert_eq!(tc.total_frames(), n as u64);
        prop_assert!(tc.frames() < std.fps());
        prop_assert!(tc.minutes() < 60);
        prop_assert!(tc.seconds() < 60);
    }

    #[test]
    fn prop_additive_inverse((std, a, b) in standard_and_pair()) {
        let a = Timecode::from_frames(a, std).unwrap();
        let b = Timecode::from_frames(b, std).unwrap();
        let back = a.add(&b).subtract(&b).unwrap();
        prop_assert!(back.equals(&a));
    }

    #[test]
    fn prop_addition_commutes((std, a, b) in standard_and_pair()) {
        let a = Timecode::from_frames(a, std).unwrap();
        let b = Timecode::from_frames(b, std).unwrap();
        prop_assert_eq!(a.add(&b).total_frames(), b.add(&a).total_frames());
    }

    #[test]
    fn prop_diff_matches_subtract_in_larger_order((std, a, b) in standard_and_pair()) {
        let a = Timecode::from_frames(a, std).unwrap();
        let b = Timecode::from_frames(b, std).unwrap();
        let expected = if a.is_greater_than_or_equal(&b) {
            a.subtract(&b).unwrap()
        } else {
            b.subtract(&a).unwrap()
        };
        prop_assert_eq!(a.diff(&b).total_frames(), expected.total_frames());
    }

    #[test]
    fn prop_conversion_stays_within_one_frame(n in 0i64..10_000_000) {
        let original = Timecode::from_frames(n, VideoStandard::Ntsc).unwrap();
        let round_trip = original
            .convert_to(VideoStandard::Pal)
            .convert_to(VideoStandard::Ntsc);
        prop_assert!(round_trip.total_frames().abs_diff(original.total_frames()) <= 1);
    }
}
