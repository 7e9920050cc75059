/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! View models for the small per-participant filmstrip indicators: the
//! audio-muted badge and the discrete volume meter.

use serde::Serialize;

/// Dot color of an active (lit) volume-meter segment.
pub const VOLUME_DOT_ACTIVE: &str = "#9141B8";
/// Dot color of an idle volume-meter segment.
pub const VOLUME_DOT_IDLE: &str = "#F5F6FA";

/// Number of dots in the volume meter strip.
pub const VOLUME_DOT_COUNT: usize = 26;

/// View model for the audio-muted indicator badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AudioIndicatorView {
    pub icon_id: &'static str,
    pub tooltip_key: &'static str,
    /// Moderators can remote-mute this participant.
    pub can_be_muted: bool,
}

impl AudioIndicatorView {
    pub fn new(muted: bool, is_moderator: bool) -> Self {
        Self {
            icon_id: if muted { "mic-disabled" } else { "mic-enabled" },
            tooltip_key: if muted {
                "videothumbnail.mute"
            } else {
                "videothumbnail.audio-available"
            },
            can_be_muted: !muted && !is_moderator,
        }
    }
}

/// Discrete volume meter: a strip of equally spaced dots, lit left to right
/// as the level rises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VolumeMeterView {
    pub lit: usize,
    pub total: usize,
}

impl VolumeMeterView {
    /// Build from an audio level in [0.0, 1.0]. Out-of-range and non-finite
    /// levels are clamped, never rejected.
    pub fn from_level(level: f64) -> Self {
        let level = if level.is_finite() {
            level.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let scaled = level * 100.0;
        // Dot i lights up once the scaled level passes its index.
        let lit = (0..VOLUME_DOT_COUNT).filter(|&i| scaled > i as f64).count();
        Self {
            lit,
            total: VOLUME_DOT_COUNT,
        }
    }

    pub fn dot_is_lit(&self, index: usize) -> bool {
        index < self.lit
    }

    pub fn dot_color(&self, index: usize) -> &'static str {
        if self.dot_is_lit(index) {
            VOLUME_DOT_ACTIVE
        } else {
            VOLUME_DOT_IDLE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn muted_and_moderator_flags_pick_icon_and_mutability() {
        let muted = AudioIndicatorView::new(true, false);
        assert_eq!(muted.icon_id, "mic-disabled");
        assert_eq!(muted.tooltip_key, "videothumbnail.mute");
        assert!(!muted.can_be_muted);

        let live = AudioIndicatorView::new(false, false);
        assert_eq!(live.icon_id, "mic-enabled");
        assert!(live.can_be_muted);

        let moderator = AudioIndicatorView::new(false, true);
        assert!(!moderator.can_be_muted);
    }

    #[test]
    fn volume_meter_lights_dots_left_to_right() {
        assert_eq!(VolumeMeterView::from_level(0.0).lit, 0);
        // 10% clears dots 0..=9.
        assert_eq!(VolumeMeterView::from_level(0.1).lit, 10);
        assert_eq!(VolumeMeterView::from_level(1.0).lit, VOLUME_DOT_COUNT);

        let meter = VolumeMeterView::from_level(0.05);
        assert!(meter.dot_is_lit(4));
        assert!(!meter.dot_is_lit(5));
        assert_eq!(meter.dot_color(0), VOLUME_DOT_ACTIVE);
        assert_eq!(meter.dot_color(20), VOLUME_DOT_IDLE);
    }

    #[test]
    fn volume_meter_clamps_bad_levels() {
        assert_eq!(VolumeMeterView::from_level(3.0).lit, VOLUME_DOT_COUNT);
        assert_eq!(VolumeMeterView::from_level(-1.0).lit, 0);
        assert_eq!(VolumeMeterView::from_level(f64::NAN).lit, 0);
    }
}
