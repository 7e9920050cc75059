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

//! Pure, table-driven classification of a [`ConnectionState`] into a display
//! tier. The tier drives the color class, bar width and tooltip of the
//! connection indicator.

use serde::{Deserialize, Serialize};

use crate::connection_state::ConnectionState;
use crate::error::{QualityError, Result};

/// Minimum percentage at which the connection still displays as full
/// strength. Below it the indicator starts shedding bars.
pub const INDICATOR_DISPLAY_THRESHOLD: u8 = 30;

/// Default lower bound of the medium tier.
pub const MEDIUM_THRESHOLD: u8 = 10;

/// Named bucket of connection quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierId {
    High,
    Medium,
    Low,
    Other,
    Lost,
}

impl TierId {
    /// A degraded tier signals a connection problem and triggers the
    /// per-participant notification flow.
    pub fn is_degraded(self) -> bool {
        matches!(self, TierId::Low | TierId::Other | TierId::Lost)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TierId::High => "high",
            TierId::Medium => "medium",
            TierId::Low => "low",
            TierId::Other => "other",
            TierId::Lost => "lost",
        }
    }
}

impl std::fmt::Display for TierId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Display configuration selected for a connection state. One of a fixed set
/// of records; selected, never constructed, per evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QualityTier {
    pub tier: TierId,
    pub color_class: &'static str,
    pub tooltip_key: &'static str,
    /// Width of the filled portion of the signal-bars icon, in percent.
    pub bar_width_percent: u8,
}

impl QualityTier {
    pub fn is_degraded(&self) -> bool {
        self.tier.is_degraded()
    }
}

// Full (3 bars)
pub const TIER_HIGH: QualityTier = QualityTier {
    tier: TierId::High,
    color_class: "status-high",
    tooltip_key: "quality.good",
    bar_width_percent: 100,
};

// 2 bars
pub const TIER_MEDIUM: QualityTier = QualityTier {
    tier: TierId::Medium,
    color_class: "status-med",
    tooltip_key: "quality.nonoptimal",
    bar_width_percent: 66,
};

// 1 bar. We never show 0 bars as long as there is a connection.
pub const TIER_LOW: QualityTier = QualityTier {
    tier: TierId::Low,
    color_class: "status-low",
    tooltip_key: "quality.poor",
    bar_width_percent: 33,
};

// Media deliberately not flowing; no quantitative bar.
pub const TIER_OTHER: QualityTier = QualityTier {
    tier: TierId::Other,
    color_class: "status-other",
    tooltip_key: "quality.inactive",
    bar_width_percent: 0,
};

// Transport believed lost.
pub const TIER_LOST: QualityTier = QualityTier {
    tier: TierId::Lost,
    color_class: "status-lost",
    tooltip_key: "quality.lost",
    bar_width_percent: 0,
};

/// Thresholds for the quantitative tiers. The low tier always starts at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// Lower bound of the high tier.
    pub display_threshold: u8,
    /// Lower bound of the medium tier.
    pub medium_threshold: u8,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            display_threshold: INDICATOR_DISPLAY_THRESHOLD,
            medium_threshold: MEDIUM_THRESHOLD,
        }
    }
}

/// Maps a [`ConnectionState`] to a [`QualityTier`].
///
/// The quantitative lookup scans a table ordered highest-threshold-first and
/// returns the first entry whose threshold the percentage meets or exceeds,
/// so boundary values select the better tier (inclusive lower bounds).
#[derive(Debug, Clone)]
pub struct QualityClassifier {
    thresholds: [(u8, &'static QualityTier); 3],
}

impl QualityClassifier {
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        if config.display_threshold > 100 {
            return Err(QualityError::InvalidConfig(format!(
                "display_threshold {} exceeds 100",
                config.display_threshold
            )));
        }
        if config.medium_threshold >= config.display_threshold {
            return Err(QualityError::InvalidConfig(format!(
                "thresholds must be strictly descending (display {} <= medium {})",
                config.display_threshold, config.medium_threshold
            )));
        }
        if config.medium_threshold == 0 {
            return Err(QualityError::InvalidConfig(
                "medium_threshold of 0 makes the low tier unreachable".to_string(),
            ));
        }
        Ok(Self {
            thresholds: [
                (config.display_threshold, &TIER_HIGH),
                (config.medium_threshold, &TIER_MEDIUM),
                (0, &TIER_LOW),
            ],
        })
    }

    /// Classify one connection-state sample. Pure and total; no side effects.
    pub fn classify(&self, state: ConnectionState) -> &'static QualityTier {
        match state {
            ConnectionState::Inactive => &TIER_OTHER,
            ConnectionState::Interrupted => &TIER_LOST,
            // No quality sample yet: optimistic default, full bar.
            ConnectionState::Active { percent: None } => &TIER_HIGH,
            ConnectionState::Active { percent: Some(p) } => self.display_configuration(p.min(100)),
        }
    }

    fn display_configuration(&self, percent: u8) -> &'static QualityTier {
        self.thresholds
            .iter()
            .find(|(threshold, _)| percent >= *threshold)
            .map(|(_, tier)| *tier)
            .unwrap_or(&TIER_LOW)
    }
}

impl Default for QualityClassifier {
    fn default() -> Self {
        // The default config is statically valid.
        Self {
            thresholds: [
                (INDICATOR_DISPLAY_THRESHOLD, &TIER_HIGH),
                (MEDIUM_THRESHOLD, &TIER_MEDIUM),
                (0, &TIER_LOW),
            ],
        }
    }
}

/// Classify with the default thresholds.
pub fn classify(state: ConnectionState) -> &'static QualityTier {
    QualityClassifier::default().classify(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_percentages_map_to_expected_tiers() {
        for p in 30..=100 {
            assert_eq!(classify(ConnectionState::active(p)).tier, TierId::High, "{p}");
        }
        for p in 10..=29 {
            assert_eq!(
                classify(ConnectionState::active(p)).tier,
                TierId::Medium,
                "{p}"
            );
        }
        for p in 0..=9 {
            assert_eq!(classify(ConnectionState::active(p)).tier, TierId::Low, "{p}");
        }
    }

    #[test]
    fn special_states_ignore_percentages() {
        assert_eq!(classify(ConnectionState::Inactive).tier, TierId::Other);
        assert_eq!(classify(ConnectionState::Interrupted).tier, TierId::Lost);
    }

    #[test]
    fn unknown_percentage_defaults_to_high() {
        let tier = classify(ConnectionState::active_unknown());
        assert_eq!(tier.tier, TierId::High);
        assert_eq!(tier.bar_width_percent, 100);
    }

    #[test]
    fn zero_percent_still_shows_one_bar() {
        let tier = classify(ConnectionState::active(0));
        assert_eq!(tier.tier, TierId::Low);
        assert_eq!(tier.bar_width_percent, 33);
    }

    #[test]
    fn degraded_set_matches_color_classes() {
        assert!(TIER_LOW.is_degraded());
        assert!(TIER_OTHER.is_degraded());
        assert!(TIER_LOST.is_degraded());
        assert!(!TIER_HIGH.is_degraded());
        assert!(!TIER_MEDIUM.is_degraded());
    }

    #[test]
    fn custom_thresholds_shift_tier_boundaries() {
        let classifier = QualityClassifier::new(ClassifierConfig {
            display_threshold: 50,
            medium_threshold: 20,
        })
        .unwrap();
        assert_eq!(classifier.classify(ConnectionState::active(49)).tier, TierId::Medium);
        assert_eq!(classifier.classify(ConnectionState::active(50)).tier, TierId::High);
        assert_eq!(classifier.classify(ConnectionState::active(19)).tier, TierId::Low);
    }

    #[test]
    fn non_descending_thresholds_are_rejected() {
        let err = QualityClassifier::new(ClassifierConfig {
            display_threshold: 10,
            medium_threshold: 30,
        })
        .unwrap_err();
        assert!(matches!(err, QualityError::InvalidConfig(_)));

        assert!(QualityClassifier::new(ClassifierConfig {
            display_threshold: 130,
            medium_threshold: 10,
        })
        .is_err());

        assert!(QualityClassifier::new(ClassifierConfig {
            display_threshold: 30,
            medium_threshold: 0,
        })
        .is_err());
    }
}
