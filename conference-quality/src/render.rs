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

//! Platform-specific indicator rendering as a trait seam instead of a class
//! hierarchy. Renderers turn a [`QualityTier`] into a pure view model; the
//! host UI turns the view model into actual markup or widgets.

use serde::Serialize;

use crate::classifier::{QualityTier, TierId};

pub trait IndicatorRenderer {
    type View;

    fn render(&self, tier: &QualityTier) -> Self::View;
}

/// Glyph shown inside the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorIcon {
    /// The stacked signal-bars icon.
    GsmBars,
    /// The "ninja" icon shown while media is deliberately inactive.
    Ninja,
}

/// View model for the web connection indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionIndicatorView {
    pub container_class: &'static str,
    /// Class list of the indicator itself, including the status color class.
    pub indicator_class: String,
    pub icon: IndicatorIcon,
    /// Wrapper class of the empty (background) bars. The torture tests key
    /// off `connection_lost` to identify lost-connection handling.
    pub empty_wrapper_class: &'static str,
    /// Width of the filled (foreground) bars, in percent.
    pub full_bar_width_percent: u8,
    pub tooltip_key: &'static str,
    pub icon_size_px: u8,
}

/// Renders the CSS-class view model the web UI consumes.
#[derive(Debug, Clone)]
pub struct WebIndicatorRenderer {
    pub icon_size_px: u8,
}

impl Default for WebIndicatorRenderer {
    fn default() -> Self {
        Self { icon_size_px: 16 }
    }
}

impl IndicatorRenderer for WebIndicatorRenderer {
    type View = ConnectionIndicatorView;

    fn render(&self, tier: &QualityTier) -> ConnectionIndicatorView {
        let (icon, empty_wrapper_class) = match tier.tier {
            TierId::Other => (IndicatorIcon::Ninja, "connection_ninja"),
            TierId::Lost => (IndicatorIcon::GsmBars, "connection_lost"),
            _ => (IndicatorIcon::GsmBars, "connection_empty"),
        };

        ConnectionIndicatorView {
            container_class: "tvt-indicator-container",
            indicator_class: format!("tvt-connection-indicator tvt-indicator {}", tier.color_class),
            icon,
            empty_wrapper_class,
            full_bar_width_percent: tier.bar_width_percent,
            tooltip_key: tier.tooltip_key,
            icon_size_px: self.icon_size_px,
        }
    }
}

/// View model for mobile-style rendering: a discrete bar count and a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NativeIndicatorView {
    pub bars_filled: u8,
    pub bars_total: u8,
    pub label: &'static str,
}

#[derive(Debug, Clone, Default)]
pub struct NativeIndicatorRenderer;

impl IndicatorRenderer for NativeIndicatorRenderer {
    type View = NativeIndicatorView;

    fn render(&self, tier: &QualityTier) -> NativeIndicatorView {
        let bars_filled = match tier.tier {
            TierId::High => 3,
            TierId::Medium => 2,
            TierId::Low => 1,
            TierId::Other | TierId::Lost => 0,
        };
        NativeIndicatorView {
            bars_filled,
            bars_total: 3,
            label: tier.tooltip_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{TIER_HIGH, TIER_LOST, TIER_MEDIUM, TIER_OTHER};

    #[test]
    fn web_view_carries_status_color_class() {
        let view = WebIndicatorRenderer::default().render(&TIER_MEDIUM);
        assert_eq!(view.container_class, "tvt-indicator-container");
        assert_eq!(
            view.indicator_class,
            "tvt-connection-indicator tvt-indicator status-med"
        );
        assert_eq!(view.full_bar_width_percent, 66);
        assert_eq!(view.icon, IndicatorIcon::GsmBars);
        assert_eq!(view.empty_wrapper_class, "connection_empty");
    }

    #[test]
    fn inactive_swaps_to_ninja_icon() {
        let view = WebIndicatorRenderer::default().render(&TIER_OTHER);
        assert_eq!(view.icon, IndicatorIcon::Ninja);
        assert_eq!(view.empty_wrapper_class, "connection_ninja");
    }

    #[test]
    fn lost_connection_keeps_bars_at_zero_width() {
        let view = WebIndicatorRenderer::default().render(&TIER_LOST);
        assert_eq!(view.empty_wrapper_class, "connection_lost");
        assert_eq!(view.full_bar_width_percent, 0);
        assert_eq!(view.icon, IndicatorIcon::GsmBars);
    }

    #[test]
    fn native_view_counts_bars() {
        let renderer = NativeIndicatorRenderer;
        assert_eq!(renderer.render(&TIER_HIGH).bars_filled, 3);
        assert_eq!(renderer.render(&TIER_MEDIUM).bars_filled, 2);
        assert_eq!(renderer.render(&TIER_LOST).bars_filled, 0);
    }
}
