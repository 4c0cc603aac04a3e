//! Widget tuning values.

use serde::{Deserialize, Serialize};

/// Breakpoints, timings and thresholds shared by the widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Viewports up to this width show one featured card.
    #[serde(default = "default_mobile_max_width")]
    pub mobile_max_width: f64,

    /// Viewports up to this width show two featured cards; wider show three.
    #[serde(default = "default_tablet_max_width")]
    pub tablet_max_width: f64,

    /// Gap between featured cards.
    #[serde(default = "default_card_gap_px")]
    pub card_gap_px: f64,

    /// Featured carousel auto-advance interval.
    #[serde(default = "default_autoplay_interval_ms")]
    pub autoplay_interval_ms: u32,

    /// Scroll offset above which the scroll-to-top button shows.
    #[serde(default = "default_scroll_top_threshold")]
    pub scroll_top_threshold: f64,

    /// Scroll offset above which the header is elevated.
    #[serde(default = "default_header_elevate_threshold")]
    pub header_elevate_threshold: f64,

    /// Fixed header height subtracted from scroll targets.
    #[serde(default = "default_header_offset")]
    pub header_offset: f64,

    /// Debounce wait for the scroll-to-top handler.
    #[serde(default = "default_scroll_button_debounce_ms")]
    pub scroll_button_debounce_ms: u32,

    /// Debounce wait for the header handler.
    #[serde(default = "default_header_debounce_ms")]
    pub header_debounce_ms: u32,
}

fn default_mobile_max_width() -> f64 {
    768.0
}

fn default_tablet_max_width() -> f64 {
    1024.0
}

fn default_card_gap_px() -> f64 {
    32.0
}

fn default_autoplay_interval_ms() -> u32 {
    5000
}

fn default_scroll_top_threshold() -> f64 {
    300.0
}

fn default_header_elevate_threshold() -> f64 {
    50.0
}

fn default_header_offset() -> f64 {
    80.0
}

fn default_scroll_button_debounce_ms() -> u32 {
    100
}

fn default_header_debounce_ms() -> u32 {
    50
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            mobile_max_width: default_mobile_max_width(),
            tablet_max_width: default_tablet_max_width(),
            card_gap_px: default_card_gap_px(),
            autoplay_interval_ms: default_autoplay_interval_ms(),
            scroll_top_threshold: default_scroll_top_threshold(),
            header_elevate_threshold: default_header_elevate_threshold(),
            header_offset: default_header_offset(),
            scroll_button_debounce_ms: default_scroll_button_debounce_ms(),
            header_debounce_ms: default_header_debounce_ms(),
        }
    }
}

impl WidgetConfig {
    /// Featured cards visible at a viewport width.
    pub fn cards_per_view(&self, width: f64) -> usize {
        if width <= self.mobile_max_width {
            1
        } else if width <= self.tablet_max_width {
            2
        } else {
            3
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config() {
        let config: WidgetConfig = serde_json::from_str(r#"{"autoplay_interval_ms": 8000}"#).unwrap();
        assert_eq!(config.autoplay_interval_ms, 8000);
        assert_eq!(config.card_gap_px, 32.0);
        assert_eq!(config.header_offset, 80.0);
    }
}
