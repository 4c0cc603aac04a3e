//! Scroll-driven page effects.

use crate::config::WidgetConfig;

/// Visual state derived from the page scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollEffects {
    /// Scroll-to-top button visible.
    pub show_scroll_top: bool,
    /// Header drawn with the elevated shadow.
    pub header_elevated: bool,
}

impl ScrollEffects {
    pub fn at(offset: f64, config: &WidgetConfig) -> Self {
        Self {
            show_scroll_top: offset > config.scroll_top_threshold,
            header_elevated: offset > config.header_elevate_threshold,
        }
    }
}

/// Scroll position that puts an element `element_top` pixels below the
/// viewport top just under the fixed header.
pub fn scroll_target(element_top: f64, page_offset: f64, config: &WidgetConfig) -> f64 {
    element_top + page_offset - config.header_offset
}

/// In-page anchor target id, or `None` for a bare `#` or a non-anchor link.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        let config = WidgetConfig::default();
        assert_eq!(
            ScrollEffects::at(0.0, &config),
            ScrollEffects {
                show_scroll_top: false,
                header_elevated: false
            }
        );
        let mid = ScrollEffects::at(120.0, &config);
        assert!(mid.header_elevated && !mid.show_scroll_top);
        assert!(ScrollEffects::at(301.0, &config).show_scroll_top);
        assert!(!ScrollEffects::at(300.0, &config).show_scroll_top);
    }

    #[test]
    fn test_scroll_target_subtracts_header() {
        let config = WidgetConfig::default();
        assert_eq!(scroll_target(500.0, 1000.0, &config), 1420.0);
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#products"), Some("products"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("cart.html"), None);
    }
}
