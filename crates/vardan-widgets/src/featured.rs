//! Featured products carousel with a responsive page size and autoplay.

use crate::config::WidgetConfig;

/// State of the featured products carousel.
///
/// The index is clamped to `[0, total - cards_per_view]`. Autoplay ticks
/// call [`FeaturedCarousel::auto_advance`], which stands still while every
/// card fits on one page.
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedCarousel {
    config: WidgetConfig,
    total: usize,
    cards_per_view: usize,
    current: usize,
}

impl FeaturedCarousel {
    /// Create a carousel over `total` cards for a viewport `width` pixels wide.
    pub fn new(total: usize, width: f64, config: WidgetConfig) -> Self {
        let mut carousel = Self {
            cards_per_view: config.cards_per_view(width),
            config,
            total,
            current: 0,
        };
        carousel.clamp();
        carousel
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn cards_per_view(&self) -> usize {
        self.cards_per_view
    }

    /// Largest valid index.
    pub fn max_index(&self) -> usize {
        self.total.saturating_sub(self.cards_per_view)
    }

    /// Number of dot indicators.
    pub fn dot_count(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.max_index() + 1
        }
    }

    pub fn prev_disabled(&self) -> bool {
        self.current == 0
    }

    pub fn next_disabled(&self) -> bool {
        self.current >= self.max_index()
    }

    /// Go back one card. Returns whether the index moved.
    pub fn prev(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Go forward one card. Returns whether the index moved.
    pub fn next(&mut self) -> bool {
        if self.current >= self.max_index() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Jump to `index`, clamped to the valid range.
    pub fn go_to(&mut self, index: usize) {
        self.current = index;
        self.clamp();
    }

    /// Autoplay tick: advance, wrapping to the start after the last page.
    pub fn auto_advance(&mut self) {
        if self.current >= self.max_index() {
            self.current = 0;
        } else {
            self.current += 1;
        }
    }

    /// Recompute the page size for a new viewport width.
    ///
    /// Returns whether the number of dots changed.
    pub fn resize(&mut self, width: f64) -> bool {
        let dots = self.dot_count();
        self.cards_per_view = self.config.cards_per_view(width);
        self.clamp();
        self.dot_count() != dots
    }

    /// Track offset in pixels for cards `card_width` pixels wide.
    pub fn offset_px(&self, card_width: f64) -> f64 {
        -(self.current as f64 * (card_width + self.config.card_gap_px))
    }

    /// CSS transform of the track.
    pub fn transform(&self, card_width: f64) -> String {
        format!("translateX({}px)", self.offset_px(card_width))
    }

    fn clamp(&mut self) {
        self.current = self.current.min(self.max_index());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(total: usize, width: f64) -> FeaturedCarousel {
        FeaturedCarousel::new(total, width, WidgetConfig::default())
    }

    #[test]
    fn test_cards_per_view_breakpoints() {
        assert_eq!(carousel(10, 375.0).cards_per_view(), 1);
        assert_eq!(carousel(10, 768.0).cards_per_view(), 1);
        assert_eq!(carousel(10, 1024.0).cards_per_view(), 2);
        assert_eq!(carousel(10, 1440.0).cards_per_view(), 3);
    }

    #[test]
    fn test_index_clamped_to_last_page() {
        let mut c = carousel(10, 1440.0);
        assert_eq!(c.max_index(), 7);
        assert_eq!(c.dot_count(), 8);
        c.go_to(50);
        assert_eq!(c.current(), 7);
        assert!(c.next_disabled());
        assert!(!c.next());
    }

    #[test]
    fn test_prev_and_next() {
        let mut c = carousel(5, 1440.0);
        assert!(c.prev_disabled());
        assert!(!c.prev());
        assert!(c.next());
        assert_eq!(c.current(), 1);
        assert!(c.prev());
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_auto_advance_stands_still_on_single_page() {
        let mut c = carousel(3, 1440.0);
        c.auto_advance();
        assert_eq!(c.current(), 0);
        assert!(c.resize(375.0));
        c.auto_advance();
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn test_resize_reports_dot_changes() {
        let mut c = carousel(10, 1440.0);
        assert!(!c.resize(1500.0));
        assert_eq!(c.dot_count(), 8);
        assert!(c.resize(1024.0));
        assert_eq!(c.dot_count(), 9);
        assert!(!c.resize(1000.0));
    }

    #[test]
    fn test_auto_advance_wraps() {
        let mut c = carousel(4, 1440.0);
        c.auto_advance();
        assert_eq!(c.current(), 1);
        c.auto_advance();
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_resize_clamps() {
        let mut c = carousel(4, 375.0);
        c.go_to(3);
        assert!(c.resize(1440.0));
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn test_fewer_cards_than_page() {
        let c = carousel(2, 1440.0);
        assert_eq!(c.max_index(), 0);
        assert_eq!(c.dot_count(), 1);
        assert!(c.prev_disabled() && c.next_disabled());
        assert_eq!(carousel(0, 1440.0).dot_count(), 0);
    }

    #[test]
    fn test_offset_includes_gap() {
        let mut c = carousel(10, 1440.0);
        c.go_to(2);
        assert_eq!(c.offset_px(300.0), -664.0);
        assert_eq!(c.transform(300.0), "translateX(-664px)");
    }
}
