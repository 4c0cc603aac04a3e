//! Image carousel.

use std::collections::BTreeMap;

/// One image carousel: a row of slides translated by whole widths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    total: usize,
}

impl Carousel {
    /// Create a carousel over `total` slides, showing the first.
    pub fn new(total: usize) -> Self {
        Self { current: 0, total }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Step by `direction` slides, wrapping at both ends.
    pub fn move_by(&mut self, direction: i64) {
        if self.total == 0 {
            return;
        }
        let total = self.total as i64;
        self.current = (self.current as i64 + direction).rem_euclid(total) as usize;
    }

    /// Jump to slide `index`. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.total {
            return false;
        }
        self.current = index;
        true
    }

    /// CSS transform of the slide track.
    pub fn transform(&self) -> String {
        format!("translateX(-{}%)", self.current * 100)
    }

    /// Whether indicator `index` is highlighted.
    pub fn indicator_active(&self, index: usize) -> bool {
        index == self.current
    }
}

/// Carousels on a page, keyed by element id.
#[derive(Debug, Clone, Default)]
pub struct CarouselRegistry {
    carousels: BTreeMap<String, Carousel>,
}

impl CarouselRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a carousel; re-registering an id resets it.
    pub fn register(&mut self, id: impl Into<String>, total: usize) {
        self.carousels.insert(id.into(), Carousel::new(total));
    }

    pub fn get(&self, id: &str) -> Option<&Carousel> {
        self.carousels.get(id)
    }

    /// Step the carousel `id`; returns it when it exists.
    pub fn move_by(&mut self, id: &str, direction: i64) -> Option<&Carousel> {
        let carousel = self.carousels.get_mut(id)?;
        carousel.move_by(direction);
        Some(carousel)
    }

    /// Jump the carousel `id` to `index`.
    pub fn go_to(&mut self, id: &str, index: usize) -> Option<&Carousel> {
        let carousel = self.carousels.get_mut(id)?;
        carousel.go_to(index);
        Some(carousel)
    }

    pub fn len(&self) -> usize {
        self.carousels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carousels.is_empty()
    }
}
