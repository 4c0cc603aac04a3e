//! Click actions decoded from data attributes.
//!
//! Controls rendered by the storefront carry their intent in `data-*`
//! attributes; the DOM layer delegates clicks and decodes them here.

use vardan_cache::KvStore;
use vardan_commerce::cart::{
    CartController, LinkOpener, Prompter, ACTION_DECREMENT, ACTION_INCREMENT, ACTION_REMOVE,
};

/// Attribute naming a cart row action.
pub const ATTR_CART_ACTION: &str = "data-cart-action";
/// Attribute carrying the row index of a cart action.
pub const ATTR_INDEX: &str = "data-index";
/// Attribute carrying a carousel step (`-1` / `1`).
pub const ATTR_CAROUSEL_MOVE: &str = "data-carousel-move";
/// Attribute carrying a carousel slide index.
pub const ATTR_CAROUSEL_SLIDE: &str = "data-carousel-slide";

/// A click on a cart row control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    Decrement(usize),
    Increment(usize),
    Remove(usize),
}

impl CartAction {
    /// Decode `data-cart-action` and `data-index`.
    pub fn parse(action: &str, index: &str) -> Option<Self> {
        let index = index.trim().parse::<usize>().ok()?;
        match action.trim() {
            ACTION_DECREMENT => Some(CartAction::Decrement(index)),
            ACTION_INCREMENT => Some(CartAction::Increment(index)),
            ACTION_REMOVE => Some(CartAction::Remove(index)),
            _ => None,
        }
    }

    /// Apply to the cart. Returns whether the cart changed.
    pub fn apply<S, P, L>(self, cart: &mut CartController<S, P, L>) -> bool
    where
        S: KvStore,
        P: Prompter,
        L: LinkOpener,
    {
        match self {
            CartAction::Decrement(i) => cart.update_quantity(i, -1),
            CartAction::Increment(i) => cart.update_quantity(i, 1),
            CartAction::Remove(i) => cart.remove(i),
        }
    }
}

/// A click on a carousel control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    Move(i64),
    GoTo(usize),
}

impl CarouselAction {
    /// Decode from the control's attributes; a step wins over a slide index.
    pub fn parse(step: Option<&str>, slide: Option<&str>) -> Option<Self> {
        if let Some(step) = step.and_then(|s| s.trim().parse::<i64>().ok()) {
            return Some(CarouselAction::Move(step));
        }
        slide
            .and_then(|s| s.trim().parse::<usize>().ok())
            .map(CarouselAction::GoTo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vardan_cache::MemoryStore;
    use vardan_commerce::cart::CartStore;
    use vardan_commerce::config::StoreConfig;

    struct Yes;

    impl Prompter for Yes {
        fn confirm(&mut self, _message: &str) -> bool {
            true
        }
        fn alert(&mut self, _message: &str) {}
        fn notify(&mut self, _message: &str) {}
    }

    struct Nowhere;

    impl LinkOpener for Nowhere {
        fn open(&mut self, _url: &str) {}
    }

    #[test]
    fn test_parse_cart_actions() {
        assert_eq!(CartAction::parse("increment", "2"), Some(CartAction::Increment(2)));
        assert_eq!(CartAction::parse("decrement", " 0 "), Some(CartAction::Decrement(0)));
        assert_eq!(CartAction::parse("remove", "1"), Some(CartAction::Remove(1)));
        assert_eq!(CartAction::parse("explode", "1"), None);
        assert_eq!(CartAction::parse("remove", "-1"), None);
    }

    #[test]
    fn test_apply_cart_actions() {
        let config = StoreConfig::default();
        let store = CartStore::new(MemoryStore::new(), &config);
        let mut cart = CartController::new(store, Yes, Nowhere, config);
        cart.add_priced("Kansa Wand", "\u{20b9}699", "", "");

        assert!(CartAction::Increment(0).apply(&mut cart));
        assert_eq!(cart.store().item_count(), 2);
        assert!(CartAction::Decrement(0).apply(&mut cart));
        assert!(!CartAction::Increment(3).apply(&mut cart));
        assert!(CartAction::Remove(0).apply(&mut cart));
        assert!(cart.store().is_empty());
    }

    #[test]
    fn test_parse_carousel_actions() {
        assert_eq!(CarouselAction::parse(Some("-1"), None), Some(CarouselAction::Move(-1)));
        assert_eq!(CarouselAction::parse(None, Some("3")), Some(CarouselAction::GoTo(3)));
        assert_eq!(CarouselAction::parse(Some("x"), Some("1")), Some(CarouselAction::GoTo(1)));
        assert_eq!(CarouselAction::parse(None, None), None);
    }
}
