//! User-facing cart operations: confirmations, notifications and checkout.

use std::time::Duration;

use vardan_cache::KvStore;
use vardan_observability::StructuredLogger;

use crate::binder::ResolvedAdd;
use crate::cart::{render_cart, AddOutcome, CartStore, CartView};
use crate::checkout::{compose_order_message, whatsapp_link};
use crate::config::StoreConfig;
use crate::error::CommerceError;

pub const MSG_CONFIRM_REMOVE: &str = "Remove this item from cart?";
pub const MSG_REMOVED: &str = "Item removed from cart";
pub const MSG_CONFIRM_CLEAR: &str = "Are you sure you want to clear your entire cart?";
pub const MSG_CLEARED: &str = "Cart cleared";
pub const MSG_EMPTY_CHECKOUT: &str = "Your cart is empty!";
pub const MSG_CONFIRM_CLEAR_AFTER_ORDER: &str = "Order sent! Would you like to clear your cart?";

/// Blocking prompts and transient notifications.
pub trait Prompter {
    /// Ask a yes/no question.
    fn confirm(&mut self, message: &str) -> bool;
    /// Show a blocking notice.
    fn alert(&mut self, message: &str);
    /// Show a transient notification.
    fn notify(&mut self, message: &str);
}

/// Opens an outbound link in a new browsing context.
pub trait LinkOpener {
    fn open(&mut self, url: &str);
}

/// A sent order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutOutcome {
    /// Deep link that was opened.
    pub url: String,
    /// Plain-text order summary.
    pub message: String,
    /// Wait before calling [`CartController::offer_clear_after_checkout`].
    pub clear_prompt_delay: Duration,
}

/// A cart store wired to prompts and link opening.
pub struct CartController<S: KvStore, P, L> {
    store: CartStore<S>,
    prompter: P,
    opener: L,
    config: StoreConfig,
    logger: StructuredLogger,
}

impl<S, P, L> CartController<S, P, L>
where
    S: KvStore,
    P: Prompter,
    L: LinkOpener,
{
    pub fn new(store: CartStore<S>, prompter: P, opener: L, config: StoreConfig) -> Self {
        Self {
            store,
            prompter,
            opener,
            config,
            logger: StructuredLogger::new("cart"),
        }
    }

    pub fn store(&self) -> &CartStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut CartStore<S> {
        &mut self.store
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn opener(&self) -> &L {
        &self.opener
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Add one unit priced by the catalog.
    pub fn add_variant(&mut self, name: &str, variant: &str, image: &str) -> AddOutcome {
        let outcome = self.store.add_variant(name, variant, image);
        self.notify_added(name);
        outcome
    }

    /// Add one unit with a declared fallback price.
    pub fn add_priced(&mut self, name: &str, price_text: &str, variant: &str, image: &str) -> AddOutcome {
        let outcome = self.store.add_priced(name, price_text, variant, image);
        self.notify_added(name);
        outcome
    }

    /// Apply a bound trigger's request, one add per unit.
    pub fn add_resolved(&mut self, add: &ResolvedAdd) -> Option<AddOutcome> {
        let mut last = None;
        for _ in 0..add.quantity {
            last = Some(
                self.store
                    .add(&add.name, &add.variant, &add.image, add.price.clone()),
            );
        }
        if last.is_some() {
            self.notify_added(&add.name);
        }
        last
    }

    fn notify_added(&mut self, name: &str) {
        self.prompter
            .notify(&format!("\u{2713} {name} added to cart!"));
    }

    /// Change a line's quantity; no confirmation.
    pub fn update_quantity(&mut self, index: usize, delta: i64) -> bool {
        self.store.update_quantity(index, delta)
    }

    /// Remove a line after confirmation. Returns whether it was removed.
    pub fn remove(&mut self, index: usize) -> bool {
        if self.store.get(index).is_none() {
            return false;
        }
        if !self.prompter.confirm(MSG_CONFIRM_REMOVE) {
            return false;
        }
        let removed = self.store.remove(index).is_some();
        if removed {
            self.prompter.notify(MSG_REMOVED);
        }
        removed
    }

    /// Empty the cart after confirmation. Returns whether it was cleared.
    pub fn clear(&mut self) -> bool {
        if !self.prompter.confirm(MSG_CONFIRM_CLEAR) {
            return false;
        }
        self.store.clear();
        self.prompter.notify(MSG_CLEARED);
        true
    }

    /// Send the cart as an order message.
    ///
    /// Prices are re-synced first. An empty cart shows a notice and fails
    /// with [`CommerceError::EmptyCart`].
    pub fn checkout(&mut self) -> Result<CheckoutOutcome, CommerceError> {
        if self.store.is_empty() {
            self.prompter.alert(MSG_EMPTY_CHECKOUT);
            return Err(CommerceError::EmptyCart);
        }

        self.store.sync_prices();
        let message = compose_order_message(self.store.items(), &self.config.company_name)
            .ok_or(CommerceError::EmptyCart)?;
        let url = whatsapp_link(
            &self.config.messaging_base_url,
            &self.config.whatsapp_number,
            &message,
        );

        self.logger
            .info_builder("Order link opened")
            .field_i64("lines", self.store.len() as i64)
            .field("total", self.store.total().display())
            .emit();
        self.opener.open(&url);

        Ok(CheckoutOutcome {
            url,
            message,
            clear_prompt_delay: Duration::from_millis(u64::from(self.config.clear_prompt_delay_ms)),
        })
    }

    /// Ask once whether to clear the cart after an order was sent.
    pub fn offer_clear_after_checkout(&mut self) -> bool {
        if !self.prompter.confirm(MSG_CONFIRM_CLEAR_AFTER_ORDER) {
            return false;
        }
        self.store.clear();
        self.prompter.notify(MSG_CLEARED);
        true
    }

    /// Current cart page view.
    pub fn render(&self) -> CartView {
        render_cart(self.store.items(), self.store.total(), &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::PriceSource;
    use crate::money::Money;
    use vardan_cache::MemoryStore;

    #[derive(Default)]
    struct Script {
        answers: Vec<bool>,
        confirms: Vec<String>,
        alerts: Vec<String>,
        notes: Vec<String>,
    }

    impl Prompter for Script {
        fn confirm(&mut self, message: &str) -> bool {
            self.confirms.push(message.to_string());
            if self.answers.is_empty() {
                false
            } else {
                self.answers.remove(0)
            }
        }

        fn alert(&mut self, message: &str) {
            self.alerts.push(message.to_string());
        }

        fn notify(&mut self, message: &str) {
            self.notes.push(message.to_string());
        }
    }

    #[derive(Default)]
    struct Links(Vec<String>);

    impl LinkOpener for Links {
        fn open(&mut self, url: &str) {
            self.0.push(url.to_string());
        }
    }

    fn controller(answers: Vec<bool>) -> CartController<MemoryStore, Script, Links> {
        let config = StoreConfig::default();
        let store = CartStore::new(MemoryStore::new(), &config);
        let script = Script {
            answers,
            ..Script::default()
        };
        CartController::new(store, script, Links::default(), config)
    }

    #[test]
    fn test_add_notifies() {
        let mut c = controller(vec![]);
        c.add_priced("Kansa Wand", "\u{20b9}699", "", "");
        assert_eq!(c.prompter().notes, vec!["\u{2713} Kansa Wand added to cart!"]);
    }

    #[test]
    fn test_add_resolved_repeats_per_unit() {
        let mut c = controller(vec![]);
        let add = ResolvedAdd {
            name: "Hibiscus Tea".into(),
            variant: "10g".into(),
            image: String::new(),
            price: PriceSource::Text("\u{20b9}99".into()),
            quantity: 3,
        };
        let outcome = c.add_resolved(&add).unwrap();
        assert_eq!(outcome.quantity, 3);
        assert_eq!(c.store().total(), Money::rupees(297));
    }

    #[test]
    fn test_remove_requires_confirmation() {
        let mut c = controller(vec![false, true]);
        c.add_priced("Kansa Wand", "\u{20b9}699", "", "");

        assert!(!c.remove(0));
        assert_eq!(c.store().len(), 1);

        assert!(c.remove(0));
        assert!(c.store().is_empty());
        assert_eq!(c.prompter().notes.last().map(String::as_str), Some(MSG_REMOVED));
    }

    #[test]
    fn test_remove_out_of_range_asks_nothing() {
        let mut c = controller(vec![true]);
        assert!(!c.remove(4));
        assert!(c.prompter().confirms.is_empty());
    }

    #[test]
    fn test_clear_declined_keeps_items() {
        let mut c = controller(vec![false]);
        c.add_priced("Kansa Wand", "\u{20b9}699", "", "");
        assert!(!c.clear());
        assert_eq!(c.store().len(), 1);
        assert_eq!(c.prompter().confirms, vec![MSG_CONFIRM_CLEAR]);
    }

    #[test]
    fn test_checkout_empty_cart_alerts() {
        let mut c = controller(vec![]);
        assert!(matches!(c.checkout(), Err(CommerceError::EmptyCart)));
        assert_eq!(c.prompter().alerts, vec![MSG_EMPTY_CHECKOUT]);
        assert!(c.opener().0.is_empty());
    }

    #[test]
    fn test_checkout_opens_link_then_offers_clear() {
        let mut c = controller(vec![true]);
        c.add_priced("Kansa Wand", "\u{20b9}699", "", "");
        let outcome = c.checkout().unwrap();

        assert!(outcome.url.starts_with("https://wa.me/918077775729?text="));
        assert_eq!(c.opener().0, vec![outcome.url.clone()]);
        assert_eq!(outcome.clear_prompt_delay, Duration::from_millis(1500));
        assert_eq!(c.store().len(), 1);

        assert!(c.offer_clear_after_checkout());
        assert!(c.store().is_empty());
        assert_eq!(c.prompter().confirms, vec![MSG_CONFIRM_CLEAR_AFTER_ORDER]);
    }

    #[test]
    fn test_render_tracks_store() {
        let mut c = controller(vec![]);
        assert!(c.render().is_empty);
        c.add_priced("Kansa Wand", "\u{20b9}699", "", "");
        let view = c.render();
        assert_eq!(view.total_text, "\u{20b9}699");
        assert_eq!(view.count_text, "1");
    }
}
