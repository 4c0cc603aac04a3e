//! End-to-end cart flows through the public API.

use std::collections::VecDeque;
use std::rc::Rc;

use vardan_cache::{KvStore, MemoryStore};
use vardan_commerce::binder::{
    claim_binding, migrate_element, AddToCartRequest, AttributeMap, AttributeTarget,
    ControlReader, SelectedOption,
};
use vardan_commerce::cart::{MSG_CONFIRM_CLEAR_AFTER_ORDER, MSG_EMPTY_CHECKOUT};
use vardan_commerce::prelude::*;

/// Prompter answering confirmations from a queue.
#[derive(Default)]
struct ScriptedPrompter {
    answers: VecDeque<bool>,
    asked: Vec<String>,
    alerts: Vec<String>,
    notifications: Vec<String>,
}

impl ScriptedPrompter {
    fn answering(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, message: &str) -> bool {
        self.asked.push(message.to_string());
        self.answers.pop_front().unwrap_or(false)
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}

#[derive(Default)]
struct RecordingOpener {
    opened: Vec<String>,
}

impl LinkOpener for RecordingOpener {
    fn open(&mut self, url: &str) {
        self.opened.push(url.to_string());
    }
}

struct NoControls;

impl ControlReader for NoControls {
    fn input_value(&self, _selector: &str) -> Option<String> {
        None
    }

    fn selected_option(&self, _selector: &str) -> Option<SelectedOption> {
        None
    }
}

fn catalog() -> Rc<dyn PriceLookup> {
    Rc::new(PriceCatalog::builtin().unwrap())
}

fn controller(
    backend: MemoryStore,
    answers: &[bool],
) -> CartController<MemoryStore, ScriptedPrompter, RecordingOpener> {
    let config = StoreConfig::default();
    let mut store = CartStore::new(backend, &config).with_catalog(catalog());
    store.load();
    CartController::new(
        store,
        ScriptedPrompter::answering(answers),
        RecordingOpener::default(),
        config,
    )
}

#[test]
fn adding_same_product_twice_merges_lines() {
    let mut cart = controller(MemoryStore::new(), &[]);
    cart.add_variant("Shea Butter Soap", "100g", "images/shea.jpg");
    cart.add_variant("Shea Butter Soap", "100g", "images/shea.jpg");

    let store = cart.store();
    assert_eq!(store.len(), 1);
    let item = store.get(0).unwrap();
    assert_eq!(item.price, Money::rupees(249));
    assert_eq!(item.price_text, "\u{20b9}249");
    assert_eq!(item.quantity, 2);
    assert_eq!(store.total(), Money::rupees(498));
}

#[test]
fn cart_survives_reload() {
    let backend = MemoryStore::new();
    {
        let mut cart = controller(backend.clone(), &[]);
        cart.add_variant("Hibiscus Tea", "20g", "");
        cart.add_variant("Kansa Wand", "default", "");
        cart.update_quantity(0, 2);
    }

    let cart = controller(backend, &[]);
    let items = cart.store().items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].quantity, 3);
    assert_eq!(cart.store().total(), Money::rupees(179 * 3 + 699));
}

#[test]
fn legacy_cart_is_normalized_and_repriced() {
    let backend = MemoryStore::new();
    backend
        .set_raw(
            "vardanCart",
            r#"[
                {"name": "Goat Milk Soap", "variant": "55g", "price": "₹150", "quantity": "2"},
                {"name": "Retired Blend", "price": 120},
                "garbage"
            ]"#,
        )
        .unwrap();

    let cart = controller(backend.clone(), &[]);
    let items = cart.store().items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].price_text, "\u{20b9}190");
    assert_eq!(items[0].quantity, 2);
    assert_eq!(items[1].price_text, "\u{20b9}120");
    assert_eq!(items[1].variant, "default");
    assert_eq!(items[1].image, "images/placeholder.jpg");

    let persisted: serde_json::Value =
        serde_json::from_str(&backend.get_raw("vardanCart").unwrap().unwrap()).unwrap();
    assert_eq!(persisted[0]["priceText"], "\u{20b9}190");
}

#[test]
fn quantity_down_to_zero_removes_line() {
    let mut cart = controller(MemoryStore::new(), &[]);
    cart.add_variant("Lemongrass Tea", "15g", "");
    cart.add_variant("Lemongrass Tea", "15g", "");
    assert!(cart.update_quantity(0, -2));
    assert!(cart.store().is_empty());
    assert!(!cart.update_quantity(7, 1));
}

#[test]
fn checkout_flow_with_single_clear_confirmation() {
    let mut cart = controller(MemoryStore::new(), &[true]);
    assert!(cart.checkout().is_err());
    assert_eq!(cart.prompter().alerts, vec![MSG_EMPTY_CHECKOUT]);

    cart.add_variant("Shea Butter Soap", "100g", "");
    cart.add_variant("Kansa Wand", "default", "");
    let outcome = cart.checkout().unwrap();

    assert!(outcome.message.contains("1. *Shea Butter Soap*\n   Variant: 100g\n"));
    assert!(outcome.message.contains("*Total Amount: \u{20b9}948*"));
    assert!(outcome.url.contains("%E2%82%B9948"));
    assert_eq!(cart.opener().opened.len(), 1);

    assert!(cart.offer_clear_after_checkout());
    assert!(cart.store().is_empty());
    assert_eq!(cart.prompter().asked, vec![MSG_CONFIRM_CLEAR_AFTER_ORDER]);
}

#[test]
fn migrated_button_adds_through_binder() {
    let mut button = AttributeMap::new()
        .with("class", "add-to-cart-btn")
        .with("onclick", "addToCart('Seasonal Gift Box', '\u{20b9}1,499', 'Large')");
    assert!(migrate_element(&mut button));
    assert!(claim_binding(&mut button));
    assert!(!claim_binding(&mut button));

    let request = AddToCartRequest::from_attributes(|name| button.get_attribute(name)).unwrap();
    let add = request.resolve(&NoControls);

    let mut cart = controller(MemoryStore::new(), &[]);
    cart.add_resolved(&add);

    let item = cart.store().get(0).unwrap();
    assert_eq!(item.name, "Seasonal Gift Box");
    assert_eq!(item.variant, "Large");
    assert_eq!(item.price, Money::rupees(1499));
    assert_eq!(
        cart.prompter().notifications,
        vec!["\u{2713} Seasonal Gift Box added to cart!"]
    );
}

#[test]
fn storage_quota_failure_keeps_page_working() {
    let config = StoreConfig::default();
    let mut store = CartStore::new(MemoryStore::with_quota(64), &config).with_catalog(catalog());
    for _ in 0..3 {
        store.add_variant("Shea Butter Soap", "100g", "images/shea.jpg");
    }
    assert_eq!(store.get(0).map(|i| i.quantity), Some(3));
    assert!(store.backend().get_raw("vardanCart").unwrap().is_none());
}

#[test]
fn absurd_stored_price_loads_without_panicking() {
    let backend = MemoryStore::new();
    backend
        .set_raw("vardanCart", r#"[{"name": "Retired Blend", "price": 1e300}]"#)
        .unwrap();

    let cart = controller(backend, &[]);
    let item = cart.store().get(0).unwrap();
    assert_eq!(item.price.paise, i64::MAX);
    assert_eq!(item.price_text, format!("\u{20b9}{}", i64::MAX / 100));
    assert_eq!(cart.store().total().paise, i64::MAX);
}

#[test]
fn absurd_attribute_price_adds_without_panicking() {
    let mut cart = controller(MemoryStore::new(), &[]);
    cart.add_priced("Retired Blend", "99999999999999999999", "", "");
    cart.add_priced("Retired Blend", "99999999999999999999", "", "");

    let item = cart.store().get(0).unwrap();
    assert_eq!(item.quantity, 2);
    assert_eq!(item.price.paise, i64::MAX);
    assert_eq!(item.subtotal().paise, i64::MAX);
    assert!(cart.checkout().is_ok());
}
