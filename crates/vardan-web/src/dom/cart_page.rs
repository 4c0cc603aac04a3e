//! Cart wiring: add-to-cart triggers, the cart page and count badges.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, Window};

use vardan_cache::{KvStore, LocalStorage, MemoryStore};
use vardan_commerce::binder::{claim_binding, migrate_element, AddToCartRequest, TRIGGER_CLASS};
use vardan_commerce::cart::{CartController, CartStore};
use vardan_commerce::catalog::PriceCatalog;
use vardan_commerce::checkout::{compose_quick_order, whatsapp_link};
use vardan_commerce::config::StoreConfig;
use vardan_observability::StructuredLogger;

use super::adapters::{DocumentControls, ElementAttributes};
use super::prompt::{BrowserPrompter, WindowOpener};
use super::timers::set_timeout;
use super::{event_element, listen, query_all, set_text};
use crate::action::{CartAction, ATTR_CART_ACTION, ATTR_INDEX};
use crate::selectors;

type PageCart = CartController<Box<dyn KvStore>, BrowserPrompter, WindowOpener>;
type SharedCart = Rc<RefCell<PageCart>>;

pub fn init(window: &Window, document: &Document) -> Result<(), JsValue> {
    let logger = StructuredLogger::new("cart-page");
    let config = StoreConfig::default();

    let backend: Box<dyn KvStore> = match LocalStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(err) => {
            logger
                .warn_builder("localStorage unavailable, cart will not persist")
                .field("error", err.to_string())
                .emit();
            Box::new(MemoryStore::new())
        }
    };

    let mut store = CartStore::new(backend, &config);
    match PriceCatalog::builtin() {
        Ok(catalog) => store = store.with_catalog(Rc::new(catalog)),
        Err(err) => logger
            .error_builder("price catalog failed to load")
            .field("error", err.to_string())
            .emit(),
    }
    store.load();

    let cart: SharedCart = Rc::new(RefCell::new(CartController::new(
        store,
        BrowserPrompter::new(window.clone()),
        WindowOpener::new(window.clone()),
        config,
    )));

    let migrated = migrate_inline_handlers(document);
    let bound = bind_triggers(document, &cart)?;
    logger
        .debug_builder("add-to-cart triggers bound")
        .field_i64("migrated", migrated as i64)
        .field_i64("bound", bound as i64)
        .emit();

    bind_cart_page(window, document, &cart)?;
    bind_quick_orders(window, document, &cart)?;
    refresh(document, &cart.borrow());
    Ok(())
}

fn migrate_inline_handlers(document: &Document) -> usize {
    query_all(document, selectors::INLINE_HANDLERS)
        .iter()
        .filter(|el| migrate_element(&mut ElementAttributes(el)))
        .count()
}

fn bind_triggers(document: &Document, cart: &SharedCart) -> Result<usize, JsValue> {
    let selector = format!(".{}", TRIGGER_CLASS);
    let mut bound = 0;
    for trigger in query_all(document, &selector) {
        if !claim_binding(&mut ElementAttributes(&trigger)) {
            continue;
        }
        let cart = Rc::clone(cart);
        let doc = document.clone();
        let el = trigger.clone();
        listen(&trigger, "click", move |event| {
            event.prevent_default();
            let Ok(request) = AddToCartRequest::from_attributes(|name| el.get_attribute(name)) else {
                return;
            };
            let add = request.resolve(&DocumentControls(&doc));
            let mut cart = cart.borrow_mut();
            if cart.add_resolved(&add).is_some() {
                refresh(&doc, &cart);
            }
        })?;
        bound += 1;
    }
    Ok(bound)
}

fn bind_cart_page(window: &Window, document: &Document, cart: &SharedCart) -> Result<(), JsValue> {
    if let Some(container) = cart_container(document) {
        let cart = Rc::clone(cart);
        let doc = document.clone();
        listen(&container, "click", move |event| {
            let Some(control) = event_element(&event)
                .and_then(|el| el.closest(&format!("[{}]", ATTR_CART_ACTION)).ok().flatten())
            else {
                return;
            };
            let action = control.get_attribute(ATTR_CART_ACTION).unwrap_or_default();
            let index = control.get_attribute(ATTR_INDEX).unwrap_or_default();
            let Some(action) = CartAction::parse(&action, &index) else {
                return;
            };
            let mut cart = cart.borrow_mut();
            if action.apply(&mut cart) {
                refresh(&doc, &cart);
            }
        })?;
    }

    if let Ok(Some(button)) = document.query_selector(selectors::CHECKOUT_BUTTON) {
        let cart = Rc::clone(cart);
        let doc = document.clone();
        let win = window.clone();
        listen(&button, "click", move |event| {
            event.prevent_default();
            let outcome = cart.borrow_mut().checkout();
            let Ok(outcome) = outcome else {
                return;
            };
            let delay = u32::try_from(outcome.clear_prompt_delay.as_millis()).unwrap_or(u32::MAX);
            let cart = Rc::clone(&cart);
            let doc = doc.clone();
            set_timeout(&win, delay, move || {
                let mut cart = cart.borrow_mut();
                if cart.offer_clear_after_checkout() {
                    refresh(&doc, &cart);
                }
            });
        })?;
    }

    if let Ok(Some(button)) = document.query_selector(selectors::CLEAR_CART_BUTTON) {
        let cart = Rc::clone(cart);
        let doc = document.clone();
        listen(&button, "click", move |event| {
            event.prevent_default();
            let mut cart = cart.borrow_mut();
            if cart.clear() {
                refresh(&doc, &cart);
            }
        })?;
    }
    Ok(())
}

/// Buttons that order one product directly, bypassing the cart.
fn bind_quick_orders(window: &Window, document: &Document, cart: &SharedCart) -> Result<(), JsValue> {
    for button in query_all(document, selectors::QUICK_ORDER) {
        let cart = Rc::clone(cart);
        let win = window.clone();
        let el = button.clone();
        listen(&button, "click", move |event| {
            event.prevent_default();
            let Some(name) = el.get_attribute("data-name").filter(|n| !n.trim().is_empty()) else {
                return;
            };
            let price = el.get_attribute("data-price").unwrap_or_default();
            let variant = el.get_attribute("data-variant");
            let cart = cart.borrow();
            let config = cart.config();
            let message = compose_quick_order(&config.company_name, &name, &price, variant.as_deref());
            let url = whatsapp_link(&config.messaging_base_url, &config.whatsapp_number, &message);
            let _ = win.open_with_url_and_target(&url, "_blank");
        })?;
    }
    Ok(())
}

fn cart_container(document: &Document) -> Option<Element> {
    selectors::CART_CONTAINERS
        .iter()
        .find_map(|selector| document.query_selector(selector).ok().flatten())
}

/// Redraw badges and, on the cart page, rows and totals.
fn refresh(document: &Document, cart: &PageCart) {
    set_text(document, selectors::CART_COUNT, &cart.store().item_count().to_string());

    let Some(container) = cart_container(document) else {
        return;
    };
    let view = cart.render();
    container.set_inner_html(&view.items_html);
    for selector in selectors::SUBTOTAL_TARGETS {
        set_text(document, selector, &view.subtotal_text);
    }
    for selector in selectors::TOTAL_TARGETS {
        set_text(document, selector, &view.total_text);
    }
    if let Ok(Some(button)) = document.query_selector(selectors::CHECKOUT_BUTTON) {
        if let Some(button) = button.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(!view.checkout_enabled);
        }
    }
}
