//! Browser entry point for the Vardan storefront.
//!
//! Built as a `cdylib` for `wasm32-unknown-unknown`; every page loads the
//! same module. On start it wires whatever the page contains:
//!
//! - add-to-cart buttons (legacy inline handlers are migrated first)
//! - the cart page: rows, totals, checkout
//! - cart count badges
//! - image carousels, the featured carousel, the nav dropdown
//! - category tabs, scroll effects and smooth in-page anchors
//! - off-site links and required form fields
//!
//! The decoding of click intents lives in [`action`] and, like
//! [`timing`], is platform neutral; the DOM wiring is compiled only for wasm32.

pub mod action;
pub mod selectors;
pub mod timing;

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Module start hook.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    dom::boot()
}
