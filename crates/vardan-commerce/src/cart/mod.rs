//! Shopping cart module.
//!
//! Contains line items, the persisted store, the interaction controller and
//! the cart page renderer.

mod controller;
mod item;
mod price_text;
mod render;
mod store;

pub use controller::{
    CartController, CheckoutOutcome, LinkOpener, Prompter, MSG_CLEARED, MSG_CONFIRM_CLEAR,
    MSG_CONFIRM_CLEAR_AFTER_ORDER, MSG_CONFIRM_REMOVE, MSG_EMPTY_CHECKOUT, MSG_REMOVED,
};
pub use item::{CartLineItem, StoredLineItem};
pub use price_text::parse_price_text;
pub use render::{escape_html, render_cart, CartView, ACTION_DECREMENT, ACTION_INCREMENT, ACTION_REMOVE};
pub use store::{AddOutcome, CartStore, PriceSource};
