//! Checkout: order message composition and messaging deep links.

mod link;
mod message;

pub use link::{encode_uri_component, format_phone_number, whatsapp_link};
pub use message::{compose_order_message, compose_quick_order, SEPARATOR};
