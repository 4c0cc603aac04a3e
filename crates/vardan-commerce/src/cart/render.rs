//! Cart page projection.
//!
//! Rendering is a pure function of the line items and total: the same input
//! always yields the same markup.

use std::fmt::Write;

use crate::cart::CartLineItem;
use crate::config::StoreConfig;
use crate::money::Money;

/// Value of `data-cart-action` on the decrement control.
pub const ACTION_DECREMENT: &str = "decrement";
/// Value of `data-cart-action` on the increment control.
pub const ACTION_INCREMENT: &str = "increment";
/// Value of `data-cart-action` on the remove control.
pub const ACTION_REMOVE: &str = "remove";

/// Everything the cart page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// Markup for the items container.
    pub items_html: String,
    /// Subtotal text.
    pub subtotal_text: String,
    /// Total text; identical to the subtotal (no tax or shipping).
    pub total_text: String,
    /// Cart badge text.
    pub count_text: String,
    /// Whether checkout is allowed.
    pub checkout_enabled: bool,
    /// Whether the empty-state panel is shown.
    pub is_empty: bool,
}

/// Project line items into the cart page view.
pub fn render_cart(items: &[CartLineItem], total: Money, config: &StoreConfig) -> CartView {
    let count: u64 = items.iter().map(|i| u64::from(i.quantity)).sum();

    if items.is_empty() {
        return CartView {
            items_html: empty_state(&config.empty_cart_link),
            subtotal_text: Money::zero().display(),
            total_text: Money::zero().display(),
            count_text: count.to_string(),
            checkout_enabled: false,
            is_empty: true,
        };
    }

    let mut html = String::new();
    for (index, item) in items.iter().enumerate() {
        render_row(&mut html, index, item, &config.placeholder_image);
    }

    CartView {
        items_html: html,
        subtotal_text: total.display(),
        total_text: total.display(),
        count_text: count.to_string(),
        checkout_enabled: true,
        is_empty: false,
    }
}

fn empty_state(link: &str) -> String {
    format!(
        concat!(
            "<div class=\"cart-empty-state\">",
            "<div class=\"cart-empty-icon\">\u{1f6cd}\u{fe0f}</div>",
            "<h2>Your cart is empty</h2>",
            "<p>Looks like you haven't added anything to your cart yet.</p>",
            "<a href=\"{}\" class=\"shop-now-btn\">\u{1f33f} Start Shopping</a>",
            "</div>"
        ),
        escape_html(link)
    )
}

fn render_row(out: &mut String, index: usize, item: &CartLineItem, placeholder: &str) {
    let image = if item.image.is_empty() {
        placeholder
    } else {
        &item.image
    };
    let name = escape_html(&item.name);

    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "<div class=\"cart-item\"><img src=\"{}\" alt=\"{}\" class=\"cart-item-image\">",
        escape_html(image),
        name
    );
    let _ = write!(
        out,
        "<div class=\"cart-item-details\"><div class=\"cart-item-name\">{}</div>",
        name
    );
    if !item.variant.is_empty() {
        let _ = write!(
            out,
            "<div class=\"cart-item-variant\">{}</div>",
            escape_html(&item.variant)
        );
    }
    let _ = write!(
        out,
        "<div class=\"cart-item-price\">{}</div>",
        escape_html(&item.price_text)
    );
    let _ = write!(
        out,
        concat!(
            "<div class=\"cart-item-actions\"><div class=\"quantity-control\">",
            "<button class=\"qty-btn\" data-cart-action=\"{dec}\" data-index=\"{i}\">\u{2212}</button>",
            "<span class=\"qty-display\">{qty}</span>",
            "<button class=\"qty-btn\" data-cart-action=\"{inc}\" data-index=\"{i}\">+</button>",
            "</div>",
            "<button class=\"remove-btn\" data-cart-action=\"{rm}\" data-index=\"{i}\" title=\"Remove item\">\u{1f5d1}\u{fe0f}</button>",
            "</div></div>"
        ),
        dec = ACTION_DECREMENT,
        inc = ACTION_INCREMENT,
        rm = ACTION_REMOVE,
        i = index,
        qty = item.quantity,
    );
    let _ = write!(
        out,
        "<div class=\"cart-item-total\">{}</div></div>",
        item.subtotal().display()
    );
}

/// Escape `& " ' < >` for interpolation into markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
