//! Order message preview.

use anyhow::{Context as _, Result};
use serde_json::json;
use vardan_commerce::checkout::format_phone_number;

use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command.
pub fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.cart(args.yes)?;
    let outcome = cart.checkout().context("Checkout failed")?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "to": cart.config().whatsapp_number,
            "url": outcome.url,
            "message": outcome.message,
        }));
    } else {
        ctx.output.header(&format!(
            "Order for {}",
            format_phone_number(&cart.config().whatsapp_number)
        ));
        ctx.output.block(&outcome.message);
        ctx.output.header("Link");
        ctx.output.block(cart.opener().last().unwrap_or(outcome.url.as_str()));
    }

    if args.clear {
        cart.offer_clear_after_checkout();
    }
    Ok(())
}
