//! Offline cart inspection and editing.

use anyhow::{bail, Result};
use chrono::Local;
use serde_json::json;
use vardan_commerce::cart::PriceSource;
use vardan_commerce::binder::ResolvedAdd;

use super::{line_index, CartArgs, CartCommand};
use crate::context::{CliCart, Context};
use crate::output::price;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.cart(args.yes)?;
    match args.command {
        CartCommand::Show => show(&cart, ctx),
        CartCommand::Add {
            name,
            variant,
            price,
            image,
            qty,
        } => {
            let add = ResolvedAdd {
                name,
                variant,
                image,
                price: PriceSource::from(price),
                quantity: qty,
            };
            if cart.add_resolved(&add).is_none() {
                bail!("Nothing added: quantity must be at least 1");
            }
            show(&cart, ctx)
        }
        CartCommand::Update { line, delta } => {
            let index = checked_index(&cart, line)?;
            cart.update_quantity(index, delta);
            show(&cart, ctx)
        }
        CartCommand::Remove { line } => {
            let index = checked_index(&cart, line)?;
            if cart.remove(index) {
                show(&cart, ctx)?;
            }
            Ok(())
        }
        CartCommand::Clear => {
            if cart.store().is_empty() {
                ctx.output.info("Cart is already empty");
                return Ok(());
            }
            cart.clear();
            Ok(())
        }
        CartCommand::Sync => {
            let changed = cart.store_mut().sync_prices();
            ctx.output.success(&format!("{} line(s) re-priced", changed));
            show(&cart, ctx)
        }
    }
}

fn checked_index(cart: &CliCart, line: usize) -> Result<usize> {
    match line_index(line).filter(|&i| i < cart.store().len()) {
        Some(index) => Ok(index),
        None => bail!(
            "No line {} in the cart ({} line(s))",
            line,
            cart.store().len()
        ),
    }
}

/// Print the cart as a table, or as the stored JSON in `--json` mode.
pub(crate) fn show(cart: &CliCart, ctx: &Context) -> Result<()> {
    let store = cart.store();

    if ctx.output.is_json() {
        let items: Vec<_> = store.items().iter().map(|item| item.to_stored()).collect();
        ctx.output.json(&json!({
            "items": items,
            "count": store.item_count(),
            "total": store.total().display(),
        }));
        return Ok(());
    }

    if store.is_empty() {
        ctx.output.info("Your cart is empty");
        return Ok(());
    }

    ctx.output.header(&format!("Cart ({} items)", store.item_count()));
    let widths = [4, 34, 10, 9, 5, 10, 16];
    ctx.output
        .table_row(&["#", "Product", "Variant", "Price", "Qty", "Subtotal", "Added"], &widths);
    for (i, item) in store.items().iter().enumerate() {
        let line = (i + 1).to_string();
        let quantity = item.quantity.to_string();
        let subtotal = item.subtotal().display();
        let added = item
            .added_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string();
        ctx.output.table_row(
            &[
                &line,
                &item.name,
                &item.variant,
                &item.price_text,
                &quantity,
                &subtotal,
                &added,
            ],
            &widths,
        );
    }
    ctx.output.kv("Total", &price(&store.total().display()));
    Ok(())
}
