//! Price catalog inspection.

use anyhow::{bail, Result};
use serde_json::json;
use vardan_commerce::catalog::{CatalogProduct, PriceCatalog};

use super::{CatalogArgs, CatalogCommand};
use crate::context::Context;
use crate::output::{price, sale_badge};

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    match args.command {
        CatalogCommand::List { category } => list(&catalog, category.as_deref(), ctx),
        CatalogCommand::Price { name, variant } => price_of(&catalog, &name, variant.as_deref(), ctx),
        CatalogCommand::Search { term } => search(&catalog, &term, ctx),
        CatalogCommand::Show { name } => show(&catalog, &name, ctx),
    }
}

fn in_category(product: &CatalogProduct, category: Option<&str>) -> bool {
    match category {
        Some(wanted) => product
            .category
            .as_deref()
            .map_or(false, |c| c.eq_ignore_ascii_case(wanted)),
        None => true,
    }
}

fn list(catalog: &PriceCatalog, category: Option<&str>, ctx: &Context) -> Result<()> {
    let products: Vec<&CatalogProduct> = catalog
        .all_products()
        .iter()
        .filter(|p| in_category(p, category))
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&format!("Catalog ({} products)", products.len()));
    let mut current_category: Option<&str> = None;
    for product in products {
        let heading = product.category.as_deref();
        if heading != current_category {
            if let Some(heading) = heading {
                ctx.output.info(heading);
            }
            current_category = heading;
        }
        let marker = if catalog.is_on_sale(&product.name) { " (sale)" } else { "" };
        ctx.output.table_row(
            &[
                &product.name,
                &catalog.format_price_display(&product.name),
                marker,
            ],
            &[40, 36, 6],
        );
    }
    Ok(())
}

fn price_of(catalog: &PriceCatalog, name: &str, variant: Option<&str>, ctx: &Context) -> Result<()> {
    let Some(amount) = catalog.get_price(name, variant) else {
        match (catalog.product(name), variant) {
            (None, _) => bail!("Unknown product: {}", name),
            (Some(_), Some(v)) => bail!("'{}' has no variant '{}'", name, v),
            (Some(_), None) => bail!("'{}' has no price", name),
        }
    };

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "name": name,
            "variant": variant,
            "price": amount.rounded_rupees(),
            "display": amount.display(),
        }));
        return Ok(());
    }

    println!("{}", price(&amount.display()));
    Ok(())
}

fn search(catalog: &PriceCatalog, term: &str, ctx: &Context) -> Result<()> {
    let hits = catalog.search(term);

    if ctx.output.is_json() {
        ctx.output.json(&hits);
        return Ok(());
    }

    if hits.is_empty() {
        ctx.output.warn(&format!("No products match '{}'", term));
        return Ok(());
    }
    for name in hits {
        ctx.output.list_item(name);
    }
    Ok(())
}

fn show(catalog: &PriceCatalog, name: &str, ctx: &Context) -> Result<()> {
    let Some(product) = catalog.product(name) else {
        bail!("Unknown product: {}", name);
    };

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    ctx.output.header(&product.name);
    if let Some(category) = &product.category {
        ctx.output.kv("category", category);
    }
    ctx.output.kv("display", &catalog.format_price_display(name));
    for variant in &product.variants {
        let mut line = format!("{:10} {}", variant.label, price(&variant.regular().display()));
        if let Some(sale) = variant.sale_price() {
            line.push_str(&format!("  sale {}", sale.display()));
            if let Some(discount) = catalog.sale_discount(name, &variant.label) {
                line.push_str(&format!(" {}", sale_badge(discount)));
            }
        }
        ctx.output.list_item(&line);
    }
    Ok(())
}
