//! Show how each listing in a catalog classifies.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sole_card::format::{format_price, pluralize};
use sole_card::{Catalog, ShoeCard, Variant};

use super::{clock_from_arg, InspectArgs};
use crate::context::Context;
use crate::output::variant_badge;

/// One inspected listing.
#[derive(Debug, Serialize)]
pub struct InspectRow {
    pub slug: String,
    pub variant: Variant,
    pub badge: Option<&'static str>,
    pub price: String,
    /// Sale price as the card shows it.
    pub sale_price: Option<String>,
    pub colors: String,
    pub href: String,
}

/// Classify every listing the way `card` would render it at `now`.
pub fn inspect_rows(catalog: &Catalog, card: &ShoeCard, now: DateTime<Utc>) -> Vec<InspectRow> {
    let options = card.options();
    catalog
        .iter()
        .map(|shoe| {
            let variant = card.variant(shoe, now);
            InspectRow {
                slug: shoe.slug.clone(),
                variant,
                badge: variant.badge(card.theme()).map(|b| b.label),
                price: shoe
                    .price
                    .map(|p| format_price(p, options.currency))
                    .unwrap_or_default(),
                sale_price: shoe
                    .sale_price
                    .map(|p| options.sale_price.text(p, options.currency)),
                colors: pluralize("Color", shoe.num_of_colors),
                href: shoe.href(),
            }
        })
        .collect()
}

/// Run the inspect command.
pub fn run(args: InspectArgs, ctx: &Context) -> Result<()> {
    let catalog = Catalog::load(&ctx.resolve_path(&args.catalog))?;
    let now = clock_from_arg(args.now.as_deref())?.now();
    let card = ShoeCard::new(&ctx.config.theme).with_options(ctx.config.card.options()?);
    let rows = inspect_rows(&catalog, &card, now);

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} listing(s) as of {}",
        rows.len(),
        now.format("%Y-%m-%d %H:%M UTC")
    ));
    let widths = [24, 12, 16, 10, 10, 10];
    ctx.output.table_row(
        &["SLUG", "VARIANT", "BADGE", "PRICE", "SALE", "COLORS"].map(String::from),
        &widths,
    );
    for row in &rows {
        ctx.output.table_row(
            &[
                row.slug.clone(),
                variant_badge(row.variant),
                row.badge.unwrap_or("-").to_string(),
                row.price.clone(),
                row.sale_price.clone().unwrap_or_else(|| "-".to_string()),
                row.colors.clone(),
            ],
            &widths,
        );
    }

    let on_sale = rows.iter().filter(|r| r.variant == Variant::OnSale).count();
    let fresh = rows.iter().filter(|r| r.variant == Variant::NewRelease).count();
    ctx.logger
        .info_builder("Inspected catalog")
        .field_i64("shoes", rows.len() as i64)
        .field_i64("on_sale", on_sale as i64)
        .field_i64("new_release", fresh as i64)
        .emit();

    Ok(())
}
