//! Render a catalog to HTML.

use std::collections::HashSet;

use anyhow::{Context as _, Result};
use sole_card::node::{Element, Node, Style};
use sole_card::{Catalog, ShoeCard};

use super::{clock_from_arg, RenderArgs};
use crate::context::Context;

/// Run the render command.
pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(&args.catalog);
    let catalog = Catalog::load(&path)?;
    let now = clock_from_arg(args.now.as_deref())?.now();

    ctx.logger
        .info_builder("Rendering catalog")
        .field("catalog", path.display().to_string())
        .field_i64("shoes", catalog.len() as i64)
        .field("now", now.to_rfc3339())
        .emit();

    for slug in duplicate_slugs(&catalog) {
        ctx.output.warn(&format!(
            "Slug '{}' appears more than once; detail links will collide",
            slug
        ));
    }

    let card = ShoeCard::new(&ctx.config.theme).with_options(ctx.config.card.options()?);
    let cards: Vec<Node> = catalog
        .iter()
        .map(|shoe| {
            let node = card.render(shoe, now);
            ctx.logger
                .debug_builder("Rendered card")
                .field("slug", shoe.slug.as_str())
                .field("variant", card.variant(shoe, now).as_str())
                .emit();
            node
        })
        .collect();

    let html = if args.page {
        render_page(cards)
    } else {
        cards.iter().map(Node::to_html).collect::<Vec<_>>().join("\n")
    };

    match args.out {
        Some(out) => {
            std::fs::write(&out, &html)
                .with_context(|| format!("Failed to write {}", out.display()))?;
            ctx.output.success(&format!(
                "Rendered {} card(s) to {}",
                catalog.len(),
                out.display()
            ));
        }
        None => println!("{}", html),
    }

    Ok(())
}

/// Slugs listed more than once, in first-seen order.
pub fn duplicate_slugs(catalog: &Catalog) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut dupes = Vec::new();
    for shoe in catalog.iter() {
        if !seen.insert(shoe.slug.as_str()) && !dupes.contains(&shoe.slug.as_str()) {
            dupes.push(shoe.slug.as_str());
        }
    }
    dupes
}

/// Lay cards out in a wrapping grid inside a standalone document.
pub fn render_page(cards: Vec<Node>) -> String {
    let grid = cards.into_iter().fold(
        Element::new("main").part("grid").style(
            Style::new()
                .set("display", "flex")
                .set("flex-wrap", "wrap")
                .set("gap", "32px"),
        ),
        |grid, card| {
            grid.child(
                Element::new("div")
                    .style(Style::new().set("flex", "1 1 340px"))
                    .child(card),
            )
        },
    );

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Sole</title>
</head>
<body>
{}
</body>
</html>
"#,
        Node::from(grid).to_html()
    )
}
