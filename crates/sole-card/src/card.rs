//! The shoe listing card.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::de::{lenient_amount, lenient_date};
use crate::format::{format_price, pluralize};
use crate::money::Currency;
use crate::node::{spacer, Element, Node, Style};
use crate::release::{default_window, Clock};
use crate::theme::Theme;
use crate::variant::{Badge, Variant};

/// Gap between the image region and the text rows, in pixels.
pub const IMAGE_GAP_PX: u32 = 12;

/// Listing data for one shoe, as supplied by the page rendering the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoeCardInput {
    pub slug: String,
    pub name: String,
    pub image_src: String,
    /// Base price in cents.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub price: Option<f64>,
    /// Sale price as supplied; present means on sale.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub sale_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub release_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub num_of_colors: i64,
}

impl ShoeCardInput {
    /// Detail page path for this shoe.
    pub fn href(&self) -> String {
        format!("/shoe/{}", self.slug)
    }

    pub fn is_on_sale(&self) -> bool {
        self.sale_price.is_some()
    }
}

/// How the sale price is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalePriceDisplay {
    /// The bare number, exactly as supplied.
    #[default]
    Raw,
    /// Through `format_price`, like the base price.
    Formatted,
}

impl SalePriceDisplay {
    /// Text for a sale amount under this mode.
    pub fn text(&self, amount: f64, currency: Currency) -> String {
        match self {
            SalePriceDisplay::Raw => amount.to_string(),
            SalePriceDisplay::Formatted => format_price(amount, currency),
        }
    }
}

/// Rendering knobs shared by every card on a page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardOptions {
    pub new_release_window: Duration,
    pub sale_price: SalePriceDisplay,
    pub currency: Currency,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            new_release_window: default_window(),
            sale_price: SalePriceDisplay::Raw,
            currency: Currency::USD,
        }
    }
}

/// Renders shoe listings into display trees.
#[derive(Debug, Clone)]
pub struct ShoeCard<'a> {
    theme: &'a Theme,
    options: CardOptions,
}

impl<'a> ShoeCard<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            options: CardOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CardOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &CardOptions {
        &self.options
    }

    pub fn theme(&self) -> &'a Theme {
        self.theme
    }

    /// Variant of `input` at `now`.
    pub fn variant(&self, input: &ShoeCardInput, now: DateTime<Utc>) -> Variant {
        Variant::classify(
            input.sale_price,
            input.release_date,
            now,
            self.options.new_release_window,
        )
    }

    /// Render using the time reported by `clock`.
    pub fn render_at(&self, input: &ShoeCardInput, clock: &dyn Clock) -> Node {
        self.render(input, clock.now())
    }

    /// Build the display tree for `input` as seen at `now`.
    pub fn render(&self, input: &ShoeCardInput, now: DateTime<Utc>) -> Node {
        let variant = self.variant(input, now);
        let colors = &self.theme.colors;
        let weights = &self.theme.weights;

        let image = Element::new("div")
            .part("image-region")
            .style(Style::new().set("position", "relative"))
            .child(
                Element::new("img")
                    .part("image")
                    .attr("alt", "")
                    .attr("src", input.image_src.as_str())
                    .style(
                        Style::new()
                            .set("height", "312px")
                            .set("width", "340px")
                            .set("border-radius", "16px 16px 4px 4px"),
                    ),
            );

        let price_text = input
            .price
            .map(|cents| format_price(cents, self.options.currency))
            .unwrap_or_default();
        let price = Element::new("span")
            .part("price")
            .style(Style::new().set(
                "text-decoration",
                if input.is_on_sale() { "line-through" } else { "revert" },
            ))
            .text(price_text);

        let sale_price = input.sale_price.map(|amount| {
            let text = self.options.sale_price.text(amount, self.options.currency);
            Element::new("span")
                .part("sale-price")
                .style(
                    Style::new()
                        .set("font-weight", weights.medium.to_string())
                        .set("color", colors.primary.as_str())
                        .set("position", "absolute")
                        .set("right", "0px")
                        .set("bottom", "6px"),
                )
                .text(text)
        });

        let name_row = row()
            .child(
                Element::new("h3")
                    .part("name")
                    .style(
                        Style::new()
                            .set("font-weight", weights.medium.to_string())
                            .set("color", colors.gray.g900.as_str()),
                    )
                    .text(input.name.as_str()),
            )
            .child(price)
            .child_opt(sale_price);

        let color_row = row().child(
            Element::new("p")
                .part("colors")
                .style(Style::new().set("color", colors.gray.g700.as_str()))
                .text(pluralize("Color", input.num_of_colors)),
        );

        let wrapper = Element::new("article")
            .part("card")
            .attr("data-variant", variant.as_str())
            .style(Style::new().set("position", "relative"))
            .child(image)
            .child(spacer(IMAGE_GAP_PX))
            .child(name_row)
            .child(color_row)
            .child_opt(variant.badge(self.theme).map(|b| self.badge(&b)));

        Element::new("a")
            .part("link")
            .attr("href", input.href())
            .style(
                Style::new()
                    .set("text-decoration", "none")
                    .set("color", "inherit"),
            )
            .child(wrapper)
            .into()
    }

    fn badge(&self, badge: &Badge) -> Element {
        Element::new("div")
            .part("badge")
            .style(
                Style::new()
                    .set("padding", "7px 9px 9px 10px")
                    .set("font-size", "14px")
                    .set("font-weight", "700")
                    .set("line-height", "16.44px")
                    .set("position", "absolute")
                    .set("top", "12px")
                    .set("text-transform", "capitalize")
                    .set("right", "-4px")
                    .set("background-color", badge.accent.as_str())
                    .set("color", self.theme.colors.white.as_str())
                    .set("border-radius", "2px"),
            )
            .text(badge.label)
    }
}

fn row() -> Element {
    Element::new("div").part("row").style(
        Style::new()
            .set("font-size", "1rem")
            .set("display", "flex")
            .set("justify-content", "space-between"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::release::FixedClock;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    fn input() -> ShoeCardInput {
        ShoeCardInput {
            slug: "tail-waggers".to_string(),
            name: "Tail-Waggers".to_string(),
            image_src: "/assets/tail-waggers.jpg".to_string(),
            price: Some(16500.0),
            sale_price: None,
            release_date: Some(now() - Duration::days(200)),
            num_of_colors: 2,
        }
    }

    #[test]
    fn test_link_and_image() {
        let theme = Theme::default();
        let node = ShoeCard::new(&theme).render(&input(), now());

        let link = node.find_part("link").unwrap();
        assert_eq!(link.tag, "a");
        assert_eq!(link.get_attr("href"), Some("/shoe/tail-waggers"));

        let img = node.find_part("image").unwrap();
        assert_eq!(img.get_attr("src"), Some("/assets/tail-waggers.jpg"));
        assert_eq!(img.get_attr("alt"), Some(""));
    }

    #[test]
    fn test_regular_price_not_struck() {
        let theme = Theme::default();
        let node = ShoeCard::new(&theme).render(&input(), now());

        let price = node.find_part("price").unwrap();
        assert_eq!(price.text_content(), "$165");
        assert_eq!(price.style.get("text-decoration"), Some("revert"));
        assert!(node.find_part("sale-price").is_none());
    }

    #[test]
    fn test_sale_price_raw_by_default() {
        let theme = Theme::default();
        let shoe = ShoeCardInput {
            sale_price: Some(12000.0),
            ..input()
        };
        let node = ShoeCard::new(&theme).render(&shoe, now());

        let price = node.find_part("price").unwrap();
        assert_eq!(price.style.get("text-decoration"), Some("line-through"));
        assert_eq!(price.text_content(), "$165");

        let sale = node.find_part("sale-price").unwrap();
        assert_eq!(sale.text_content(), "12000");
        assert_eq!(sale.style.get("color"), Some(theme.colors.primary.as_str()));
    }

    #[test]
    fn test_sale_price_formatted_option() {
        let theme = Theme::default();
        let shoe = ShoeCardInput {
            sale_price: Some(12000.0),
            ..input()
        };
        let card = ShoeCard::new(&theme).with_options(CardOptions {
            sale_price: SalePriceDisplay::Formatted,
            ..CardOptions::default()
        });
        let node = card.render(&shoe, now());
        assert_eq!(node.find_part("sale-price").unwrap().text_content(), "$120");
    }

    #[test]
    fn test_fractional_sale_price_kept_verbatim() {
        let theme = Theme::default();
        let shoe: ShoeCardInput = serde_json::from_str(
            r#"{
                "slug": "half-off",
                "name": "Half Off",
                "imageSrc": "/half.jpg",
                "price": 16500,
                "salePrice": 99.5,
                "numOfColors": 2
            }"#,
        )
        .unwrap();

        let node = ShoeCard::new(&theme).render(&shoe, now());
        assert_eq!(node.find_part("sale-price").unwrap().text_content(), "99.5");
    }

    #[test]
    fn test_sale_price_display_modes() {
        assert_eq!(SalePriceDisplay::Raw.text(120.0, Currency::USD), "120");
        assert_eq!(SalePriceDisplay::Raw.text(129.99, Currency::USD), "129.99");
        assert_eq!(SalePriceDisplay::Formatted.text(12999.0, Currency::USD), "$129.99");
    }

    #[test]
    fn test_missing_price_renders_blank() {
        let theme = Theme::default();
        let shoe = ShoeCardInput {
            price: None,
            ..input()
        };
        let node = ShoeCard::new(&theme).render(&shoe, now());
        assert_eq!(node.find_part("price").unwrap().text_content(), "");
    }

    #[test]
    fn test_spacer_between_image_and_rows() {
        let theme = Theme::default();
        let node = ShoeCard::new(&theme).render(&input(), now());
        let card = node.find_part("card").unwrap();

        let parts: Vec<_> = card
            .children
            .iter()
            .filter_map(|c| match c {
                Node::Element(el) => el.part,
                Node::Text(_) => None,
            })
            .collect();
        assert_eq!(parts, vec!["image-region", "spacer", "row", "row"]);
    }

    #[test]
    fn test_badge_colors_follow_theme() {
        let mut theme = Theme::default();
        theme.colors.secondary = "teal".to_string();
        let shoe = ShoeCardInput {
            release_date: Some(now() - Duration::days(1)),
            ..input()
        };
        let node = ShoeCard::new(&theme).render(&shoe, now());

        let badge = node.find_part("badge").unwrap();
        assert_eq!(badge.text_content(), "Just Released!");
        assert_eq!(badge.style.get("background-color"), Some("teal"));
    }

    #[test]
    fn test_render_at_uses_clock() {
        let theme = Theme::default();
        let shoe = ShoeCardInput {
            release_date: Some(now() - Duration::days(3)),
            ..input()
        };
        let card = ShoeCard::new(&theme);

        let fresh = card.render_at(&shoe, &FixedClock(now()));
        assert!(fresh.find_part("badge").is_some());

        let later = card.render_at(&shoe, &FixedClock(now() + Duration::days(60)));
        assert!(later.find_part("badge").is_none());
    }

    #[test]
    fn test_render_is_idempotent() {
        let theme = Theme::default();
        let card = ShoeCard::new(&theme);
        assert_eq!(card.render(&input(), now()), card.render(&input(), now()));
    }

    #[test]
    fn test_html_output() {
        let theme = Theme::default();
        let html = ShoeCard::new(&theme).render(&input(), now()).to_html();
        assert!(html.starts_with(r#"<a data-part="link" href="/shoe/tail-waggers""#));
        assert!(html.contains(">2 Colors</p>"));
        assert!(html.ends_with("</article></a>"));
    }

    #[test]
    fn test_deserialize_camel_case() {
        let shoe: ShoeCardInput = serde_json::from_str(
            r#"{
                "slug": "hi-tops",
                "name": "Hi-Tops",
                "imageSrc": "/hi.jpg",
                "price": 8500,
                "salePrice": null,
                "releaseDate": "2024-05-30",
                "numOfColors": 1
            }"#,
        )
        .unwrap();

        assert_eq!(shoe.price, Some(8500.0));
        assert_eq!(shoe.sale_price, None);
        assert_eq!(shoe.num_of_colors, 1);
        assert_eq!(shoe.href(), "/shoe/hi-tops");
    }
}
