//! Shoe listing card for the Sole storefront.
//!
//! A card is built in three steps:
//!
//! - classify the listing into a [`Variant`] (on sale, new release or default)
//! - assemble a [`Node`] display tree styled from a shared [`Theme`]
//! - hand the tree to the host, usually as HTML via [`Node::to_html`]
//!
//! # Example
//!
//! ```
//! use chrono::{Duration, Utc};
//! use sole_card::prelude::*;
//!
//! let theme = Theme::default();
//! let shoe = ShoeCardInput {
//!     slug: "air-jordan-1".to_string(),
//!     name: "Air Jordan 1".to_string(),
//!     image_src: "/assets/aj1.jpg".to_string(),
//!     price: Some(16500.0),
//!     sale_price: Some(12000.0),
//!     release_date: Some(Utc::now() - Duration::days(730)),
//!     num_of_colors: 3,
//! };
//!
//! let card = ShoeCard::new(&theme);
//! let now = Utc::now();
//! assert_eq!(card.variant(&shoe, now), Variant::OnSale);
//!
//! let tree = card.render(&shoe, now);
//! assert_eq!(tree.find_part("badge").unwrap().text_content(), "Sale");
//! ```

pub mod card;
pub mod catalog;
mod de;
pub mod error;
pub mod format;
pub mod money;
pub mod node;
pub mod release;
pub mod theme;
pub mod variant;

pub use card::{CardOptions, SalePriceDisplay, ShoeCard, ShoeCardInput};
pub use catalog::Catalog;
pub use error::CatalogError;
pub use money::{Currency, Money};
pub use node::{Element, Node, Style};
pub use theme::Theme;
pub use variant::{Badge, Variant};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::card::{CardOptions, SalePriceDisplay, ShoeCard, ShoeCardInput};
    pub use crate::catalog::Catalog;
    pub use crate::error::CatalogError;
    pub use crate::format::{format_price, pluralize};
    pub use crate::money::{Currency, Money};
    pub use crate::node::{Element, Node, Style};
    pub use crate::release::{is_new_release, Clock, FixedClock, SystemClock};
    pub use crate::theme::Theme;
    pub use crate::variant::{Badge, Variant};
}
