//! Card variants and their badges.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::release::is_new_release;
use crate::theme::Theme;

/// Display mode of a shoe card, derived per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    NewRelease,
    OnSale,
    Default,
}

impl Variant {
    /// Classify a listing. A sale price wins over a recent release.
    pub fn classify(
        sale_price: Option<f64>,
        release_date: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
        window: Duration,
    ) -> Self {
        if sale_price.is_some() {
            Variant::OnSale
        } else if is_new_release(release_date, now, window) {
            Variant::NewRelease
        } else {
            Variant::Default
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::NewRelease => "new-release",
            Variant::OnSale => "on-sale",
            Variant::Default => "default",
        }
    }

    /// The badge for this variant; `Default` has none.
    pub fn badge(&self, theme: &Theme) -> Option<Badge> {
        match self {
            Variant::OnSale => Some(Badge {
                label: "Sale",
                accent: theme.colors.primary.clone(),
            }),
            Variant::NewRelease => Some(Badge {
                label: "Just Released!",
                accent: theme.colors.secondary.clone(),
            }),
            Variant::Default => None,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overlay label shown on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: &'static str,
    /// Background color.
    pub accent: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::release::default_window;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_sale_beats_new_release() {
        let recent = Some(now() - Duration::days(2));
        assert_eq!(
            Variant::classify(Some(9000.0), recent, now(), default_window()),
            Variant::OnSale
        );
    }

    #[test]
    fn test_sale_without_release_date() {
        assert_eq!(
            Variant::classify(Some(0.0), None, now(), default_window()),
            Variant::OnSale
        );
    }

    #[test]
    fn test_new_release() {
        let recent = Some(now() - Duration::days(5));
        assert_eq!(
            Variant::classify(None, recent, now(), default_window()),
            Variant::NewRelease
        );
    }

    #[test]
    fn test_default() {
        let old = Some(now() - Duration::days(400));
        assert_eq!(
            Variant::classify(None, old, now(), default_window()),
            Variant::Default
        );
        assert_eq!(
            Variant::classify(None, None, now(), default_window()),
            Variant::Default
        );
    }

    #[test]
    fn test_custom_window() {
        let released = Some(now() - Duration::days(10));
        assert_eq!(
            Variant::classify(None, released, now(), Duration::days(7)),
            Variant::Default
        );
    }

    #[test]
    fn test_badges() {
        let theme = Theme::default();

        let sale = Variant::OnSale.badge(&theme).unwrap();
        assert_eq!(sale.label, "Sale");
        assert_eq!(sale.accent, theme.colors.primary);

        let fresh = Variant::NewRelease.badge(&theme).unwrap();
        assert_eq!(fresh.label, "Just Released!");
        assert_eq!(fresh.accent, theme.colors.secondary);

        assert_ne!(sale.accent, fresh.accent);
        assert!(Variant::Default.badge(&theme).is_none());
    }

    #[test]
    fn test_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Variant::NewRelease).unwrap(),
            r#""new-release""#
        );
        assert_eq!(Variant::OnSale.to_string(), "on-sale");
    }
}
