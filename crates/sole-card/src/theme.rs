//! Design tokens: color palette and font-weight scale.
//!
//! Components take a `&Theme` and look colors up here instead of
//! hard-coding them.

use serde::{Deserialize, Serialize};

/// Storefront theme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub colors: Palette,
    pub weights: Weights,
}

/// Brand colors and gray scale, as CSS color values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub white: String,
    pub primary: String,
    pub secondary: String,
    pub gray: GrayScale,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            white: "hsl(0deg 0% 100%)".to_string(),
            primary: "hsl(340deg 65% 47%)".to_string(),
            secondary: "hsl(240deg 60% 63%)".to_string(),
            gray: GrayScale::default(),
        }
    }
}

/// Gray shades from lightest (100) to darkest (900).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrayScale {
    #[serde(rename = "100")]
    pub g100: String,
    #[serde(rename = "300")]
    pub g300: String,
    #[serde(rename = "500")]
    pub g500: String,
    #[serde(rename = "700")]
    pub g700: String,
    #[serde(rename = "900")]
    pub g900: String,
}

impl Default for GrayScale {
    fn default() -> Self {
        Self {
            g100: "hsl(185deg 5% 95%)".to_string(),
            g300: "hsl(190deg 5% 80%)".to_string(),
            g500: "hsl(196deg 4% 60%)".to_string(),
            g700: "hsl(220deg 5% 40%)".to_string(),
            g900: "hsl(220deg 3% 20%)".to_string(),
        }
    }
}

/// Font-weight scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub normal: u16,
    pub medium: u16,
    pub bold: u16,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            normal: 500,
            medium: 600,
            bold: 800,
        }
    }
}
