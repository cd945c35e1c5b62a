use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Visual rendering variant of a badge.
///
/// `Flat` is what the badge server renders when no style is requested, so it
/// never needs to be encoded in a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeStyle {
    #[default]
    Flat,
    FlatSquare,
    ForTheBadge,
    Plastic,
    Social,
}

/// Styles offered in the style selector, in display order.
pub const ADVERTISED_STYLES: &[BadgeStyle] = &[
    BadgeStyle::Flat,
    BadgeStyle::FlatSquare,
    BadgeStyle::ForTheBadge,
    BadgeStyle::Plastic,
    BadgeStyle::Social,
];

impl BadgeStyle {
    /// Key used in the `style` query parameter and as the select value.
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeStyle::Flat => "flat",
            BadgeStyle::FlatSquare => "flat-square",
            BadgeStyle::ForTheBadge => "for-the-badge",
            BadgeStyle::Plastic => "plastic",
            BadgeStyle::Social => "social",
        }
    }

    pub fn is_default(&self) -> bool {
        *self == BadgeStyle::default()
    }

    /// The style to encode in a badge URL, or `None` for the implicit default.
    pub fn url_param(&self) -> Option<BadgeStyle> {
        if self.is_default() {
            None
        } else {
            Some(*self)
        }
    }
}

impl fmt::Display for BadgeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BadgeStyle {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ADVERTISED_STYLES
            .iter()
            .copied()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| AppError::invalid_style(format!("unknown badge style '{s}'")))
    }
}
