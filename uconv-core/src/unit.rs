//! Unit descriptor with its linear scale factor

use std::fmt;
use serde::{Deserialize, Serialize};

/// A unit as it appears in the catalog.
///
/// `to_base` is "one of this unit equals `to_base` base units" and is only
/// meaningful for linearly scaled categories. Temperature, fuel consumption
/// and the size categories ignore it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    /// Identifier, unique within its category (e.g. "meter", "mpg_us")
    pub id: String,
    /// Display name (e.g. "Meter")
    pub name: String,
    /// Display symbol (e.g. "m")
    pub symbol: String,
    /// Linear factor to the category's base unit
    pub to_base: f64,
    /// Owning category, filled in by the catalog loader
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Unit {
    /// Create a unit that is not yet attached to a category
    pub fn new(id: &str, name: &str, symbol: &str, to_base: f64) -> Self {
        Unit {
            id: id.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            to_base,
            category: None,
        }
    }

    /// Builder: attach to a category
    pub fn in_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    /// True when the unit is attached to `category`, or not attached at all
    pub fn belongs_to(&self, category: &str) -> bool {
        self.category.as_deref().map_or(true, |c| c == category)
    }

    /// Scale is usable for linear conversion
    pub fn has_valid_scale(&self) -> bool {
        self.to_base.is_finite() && self.to_base > 0.0
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
