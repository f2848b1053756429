//! Unit catalog: per-category ordered unit lists
//!
//! Loaded once from a JSON document shaped
//! `{ "categoryId": [ { "id", "name", "symbol", "toBase" }, ... ] }`
//! and read-only afterwards. Category and unit order follow the document.

use std::collections::HashSet;
use std::path::Path;
use tracing::info;
use uconv_core::{ConvertError, Unit};
use crate::strategy::Strategy;

/// The catalog shipped with the crate
const BUILTIN_CATALOG: &str = include_str!("../data/units.json");

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    categories: Vec<(String, Vec<Unit>)>,
}

impl Catalog {
    /// Load the built-in catalog
    pub fn builtin() -> Result<Self, ConvertError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Load a catalog file from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConvertError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| ConvertError::CatalogRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&json)
    }

    /// Parse and validate a catalog document.
    ///
    /// Linear categories must have positive, finite scales; unit ids must be
    /// unique within their category. Every unit is tagged with its category.
    pub fn from_json(json: &str) -> Result<Self, ConvertError> {
        let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut categories = Vec::with_capacity(raw.len());

        for (category, units) in raw {
            let units: Vec<Unit> = serde_json::from_value(units)
                .map_err(|e| ConvertError::CatalogParse(format!("category '{}': {}", category, e)))?;
            validate_category(&category, &units)?;

            let units = units.into_iter().map(|u| u.in_category(&category)).collect();
            categories.push((category, units));
        }

        let catalog = Catalog { categories };
        info!(
            categories = catalog.categories.len(),
            units = catalog.unit_count(),
            "unit catalog loaded"
        );
        Ok(catalog)
    }

    /// Category ids in catalog order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|(id, _)| id.as_str())
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|(id, _)| id == category)
    }

    /// Units of a category in catalog order; empty for an unknown category
    pub fn units(&self, category: &str) -> &[Unit] {
        self.categories
            .iter()
            .find(|(id, _)| id == category)
            .map(|(_, units)| units.as_slice())
            .unwrap_or(&[])
    }

    pub fn unit(&self, category: &str, id: &str) -> Option<&Unit> {
        self.units(category).iter().find(|u| u.id == id)
    }

    /// Unit lookup that reports which part was missing
    pub fn try_unit(&self, category: &str, id: &str) -> Result<&Unit, ConvertError> {
        if !self.has_category(category) {
            return Err(ConvertError::UnknownCategory(category.to_string()));
        }
        self.unit(category, id).ok_or_else(|| ConvertError::UnknownUnit {
            category: category.to_string(),
            unit: id.to_string(),
        })
    }

    pub fn unit_count(&self) -> usize {
        self.categories.iter().map(|(_, units)| units.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn validate_category(category: &str, units: &[Unit]) -> Result<(), ConvertError> {
    let linear = Strategy::for_category(category).is_linear();
    let mut seen = HashSet::new();

    for unit in units {
        if !seen.insert(unit.id.as_str()) {
            return Err(ConvertError::DuplicateUnit {
                category: category.to_string(),
                unit: unit.id.clone(),
            });
        }
        if linear && !unit.has_valid_scale() {
            return Err(ConvertError::InvalidScale {
                category: category.to_string(),
                unit: unit.id.clone(),
                scale: unit.to_base,
            });
        }
    }
    Ok(())
}
