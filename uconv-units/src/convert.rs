//! Conversion dispatcher
//!
//! `convert` and `convert_to_all_units` are the lenient entry points: they
//! trust the caller to pass units of the stated category and never fail.
//! The `try_` variants check category membership and unit support first.

use std::collections::HashMap;
use uconv_core::{ConvertError, Unit};
use crate::strategy::{BaseConversion, Strategy};

/// Convert `value` from one unit to another within `category`
pub fn convert(value: f64, from: &Unit, to: &Unit, category: &str) -> f64 {
    let strategy = Strategy::for_category(category);
    let base = strategy.to_base(value, from);
    strategy.from_base(base, to)
}

/// Convert `value` into every unit of `units`, computing the base value once
pub fn convert_to_all_units(
    value: f64,
    from: &Unit,
    units: &[Unit],
    category: &str,
) -> HashMap<String, f64> {
    let strategy = Strategy::for_category(category);
    let base = strategy.to_base(value, from);

    units
        .iter()
        .map(|unit| (unit.id.clone(), strategy.from_base(base, unit)))
        .collect()
}

/// Like [`convert`], but rejects units from another category and units the
/// category's strategy would only fall back on.
pub fn try_convert(value: f64, from: &Unit, to: &Unit, category: &str) -> Result<f64, ConvertError> {
    let strategy = Strategy::for_category(category);
    check_unit(&strategy, from, category)?;
    check_unit(&strategy, to, category)?;
    Ok(convert(value, from, to, category))
}

/// Like [`convert_to_all_units`], with the checks of [`try_convert`] applied
/// to the source and every target unit.
pub fn try_convert_to_all_units(
    value: f64,
    from: &Unit,
    units: &[Unit],
    category: &str,
) -> Result<HashMap<String, f64>, ConvertError> {
    let strategy = Strategy::for_category(category);
    check_unit(&strategy, from, category)?;
    for unit in units {
        check_unit(&strategy, unit, category)?;
    }
    Ok(convert_to_all_units(value, from, units, category))
}

fn check_unit(strategy: &Strategy, unit: &Unit, category: &str) -> Result<(), ConvertError> {
    if !unit.belongs_to(category) {
        return Err(ConvertError::CategoryMismatch {
            unit: unit.id.clone(),
            expected: category.to_string(),
            found: unit.category.clone().unwrap_or_default(),
        });
    }
    if !strategy.knows(unit) {
        return Err(ConvertError::UnknownUnit {
            category: category.to_string(),
            unit: unit.id.clone(),
        });
    }
    Ok(())
}
