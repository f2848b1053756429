//! Input ranges and batch rendering for a converter screen
//!
//! A size entered outside its chart clamps silently in the engine. For
//! display, every other unit then shows a placeholder rather than the
//! clamped number, so the user sees the input is out of range.

use serde::Serialize;
use uconv_core::{format_number, Unit};
use crate::convert::convert_to_all_units;
use crate::strategy::categories;

/// Shown instead of a number when the source value is out of range
pub const OUT_OF_RANGE: &str = "—";

/// Accepted input range for a unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InputConstraints {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl InputConstraints {
    const fn new(min: f64, max: f64, step: f64) -> Self {
        InputConstraints { min, max, step }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Input range for a unit of a size category. Other categories accept any
/// number.
pub fn input_constraints(category: &str, unit_id: &str) -> Option<InputConstraints> {
    let c = InputConstraints::new;
    match (category, unit_id) {
        (categories::MENS_SHOE_SIZE, "us_mens") => Some(c(4.5, 14.0, 0.5)),
        (categories::MENS_SHOE_SIZE, "uk") => Some(c(3.5, 13.0, 0.5)),
        (categories::MENS_SHOE_SIZE, "eu") => Some(c(36.5, 46.0, 0.5)),
        (categories::MENS_SHOE_SIZE, "china") => Some(c(36.0, 45.5, 0.5)),
        (categories::MENS_SHOE_SIZE, "cm") => Some(c(22.5, 32.0, 0.5)),
        (categories::MENS_SHOE_SIZE, "inches") => Some(c(8.86, 12.6, 0.01)),

        (categories::WOMENS_SHOE_SIZE, "us_womens") => Some(c(4.5, 14.0, 0.5)),
        (categories::WOMENS_SHOE_SIZE, "uk") => Some(c(2.0, 11.5, 0.5)),
        (categories::WOMENS_SHOE_SIZE, "eu") => Some(c(35.0, 46.0, 0.5)),
        (categories::WOMENS_SHOE_SIZE, "china") => Some(c(34.0, 44.0, 0.5)),
        (categories::WOMENS_SHOE_SIZE, "cm") => Some(c(21.5, 31.0, 0.5)),
        (categories::WOMENS_SHOE_SIZE, "inches") => Some(c(8.46, 12.2, 0.01)),

        (categories::RING_SIZE, "diameter_mm") => Some(c(12.0, 25.0, 0.1)),
        _ => None,
    }
}

/// One row of a converter screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedUnit {
    pub id: String,
    pub name: String,
    pub symbol: String,
    /// Raw converted value (non-finite values serialize as null)
    pub value: f64,
    /// Formatted value, or [`OUT_OF_RANGE`]
    pub display: String,
}

/// Convert `value` into every unit and format each row, in `units` order
pub fn render_all(value: f64, from: &Unit, units: &[Unit], category: &str) -> Vec<RenderedUnit> {
    let converted = convert_to_all_units(value, from, units, category);
    let out_of_range = input_constraints(category, &from.id).is_some_and(|c| !c.contains(value));

    units
        .iter()
        .map(|unit| {
            let raw = converted.get(&unit.id).copied().unwrap_or(0.0);
            let display = if out_of_range && unit.id != from.id {
                OUT_OF_RANGE.to_string()
            } else {
                format_number(raw)
            };
            RenderedUnit {
                id: unit.id.clone(),
                name: unit.name.clone(),
                symbol: unit.symbol.clone(),
                value: raw,
                display,
            }
        })
        .collect()
}
