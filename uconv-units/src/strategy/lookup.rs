//! Piecewise-linear lookup over a size chart
//!
//! Inputs between two reference points interpolate, inputs outside the chart
//! clamp to its first or last entry. Nothing here fails: an unknown unit id
//! converts to 0.

use tracing::debug;
use uconv_core::Unit;
use super::BaseConversion;
use crate::tables::{Column, SizeTable};

/// An input this close to a reference point is treated as that point
const MATCH_TOLERANCE: f64 = 0.01;

/// Size-chart strategy bound to one table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeLookup {
    table: &'static SizeTable,
}

impl SizeLookup {
    pub fn new(table: &'static SizeTable) -> Self {
        SizeLookup { table }
    }

    pub fn table(&self) -> &'static SizeTable {
        self.table
    }
}

impl BaseConversion for SizeLookup {
    fn to_base(&self, value: f64, unit: &Unit) -> f64 {
        let table = self.table;
        let id = unit.id.as_str();

        if id == table.base {
            return value;
        }
        if let Some(derived) = table.derived(id) {
            return value * derived.factor;
        }
        match table.column(id) {
            Some(Column::Numeric(points)) => points_to_base(value, points, table.base_values()),
            Some(Column::Letters(letters)) => letter_to_base(value, letters, table.base_values()),
            None => {
                debug!(category = table.category, unit = id, "unknown size unit, returning 0");
                0.0
            }
        }
    }

    fn from_base(&self, base: f64, unit: &Unit) -> f64 {
        let table = self.table;
        let id = unit.id.as_str();

        if id == table.base {
            return base;
        }
        if let Some(derived) = table.derived(id) {
            return base / derived.factor;
        }
        match table.column(id) {
            Some(Column::Numeric(points)) => base_to_points(base, table.base_values(), points),
            Some(Column::Letters(letters)) => base_to_letter(base, table.base_values(), letters),
            None => {
                debug!(category = table.category, unit = id, "unknown size unit, returning 0");
                0.0
            }
        }
    }

    fn knows(&self, unit: &Unit) -> bool {
        self.table.knows(&unit.id)
    }
}

fn lerp(x: f64, x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    let ratio = (x - x0) / (x1 - x0);
    y0 + ratio * (y1 - y0)
}

/// Unit column -> base column. `points` may contain flat runs; the strict
/// bracket test below never selects a zero-width segment.
fn points_to_base(value: f64, points: &[f64], base: &[f64]) -> f64 {
    for i in 0..points.len() {
        if (value - points[i]).abs() < MATCH_TOLERANCE {
            return base[i];
        }
        if i > 0 && value > points[i - 1] && value < points[i] {
            return lerp(value, points[i - 1], points[i], base[i - 1], base[i]);
        }
    }

    match (points.first(), points.last(), base.first(), base.last()) {
        (Some(&lo), _, Some(&base_lo), _) if value < lo => base_lo,
        (_, Some(&hi), _, Some(&base_hi)) if value > hi => base_hi,
        // NaN lands here
        _ => value,
    }
}

/// Base column -> unit column
fn base_to_points(value: f64, base: &[f64], points: &[f64]) -> f64 {
    let (Some(&lo), Some(&hi), Some(&first), Some(&last)) =
        (base.first(), base.last(), points.first(), points.last())
    else {
        return 0.0;
    };

    if value <= lo {
        return first;
    }
    if value >= hi {
        return last;
    }
    for i in 0..base.len() - 1 {
        if value >= base[i] && value <= base[i + 1] {
            return lerp(value, base[i], base[i + 1], points[i], points[i + 1]);
        }
    }
    first
}

fn letter_offset(letter: u8) -> f64 {
    f64::from(letter) - f64::from(b'A')
}

/// Alphabet offset (0 = 'A') -> base column. Offsets outside the chart clamp.
fn letter_to_base(value: f64, letters: &[u8], base: &[f64]) -> f64 {
    let (Some(&first), Some(&last), Some(&base_lo), Some(&base_hi)) =
        (letters.first(), letters.last(), base.first(), base.last())
    else {
        return 0.0;
    };
    if value.is_nan() {
        return value;
    }

    let offset = value.round();
    if offset < letter_offset(first) {
        return base_lo;
    }
    if offset > letter_offset(last) {
        return base_hi;
    }
    match letters.iter().position(|&l| letter_offset(l) == offset) {
        Some(i) => base[i],
        None => {
            debug!(offset, "letter size not in chart, returning 0");
            0.0
        }
    }
}

/// Base column -> alphabet offset of the nearest letter. Letters have no
/// fractional sizes, so this snaps instead of interpolating.
fn base_to_letter(value: f64, base: &[f64], letters: &[u8]) -> f64 {
    let (Some(&lo), Some(&hi), Some(&first), Some(&last)) =
        (base.first(), base.last(), letters.first(), letters.last())
    else {
        return 0.0;
    };

    if value <= lo {
        return letter_offset(first);
    }
    if value >= hi {
        return letter_offset(last);
    }
    for i in 0..base.len() - 1 {
        let (low, high) = (base[i], base[i + 1]);
        if value >= low && value <= high {
            let nearest = if value - low < high - value { i } else { i + 1 };
            return letter_offset(letters[nearest]);
        }
    }
    letter_offset(first)
}
