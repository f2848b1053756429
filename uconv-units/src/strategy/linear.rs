//! Linear scaling: `base = value * scale`

use uconv_core::Unit;
use super::BaseConversion;

/// Multiplies by the unit's catalog scale. The catalog loader rejects
/// non-positive or non-finite scales, so division here is always defined
/// for catalog units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Linear;

impl BaseConversion for Linear {
    fn to_base(&self, value: f64, unit: &Unit) -> f64 {
        value * unit.to_base
    }

    fn from_base(&self, base: f64, unit: &Unit) -> f64 {
        base / unit.to_base
    }

    fn knows(&self, unit: &Unit) -> bool {
        unit.has_valid_scale()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mile() -> Unit {
        Unit::new("mile", "Mile", "mi", 1609.344)
    }

    #[test]
    fn test_to_and_from_base() {
        assert_eq!(Linear.to_base(2.0, &mile()), 3218.688);
        assert_eq!(Linear.from_base(1609.344, &mile()), 1.0);
    }

    #[test]
    fn test_round_trip() {
        let unit = Unit::new("foot", "Foot", "ft", 0.3048);
        for v in [42.5, -3.25, 0.0, 1e12, 1e-12] {
            let back = Linear.from_base(Linear.to_base(v, &unit), &unit);
            assert!((back - v).abs() <= v.abs() * 1e-15, "{} -> {}", v, back);
        }
    }

    #[test]
    fn test_infinity_propagates() {
        assert_eq!(Linear.to_base(f64::INFINITY, &mile()), f64::INFINITY);
    }

    #[test]
    fn test_knows_requires_valid_scale() {
        assert!(Linear.knows(&mile()));
        assert!(!Linear.knows(&Unit::new("broken", "Broken", "?", 0.0)));
    }
}
