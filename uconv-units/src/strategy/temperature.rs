//! Affine temperature conversion through kelvin
//!
//! No clamping at absolute zero: negative kelvin passes straight through.

use tracing::debug;
use uconv_core::Unit;
use super::BaseConversion;

const CELSIUS_OFFSET: f64 = 273.15;
const RANKINE_OFFSET: f64 = 459.67;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Scale {
    fn from_id(id: &str) -> Option<Scale> {
        match id {
            "celsius" => Some(Scale::Celsius),
            "fahrenheit" => Some(Scale::Fahrenheit),
            "kelvin" => Some(Scale::Kelvin),
            _ => None,
        }
    }
}

/// Celsius, Fahrenheit and Kelvin; base is kelvin
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Temperature;

impl BaseConversion for Temperature {
    fn to_base(&self, value: f64, unit: &Unit) -> f64 {
        match Scale::from_id(&unit.id) {
            Some(Scale::Celsius) => value + CELSIUS_OFFSET,
            Some(Scale::Fahrenheit) => (value + RANKINE_OFFSET) * (5.0 / 9.0),
            Some(Scale::Kelvin) => value,
            None => {
                debug!(unit = %unit.id, "unknown temperature unit, passing value through");
                value
            }
        }
    }

    fn from_base(&self, kelvin: f64, unit: &Unit) -> f64 {
        match Scale::from_id(&unit.id) {
            Some(Scale::Celsius) => kelvin - CELSIUS_OFFSET,
            Some(Scale::Fahrenheit) => kelvin * (9.0 / 5.0) - RANKINE_OFFSET,
            Some(Scale::Kelvin) => kelvin,
            None => {
                debug!(unit = %unit.id, "unknown temperature unit, passing value through");
                kelvin
            }
        }
    }

    fn knows(&self, unit: &Unit) -> bool {
        Scale::from_id(&unit.id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(id: &str) -> Unit {
        Unit::new(id, id, id, 1.0)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {}, got {}", expected, actual);
    }

    #[test]
    fn test_to_kelvin() {
        assert_close(Temperature.to_base(0.0, &unit("celsius")), 273.15);
        assert_close(Temperature.to_base(32.0, &unit("fahrenheit")), 273.15);
        assert_close(Temperature.to_base(-459.67, &unit("fahrenheit")), 0.0);
        assert_eq!(Temperature.to_base(300.0, &unit("kelvin")), 300.0);
    }

    #[test]
    fn test_from_kelvin() {
        assert_close(Temperature.from_base(373.15, &unit("celsius")), 100.0);
        assert_close(Temperature.from_base(373.15, &unit("fahrenheit")), 212.0);
    }

    #[test]
    fn test_below_absolute_zero_not_clamped() {
        assert_close(Temperature.to_base(-300.0, &unit("celsius")), -26.85);
        assert_close(Temperature.from_base(-10.0, &unit("kelvin")), -10.0);
    }

    #[test]
    fn test_unknown_unit_passes_through() {
        let rankine = unit("rankine");
        assert_eq!(Temperature.to_base(491.67, &rankine), 491.67);
        assert_eq!(Temperature.from_base(12.0, &rankine), 12.0);
        assert!(!Temperature.knows(&rankine));
        assert!(Temperature.knows(&unit("kelvin")));
    }
}
