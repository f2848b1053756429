//! Reciprocal fuel-consumption conversion through L/100km
//!
//! Efficiency units (distance per volume) relate to consumption by
//! `base = k / value`. Zero is mapped to infinity before any division, in
//! both directions, so `0 km/L` reads as infinite consumption and `0 L/100km`
//! round-trips to `0` efficiency via `k / inf`.

use tracing::debug;
use uconv_core::Unit;
use super::BaseConversion;

/// km/L: 100 km / (L/100km)
const KM_PER_LITER: f64 = 100.0;
/// mi/L: 100 km expressed in miles
const MILE_PER_LITER: f64 = 62.13711922373339;
/// US MPG: 100 km in miles times US gallon in litres
const MPG_US: f64 = 235.214583;
/// UK MPG: 100 km in miles times imperial gallon in litres
const MPG_UK: f64 = 282.480936;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Rate {
    /// L/100km itself
    Consumption,
    /// distance per volume, `base = k / value`
    Efficiency(f64),
}

impl Rate {
    fn from_id(id: &str) -> Option<Rate> {
        match id {
            "liter_per_100km" => Some(Rate::Consumption),
            "km_per_liter" => Some(Rate::Efficiency(KM_PER_LITER)),
            "mile_per_liter" => Some(Rate::Efficiency(MILE_PER_LITER)),
            "mpg_us" => Some(Rate::Efficiency(MPG_US)),
            "mpg_uk" => Some(Rate::Efficiency(MPG_UK)),
            _ => None,
        }
    }

    /// The reciprocal map is its own inverse, so one function serves both
    /// directions.
    fn apply(self, value: f64) -> f64 {
        if value == 0.0 {
            return f64::INFINITY;
        }
        match self {
            Rate::Consumption => value,
            Rate::Efficiency(k) => k / value,
        }
    }
}

/// L/100km, km/L, mi/L and US/UK MPG; base is L/100km
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FuelConsumption;

impl FuelConsumption {
    fn convert(value: f64, unit: &Unit) -> f64 {
        match Rate::from_id(&unit.id) {
            Some(rate) => rate.apply(value),
            None if value == 0.0 => f64::INFINITY,
            None => {
                debug!(unit = %unit.id, "unknown fuel-consumption unit, passing value through");
                value
            }
        }
    }
}

impl BaseConversion for FuelConsumption {
    fn to_base(&self, value: f64, unit: &Unit) -> f64 {
        Self::convert(value, unit)
    }

    fn from_base(&self, base: f64, unit: &Unit) -> f64 {
        Self::convert(base, unit)
    }

    fn knows(&self, unit: &Unit) -> bool {
        Rate::from_id(&unit.id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(id: &str) -> Unit {
        Unit::new(id, id, id, 1.0)
    }

    #[test]
    fn test_efficiency_to_consumption() {
        assert_eq!(FuelConsumption.to_base(20.0, &unit("km_per_liter")), 5.0);
        assert!((FuelConsumption.to_base(30.0, &unit("mpg_us")) - 7.840486).abs() < 1e-6);
        assert_eq!(FuelConsumption.to_base(8.5, &unit("liter_per_100km")), 8.5);
    }

    #[test]
    fn test_consumption_to_efficiency() {
        let base = 10.0;
        assert!((FuelConsumption.from_base(base, &unit("mpg_us")) - 23.521458).abs() < 1e-6);
        assert!((FuelConsumption.from_base(base, &unit("mpg_uk")) - 28.248094).abs() < 1e-6);
        assert!((FuelConsumption.from_base(base, &unit("mile_per_liter")) - 6.213712).abs() < 1e-6);
    }

    #[test]
    fn test_zero_maps_to_infinity_both_ways() {
        for id in ["liter_per_100km", "km_per_liter", "mpg_us", "mpg_uk", "mile_per_liter"] {
            assert_eq!(FuelConsumption.to_base(0.0, &unit(id)), f64::INFINITY, "{}", id);
            assert_eq!(FuelConsumption.from_base(0.0, &unit(id)), f64::INFINITY, "{}", id);
        }
    }

    #[test]
    fn test_infinity_to_efficiency_is_zero() {
        assert_eq!(FuelConsumption.from_base(f64::INFINITY, &unit("km_per_liter")), 0.0);
    }

    #[test]
    fn test_unknown_unit() {
        let gph = unit("gallons_per_hour");
        assert_eq!(FuelConsumption.to_base(4.0, &gph), 4.0);
        assert_eq!(FuelConsumption.to_base(0.0, &gph), f64::INFINITY);
        assert!(!FuelConsumption.knows(&gph));
    }
}
