//! Base-normalization strategies
//!
//! Every category converts through a single base quantity. Which arithmetic
//! gets there is decided by the category id alone:
//!
//! | category           | strategy          | base             |
//! |--------------------|-------------------|------------------|
//! | temperature        | affine            | kelvin           |
//! | fuel-consumption   | reciprocal        | L/100km          |
//! | ring-size          | table lookup      | diameter in mm   |
//! | mens-shoe-size     | table lookup      | foot length, cm  |
//! | womens-shoe-size   | table lookup      | foot length, cm  |
//! | anything else      | linear            | catalog-defined  |

mod linear;
mod temperature;
mod fuel;
mod lookup;

pub use linear::Linear;
pub use temperature::Temperature;
pub use fuel::FuelConsumption;
pub use lookup::SizeLookup;

use uconv_core::Unit;
use crate::tables;

/// Category ids with a non-linear strategy
pub mod categories {
    pub const TEMPERATURE: &str = "temperature";
    pub const FUEL_CONSUMPTION: &str = "fuel-consumption";
    pub const RING_SIZE: &str = "ring-size";
    pub const MENS_SHOE_SIZE: &str = "mens-shoe-size";
    pub const WOMENS_SHOE_SIZE: &str = "womens-shoe-size";
}

/// A pair of conversions between a unit and its category's base quantity
pub trait BaseConversion {
    /// Value in `unit` -> base quantity
    fn to_base(&self, value: f64, unit: &Unit) -> f64;

    /// Base quantity -> value in `unit`
    fn from_base(&self, base: f64, unit: &Unit) -> f64;

    /// Whether `unit` is one this strategy actually converts, rather than
    /// one it would silently fall back on
    fn knows(&self, unit: &Unit) -> bool;
}

/// The closed set of strategies
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    Linear(Linear),
    Temperature(Temperature),
    FuelConsumption(FuelConsumption),
    SizeLookup(SizeLookup),
}

impl Strategy {
    /// Select the strategy for a category id. Unlisted ids are linear.
    pub fn for_category(category: &str) -> Strategy {
        match category {
            categories::TEMPERATURE => Strategy::Temperature(Temperature),
            categories::FUEL_CONSUMPTION => Strategy::FuelConsumption(FuelConsumption),
            other => match tables::table_for(other) {
                Some(table) => Strategy::SizeLookup(SizeLookup::new(table)),
                None => Strategy::Linear(Linear),
            },
        }
    }

    /// Short name of the strategy family
    pub fn kind(&self) -> &'static str {
        match self {
            Strategy::Linear(_) => "linear",
            Strategy::Temperature(_) => "affine",
            Strategy::FuelConsumption(_) => "reciprocal",
            Strategy::SizeLookup(_) => "lookup",
        }
    }

    pub fn is_linear(&self) -> bool {
        matches!(self, Strategy::Linear(_))
    }
}

impl BaseConversion for Strategy {
    fn to_base(&self, value: f64, unit: &Unit) -> f64 {
        match self {
            Strategy::Linear(s) => s.to_base(value, unit),
            Strategy::Temperature(s) => s.to_base(value, unit),
            Strategy::FuelConsumption(s) => s.to_base(value, unit),
            Strategy::SizeLookup(s) => s.to_base(value, unit),
        }
    }

    fn from_base(&self, base: f64, unit: &Unit) -> f64 {
        match self {
            Strategy::Linear(s) => s.from_base(base, unit),
            Strategy::Temperature(s) => s.from_base(base, unit),
            Strategy::FuelConsumption(s) => s.from_base(base, unit),
            Strategy::SizeLookup(s) => s.from_base(base, unit),
        }
    }

    fn knows(&self, unit: &Unit) -> bool {
        match self {
            Strategy::Linear(s) => s.knows(unit),
            Strategy::Temperature(s) => s.knows(unit),
            Strategy::FuelConsumption(s) => s.knows(unit),
            Strategy::SizeLookup(s) => s.knows(unit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_category() {
        assert_eq!(Strategy::for_category("temperature").kind(), "affine");
        assert_eq!(Strategy::for_category("fuel-consumption").kind(), "reciprocal");
        assert_eq!(Strategy::for_category("ring-size").kind(), "lookup");
        assert_eq!(Strategy::for_category("mens-shoe-size").kind(), "lookup");
        assert_eq!(Strategy::for_category("womens-shoe-size").kind(), "lookup");
        assert_eq!(Strategy::for_category("length").kind(), "linear");
        assert_eq!(Strategy::for_category("no-such-category").kind(), "linear");
    }

    #[test]
    fn test_lookup_strategy_carries_its_table() {
        match Strategy::for_category("womens-shoe-size") {
            Strategy::SizeLookup(s) => assert_eq!(s.table().category, "womens-shoe-size"),
            other => panic!("Expected SizeLookup, got {:?}", other),
        }
    }

    #[test]
    fn test_is_linear() {
        assert!(Strategy::for_category("data").is_linear());
        assert!(!Strategy::for_category("temperature").is_linear());
    }
}
