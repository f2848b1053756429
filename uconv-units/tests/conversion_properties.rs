//! Conversion properties checked against the built-in catalog.
//!
//! ## Test Organization
//!
//! 1. **Round Trips** - linear, temperature and fuel-consumption categories
//! 2. **Fixed Points** - known reference values
//! 3. **Fuel Consumption** - reciprocal cross-checks and the zero boundary
//! 4. **Size Charts** - clamping at both ends of every chart
//! 5. **Batch Consistency** - batch and single conversions agree
//! 6. **Formatting** - display rendering of results

use std::f64::consts::PI;
use uconv_units::tables::Column;
use uconv_units::{
    convert, convert_to_all_units, format_number, render_all, BaseConversion, Catalog, Strategy,
    Unit,
};

fn catalog() -> Catalog {
    Catalog::builtin().expect("built-in catalog should load")
}

fn unit<'a>(catalog: &'a Catalog, category: &str, id: &str) -> &'a Unit {
    catalog
        .unit(category, id)
        .unwrap_or_else(|| panic!("{}/{} missing from catalog", category, id))
}

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} ± {}, got {}",
        expected,
        tolerance,
        actual
    );
}

/// Relative comparison for values spanning many orders of magnitude
fn assert_rel_close(actual: f64, expected: f64, tolerance: f64) {
    let scale = expected.abs().max(1.0);
    assert_close(actual, expected, tolerance * scale);
}

// ============================================================================
// Round Trips
// ============================================================================

#[test]
fn test_linear_round_trip_all_pairs() {
    let catalog = catalog();
    let mut checked = 0;

    for category in catalog.categories() {
        if !Strategy::for_category(category).is_linear() {
            continue;
        }
        let units = catalog.units(category);
        for a in units {
            for b in units {
                let there = convert(42.5, a, b, category);
                let back = convert(there, b, a, category);
                assert_rel_close(back, 42.5, 1e-9);
                checked += 1;
            }
        }
    }
    assert!(checked > 0);
}

#[test]
fn test_linear_categories_count() {
    let catalog = catalog();
    let linear = catalog
        .categories()
        .filter(|c| Strategy::for_category(c).is_linear())
        .count();
    assert_eq!(linear, 24);
}

#[test]
fn test_temperature_round_trip() {
    let catalog = catalog();
    let c = unit(&catalog, "temperature", "celsius");
    let f = unit(&catalog, "temperature", "fahrenheit");
    let k = unit(&catalog, "temperature", "kelvin");

    for x in [-40.0, 0.0, 25.0, 100.0] {
        let back = convert(convert(x, c, f, "temperature"), f, c, "temperature");
        assert_close(back, x, 1e-9);
    }

    let back = convert(convert(300.0, k, f, "temperature"), f, k, "temperature");
    assert_close(back, 300.0, 1e-9);
}

#[test]
fn test_fuel_consumption_round_trip() {
    let catalog = catalog();
    let units = catalog.units("fuel-consumption");

    for x in [0.5, 7.8, 42.5, 250.0] {
        for a in units {
            for b in units {
                let back = convert(convert(x, a, b, "fuel-consumption"), b, a, "fuel-consumption");
                assert_rel_close(back, x, 1e-9);
            }
        }
    }
}

// ============================================================================
// Fixed Points
// ============================================================================

#[test]
fn test_temperature_fixed_points() {
    let catalog = catalog();
    let c = unit(&catalog, "temperature", "celsius");
    let f = unit(&catalog, "temperature", "fahrenheit");
    let k = unit(&catalog, "temperature", "kelvin");

    assert_close(convert(0.0, c, f, "temperature"), 32.0, 1e-9);
    assert_close(convert(100.0, c, f, "temperature"), 212.0, 1e-9);
    assert_close(convert(0.0, c, k, "temperature"), 273.15, 1e-9);
    assert_close(convert(-40.0, c, f, "temperature"), -40.0, 1e-9);
    // no clamping at absolute zero
    assert_close(convert(-300.0, c, k, "temperature"), -26.85, 1e-9);
}

#[test]
fn test_linear_fixed_points() {
    let catalog = catalog();

    let deg = unit(&catalog, "angle", "degree");
    let rad = unit(&catalog, "angle", "radian");
    assert_close(convert(180.0, deg, rad, "angle"), PI, 1e-12);

    let mile = unit(&catalog, "length", "mile");
    let km = unit(&catalog, "length", "kilometer");
    assert_close(convert(1.0, mile, km, "length"), 1.609344, 1e-12);

    let liter = unit(&catalog, "volume", "liter");
    let us = convert(1.0, unit(&catalog, "volume", "gallon_us"), liter, "volume");
    let uk = convert(1.0, unit(&catalog, "volume", "gallon_uk"), liter, "volume");
    assert_close(us, 3.78541, 1e-5);
    assert_close(uk, 4.54609, 1e-5);
    assert!(uk > us);

    let pb = unit(&catalog, "data", "petabyte");
    let byte = unit(&catalog, "data", "byte");
    assert_eq!(convert(1.0, pb, byte, "data"), 1_125_899_906_842_624.0);

    let lb = unit(&catalog, "mass", "pound");
    let kg = unit(&catalog, "mass", "kilogram");
    assert_close(convert(1.0, lb, kg, "mass"), 0.45359237, 1e-12);
}

#[test]
fn test_same_id_in_two_categories_converts_independently() {
    let catalog = catalog();
    let speed = convert(
        1.0,
        unit(&catalog, "speed", "knot"),
        unit(&catalog, "speed", "kilometer_per_hour"),
        "speed",
    );
    let wind = convert(
        1.0,
        unit(&catalog, "wind-speed", "knot"),
        unit(&catalog, "wind-speed", "kilometer_per_hour"),
        "wind-speed",
    );
    assert_close(speed, wind, 1e-9);
    assert_close(speed, 1.852, 1e-6);
}

// ============================================================================
// Fuel Consumption
// ============================================================================

#[test]
fn test_fuel_consumption_cross_checks() {
    let catalog = catalog();
    let l100 = unit(&catalog, "fuel-consumption", "liter_per_100km");
    let mpg_us = unit(&catalog, "fuel-consumption", "mpg_us");
    let kpl = unit(&catalog, "fuel-consumption", "km_per_liter");

    assert_close(convert(10.0, l100, mpg_us, "fuel-consumption"), 23.521458, 1e-6);
    assert_close(convert(30.0, mpg_us, l100, "fuel-consumption"), 7.840486, 1e-6);
    assert_close(convert(20.0, kpl, l100, "fuel-consumption"), 5.0, 1e-12);
}

#[test]
fn test_fuel_consumption_zero_boundary() {
    let catalog = catalog();
    let l100 = unit(&catalog, "fuel-consumption", "liter_per_100km");
    let kpl = unit(&catalog, "fuel-consumption", "km_per_liter");

    assert_eq!(convert(0.0, l100, kpl, "fuel-consumption"), 0.0);
    assert_eq!(convert(0.0, kpl, l100, "fuel-consumption"), f64::INFINITY);
}

// ============================================================================
// Size Charts
// ============================================================================

/// A value past either end of a column, in that column's own unit
fn beyond(column: Column, above: bool) -> f64 {
    match column {
        Column::Numeric(points) => {
            let edge = if above { points[points.len() - 1] } else { points[0] };
            if above { edge + 10.0 } else { edge - 10.0 }
        }
        // alphabet offsets: well past 'Z', or before 'A'
        Column::Letters(_) => if above { 40.0 } else { -5.0 },
    }
}

#[test]
fn test_size_charts_clamp_in_every_unit() {
    let catalog = catalog();

    for table in [
        &uconv_units::RING_SIZE,
        &uconv_units::MENS_SHOE_SIZE,
        &uconv_units::WOMENS_SHOE_SIZE,
    ] {
        let category = table.category;
        let strategy = Strategy::for_category(category);
        let units = catalog.units(category);
        let lo = table.base_values()[0];
        let hi = table.base_values()[table.base_values().len() - 1];

        for &(id, column) in table.columns() {
            let from = unit(&catalog, category, id);
            for (above, edge) in [(false, lo), (true, hi)] {
                let all = convert_to_all_units(beyond(column, above), from, units, category);
                for to in units {
                    assert_close(all[&to.id], strategy.from_base(edge, to), 1e-9);
                }
            }
        }
    }
}

#[test]
fn test_shoe_size_reference_rows() {
    let catalog = catalog();
    let cat = "mens-shoe-size";
    let us = unit(&catalog, cat, "us_mens");

    assert_close(convert(9.0, us, unit(&catalog, cat, "eu"), cat), 41.0, 1e-9);
    assert_close(convert(9.0, us, unit(&catalog, cat, "uk"), cat), 8.0, 1e-9);
    assert_close(convert(9.0, us, unit(&catalog, cat, "inches"), cat), 27.0 / 2.54, 1e-9);

    let cat = "womens-shoe-size";
    let us = unit(&catalog, cat, "us_womens");
    assert_close(convert(4.5, us, unit(&catalog, cat, "cm"), cat), 21.5, 1e-9);
}

#[test]
fn test_ring_us_to_uk_letter() {
    let catalog = catalog();
    let cat = "ring-size";
    let us = unit(&catalog, cat, "us");
    let uk = unit(&catalog, cat, "uk");

    let offset = convert(7.0, us, uk, cat);
    assert_eq!(offset, f64::from(b'N' - b'A'));
}

// ============================================================================
// Batch Consistency
// ============================================================================

#[test]
fn test_batch_matches_single_conversions() {
    let catalog = catalog();

    for category in catalog.categories() {
        let units = catalog.units(category);
        for from in units {
            for value in [0.0, 1.0, 7.25, 42.5] {
                let all = convert_to_all_units(value, from, units, category);
                assert_eq!(all.len(), units.len());
                for to in units {
                    let single = convert(value, from, to, category);
                    let batch = all[&to.id];
                    assert!(
                        batch == single || (batch.is_nan() && single.is_nan()),
                        "{}: {} {} -> {}: batch {} vs single {}",
                        category,
                        value,
                        from.id,
                        to.id,
                        batch,
                        single
                    );
                }
            }
        }
    }
}

#[test]
fn test_render_all_follows_catalog_order() {
    let catalog = catalog();
    let units = catalog.units("length");
    let rows = render_all(1.0, unit(&catalog, "length", "kilometer"), units, "length");

    let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
    let expected: Vec<_> = units.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, expected);
    assert_eq!(rows[0].display, "1000");
}

// ============================================================================
// Formatting
// ============================================================================

#[test]
fn test_formatter_behavior() {
    assert_eq!(format_number(1e9 + 1.0), "1.000000e+9");
    assert_eq!(format_number(1e-9), "1.000000e-9");
    assert_eq!(format_number(3.0), "3");
    assert_eq!(format_number(f64::INFINITY), "∞");
    assert_eq!(format_number(f64::NEG_INFINITY), "∞");
}

#[test]
fn test_formatter_on_conversion_results() {
    let catalog = catalog();
    let nm = unit(&catalog, "length", "nanometer");
    let m = unit(&catalog, "length", "meter");

    assert_eq!(format_number(convert(1.0, nm, m, "length")), "1.000000e-9");
    assert_eq!(format_number(convert(1.0, m, nm, "length")), "1000000000");
}
