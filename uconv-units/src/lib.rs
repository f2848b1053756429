//! uconv Units - Category-scoped unit conversion
//!
//! Converts a number between two units of the same category by way of the
//! category's base quantity. Most categories are a pure scale factor; a few
//! need their own arithmetic:
//!
//! - Linear (length, area, volume, mass, pressure, speed, data, ...)
//! - Temperature (affine, through kelvin)
//! - Fuel consumption (reciprocal, through L/100km)
//! - Ring size, men's and women's shoe size (chart lookup with interpolation)
//!
//! The unit catalog is plain data (see [`Catalog`]); the conversion rules
//! live in [`strategy`] and [`tables`].

mod catalog;
mod convert;
mod display;
pub mod strategy;
pub mod tables;

pub use catalog::Catalog;
pub use convert::{convert, convert_to_all_units, try_convert, try_convert_to_all_units};
pub use display::{input_constraints, render_all, InputConstraints, RenderedUnit, OUT_OF_RANGE};
pub use strategy::{BaseConversion, Strategy};
pub use tables::{SizeTable, MENS_SHOE_SIZE, RING_SIZE, WOMENS_SHOE_SIZE};

pub use uconv_core::{format_number, ConvertError, ErrorReport, Unit};
