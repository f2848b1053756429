//! uconv Core - Fundamental types
//!
//! This crate provides the core types used throughout uconv:
//! - `Unit`: a catalog unit descriptor with its linear scale
//! - `ConvertError` / `ErrorReport`: typed and structured errors
//! - `format_number`: display rendering of conversion results

mod unit;
mod error;
mod format;

pub use unit::Unit;
pub use error::{ConvertError, ErrorReport, codes};
pub use format::{format_number, INFINITY_SYMBOL};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Unit, ConvertError, ErrorReport, format_number};
    pub use crate::error::codes;
}
