/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod base_unit;
pub mod dimension;
pub mod error;
pub mod format;
pub mod list;
pub mod magnitude;
pub mod options;
pub mod parser;
pub mod prefix;
pub mod quantity;
pub mod quantity_seed;
pub mod value;

pub mod quantity_as_object;

pub use base_unit::{BaseUnit, DerivedUnit, NamedUnit};
pub use dimension::Dimension;
pub use error::UnitError;
pub use magnitude::Magnitude;
pub use options::{QuantityOptions, DEFAULT_DIGITS};
pub use quantity::Quantity;
pub use quantity_seed::QuantitySeed;
pub use value::Value;

pub use prefix::{
    from_string, normalize, standardize, to_display_string, SiPrefix,
};
