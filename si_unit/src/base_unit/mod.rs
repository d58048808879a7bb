/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod base_unit_trait;

pub mod base_units;
pub mod derived_units;

pub use base_unit_trait::NamedUnit;

pub use base_units::BaseUnit;
pub use derived_units::{DerivedUnit, OHM_ASCII};

/// Whether `symbol` names a unit accepted in a unit expression.
pub fn is_unit_symbol(symbol: &str) -> bool {
    BaseUnit::from_symbol(symbol).is_some()
        || DerivedUnit::from_symbol(symbol).is_some()
}
