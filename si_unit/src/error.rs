/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::dimension::Dimension;

#[derive(Serialize, Deserialize, Error, PartialEq, Clone, Debug)]
pub enum UnitError {
    #[error("Unit parse error: {0}")]
    ParseError(String),
    #[error("Unknown unit name specified: {0}")]
    UnknownUnit(String),
    #[error("Incompatible units: {0} <-> {1}")]
    Conversion(Dimension, Dimension),
    #[error("Expected a quantity in {expected}, got {found}")]
    UnexpectedDimension {
        expected: Dimension,
        found: Dimension,
    },
    #[error("Cannot compute the {1}-th power of unit {0}")]
    Pow(Dimension, f64),
    #[error("Unsupported unit operation: {0} * {1}")]
    Mul(Dimension, Dimension),
    #[error("Unsupported unit operation: {0} / {1}")]
    Div(Dimension, Dimension),
    #[error("Wrong data type: {0}")]
    TypeError(String),
}
