/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};

/// Significant digits shown for a quantity unless configured otherwise.
pub const DEFAULT_DIGITS: usize = 6;

/// Presentation settings of a quantity. These never take part in
/// arithmetic or comparisons.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct QuantityOptions {
    #[serde(default = "default_digits")]
    pub digits: usize,
    /// Use "u" and "Ohm" instead of "μ" and "Ω".
    #[serde(default = "default_false")]
    pub ascii_only: bool,
    /// Fixed number of decimals; overrides `digits`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,
    /// Always display in this (prefixed) unit, e.g. "mV".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub print_unit: Option<String>,
}

impl QuantityOptions {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl Default for QuantityOptions {
    fn default() -> Self {
        QuantityOptions {
            digits: DEFAULT_DIGITS,
            ascii_only: false,
            precision: None,
            print_unit: None,
        }
    }
}

const fn default_digits() -> usize {
    DEFAULT_DIGITS
}

const fn default_false() -> bool {
    false
}
