/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Serialized representations of [`Quantity`].

use std::convert::TryFrom;

use serde::{Deserialize, Serialize};

use crate::{Magnitude, Quantity, QuantityOptions, UnitError};

/// A quantity as a JSON object: its value in base units, the base
/// unit and, if they differ from the defaults, its display options.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct QuantityObject {
    pub value: Magnitude,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<QuantityOptions>,
}

/// Every form a quantity is accepted in.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum QuantityEnum {
    Number(f64),
    Text(String),
    Object(QuantityObject),
}

impl From<Quantity> for QuantityObject {
    fn from(val: Quantity) -> Self {
        QuantityObject {
            value: val.value(),
            unit: val.unit(),
            options: match val.options().is_default() {
                true => None,
                false => Some(val.options().clone()),
            },
        }
    }
}

impl TryFrom<QuantityObject> for Quantity {
    type Error = UnitError;
    fn try_from(val: QuantityObject) -> Result<Self, Self::Error> {
        let quantity = Quantity::new(val.value, &val.unit)?;
        match val.options {
            Some(mut options) => {
                let print_unit = options.print_unit.take();
                let quantity = quantity.with_options(options);
                match print_unit {
                    Some(unit) => quantity.with_print_unit(&unit),
                    None => Ok(quantity),
                }
            }
            None => Ok(quantity),
        }
    }
}

impl TryFrom<QuantityEnum> for Quantity {
    type Error = UnitError;
    fn try_from(val: QuantityEnum) -> Result<Self, Self::Error> {
        match val {
            QuantityEnum::Number(v) => Ok(Quantity::from(v)),
            QuantityEnum::Text(s) => Quantity::parse(&s),
            QuantityEnum::Object(q) => Quantity::try_from(q),
        }
    }
}
