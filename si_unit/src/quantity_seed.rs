/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::convert::TryFrom;
use std::fmt;

use serde::de::{DeserializeSeed, Deserializer, Error, MapAccess, Visitor};

use super::quantity_as_object::QuantityObject;
use super::{Dimension, Magnitude, Quantity, QuantityOptions};

/// Deserialize a quantity of a fixed unit. Quantities of any other
/// unit are rejected.
pub struct QuantitySeed(pub Dimension);

impl QuantitySeed {
    fn check<E: Error>(&self, quantity: Quantity) -> Result<Quantity, E> {
        quantity.expect_dimension(self.0).map_err(E::custom)
    }
}

impl<'de> DeserializeSeed<'de> for QuantitySeed {
    type Value = Quantity;
    fn deserialize<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Visitor<'de> for QuantitySeed {
    type Value = Quantity;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a quantity in {}", self.0)
    }

    fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
        self.check(Quantity::from(v))
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        self.visit_f64(v as f64)
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        self.visit_f64(v as f64)
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        self.check(Quantity::parse(v).map_err(E::custom)?)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut value: Option<Magnitude> = None;
        let mut unit: Option<String> = None;
        let mut options: Option<QuantityOptions> = None;
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "value" => value = Some(map.next_value()?),
                "unit" => unit = Some(map.next_value()?),
                "options" => options = Some(map.next_value()?),
                _ => {
                    map.next_value::<serde::de::IgnoredAny>()?;
                }
            }
        }
        let object = QuantityObject {
            value: value.ok_or_else(|| A::Error::missing_field("value"))?,
            unit: unit.ok_or_else(|| A::Error::missing_field("unit"))?,
            options,
        };
        self.check(Quantity::try_from(object).map_err(A::Error::custom)?)
    }
}
