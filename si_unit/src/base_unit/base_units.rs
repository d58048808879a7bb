/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::NamedUnit;

/// The seven SI base units. Each one is tagged with a unique prime;
/// compound units are products and quotients of these primes.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    PartialOrd,
    Eq,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum BaseUnit {
    Meter,
    Kilogram,
    Second,
    Ampere,
    Kelvin,
    Mole,
    Candela,
}

static BASE_UNITS: [BaseUnit; 7] = [
    BaseUnit::Meter,
    BaseUnit::Kilogram,
    BaseUnit::Second,
    BaseUnit::Ampere,
    BaseUnit::Kelvin,
    BaseUnit::Mole,
    BaseUnit::Candela,
];

impl BaseUnit {
    /// The prime representing this base unit.
    pub const fn prime(&self) -> u64 {
        match self {
            BaseUnit::Meter => 2,
            BaseUnit::Kilogram => 3,
            BaseUnit::Second => 5,
            BaseUnit::Ampere => 7,
            BaseUnit::Kelvin => 11,
            BaseUnit::Mole => 13,
            BaseUnit::Candela => 17,
        }
    }

    /// Name of the physical quantity measured in this unit.
    pub const fn quantity(&self) -> &'static str {
        match self {
            BaseUnit::Meter => "length",
            BaseUnit::Kilogram => "mass",
            BaseUnit::Second => "time",
            BaseUnit::Ampere => "current",
            BaseUnit::Kelvin => "temperature",
            BaseUnit::Mole => "amount of substance",
            BaseUnit::Candela => "luminous intensity",
        }
    }

    pub fn from_prime(prime: u64) -> Option<Self> {
        BASE_UNITS.iter().copied().find(|u| u.prime() == prime)
    }
}

impl NamedUnit for BaseUnit {
    const LIST: &'static [Self] = &BASE_UNITS;

    fn symbol(&self) -> &'static str {
        match self {
            BaseUnit::Meter => "m",
            BaseUnit::Kilogram => "kg",
            BaseUnit::Second => "s",
            BaseUnit::Ampere => "A",
            BaseUnit::Kelvin => "K",
            BaseUnit::Mole => "mol",
            BaseUnit::Candela => "cd",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            BaseUnit::Meter => "meter",
            BaseUnit::Kilogram => "kilogram",
            BaseUnit::Second => "second",
            BaseUnit::Ampere => "ampere",
            BaseUnit::Kelvin => "kelvin",
            BaseUnit::Mole => "mole",
            BaseUnit::Candela => "candela",
        }
    }

    fn ratio(&self) -> (u64, u64) {
        (self.prime(), 1)
    }
}

impl Display for BaseUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol())
    }
}
