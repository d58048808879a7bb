/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::NamedUnit;

/// Derived SI units with a conventional name. Their encoding is the
/// product of their constituent base unit primes, e.g. the newton
/// (kg m / s**2) is 3 * 2 / 5**2.
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
pub enum DerivedUnit {
    Hertz,
    Newton,
    Pascal,
    Joule,
    Watt,
    Coulomb,
    Volt,
    Farad,
    Ohm,
    Siemens,
    Weber,
    Tesla,
    Henry,
    Lux,
}

static DERIVED_UNITS: [DerivedUnit; 14] = [
    DerivedUnit::Hertz,
    DerivedUnit::Newton,
    DerivedUnit::Pascal,
    DerivedUnit::Joule,
    DerivedUnit::Watt,
    DerivedUnit::Coulomb,
    DerivedUnit::Volt,
    DerivedUnit::Farad,
    DerivedUnit::Ohm,
    DerivedUnit::Siemens,
    DerivedUnit::Weber,
    DerivedUnit::Tesla,
    DerivedUnit::Henry,
    DerivedUnit::Lux,
];

/// Input-only spelling of the ohm symbol.
pub const OHM_ASCII: &str = "Ohm";

impl DerivedUnit {
    const fn unicode_symbol(&self) -> &'static str {
        match self {
            DerivedUnit::Hertz => "Hz",
            DerivedUnit::Newton => "N",
            DerivedUnit::Pascal => "Pa",
            DerivedUnit::Joule => "J",
            DerivedUnit::Watt => "W",
            DerivedUnit::Coulomb => "C",
            DerivedUnit::Volt => "V",
            DerivedUnit::Farad => "F",
            DerivedUnit::Ohm => "Ω",
            DerivedUnit::Siemens => "S",
            DerivedUnit::Weber => "Wb",
            DerivedUnit::Tesla => "T",
            DerivedUnit::Henry => "H",
            DerivedUnit::Lux => "lx",
        }
    }
}

impl NamedUnit for DerivedUnit {
    const LIST: &'static [Self] = &DERIVED_UNITS;

    fn symbol(&self) -> &'static str {
        self.unicode_symbol()
    }

    fn name(&self) -> &'static str {
        match self {
            DerivedUnit::Hertz => "hertz",
            DerivedUnit::Newton => "newton",
            DerivedUnit::Pascal => "pascal",
            DerivedUnit::Joule => "joule",
            DerivedUnit::Watt => "watt",
            DerivedUnit::Coulomb => "coulomb",
            DerivedUnit::Volt => "volt",
            DerivedUnit::Farad => "farad",
            DerivedUnit::Ohm => "ohm",
            DerivedUnit::Siemens => "siemens",
            DerivedUnit::Weber => "weber",
            DerivedUnit::Tesla => "tesla",
            DerivedUnit::Henry => "henry",
            DerivedUnit::Lux => "lux",
        }
    }

    fn ratio(&self) -> (u64, u64) {
        match self {
            DerivedUnit::Hertz => (1, 5),
            DerivedUnit::Newton => (6, 25),
            DerivedUnit::Pascal => (3, 50),
            DerivedUnit::Joule => (12, 25),
            DerivedUnit::Watt => (12, 125),
            DerivedUnit::Coulomb => (35, 1),
            DerivedUnit::Volt => (12, 875),
            DerivedUnit::Farad => (30625, 12),
            DerivedUnit::Ohm => (12, 6125),
            DerivedUnit::Siemens => (6125, 12),
            DerivedUnit::Weber => (12, 175),
            DerivedUnit::Tesla => (3, 175),
            DerivedUnit::Henry => (12, 1225),
            DerivedUnit::Lux => (17, 4),
        }
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            OHM_ASCII => Some(DerivedUnit::Ohm),
            _ => Self::LIST.iter().copied().find(|u| u.symbol() == symbol),
        }
    }
}

impl Display for DerivedUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol())
    }
}
