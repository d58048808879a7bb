/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Decimal SI prefixes. Centi is only used for lengths; deci, deca
/// and hecto are not recognized.
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
pub enum SiPrefix {
    Yocto,
    Zepto,
    Atto,
    Femto,
    Pico,
    Nano,
    Micro,
    Milli,
    Centi,
    Unit,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
    Zetta,
    Yotta,
}

static SI_PREFIXES: [SiPrefix; 18] = [
    SiPrefix::Yocto,
    SiPrefix::Zepto,
    SiPrefix::Atto,
    SiPrefix::Femto,
    SiPrefix::Pico,
    SiPrefix::Nano,
    SiPrefix::Micro,
    SiPrefix::Milli,
    SiPrefix::Centi,
    SiPrefix::Unit,
    SiPrefix::Kilo,
    SiPrefix::Mega,
    SiPrefix::Giga,
    SiPrefix::Tera,
    SiPrefix::Peta,
    SiPrefix::Exa,
    SiPrefix::Zetta,
    SiPrefix::Yotta,
];

/// ASCII replacement for the micro sign.
pub const MICRO_ASCII: char = 'u';

impl SiPrefix {
    pub const SCALE: &'static [Self] = &SI_PREFIXES;

    /// The prefix for exactly `10^n`, if there is one.
    pub fn from_power(n: i32) -> Option<Self> {
        match n {
            -24 => Some(SiPrefix::Yocto),
            -21 => Some(SiPrefix::Zepto),
            -18 => Some(SiPrefix::Atto),
            -15 => Some(SiPrefix::Femto),
            -12 => Some(SiPrefix::Pico),
            -9 => Some(SiPrefix::Nano),
            -6 => Some(SiPrefix::Micro),
            -3 => Some(SiPrefix::Milli),
            -2 => Some(SiPrefix::Centi),
            0 => Some(SiPrefix::Unit),
            3 => Some(SiPrefix::Kilo),
            6 => Some(SiPrefix::Mega),
            9 => Some(SiPrefix::Giga),
            12 => Some(SiPrefix::Tera),
            15 => Some(SiPrefix::Peta),
            18 => Some(SiPrefix::Exa),
            21 => Some(SiPrefix::Zetta),
            24 => Some(SiPrefix::Yotta),
            _ => None,
        }
    }

    /// Recognize a prefix letter. Both the Greek mu (U+03BC), the
    /// micro sign (U+00B5) and 'u' are accepted for micro.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'y' => Some(SiPrefix::Yocto),
            'z' => Some(SiPrefix::Zepto),
            'a' => Some(SiPrefix::Atto),
            'f' => Some(SiPrefix::Femto),
            'p' => Some(SiPrefix::Pico),
            'n' => Some(SiPrefix::Nano),
            'μ' | 'µ' | MICRO_ASCII => Some(SiPrefix::Micro),
            'm' => Some(SiPrefix::Milli),
            'c' => Some(SiPrefix::Centi),
            'k' => Some(SiPrefix::Kilo),
            'M' => Some(SiPrefix::Mega),
            'G' => Some(SiPrefix::Giga),
            'T' => Some(SiPrefix::Tera),
            'P' => Some(SiPrefix::Peta),
            'E' => Some(SiPrefix::Exa),
            'Z' => Some(SiPrefix::Zetta),
            'Y' => Some(SiPrefix::Yotta),
            _ => None,
        }
    }

    pub const fn power(&self) -> i32 {
        match self {
            SiPrefix::Yocto => -24,
            SiPrefix::Zepto => -21,
            SiPrefix::Atto => -18,
            SiPrefix::Femto => -15,
            SiPrefix::Pico => -12,
            SiPrefix::Nano => -9,
            SiPrefix::Micro => -6,
            SiPrefix::Milli => -3,
            SiPrefix::Centi => -2,
            SiPrefix::Unit => 0,
            SiPrefix::Kilo => 3,
            SiPrefix::Mega => 6,
            SiPrefix::Giga => 9,
            SiPrefix::Tera => 12,
            SiPrefix::Peta => 15,
            SiPrefix::Exa => 18,
            SiPrefix::Zetta => 21,
            SiPrefix::Yotta => 24,
        }
    }

    pub fn multiplier(&self) -> f64 {
        scale10(1.0, self.power())
    }

    pub const fn symbol(&self, ascii_only: bool) -> &'static str {
        match self {
            SiPrefix::Yocto => "y",
            SiPrefix::Zepto => "z",
            SiPrefix::Atto => "a",
            SiPrefix::Femto => "f",
            SiPrefix::Pico => "p",
            SiPrefix::Nano => "n",
            SiPrefix::Micro => match ascii_only {
                true => "u",
                false => "μ",
            },
            SiPrefix::Milli => "m",
            SiPrefix::Centi => "c",
            SiPrefix::Unit => "",
            SiPrefix::Kilo => "k",
            SiPrefix::Mega => "M",
            SiPrefix::Giga => "G",
            SiPrefix::Tera => "T",
            SiPrefix::Peta => "P",
            SiPrefix::Exa => "E",
            SiPrefix::Zetta => "Z",
            SiPrefix::Yotta => "Y",
        }
    }
}

/// Multiply `x` by `10^n`. Negative powers divide by the exact
/// positive power, which keeps results like 3300 / 10^3 exact.
pub fn scale10(x: f64, n: i32) -> f64 {
    match n {
        0 => x,
        n if n > 0 => x * 10f64.powi(n),
        n => x / 10f64.powi(-n),
    }
}

impl Display for SiPrefix {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol(false))
    }
}
