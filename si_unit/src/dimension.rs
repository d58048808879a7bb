/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::ops::{Div, Mul};
use std::str::FromStr;

use log::debug;
use num::integer::gcd;
use serde::{Deserialize, Serialize};

use super::base_unit::{BaseUnit, DerivedUnit, NamedUnit, OHM_ASCII};
use super::error::UnitError;
use super::parser::{parse_unit_tokens, strip_grouping, Token};

/// A (possibly compound) SI unit.
///
/// Every base unit is tagged with a prime (see [`BaseUnit::prime`]).
/// A compound unit is the rational number obtained by substituting
/// these primes for the unit symbols, e.g. kg m / s**2 is 6 / 25.
/// Numerator and denominator are kept in lowest terms, so equal
/// units always have equal representations and cancelling units is
/// plain fraction arithmetic.
#[derive(
    Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug,
)]
#[serde(try_from = "String", into = "String")]
pub struct Dimension {
    num: u64,
    den: u64,
}

impl Dimension {
    pub const DIMENSIONLESS: Self = Dimension { num: 1, den: 1 };

    pub(crate) const fn from_reduced(num: u64, den: u64) -> Self {
        Dimension { num, den }
    }

    /// Build a unit from its encoding. Both numbers must be products
    /// of base unit primes.
    pub fn new(num: u64, den: u64) -> Result<Self, UnitError> {
        if num == 0 || den == 0 {
            return Err(UnitError::ParseError(format!(
                "invalid unit encoding {}/{}",
                num, den
            )));
        }
        let g = gcd(num, den);
        let dim = Dimension {
            num: num / g,
            den: den / g,
        };
        match remaining_factor(dim.num) * remaining_factor(dim.den) {
            1 => Ok(dim),
            _ => Err(UnitError::ParseError(format!(
                "invalid unit encoding {}/{}",
                num, den
            ))),
        }
    }

    /// Parse a unit expression such as "kg m**2 / (s**3 A)".
    pub fn parse(input: &str) -> Result<Self, UnitError> {
        let text = strip_grouping(input)?;
        let mut numerator = Dimension::DIMENSIONLESS;
        let mut denominator = Dimension::DIMENSIONLESS;
        let mut in_denominator = false;

        for token in parse_unit_tokens(&text)? {
            match token {
                Token::One => {}
                Token::Over => in_denominator = true,
                Token::Term(symbol, power) => {
                    let unit = Self::from_symbol(symbol)
                        .ok_or_else(|| {
                            UnitError::UnknownUnit(symbol.to_string())
                        })?
                        .powi(power)?;
                    match in_denominator {
                        false => numerator = (numerator * unit)?,
                        true => denominator = (denominator * unit)?,
                    }
                }
            }
        }

        numerator / denominator
    }

    /// Look up a single base or derived unit symbol ("Ohm" is
    /// accepted for "Ω").
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match BaseUnit::from_symbol(symbol) {
            Some(unit) => Some(unit.dimension()),
            None => DerivedUnit::from_symbol(symbol).map(|u| u.dimension()),
        }
    }

    pub const fn numerator(&self) -> u64 {
        self.num
    }

    pub const fn denominator(&self) -> u64 {
        self.den
    }

    pub const fn is_dimensionless(&self) -> bool {
        self.num == 1 && self.den == 1
    }

    /// The conventional symbol, if this is a base unit, a named
    /// derived unit or the blank unit.
    pub fn symbol(&self) -> Option<&'static str> {
        if self.is_dimensionless() {
            return Some("");
        }
        match BaseUnit::from_ratio(self.num, self.den) {
            Some(unit) => Some(unit.symbol()),
            None => {
                DerivedUnit::from_ratio(self.num, self.den).map(|u| u.symbol())
            }
        }
    }

    /// The power of `base` in this unit.
    pub fn exponent(&self, base: BaseUnit) -> i32 {
        multiplicity(self.num, base.prime())
            - multiplicity(self.den, base.prime())
    }

    /// Powers of all base units, in order of their primes.
    pub fn exponents(&self) -> impl Iterator<Item = (BaseUnit, i32)> + '_ {
        BaseUnit::LIST.iter().map(|base| (*base, self.exponent(*base)))
    }

    pub const fn recip(self) -> Self {
        Dimension {
            num: self.den,
            den: self.num,
        }
    }

    pub fn powi(self, n: i32) -> Result<Self, UnitError> {
        if n == 0 || self.is_dimensionless() {
            return Ok(Dimension::DIMENSIONLESS);
        }
        let (num, den) = match n < 0 {
            false => (self.num, self.den),
            true => (self.den, self.num),
        };
        let e = n.unsigned_abs();
        match (num.checked_pow(e), den.checked_pow(e)) {
            (Some(num), Some(den)) => Ok(Dimension { num, den }),
            _ => Err(UnitError::Pow(self, n as f64)),
        }
    }

    /// Raise to a real power. This only succeeds if the power of
    /// every base unit in the result is an integer: the square root
    /// of H F is s, but the square root of Ω does not exist.
    pub fn powf(self, p: f64) -> Result<Self, UnitError> {
        if p.fract() == 0.0 && p.abs() <= i32::MAX as f64 {
            return self.powi(p as i32);
        }
        if self.is_dimensionless() {
            return Ok(Dimension::DIMENSIONLESS);
        }
        if !p.is_finite() {
            return Err(UnitError::Pow(self, p));
        }

        let mut num = 1u64;
        let mut den = 1u64;
        for (base, e) in self.exponents() {
            let x = e as f64 * p;
            let n = x.round();
            if (x - n).abs() > 1e-9 * x.abs().max(1.0) {
                debug!("{} ** {}: non-integral power of {}", self, p, base);
                return Err(UnitError::Pow(self, p));
            }
            let n = n as i64;
            let part = u32::try_from(n.unsigned_abs())
                .ok()
                .and_then(|e| base.prime().checked_pow(e));
            let acc = match n < 0 {
                false => &mut num,
                true => &mut den,
            };
            let current = *acc;
            *acc = part
                .and_then(|part| current.checked_mul(part))
                .ok_or(UnitError::Pow(self, p))?;
        }
        Ok(Dimension { num, den })
    }

    /// Render the unit. Named units use their symbol; anything else
    /// is spelled out in base units, e.g. "m**2 kg / (s**3 A)".
    pub fn render(&self, ascii_only: bool) -> String {
        let unit = match (self.symbol(), self.recip().symbol()) {
            (Some(symbol), _) => symbol.to_string(),
            (None, Some(symbol)) => format!("1 / {}", symbol),
            (None, None) => {
                let num = components(self.num);
                let den = components(self.den);
                let num = match num.is_empty() {
                    true => String::from("1"),
                    false => num,
                };
                match (den.is_empty(), den.contains(' ')) {
                    (true, _) => num,
                    (false, false) => format!("{} / {}", num, den),
                    (false, true) => format!("{} / ({})", num, den),
                }
            }
        };
        match ascii_only {
            true => unit.replace('Ω', OHM_ASCII),
            false => unit,
        }
    }

    pub fn to_ascii_string(&self) -> String {
        self.render(true)
    }
}

/// Multiply two fractions in lowest terms, cancelling crosswise
/// first so that intermediate products stay small. The result is
/// again in lowest terms.
fn product(a: (u64, u64), b: (u64, u64)) -> Option<Dimension> {
    let g1 = gcd(a.0, b.1);
    let g2 = gcd(b.0, a.1);
    let num = (a.0 / g1).checked_mul(b.0 / g2)?;
    let den = (a.1 / g2).checked_mul(b.1 / g1)?;
    Some(Dimension { num, den })
}

fn multiplicity(mut n: u64, prime: u64) -> i32 {
    let mut count = 0;
    while n % prime == 0 {
        n /= prime;
        count += 1;
    }
    count
}

/// What is left of `n` after dividing out all base unit primes.
fn remaining_factor(mut n: u64) -> u64 {
    for base in BaseUnit::LIST {
        while n % base.prime() == 0 {
            n /= base.prime();
        }
    }
    n
}

/* Factor an encoded product back into base unit symbols. */
fn components(n: u64) -> String {
    BaseUnit::LIST
        .iter()
        .filter_map(|base| match multiplicity(n, base.prime()) {
            0 => None,
            1 => Some(base.symbol().to_string()),
            count => Some(format!("{}**{}", base.symbol(), count)),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl Mul<Dimension> for Dimension {
    type Output = Result<Dimension, UnitError>;
    fn mul(self, rhs: Dimension) -> Result<Dimension, UnitError> {
        product((self.num, self.den), (rhs.num, rhs.den))
            .ok_or(UnitError::Mul(self, rhs))
    }
}

impl Div<Dimension> for Dimension {
    type Output = Result<Dimension, UnitError>;
    fn div(self, rhs: Dimension) -> Result<Dimension, UnitError> {
        product((self.num, self.den), (rhs.den, rhs.num))
            .ok_or(UnitError::Div(self, rhs))
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Dimension::DIMENSIONLESS
    }
}

impl From<BaseUnit> for Dimension {
    fn from(unit: BaseUnit) -> Self {
        unit.dimension()
    }
}

impl From<DerivedUnit> for Dimension {
    fn from(unit: DerivedUnit) -> Self {
        unit.dimension()
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.render(false))
    }
}

impl FromStr for Dimension {
    type Err = UnitError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Dimension> for String {
    fn from(val: Dimension) -> Self {
        format!("{}", val)
    }
}

impl TryFrom<String> for Dimension {
    type Error = UnitError;
    fn try_from(val: String) -> std::result::Result<Self, Self::Error> {
        Self::parse(&val)
    }
}

#[cfg(feature = "schemars")]
impl schemars::JsonSchema for Dimension {
    fn schema_name() -> String {
        String::from("Dimension")
    }

    fn json_schema(
        gen: &mut schemars::gen::SchemaGenerator,
    ) -> schemars::schema::Schema {
        String::json_schema(gen)
    }
}
