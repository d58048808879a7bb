/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num::complex::Complex64;
use serde::{Deserialize, Serialize};

use super::format::format_general;
use super::prefix::scale10;
use super::UnitError;

/// The numeric part of a quantity.
#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug)]
#[serde(from = "MagnitudeRepr", into = "MagnitudeRepr")]
pub enum Magnitude {
    Real(f64),
    Complex(Complex64),
}

/// Serialized form of [`Magnitude`]: a plain number or an object
/// with real and imaginary parts.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum MagnitudeRepr {
    Real(f64),
    Complex { re: f64, im: f64 },
}

impl Magnitude {
    pub const ZERO: Self = Magnitude::Real(0.0);
    pub const ONE: Self = Magnitude::Real(1.0);

    pub fn is_zero(&self) -> bool {
        match self {
            Magnitude::Real(x) => *x == 0.0,
            Magnitude::Complex(c) => c.re == 0.0 && c.im == 0.0,
        }
    }

    pub fn is_real(&self) -> bool {
        matches!(self, Magnitude::Real(_))
    }

    /// The real value. Complex magnitudes are never converted
    /// implicitly, not even with a zero imaginary part.
    pub fn to_real(&self) -> Result<f64, UnitError> {
        match self {
            Magnitude::Real(x) => Ok(*x),
            Magnitude::Complex(c) => Err(UnitError::TypeError(format!(
                "cannot convert complex value {} to a real number",
                c
            ))),
        }
    }

    pub fn to_complex(&self) -> Complex64 {
        match self {
            Magnitude::Real(x) => Complex64::new(*x, 0.0),
            Magnitude::Complex(c) => *c,
        }
    }

    /// Absolute value (the modulus for complex magnitudes).
    pub fn abs(&self) -> Self {
        match self {
            Magnitude::Real(x) => Magnitude::Real(x.abs()),
            Magnitude::Complex(c) => Magnitude::Real(c.norm()),
        }
    }

    pub fn powi(&self, n: i32) -> Self {
        match self {
            Magnitude::Real(x) => Magnitude::Real(x.powi(n)),
            Magnitude::Complex(c) => Magnitude::Complex(c.powi(n)),
        }
    }

    /// Raise to a (possibly complex) power. A negative real number
    /// raised to a non-integer power gives a complex result.
    pub fn pow(&self, p: Magnitude) -> Self {
        match (self, p) {
            (Magnitude::Real(x), Magnitude::Real(p))
                if *x >= 0.0 || p.fract() == 0.0 =>
            {
                Magnitude::Real(x.powf(p))
            }
            (Magnitude::Real(x), Magnitude::Real(p)) => {
                Magnitude::Complex(Complex64::new(*x, 0.0).powf(p))
            }
            (base, Magnitude::Real(p)) => {
                Magnitude::Complex(base.to_complex().powf(p))
            }
            (base, Magnitude::Complex(p)) => {
                Magnitude::Complex(base.to_complex().powc(p))
            }
        }
    }

    pub fn powf(&self, p: f64) -> Self {
        self.pow(Magnitude::Real(p))
    }

    pub fn sqrt(&self) -> Self {
        self.powf(0.5)
    }

    /// Multiply by `10^n`.
    pub fn scale10(&self, n: i32) -> Self {
        match self {
            Magnitude::Real(x) => Magnitude::Real(scale10(*x, n)),
            Magnitude::Complex(c) => Magnitude::Complex(Complex64::new(
                scale10(c.re, n),
                scale10(c.im, n),
            )),
        }
    }

    /// Compare two magnitudes. Complex magnitudes have no order.
    ///
    /// Note: we cannot implement PartialOrd, because it does not
    /// allow for error conditions.
    pub fn partial_cmp(
        &self,
        other: &Self,
    ) -> Result<Option<Ordering>, UnitError> {
        match (self, other) {
            (Magnitude::Real(a), Magnitude::Real(b)) => Ok(a.partial_cmp(b)),
            _ => Err(UnitError::TypeError(format!(
                "cannot order complex values ({} <-> {})",
                self, other
            ))),
        }
    }

    /// Render with the given number of significant digits.
    pub fn format_general(&self, digits: usize) -> String {
        match self {
            Magnitude::Real(x) => format_general(*x, digits),
            Magnitude::Complex(c) => format!(
                "({}{}{}j)",
                format_general(c.re, digits),
                if c.im.is_sign_negative() { '-' } else { '+' },
                format_general(c.im.abs(), digits)
            ),
        }
    }
}

macro_rules! impl_magnitude_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait<Magnitude> for Magnitude {
            type Output = Magnitude;
            fn $method(self, rhs: Magnitude) -> Magnitude {
                match (self, rhs) {
                    (Magnitude::Real(a), Magnitude::Real(b)) => {
                        Magnitude::Real(a $op b)
                    }
                    (a, b) => {
                        Magnitude::Complex(a.to_complex() $op b.to_complex())
                    }
                }
            }
        }

        impl $trait<f64> for Magnitude {
            type Output = Magnitude;
            fn $method(self, rhs: f64) -> Magnitude {
                self $op Magnitude::Real(rhs)
            }
        }
    };
}

impl_magnitude_op!(Add, add, +);
impl_magnitude_op!(Sub, sub, -);
impl_magnitude_op!(Mul, mul, *);
impl_magnitude_op!(Div, div, /);

impl Neg for Magnitude {
    type Output = Magnitude;
    fn neg(self) -> Magnitude {
        match self {
            Magnitude::Real(x) => Magnitude::Real(-x),
            Magnitude::Complex(c) => Magnitude::Complex(-c),
        }
    }
}

impl PartialEq<f64> for Magnitude {
    fn eq(&self, other: &f64) -> bool {
        match self {
            Magnitude::Real(x) => x == other,
            Magnitude::Complex(c) => c.im == 0.0 && c.re == *other,
        }
    }
}

impl Default for Magnitude {
    fn default() -> Self {
        Magnitude::ZERO
    }
}

impl From<f64> for Magnitude {
    fn from(x: f64) -> Self {
        Magnitude::Real(x)
    }
}

impl From<i32> for Magnitude {
    fn from(x: i32) -> Self {
        Magnitude::Real(f64::from(x))
    }
}

impl From<Complex64> for Magnitude {
    fn from(c: Complex64) -> Self {
        Magnitude::Complex(c)
    }
}

impl From<MagnitudeRepr> for Magnitude {
    fn from(repr: MagnitudeRepr) -> Self {
        match repr {
            MagnitudeRepr::Real(x) => Magnitude::Real(x),
            MagnitudeRepr::Complex { re, im } => {
                Magnitude::Complex(Complex64::new(re, im))
            }
        }
    }
}

impl From<Magnitude> for MagnitudeRepr {
    fn from(m: Magnitude) -> Self {
        match m {
            Magnitude::Real(x) => MagnitudeRepr::Real(x),
            Magnitude::Complex(c) => {
                MagnitudeRepr::Complex { re: c.re, im: c.im }
            }
        }
    }
}

impl Display for Magnitude {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            Magnitude::Real(x) => Display::fmt(x, f),
            Magnitude::Complex(c) => {
                write!(f, "(")?;
                Display::fmt(&c.re, f)?;
                match c.im.is_sign_negative() {
                    true => write!(f, "-")?,
                    false => write!(f, "+")?,
                }
                Display::fmt(&c.im.abs(), f)?;
                write!(f, "j)")
            }
        }
    }
}

#[cfg(feature = "schemars")]
impl schemars::JsonSchema for Magnitude {
    fn schema_name() -> String {
        String::from("Magnitude")
    }

    fn json_schema(
        gen: &mut schemars::gen::SchemaGenerator,
    ) -> schemars::schema::Schema {
        MagnitudeRepr::json_schema(gen)
    }
}
