/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num::complex::Complex64;
use serde::{Deserialize, Serialize};

use super::{Dimension, Magnitude, Quantity, UnitError};

/// A plain number or a quantity. This is the result type of quantity
/// arithmetic, since unitless results are returned as plain numbers.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum Value {
    Number(Magnitude),
    Quantity(Quantity),
}

impl Value {
    pub fn as_quantity(&self) -> Option<&Quantity> {
        match self {
            Value::Quantity(q) => Some(q),
            Value::Number(_) => None,
        }
    }

    pub fn into_quantity(self) -> Option<Quantity> {
        match self {
            Value::Quantity(q) => Some(q),
            Value::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<Magnitude> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Quantity(_) => None,
        }
    }

    /// The magnitude, in base units for quantities.
    pub fn magnitude(&self) -> Magnitude {
        match self {
            Value::Number(n) => *n,
            Value::Quantity(q) => q.value(),
        }
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            Value::Number(_) => Dimension::DIMENSIONLESS,
            Value::Quantity(q) => q.dimension(),
        }
    }

    pub fn to_f64(&self) -> Result<f64, UnitError> {
        self.magnitude().to_real()
    }

    pub fn is_nonzero(&self) -> bool {
        !self.magnitude().is_zero()
    }

    pub fn checked_add(&self, rhs: &Value) -> Result<Value, UnitError> {
        match (self, rhs) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(*a + *b)),
            (Value::Number(_), Value::Quantity(q)) => q.checked_add(self),
            (Value::Quantity(q), _) => q.checked_add(rhs),
        }
    }

    pub fn checked_sub(&self, rhs: &Value) -> Result<Value, UnitError> {
        match (self, rhs) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(*a - *b)),
            (Value::Number(_), Value::Quantity(q)) => q.checked_rsub(self),
            (Value::Quantity(q), _) => q.checked_sub(rhs),
        }
    }

    pub fn checked_mul(&self, rhs: &Value) -> Result<Value, UnitError> {
        match (self, rhs) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(*a * *b)),
            (Value::Number(_), Value::Quantity(q)) => q.checked_mul(self),
            (Value::Quantity(q), _) => q.checked_mul(rhs),
        }
    }

    pub fn checked_div(&self, rhs: &Value) -> Result<Value, UnitError> {
        match (self, rhs) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(*a / *b)),
            (Value::Number(_), Value::Quantity(q)) => q.checked_rdiv(self),
            (Value::Quantity(q), _) => q.checked_div(rhs),
        }
    }

    pub fn pow(&self, exponent: &Value) -> Result<Value, UnitError> {
        match self {
            Value::Quantity(q) => q.pow(exponent),
            Value::Number(_) if exponent.magnitude().is_zero() => {
                Ok(Value::Number(Magnitude::ONE))
            }
            Value::Number(n) => match exponent {
                Value::Number(p) => Ok(Value::Number(n.pow(*p))),
                Value::Quantity(p) if p.is_dimensionless() => {
                    Ok(Value::Number(n.pow(p.value())))
                }
                Value::Quantity(p) => Err(UnitError::Conversion(
                    p.dimension(),
                    Dimension::DIMENSIONLESS,
                )),
            },
        }
    }

    pub fn powf(&self, p: f64) -> Result<Value, UnitError> {
        self.pow(&Value::from(p))
    }

    pub fn powi(&self, n: i32) -> Result<Value, UnitError> {
        match self {
            Value::Number(x) => Ok(Value::Number(x.powi(n))),
            Value::Quantity(q) => q.powi(n),
        }
    }

    pub fn sqrt(&self) -> Result<Value, UnitError> {
        self.powf(0.5)
    }

    pub fn abs(&self) -> Value {
        match self {
            Value::Number(x) => Value::Number(x.abs()),
            Value::Quantity(q) => q.abs(),
        }
    }

    /// Note: we cannot implement PartialOrd, because it does not
    /// allow for error conditions.
    pub fn partial_cmp(
        &self,
        rhs: &Value,
    ) -> Result<Option<Ordering>, UnitError> {
        match (self, rhs) {
            (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
            (Value::Number(_), Value::Quantity(q)) => {
                Ok(q.partial_cmp(self)?.map(Ordering::reverse))
            }
            (Value::Quantity(q), _) => q.partial_cmp(rhs),
        }
    }

    pub fn lt<T: Into<Value>>(&self, rhs: T) -> Result<bool, UnitError> {
        Ok(matches!(self.partial_cmp(&rhs.into())?, Some(Ordering::Less)))
    }

    pub fn le<T: Into<Value>>(&self, rhs: T) -> Result<bool, UnitError> {
        Ok(matches!(
            self.partial_cmp(&rhs.into())?,
            Some(Ordering::Less | Ordering::Equal)
        ))
    }

    pub fn gt<T: Into<Value>>(&self, rhs: T) -> Result<bool, UnitError> {
        Ok(matches!(
            self.partial_cmp(&rhs.into())?,
            Some(Ordering::Greater)
        ))
    }

    pub fn ge<T: Into<Value>>(&self, rhs: T) -> Result<bool, UnitError> {
        Ok(matches!(
            self.partial_cmp(&rhs.into())?,
            Some(Ordering::Greater | Ordering::Equal)
        ))
    }

    /* In-place operations. A quantity keeping its unit is updated in
     * place (keeping its display options); anything else is replaced
     * by the regular result. Nothing changes on error. */

    pub fn try_add_assign<T: Into<Value>>(
        &mut self,
        rhs: T,
    ) -> Result<(), UnitError> {
        let rhs = rhs.into();
        match self {
            Value::Quantity(q) if !q.is_dimensionless() => {
                q.try_add_assign(rhs)
            }
            _ => self.replace_with(|v| v.checked_add(&rhs)),
        }
    }

    pub fn try_sub_assign<T: Into<Value>>(
        &mut self,
        rhs: T,
    ) -> Result<(), UnitError> {
        let rhs = rhs.into();
        match self {
            Value::Quantity(q) if !q.is_dimensionless() => {
                q.try_sub_assign(rhs)
            }
            _ => self.replace_with(|v| v.checked_sub(&rhs)),
        }
    }

    pub fn try_mul_assign<T: Into<Value>>(
        &mut self,
        rhs: T,
    ) -> Result<(), UnitError> {
        let rhs = rhs.into();
        match (&mut *self, &rhs) {
            (Value::Quantity(q), Value::Number(n)) if !q.is_dimensionless() => {
                *q *= *n;
                Ok(())
            }
            _ => self.replace_with(|v| v.checked_mul(&rhs)),
        }
    }

    pub fn try_div_assign<T: Into<Value>>(
        &mut self,
        rhs: T,
    ) -> Result<(), UnitError> {
        let rhs = rhs.into();
        match (&mut *self, &rhs) {
            (Value::Quantity(q), Value::Number(n)) if !q.is_dimensionless() => {
                *q /= *n;
                Ok(())
            }
            _ => self.replace_with(|v| v.checked_div(&rhs)),
        }
    }

    fn replace_with<F>(&mut self, op: F) -> Result<(), UnitError>
    where
        F: FnOnce(&Value) -> Result<Value, UnitError>,
    {
        *self = op(self)?;
        Ok(())
    }
}

macro_rules! impl_value_ops {
    ($lhs:ty: $($rhs:ty),*) => {
        $(
            impl Add<$rhs> for $lhs {
                type Output = Result<Value, UnitError>;
                fn add(self, rhs: $rhs) -> Result<Value, UnitError> {
                    self.checked_add(&Value::from(rhs))
                }
            }

            impl Sub<$rhs> for $lhs {
                type Output = Result<Value, UnitError>;
                fn sub(self, rhs: $rhs) -> Result<Value, UnitError> {
                    self.checked_sub(&Value::from(rhs))
                }
            }

            impl Mul<$rhs> for $lhs {
                type Output = Result<Value, UnitError>;
                fn mul(self, rhs: $rhs) -> Result<Value, UnitError> {
                    self.checked_mul(&Value::from(rhs))
                }
            }

            impl Div<$rhs> for $lhs {
                type Output = Result<Value, UnitError>;
                fn div(self, rhs: $rhs) -> Result<Value, UnitError> {
                    self.checked_div(&Value::from(rhs))
                }
            }
        )*
    };
}

/* Plain numbers on the left-hand side. */
macro_rules! impl_reverse_ops {
    ($lhs:ty: $($rhs:ty),*) => {
        $(
            impl Add<$rhs> for $lhs {
                type Output = Result<Value, UnitError>;
                fn add(self, rhs: $rhs) -> Result<Value, UnitError> {
                    Value::from(self).checked_add(&Value::from(rhs))
                }
            }

            impl Sub<$rhs> for $lhs {
                type Output = Result<Value, UnitError>;
                fn sub(self, rhs: $rhs) -> Result<Value, UnitError> {
                    Value::from(self).checked_sub(&Value::from(rhs))
                }
            }

            impl Mul<$rhs> for $lhs {
                type Output = Result<Value, UnitError>;
                fn mul(self, rhs: $rhs) -> Result<Value, UnitError> {
                    Value::from(self).checked_mul(&Value::from(rhs))
                }
            }

            impl Div<$rhs> for $lhs {
                type Output = Result<Value, UnitError>;
                fn div(self, rhs: $rhs) -> Result<Value, UnitError> {
                    Value::from(self).checked_div(&Value::from(rhs))
                }
            }
        )*
    };
}

impl_value_ops!(Quantity: Quantity, &Quantity, Value, Magnitude, f64);
impl_value_ops!(&Quantity: Quantity, &Quantity, Value, Magnitude, f64);
impl_value_ops!(Value: Quantity, &Quantity, Value, Magnitude, f64);
impl_value_ops!(&Value: Quantity, &Quantity, Value, Magnitude, f64);

impl_reverse_ops!(f64: Quantity, &Quantity, Value);
impl_reverse_ops!(Magnitude: Quantity, &Quantity, Value);

impl Neg for Value {
    type Output = Value;
    fn neg(self) -> Value {
        match self {
            Value::Number(x) => Value::Number(-x),
            Value::Quantity(q) => -q,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Number(n), Value::Quantity(q))
            | (Value::Quantity(q), Value::Number(n)) => q.eq_number(n),
            (Value::Quantity(a), Value::Quantity(b)) => a == b,
        }
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        *self == Value::from(*other)
    }
}

impl From<Quantity> for Value {
    fn from(q: Quantity) -> Self {
        Value::Quantity(q)
    }
}

impl From<&Quantity> for Value {
    fn from(q: &Quantity) -> Self {
        Value::Quantity(q.clone())
    }
}

impl From<Magnitude> for Value {
    fn from(n: Magnitude) -> Self {
        Value::Number(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(Magnitude::Real(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(Magnitude::from(n))
    }
}

impl From<Complex64> for Value {
    fn from(c: Complex64) -> Self {
        Value::Number(Magnitude::Complex(c))
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            Value::Number(n) => Display::fmt(n, f),
            Value::Quantity(q) => Display::fmt(q, f),
        }
    }
}
