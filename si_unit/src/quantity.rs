/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::ops::{DivAssign, MulAssign, Neg};
use std::str::FromStr;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::format::{format_number, join_unit};
use crate::parser::parse_quantity_tokens;
use crate::prefix::{self, normalize_unit, to_display_string};
use crate::quantity_as_object::{QuantityEnum, QuantityObject};

use super::error::UnitError;
use super::{Dimension, Magnitude, QuantityOptions, Value};

/// A magnitude in base SI units together with its unit.
///
/// Arithmetic that could produce a unitless result returns a
/// [`Value`]: a quantity whose units cancel out is reduced to a plain
/// number.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(try_from = "QuantityEnum", into = "QuantityObject")]
pub struct Quantity {
    value: Magnitude,
    dimension: Dimension,
    options: QuantityOptions,
}

impl Quantity {
    /// Parse a "value unit" string, e.g. "3.3 kΩ" or "9.81 m / s**2".
    /// A single unit token may carry an SI prefix; compound unit
    /// expressions may not.
    pub fn parse(input: &str) -> Result<Self, UnitError> {
        Self::parse_with(input, QuantityOptions::default())
    }

    pub fn parse_with(
        input: &str,
        options: QuantityOptions,
    ) -> Result<Self, UnitError> {
        let (value, unit) = match input.split_whitespace().count() {
            0..=2 => prefix::from_string(input, options.ascii_only)?,
            _ => {
                let (value, unit) = parse_quantity_tokens(input)?;
                (value, unit.join(" "))
            }
        };
        let dimension = Dimension::parse(&unit)?;
        trace!("parsed quantity {:?} as {} {}", input, value, dimension);
        Ok(Quantity {
            value: Magnitude::Real(value),
            dimension,
            options,
        })
    }

    /// Parse a quantity that must have the given unit.
    pub fn parse_as(
        input: &str,
        expected: Dimension,
    ) -> Result<Self, UnitError> {
        Self::parse(input)?.expect_dimension(expected)
    }

    /// Create a quantity from a number and a unit expression. A single
    /// unit token may carry an SI prefix ("mV", "km**2").
    pub fn new<T: Into<Magnitude>>(
        value: T,
        unit: &str,
    ) -> Result<Self, UnitError> {
        let value = value.into();
        let (value, dimension) = match unit.split_whitespace().count() {
            0 | 1 => {
                let (power, base) = normalize_unit(unit, false);
                (value.scale10(power), Dimension::parse(&base)?)
            }
            _ => (value, Dimension::parse(unit)?),
        };
        Ok(Self::with_dimension(value, dimension))
    }

    pub fn with_dimension<T: Into<Magnitude>>(
        value: T,
        dimension: Dimension,
    ) -> Self {
        Quantity {
            value: value.into(),
            dimension,
            options: QuantityOptions::default(),
        }
    }

    pub fn with_options(mut self, options: QuantityOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_digits(mut self, digits: usize) -> Self {
        self.options.digits = digits;
        self
    }

    pub fn with_ascii_only(mut self, ascii_only: bool) -> Self {
        self.options.ascii_only = ascii_only;
        self
    }

    pub fn with_precision(mut self, precision: Option<usize>) -> Self {
        self.options.precision = precision;
        self
    }

    /// Display this quantity in a fixed unit. The unit must have the
    /// same dimension as the quantity.
    pub fn with_print_unit(mut self, unit: &str) -> Result<Self, UnitError> {
        let (_, base) = normalize_unit(unit, self.options.ascii_only);
        let found = Dimension::parse(&base)?;
        if found != self.dimension {
            return Err(UnitError::UnexpectedDimension {
                expected: self.dimension,
                found,
            });
        }
        self.options.print_unit = Some(unit.trim().to_string());
        Ok(self)
    }

    /// Reject the quantity if its unit differs from `expected`.
    pub fn expect_dimension(
        self,
        expected: Dimension,
    ) -> Result<Self, UnitError> {
        match self.dimension == expected {
            true => Ok(self),
            false => Err(UnitError::UnexpectedDimension {
                expected,
                found: self.dimension,
            }),
        }
    }

    pub fn value(&self) -> Magnitude {
        self.value
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// The base unit as a string.
    pub fn unit(&self) -> String {
        self.dimension.render(self.options.ascii_only)
    }

    pub fn options(&self) -> &QuantityOptions {
        &self.options
    }

    pub fn digits(&self) -> usize {
        self.options.digits
    }

    pub fn set_digits(&mut self, digits: usize) {
        self.options.digits = digits;
    }

    pub fn is_dimensionless(&self) -> bool {
        self.dimension.is_dimensionless()
    }

    pub fn is_nonzero(&self) -> bool {
        !self.value.is_zero()
    }

    pub fn to_f64(&self) -> Result<f64, UnitError> {
        self.value.to_real()
    }

    /// The value with the best fitting SI prefix, e.g. (3.3, "kΩ").
    pub fn standardized(&self) -> Result<(f64, String), UnitError> {
        Ok(prefix::standardize(
            self.to_f64()?,
            &self.unit(),
            self.options.ascii_only,
            None,
        ))
    }

    /// Reduce to a plain number if the unit cancelled out.
    pub fn collapse(self) -> Value {
        match self.is_dimensionless() {
            true => Value::Number(self.value),
            false => Value::Quantity(self),
        }
    }

    pub fn checked_add(&self, rhs: &Value) -> Result<Value, UnitError> {
        self.additive(rhs, |a, b| a + b)
    }

    pub fn checked_sub(&self, rhs: &Value) -> Result<Value, UnitError> {
        self.additive(rhs, |a, b| a - b)
    }

    /// Compute `lhs - self`.
    pub fn checked_rsub(&self, lhs: &Value) -> Result<Value, UnitError> {
        self.additive(lhs, |a, b| b - a)
    }

    pub fn checked_mul(&self, rhs: &Value) -> Result<Value, UnitError> {
        match rhs {
            Value::Number(n) => Ok(self.derive(self.value * *n).collapse()),
            Value::Quantity(q) => {
                let dimension = (self.dimension * q.dimension)?;
                Ok(self.combine(q, self.value * q.value, dimension).collapse())
            }
        }
    }

    pub fn checked_div(&self, rhs: &Value) -> Result<Value, UnitError> {
        match rhs {
            Value::Number(n) => Ok(self.derive(self.value / *n).collapse()),
            Value::Quantity(q) => {
                let dimension = (self.dimension / q.dimension)?;
                Ok(self.combine(q, self.value / q.value, dimension).collapse())
            }
        }
    }

    /// Compute `lhs / self`.
    pub fn checked_rdiv(&self, lhs: &Value) -> Result<Value, UnitError> {
        match lhs {
            Value::Number(n) => {
                let mut result = self.derive(*n / self.value);
                result.dimension = self.dimension.recip();
                result.options.print_unit = None;
                Ok(result.collapse())
            }
            Value::Quantity(q) => q.checked_div(&Value::Quantity(self.clone())),
        }
    }

    /// Raise to a power. The exponent must be unitless; an exponent
    /// of zero (of any unit) always gives the number 1.
    pub fn pow(&self, exponent: &Value) -> Result<Value, UnitError> {
        if exponent.magnitude().is_zero() {
            return Ok(Value::Number(Magnitude::ONE));
        }
        let p = match exponent {
            Value::Number(p) => *p,
            Value::Quantity(q) if q.is_dimensionless() => q.value,
            Value::Quantity(q) => {
                return Err(UnitError::Conversion(
                    q.dimension,
                    Dimension::DIMENSIONLESS,
                ))
            }
        };

        let dimension = match p {
            Magnitude::Real(p) => self.dimension.powf(p)?,
            Magnitude::Complex(_) if self.is_dimensionless() => {
                Dimension::DIMENSIONLESS
            }
            Magnitude::Complex(c) => {
                return Err(UnitError::TypeError(format!(
                    "cannot raise unit {} to complex power {}",
                    self.dimension, c
                )))
            }
        };
        Ok(self.with_unit(self.value.pow(p), dimension).collapse())
    }

    pub fn powf(&self, p: f64) -> Result<Value, UnitError> {
        self.pow(&Value::Number(Magnitude::Real(p)))
    }

    pub fn powi(&self, n: i32) -> Result<Value, UnitError> {
        if n == 0 {
            return Ok(Value::Number(Magnitude::ONE));
        }
        let dimension = self.dimension.powi(n)?;
        Ok(self.with_unit(self.value.powi(n), dimension).collapse())
    }

    pub fn sqrt(&self) -> Result<Value, UnitError> {
        self.powf(0.5)
    }

    pub fn abs(&self) -> Value {
        self.derive(self.value.abs()).collapse()
    }

    /// Compare with a quantity of the same unit, with zero, or (for
    /// unitless quantities) with any number.
    ///
    /// Note: we cannot implement PartialOrd, because it does not
    /// allow for error conditions.
    pub fn partial_cmp(
        &self,
        rhs: &Value,
    ) -> Result<Option<Ordering>, UnitError> {
        match rhs {
            Value::Number(n) if n.is_zero() || self.is_dimensionless() => {
                self.value.partial_cmp(n)
            }
            Value::Number(_) => Err(self.mismatch(Dimension::DIMENSIONLESS)),
            Value::Quantity(q) if q.dimension == self.dimension => {
                self.value.partial_cmp(&q.value)
            }
            Value::Quantity(q) => Err(self.mismatch(q.dimension)),
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

    /// Equality against a plain number: only unitless quantities and
    /// zero compare equal to numbers.
    pub fn eq_number(&self, n: &Magnitude) -> bool {
        (self.is_dimensionless() || n.is_zero()) && self.value == *n
    }

    /// In-place addition. The operand is left untouched on failure.
    pub fn try_add_assign<T: Into<Value>>(
        &mut self,
        rhs: T,
    ) -> Result<(), UnitError> {
        self.value = self.additive_value(&rhs.into(), |a, b| a + b)?;
        Ok(())
    }

    /// In-place subtraction. The operand is left untouched on failure.
    pub fn try_sub_assign<T: Into<Value>>(
        &mut self,
        rhs: T,
    ) -> Result<(), UnitError> {
        self.value = self.additive_value(&rhs.into(), |a, b| a - b)?;
        Ok(())
    }

    fn additive(
        &self,
        rhs: &Value,
        op: impl Fn(Magnitude, Magnitude) -> Magnitude,
    ) -> Result<Value, UnitError> {
        let value = self.additive_value(rhs, op)?;
        match rhs {
            Value::Quantity(q) => {
                Ok(self.combine(q, value, self.dimension).collapse())
            }
            Value::Number(_) => Ok(self.derive(value).collapse()),
        }
    }

    fn additive_value(
        &self,
        rhs: &Value,
        op: impl Fn(Magnitude, Magnitude) -> Magnitude,
    ) -> Result<Magnitude, UnitError> {
        match rhs {
            Value::Number(n) if n.is_zero() || self.is_dimensionless() => {
                Ok(op(self.value, *n))
            }
            Value::Number(_) => Err(self.mismatch(Dimension::DIMENSIONLESS)),
            Value::Quantity(q) if q.dimension == self.dimension => {
                Ok(op(self.value, q.value))
            }
            Value::Quantity(q) => Err(self.mismatch(q.dimension)),
        }
    }

    fn mismatch(&self, other: Dimension) -> UnitError {
        debug!("unit mismatch: {} <-> {}", self.dimension, other);
        UnitError::Conversion(self.dimension, other)
    }

    /* Same unit and options, new value. */
    fn derive(&self, value: Magnitude) -> Self {
        Quantity {
            value,
            dimension: self.dimension,
            options: self.options.clone(),
        }
    }

    /* A fixed display unit only applies while the dimension is unchanged. */
    fn with_unit(&self, value: Magnitude, dimension: Dimension) -> Self {
        let mut options = self.options.clone();
        if dimension != self.dimension {
            options.print_unit = None;
        }
        Quantity {
            value,
            dimension,
            options,
        }
    }

    fn combine(
        &self,
        rhs: &Quantity,
        value: Magnitude,
        dimension: Dimension,
    ) -> Self {
        let mut result = self.with_unit(value, dimension);
        result.options.digits = self.digits().max(rhs.digits());
        result
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.dimension == other.dimension
    }
}

impl PartialEq<f64> for Quantity {
    fn eq(&self, other: &f64) -> bool {
        self.eq_number(&Magnitude::Real(*other))
    }
}

impl PartialEq<Quantity> for f64 {
    fn eq(&self, other: &Quantity) -> bool {
        other == self
    }
}

impl MulAssign<Magnitude> for Quantity {
    fn mul_assign(&mut self, rhs: Magnitude) {
        self.value = self.value * rhs;
    }
}

impl DivAssign<Magnitude> for Quantity {
    fn div_assign(&mut self, rhs: Magnitude) {
        self.value = self.value / rhs;
    }
}

impl MulAssign<f64> for Quantity {
    fn mul_assign(&mut self, rhs: f64) {
        *self *= Magnitude::Real(rhs);
    }
}

impl DivAssign<f64> for Quantity {
    fn div_assign(&mut self, rhs: f64) {
        *self /= Magnitude::Real(rhs);
    }
}

impl Neg for Quantity {
    type Output = Value;
    fn neg(self) -> Value {
        self.derive(-self.value).collapse()
    }
}

impl Neg for &Quantity {
    type Output = Value;
    fn neg(self) -> Value {
        self.derive(-self.value).collapse()
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Quantity::with_dimension(value, Dimension::DIMENSIONLESS)
    }
}

impl From<Magnitude> for Quantity {
    fn from(value: Magnitude) -> Self {
        Quantity::with_dimension(value, Dimension::DIMENSIONLESS)
    }
}

impl FromStr for Quantity {
    type Err = UnitError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Quantity {
    type Error = UnitError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let digits = self.digits();
        let decimals = f.precision().or(self.options.precision);

        let ascii_only = self.options.ascii_only;

        if let Some(print_unit) = &self.options.print_unit {
            let (power, _) = normalize_unit(print_unit, ascii_only);
            let number = match self.value.scale10(-power) {
                Magnitude::Real(x) => format_number(x, Some(digits), decimals),
                value => value.format_general(digits),
            };
            return write!(f, "{}", join_unit(number, print_unit));
        }

        let unit = self.unit();
        match (self.value, self.dimension.symbol()) {
            (Magnitude::Real(x), Some(symbol)) if !symbol.is_empty() => {
                let digits = Some(digits);
                let text =
                    to_display_string(x, &unit, digits, decimals, ascii_only);
                write!(f, "{}", text)
            }
            (value, _) => {
                let number = match decimals {
                    Some(decimals) => format!("{:.*}", decimals, value),
                    None => value.format_general(digits),
                };
                write!(f, "{}", join_unit(number, &unit))
            }
        }
    }
}

#[cfg(feature = "schemars")]
impl schemars::JsonSchema for Quantity {
    fn schema_name() -> String {
        String::from("Quantity")
    }

    fn json_schema(
        gen: &mut schemars::gen::SchemaGenerator,
    ) -> schemars::schema::Schema {
        QuantityEnum::json_schema(gen)
    }
}
