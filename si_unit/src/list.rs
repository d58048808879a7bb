/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Helpers for lists of quantities, e.g. to hand them to code that
//! only understands plain numbers.

use super::prefix::standardize;
use super::{Magnitude, Quantity, UnitError, Value};

/// The magnitudes (in base units) of a list of quantities. Plain
/// numbers are only accepted if they are zero. Units are not checked.
pub fn values(items: &[Value]) -> Result<Vec<Magnitude>, UnitError> {
    items
        .iter()
        .map(|item| match item {
            Value::Quantity(q) => Ok(q.value()),
            Value::Number(n) if n.is_zero() => Ok(*n),
            Value::Number(n) => Err(not_a_quantity(n)),
        })
        .collect()
}

/// Like [`values`], but only for real magnitudes.
pub fn floats(items: &[Value]) -> Result<Vec<f64>, UnitError> {
    values(items)?.iter().map(Magnitude::to_real).collect()
}

/// Convert a list of quantities of one unit to numbers in a common
/// prefixed unit, chosen from the largest value. If the smallest
/// non-zero value would need another prefix, the numbers are
/// returned in the base unit instead.
pub fn standardized(
    items: &[Value],
) -> Result<(Vec<f64>, String), UnitError> {
    let mut first: Option<&Quantity> = None;
    for item in items {
        match item {
            Value::Quantity(q) if q.is_nonzero() => match first {
                Some(f) if f.dimension() != q.dimension() => {
                    return Err(UnitError::Conversion(
                        f.dimension(),
                        q.dimension(),
                    ))
                }
                Some(_) => {}
                None => first = Some(q),
            },
            Value::Number(n) if !n.is_zero() => {
                return Err(not_a_quantity(n))
            }
            _ => {}
        }
    }

    let numbers = floats(items)?;
    let first = match first {
        Some(q) => q,
        None => return Ok((numbers, String::new())),
    };
    let unit = first.unit();
    let ascii_only = first.options().ascii_only;

    let nonzero = numbers.iter().map(|v| v.abs()).filter(|v| *v != 0.0);
    let max = nonzero.clone().fold(0.0, f64::max);
    let min = nonzero.fold(f64::INFINITY, f64::min);

    let (_, max_unit) = standardize(max, &unit, ascii_only, None);
    let (_, min_unit) = standardize(min, &unit, ascii_only, None);
    if min_unit != max_unit {
        return Ok((numbers, unit));
    }

    let scaled = numbers
        .iter()
        .map(|v| match *v == 0.0 {
            true => 0.0,
            false => standardize(*v, &unit, ascii_only, None).0,
        })
        .collect();
    Ok((scaled, max_unit))
}

fn not_a_quantity(n: &Magnitude) -> UnitError {
    UnitError::TypeError(format!(
        "list elements need to be quantities or 0, got {}",
        n
    ))
}
