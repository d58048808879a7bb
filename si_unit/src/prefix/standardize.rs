/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use log::debug;

use super::normalize::normalize;
use super::si_prefix::{scale10, SiPrefix};
use crate::format::{format_number, join_unit};

/// Digits used by [`to_display_string`] callers that have no digits
/// setting of their own.
pub const DEFAULT_DISPLAY_DIGITS: usize = 3;

/// Convert a number in base units to the most compact prefixed
/// representation, e.g. (3300, "Ω") -> (3.3, "kΩ").
///
/// Masses use g below 1 kg and t from 1000 kg on. Lengths of 1 to 99
/// mm use cm. If `integer_bits` is set, the number is returned as an
/// integer (in an f64) scaled down the prefix table until it uses as
/// many of the given bits as possible; negative values denote signed
/// integers.
pub fn standardize(
    number: f64,
    unit: &str,
    ascii_only: bool,
    integer_bits: Option<i32>,
) -> (f64, String) {
    let (number, base) = normalize(number, unit, ascii_only);
    if base.is_empty()
        || base.contains(char::is_whitespace)
        || base.contains("**")
        || number == 0.0
        || !number.is_finite()
    {
        return (number, base);
    }

    let power10 = number.abs().log10().floor() as i32;
    let mut step = match base.as_str() {
        "m" if matches!(power10, -1 | -2) && integer_bits.is_none() => -2,
        _ => power10.div_euclid(3) * 3,
    };

    let mut magnitude = number.abs();
    let mut unit = base.as_str();
    if unit == "kg" {
        if (3..=27).contains(&step) {
            unit = "t";
            magnitude /= 1000.0;
            step -= 3;
        } else if (-27..=-1).contains(&step) {
            unit = "g";
            magnitude *= 1000.0;
            step += 3;
        }
    }

    let mut value = scale10(magnitude, -step).copysign(number);

    if let Some(bits) = integer_bits {
        let max = match bits < 0 {
            true => 2f64.powi(-bits - 1) - 1.0,
            false => 2f64.powi(bits) - 1.0,
        };
        while value.abs() * 1000.0 < max {
            value *= 1000.0;
            step -= 3;
        }
        value = value.round();
        (step, unit) = regroup_mass(step, unit);
    }

    match SiPrefix::from_power(step) {
        Some(prefix) => {
            (value, format!("{}{}", prefix.symbol(ascii_only), unit))
        }
        None => {
            debug!(
                "no SI prefix for 10^{}; keeping {} {} unscaled",
                step, number, base
            );
            (number, base)
        }
    }
}

/// Render a number in base units with the best fitting prefix, e.g.
/// (1038212.0, "Hz") -> "1.04 MHz" at 3 digits. `decimals` selects
/// fixed-point output and overrides `digits`.
pub fn to_display_string(
    number: f64,
    unit: &str,
    digits: Option<usize>,
    decimals: Option<usize>,
    ascii_only: bool,
) -> String {
    let (value, unit) = standardize(number, unit, ascii_only, None);
    join_unit(format_number(value, digits, decimals), &unit)
}

/* Kilograms take no prefix: other powers of the gram become g or t. */
fn regroup_mass(step: i32, unit: &str) -> (i32, &str) {
    let grams = match unit {
        "g" => step,
        "kg" => step + 3,
        "t" => step + 6,
        _ => return (step, unit),
    };
    match grams {
        3 => (0, "kg"),
        6.. => (grams - 6, "t"),
        _ => (grams, "g"),
    }
}
