/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use log::trace;

use super::si_prefix::{scale10, SiPrefix};
use crate::base_unit::{is_unit_symbol, OHM_ASCII};
use crate::parser::{parse_number, split_power};
use crate::UnitError;

/// Mass units that are accepted on input but stored as kg.
const GRAM: &str = "g";
const TONNE: &str = "t";
const KILOGRAM: &str = "kg";

/// Split a "value unit" string into a number in base units and its
/// base unit. A lone number is returned with a blank unit.
pub fn from_string(
    input: &str,
    ascii_only: bool,
) -> Result<(f64, String), UnitError> {
    let tokens = input.split_whitespace().collect::<Vec<_>>();
    match tokens.as_slice() {
        [number] => Ok((parse_number(number)?, String::new())),
        [number, unit] => {
            Ok(normalize(parse_number(number)?, unit, ascii_only))
        }
        _ => Err(UnitError::ParseError(format!(
            "malformed quantity string: {:?}",
            input
        ))),
    }
}

/// Convert a number with a (possibly prefixed) unit token to base
/// units, e.g. (3.3, "kΩ") -> (3300, "Ω") and (2, "t") -> (2000, "kg").
pub fn normalize(value: f64, unit: &str, ascii_only: bool) -> (f64, String) {
    let (power, base) = normalize_unit(unit, ascii_only);
    (scale10(value, power), base)
}

/// The power of ten contained in a prefixed unit token and the
/// token's base unit.
pub fn normalize_unit(unit: &str, ascii_only: bool) -> (i32, String) {
    let unit = unit.trim();
    let (symbol, exponent) = match unit.contains("**") {
        true => match split_power(unit) {
            Some((symbol, exponent)) => (symbol, Some(exponent)),
            None => (unit, None),
        },
        false => (unit, None),
    };

    let (power, base) = strip_prefix(symbol);
    let (power, base) = match base {
        GRAM => (power - 3, KILOGRAM),
        TONNE => (power + 3, KILOGRAM),
        base => (power, base),
    };
    let base = match base {
        "Ω" if ascii_only => OHM_ASCII,
        OHM_ASCII if !ascii_only => "Ω",
        base => base,
    };

    let result = match exponent {
        Some(exponent) => {
            (power * exponent, format!("{}**{}", base, exponent))
        }
        None => (power, base.to_string()),
    };
    trace!("normalized unit {:?} to 10^{} {:?}", unit, result.0, result.1);
    result
}

/// Whether the token is a unit on its own (and thus never carries a
/// prefix). Gram and tonne are included so that "mg" and "kt" work.
pub(crate) fn is_plain_symbol(symbol: &str) -> bool {
    is_unit_symbol(symbol) || symbol == GRAM || symbol == TONNE
}

fn strip_prefix(symbol: &str) -> (i32, &str) {
    if symbol.is_empty() || is_plain_symbol(symbol) {
        return (0, symbol);
    }

    let mut chars = symbol.chars();
    let prefix = chars.next().and_then(SiPrefix::from_symbol);
    let rest = chars.as_str();
    match prefix {
        Some(SiPrefix::Centi) if rest != "m" => (0, symbol),
        Some(_) if rest == KILOGRAM => (0, symbol),
        Some(prefix) if is_plain_symbol(rest) => (prefix.power(), rest),
        _ => (0, symbol),
    }
}
