/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Number formatting for quantity display.

/// Format `x` with `digits` significant digits in "general" notation:
/// fixed-point for moderate exponents, scientific otherwise, without
/// trailing zeros (1234.5 -> "1234.5", 1.5e-7 -> "1.5e-07").
pub fn format_general(x: f64, digits: usize) -> String {
    if x.is_nan() {
        return String::from("nan");
    }
    if x.is_infinite() {
        return String::from(match x < 0.0 {
            true => "-inf",
            false => "inf",
        });
    }
    if x == 0.0 {
        return String::from(match x.is_sign_negative() {
            true => "-0",
            false => "0",
        });
    }

    let digits = digits.max(1);
    let sci = format!("{:.*e}", digits - 1, x);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exponent < -4 || exponent >= digits as i32 {
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            if exponent < 0 { '-' } else { '+' },
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, x)).to_string()
    }
}

/// Format a number for display next to a (prefixed) unit.
///
/// With `decimals`, the number is printed in fixed-point notation.
/// Otherwise, `digits` is the total number of digits to show: values
/// within rounding distance of an integer are printed as integers,
/// everything else with as many decimals as the digits allow.
pub fn format_number(
    value: f64,
    digits: Option<usize>,
    decimals: Option<usize>,
) -> String {
    if let Some(decimals) = decimals {
        return format!("{:.*}", decimals, value);
    }

    match digits {
        Some(digits) if value != 0.0 && value.is_finite() => {
            let magnitude = value.abs();
            let predigits = (magnitude.log10().floor() as i64 + 1).max(0);
            let postdigits = (digits as i64 - predigits).max(0) as usize;
            let delta = (value.round() - value).abs();
            let tolerance = 5.0 * 10f64.powi(-(postdigits as i32) - 1);

            if magnitude > 1.0 && delta <= tolerance {
                format!("{:.0}", value.round())
            } else if !(1e-24..=1e27).contains(&magnitude) {
                format_general(value, postdigits)
            } else {
                format!("{:.*}", postdigits, value)
            }
        }
        _ => format_general(value, 6),
    }
}

/// Join a number and a unit, leaving out the separator for blank
/// units.
pub fn join_unit(number: String, unit: &str) -> String {
    match unit.is_empty() {
        true => number,
        false => format!("{} {}", number, unit),
    }
}

fn trim_fraction(s: &str) -> &str {
    match s.contains('.') {
        true => s.trim_end_matches('0').trim_end_matches('.'),
        false => s,
    }
}
