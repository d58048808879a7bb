/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use log::trace;
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, i32 as int, space1},
    combinator::{all_consuming, map, opt, value},
    multi::separated_list1,
    number::complete::double,
    sequence::{preceded, tuple},
    IResult,
};

use super::UnitError;

/// A single token of a unit expression.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Token<'a> {
    /// The literal "1", as in "1 / s".
    One,
    /// The "/" separating numerator and denominator.
    Over,
    /// A unit symbol with its (integer) power.
    Term(&'a str, i32),
}

/// Parse a numeric literal. The whole input must be consumed.
pub fn parse_number(input: &str) -> Result<f64, UnitError> {
    match all_consuming(number)(input.trim()) {
        Ok((_, n)) => Ok(n),
        Err(_) => Err(UnitError::ParseError(format!(
            "invalid numeric literal: {:?}",
            input
        ))),
    }
}

/// Split a "value unit" string into its number and its unit tokens.
pub fn parse_quantity_tokens(
    input: &str,
) -> Result<(f64, Vec<&str>), UnitError> {
    let mut tokens = input.split_whitespace();
    let number = match tokens.next() {
        Some(token) => parse_number(token)?,
        None => {
            return Err(UnitError::ParseError(String::from(
                "empty quantity string",
            )))
        }
    };
    Ok((number, tokens.collect()))
}

/// Check the number of '/' separators and drop the grouping
/// parentheses, which carry no meaning.
pub fn strip_grouping(input: &str) -> Result<String, UnitError> {
    if input.matches('/').count() > 1 {
        return Err(UnitError::ParseError(format!(
            "can only use one '/' in {:?}; use parentheses to group \
             numerator and denominator",
            input
        )));
    }
    Ok(input.chars().filter(|c| !matches!(c, '(' | ')')).collect())
}

/// Tokenize a unit expression such as "kg m**2 / s**3".
pub fn parse_unit_tokens(input: &str) -> Result<Vec<Token<'_>>, UnitError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Vec::new());
    }

    match all_consuming(separated_list1(space1, token))(input) {
        Ok((_, tokens)) => {
            trace!("unit expression {:?}: {:?}", input, tokens);
            Ok(tokens)
        }
        Err(err) => Err(UnitError::ParseError(format!(
            "malformed unit expression {:?}: {}",
            input, err
        ))),
    }
}

/// Split a single unit token into its symbol and power ("km**2" ->
/// ("km", 2)). Returns None if the token is not of that form.
pub fn split_power(input: &str) -> Option<(&str, i32)> {
    all_consuming(term)(input).ok().map(|(_, t)| t)
}

/// Parser for a unit symbol with an optional "**<int>" power.
pub fn term(input: &str) -> IResult<&str, (&str, i32)> {
    let (input, (symbol, power)) = tuple((symbol, opt(power)))(input)?;
    Ok((input, (symbol, power.unwrap_or(1))))
}

fn number(input: &str) -> IResult<&str, f64> {
    double(input)
}

fn token(input: &str) -> IResult<&str, Token<'_>> {
    alt((
        value(Token::Over, char('/')),
        value(Token::One, char('1')),
        map(term, |(symbol, power)| Token::Term(symbol, power)),
    ))(input)
}

fn symbol(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphabetic())(input)
}

fn power(input: &str) -> IResult<&str, i32> {
    preceded(tag("**"), int)(input)
}
