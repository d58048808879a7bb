/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::process;

use clap::Parser;
use log::{debug, info, trace};

use si_unit::{
    Dimension, NamedUnit, Quantity, QuantityOptions, UnitError, DEFAULT_DIGITS,
};

#[derive(Parser, Debug)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
/// SI quantity calculator
///
/// Parses quantities ("3.3 kΩ", "9.81 m / s**2") and prints them with
/// the best fitting SI prefix, or parses unit expressions and prints
/// their canonical form.
struct Args {
    /// Increase verbosity. Every additional v increases the verbosity
    /// by one stage. Log messages are sent to stderr.
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    verbosity: u8,
    /// Treat the inputs as unit expressions.
    #[clap(long, short)]
    dimension: bool,
    /// Only output ASCII characters ("u" and "Ohm").
    #[clap(long, short)]
    ascii: bool,
    /// Number of significant digits to print.
    #[clap(long, default_value_t = DEFAULT_DIGITS)]
    digits: usize,
    /// Output a JSON representation.
    #[clap(long, short)]
    json: bool,
    /// The quantities or units to parse.
    #[clap(required = true)]
    input: Vec<String>,
}

impl Args {
    fn init_logger(&self) {
        if let Err(e) = simplelog::TermLogger::init(
            match self.verbosity {
                0 => simplelog::LevelFilter::Info,
                1 => simplelog::LevelFilter::Debug,
                2.. => simplelog::LevelFilter::Trace,
            },
            simplelog::ConfigBuilder::new().build(),
            simplelog::TerminalMode::Stderr,
            simplelog::ColorChoice::Auto,
        ) {
            eprintln!("Error: failed to initialize logging: {}", e);
            process::exit(1);
        }
    }

    fn options(&self) -> QuantityOptions {
        QuantityOptions {
            digits: self.digits,
            ascii_only: self.ascii,
            ..QuantityOptions::default()
        }
    }

    fn process(&self, input: &str) -> Result<String, UnitError> {
        match self.dimension {
            true => {
                let dimension = Dimension::parse(input)?;
                debug!(
                    "{:?} encodes as {}/{}",
                    input,
                    dimension.numerator(),
                    dimension.denominator()
                );
                for (base, exponent) in dimension.exponents() {
                    if exponent != 0 {
                        trace!(
                            "{} ({}): {}",
                            base.name(),
                            base.quantity(),
                            exponent
                        );
                    }
                }
                match self.json {
                    true => Ok(to_json(&dimension)),
                    false => Ok(format!(
                        "{}\t(inverse: {})",
                        dimension.render(self.ascii),
                        dimension.recip().render(self.ascii)
                    )),
                }
            }
            false => {
                let quantity = Quantity::parse_with(input, self.options())?;
                match self.json {
                    true => Ok(to_json(&quantity)),
                    false => Ok(quantity.to_string()),
                }
            }
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|e| format!("{{\"error\":{:?}}}", e.to_string()))
}

fn main() {
    let args = Args::parse();
    args.init_logger();

    let mut failed = 0;
    for input in &args.input {
        match args.process(input) {
            Ok(output) => println!("{}", output),
            Err(e) => {
                eprintln!("Error: {}: {}", input, e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        info!("{} of {} inputs failed", failed, args.input.len());
        process::exit(1);
    }
}
