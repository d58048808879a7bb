/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::f64::consts::PI;

use approx::assert_relative_eq;
use num::complex::Complex64;

use si_unit::list;
use si_unit::{Dimension, Magnitude, Quantity, UnitError, Value};

fn q(s: &str) -> Quantity {
    Quantity::parse(s).unwrap()
}

fn dim(s: &str) -> Dimension {
    Dimension::parse(s).unwrap()
}

#[test]
fn resonance_frequency() {
    let lc = (q("5 mH") * q("4.7 pF")).unwrap();
    assert_eq!(lc.dimension(), dim("s**2"));

    let f = (lc.powf(-0.5).unwrap() / (2.0 * PI)).unwrap();
    let f = f.into_quantity().unwrap();
    assert_eq!(f.dimension(), dim("Hz"));
    assert_relative_eq!(f.to_f64().unwrap(), 1.038212e6, max_relative = 1e-6);
    assert_eq!(f.to_string(), "1.03821 MHz");
    assert_eq!(f.clone().with_digits(3).to_string(), "1.04 MHz");
    assert_eq!(format!("{:.1}", f), "1.0 MHz");
}

#[test]
fn construction() {
    let r = q("3.3 kΩ");
    assert_eq!(r.value(), Magnitude::Real(3300.0));
    assert_eq!(r.dimension(), dim("Ω"));
    assert_eq!(r.unit(), "Ω");
    assert_eq!(r.clone().with_ascii_only(true).unit(), "Ohm");

    assert_eq!(q("2 t"), Quantity::new(2000.0, "kg").unwrap());
    assert_eq!(Quantity::new(5.0, "mV").unwrap(), q("0.005 V"));
    assert_eq!(Quantity::new(1.0, "km**2").unwrap(), q("1e6 m**2"));
    assert_eq!(q("9.81 m / s**2").dimension(), dim("m / s**2"));
    assert_eq!(q("9.81 m / s**2").value(), Magnitude::Real(9.81));
    assert_eq!(
        Quantity::with_dimension(1.5, dim("N")),
        Quantity::new(1.5, "kg m / s**2").unwrap()
    );
    assert!(q("42").is_dimensionless());
    assert_eq!("3 A".parse::<Quantity>().unwrap(), q("3 A"));
}

#[test]
fn construction_errors() {
    assert_eq!(
        Quantity::parse("3 furlong"),
        Err(UnitError::UnknownUnit(String::from("furlong")))
    );
    assert!(matches!(
        Quantity::parse("three V"),
        Err(UnitError::ParseError(_))
    ));
    assert!(matches!(
        Quantity::parse("1 m / s / s"),
        Err(UnitError::ParseError(_))
    ));
    assert_eq!(
        Quantity::parse_as("3 A", dim("V")),
        Err(UnitError::UnexpectedDimension {
            expected: dim("V"),
            found: dim("A")
        })
    );
    assert_eq!(Quantity::parse_as("3 mV", dim("V")).unwrap(), q("0.003 V"));
}

#[test]
fn zero_rules() {
    let zero_volt = Quantity::new(0.0, "V").unwrap();
    assert!(zero_volt == 0.0);
    assert_eq!((zero_volt.clone() + 0.0).unwrap(), Value::from(q("0 V")));
    assert_eq!(
        (zero_volt.clone() + Quantity::new(0.0, "A").unwrap()).unwrap_err(),
        UnitError::Conversion(dim("V"), dim("A"))
    );
    assert!(!zero_volt.is_nonzero());
    assert!(q("1 V") != 1.0);
    assert!(q("1") == 1.0);
}

#[test]
fn addition() {
    let sum = (q("1 V") + q("500 mV")).unwrap();
    assert_eq!(sum, Value::from(q("1.5 V")));

    let diff = (q("1 V") - q("250 mV")).unwrap();
    assert_eq!(diff, Value::from(q("0.75 V")));

    assert!(matches!(q("1 V") + q("1 A"), Err(UnitError::Conversion(_, _))));
    assert!(matches!(q("1 V") + 1.0, Err(UnitError::Conversion(_, _))));
    assert!(matches!(1.0 - q("1 V"), Err(UnitError::Conversion(_, _))));

    assert_eq!((q("3") + 2.0).unwrap(), Value::from(5.0));
    assert_eq!((0.0 - q("2 V")).unwrap(), Value::from(q("-2 V")));
    assert_eq!((10.0 - q("4")).unwrap(), Value::from(6.0));
}

#[test]
fn digits_of_combined_results() {
    let a = q("1 V").with_digits(3);
    let b = q("2 V").with_digits(8);
    let sum = (a.clone() + b).unwrap().into_quantity().unwrap();
    assert_eq!(sum.digits(), 8);
    let product = (a * q("1 A")).unwrap().into_quantity().unwrap();
    assert_eq!(product.digits(), 6);
}

#[test]
fn multiplication_and_collapse() {
    let p = (q("2 V") * q("3 A")).unwrap();
    assert_eq!(p, Value::from(q("6 W")));

    let ratio = (q("6 m") / q("2 m")).unwrap();
    assert!(matches!(ratio, Value::Number(_)));
    assert_eq!(ratio, Value::from(3.0));

    let one = (q("2 s") * q("5 Hz")).unwrap();
    assert_eq!(one, Value::from(10.0));

    assert_eq!((q("2 V") * 3.0).unwrap(), Value::from(q("6 V")));
    assert_eq!((3.0 * q("2 V")).unwrap(), Value::from(q("6 V")));
    assert_eq!((q("6 V") / 3.0).unwrap(), Value::from(q("2 V")));

    let inverse = (1.0 / q("4 s")).unwrap();
    assert_eq!(inverse, Value::from(q("0.25 Hz")));

    let chained = ((q("2 V") * q("3 A")).unwrap() / q("6 W")).unwrap();
    assert_eq!(chained, Value::from(1.0));
}

#[test]
fn powers() {
    assert_eq!(q("3 m").powi(2).unwrap(), Value::from(q("9 m**2")));
    assert_eq!(q("3 m").powf(0.0).unwrap(), Value::from(1.0));
    assert_eq!(q("3 m").pow(&Value::from(q("0 V"))).unwrap(), 1.0);
    assert_eq!(Value::from(2.0).pow(&q("0 A").into()).unwrap(), 1.0);
    assert_eq!(
        q("3 m").pow(&Value::from(q("2 V"))).unwrap_err(),
        UnitError::Conversion(dim("V"), Dimension::DIMENSIONLESS)
    );
    assert_eq!(
        Quantity::from(2.0).powf(f64::INFINITY).unwrap(),
        Value::from(f64::INFINITY)
    );
    assert!(matches!(
        q("2 m").powf(f64::INFINITY),
        Err(UnitError::Pow(_, _))
    ));
    assert_eq!(q("4 m**2").sqrt().unwrap(), Value::from(q("2 m")));
    assert_eq!(q("4 Ω").sqrt().unwrap_err(), UnitError::Pow(dim("Ω"), 0.5));
    assert_eq!(
        q("2 m").pow(&Value::from(q("3"))).unwrap(),
        Value::from(q("8 m**3"))
    );

    let root = q("-4").sqrt().unwrap();
    match root {
        Value::Number(Magnitude::Complex(c)) => {
            assert_relative_eq!(c.re, 0.0, epsilon = 1e-12);
            assert_relative_eq!(c.im, 2.0, epsilon = 1e-12);
        }
        other => panic!("expected a complex number, got {}", other),
    }
}

#[test]
fn abs_and_negation() {
    assert_eq!(q("-3 V").abs(), Value::from(q("3 V")));
    assert_eq!(-q("3 V"), Value::from(q("-3 V")));
    assert_eq!(-q("3"), Value::from(-3.0));

    let c = Quantity::with_dimension(Complex64::new(3.0, 4.0), dim("V"));
    assert_eq!(c.abs(), Value::from(q("5 V")));
}

#[test]
fn comparisons() {
    assert!(q("1 V").lt(&q("2 V")).unwrap());
    assert!(q("2 V").ge(&q("2 V")).unwrap());
    assert!(q("1 mV").gt(0.0).unwrap());
    assert!(q("-1 mV").le(0.0).unwrap());
    assert!(q("3").gt(2.0).unwrap());
    assert!(matches!(q("1 V").lt(&q("1 A")), Err(UnitError::Conversion(_, _))));
    assert!(matches!(q("1 V").lt(1.0), Err(UnitError::Conversion(_, _))));

    let c = Quantity::with_dimension(Complex64::new(1.0, 1.0), dim("V"));
    assert!(matches!(c.lt(&q("1 V")), Err(UnitError::TypeError(_))));
}

#[test]
fn equality_ignores_presentation() {
    assert_eq!(q("1 V").with_digits(2), q("1 V").with_ascii_only(true));
    assert_ne!(q("1 V"), q("1 A"));
    assert_ne!(q("1 V"), q("2 V"));
}

#[test]
fn in_place_operations() {
    let mut v = q("1 V");
    v.try_add_assign(&q("500 mV")).unwrap();
    assert_eq!(v, q("1.5 V"));
    v *= 2.0;
    assert_eq!(v, q("3 V"));
    v /= 3.0;
    assert_eq!(v, q("1 V"));

    assert!(v.try_sub_assign(&q("1 A")).is_err());
    assert_eq!(v, q("1 V"));

    let mut x = Value::from(q("2 V"));
    x.try_mul_assign(&q("3 A")).unwrap();
    assert_eq!(x, Value::from(q("6 W")));
    x.try_div_assign(&q("6 W")).unwrap();
    assert_eq!(x, Value::from(1.0));
    x.try_add_assign(1.0).unwrap();
    assert_eq!(x, Value::from(2.0));

    let mut y = Value::from(q("2 V"));
    assert!(y.try_add_assign(1.0).is_err());
    assert_eq!(y, Value::from(q("2 V")));
    y.try_mul_assign(2.0).unwrap();
    assert_eq!(y, Value::from(q("4 V")));
    assert_eq!(y.as_quantity(), Some(&q("4 V")));

    let mut unitless = Value::from(Quantity::from(2.0));
    unitless.try_mul_assign(3.0).unwrap();
    assert!(matches!(unitless, Value::Number(_)));
    assert_eq!(unitless.as_number(), Some(Magnitude::Real(6.0)));

    let mut unitless = Value::from(Quantity::from(6.0));
    unitless.try_div_assign(2.0).unwrap();
    assert!(matches!(unitless, Value::Number(_)));
    assert_eq!(unitless, 3.0);
}

#[test]
fn magnitudes() {
    assert!(Magnitude::Real(2.0).is_real());
    assert_eq!(Magnitude::Real(9.0).sqrt(), Magnitude::Real(3.0));
    let root = Magnitude::Real(-9.0).sqrt();
    assert!(!root.is_real());
    assert_relative_eq!(root.to_complex().im, 3.0, epsilon = 1e-12);
    assert!(root.to_real().is_err());
}

#[test]
fn display() {
    assert_eq!(q("3.3 kΩ").to_string(), "3.30000 kΩ");
    assert_eq!(q("3.3 kΩ").with_digits(2).to_string(), "3.3 kΩ");
    assert_eq!(q("3.3 kΩ").with_ascii_only(true).to_string(), "3.30000 kOhm");
    assert_eq!(q("0.5 kg").with_digits(3).to_string(), "500 g");
    assert_eq!(q("9.81 m / s**2").to_string(), "9.81 m / s**2");
    assert_eq!(q("42").to_string(), "42");
    assert_eq!(q("2 V").with_precision(Some(2)).to_string(), "2.00 V");
    assert_eq!(
        q("1.5 V").with_print_unit("mV").unwrap().to_string(),
        "1500 mV"
    );
    assert!(matches!(
        q("1.5 V").with_print_unit("mA"),
        Err(UnitError::UnexpectedDimension { .. })
    ));
}

#[test]
fn standardized_values() {
    assert_eq!(q("3.3 kΩ").standardized().unwrap(), (3.3, "kΩ".into()));
    assert_eq!(q("0.5 kg").standardized().unwrap(), (500.0, "g".into()));
}

#[test]
fn lists() {
    let items = [Value::from(q("1 mV")), Value::from(0.0), q("3 mV").into()];
    let values = list::values(&items).unwrap();
    assert_eq!(values.len(), 3);
    assert_relative_eq!(list::floats(&items).unwrap()[2], 0.003);

    let (numbers, unit) = list::standardized(&items).unwrap();
    assert_eq!(unit, "mV");
    assert_relative_eq!(numbers[0], 1.0);
    assert_eq!(numbers[1], 0.0);
    assert_relative_eq!(numbers[2], 3.0);

    let mixed = [Value::from(q("1 mV")), Value::from(q("3 kV"))];
    let (numbers, unit) = list::standardized(&mixed).unwrap();
    assert_eq!(unit, "V");
    assert_relative_eq!(numbers[1], 3000.0);

    let zeros = [Value::from(0.0), Value::from(q("0 V"))];
    assert_eq!(
        list::standardized(&zeros).unwrap(),
        (vec![0.0, 0.0], String::new())
    );

    assert!(matches!(
        list::values(&[Value::from(1.0)]),
        Err(UnitError::TypeError(_))
    ));
    assert!(matches!(
        list::standardized(&[q("1 V").into(), q("1 A").into()]),
        Err(UnitError::Conversion(_, _))
    ));
}
