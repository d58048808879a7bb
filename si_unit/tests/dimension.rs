/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use si_unit::{BaseUnit, DerivedUnit, Dimension, NamedUnit, UnitError};

fn dim(s: &str) -> Dimension {
    Dimension::parse(s).unwrap()
}

#[test]
fn parse_base_and_derived() {
    assert_eq!(dim("m"), Dimension::from(BaseUnit::Meter));
    assert_eq!(dim("kg m / s**2"), dim("N"));
    assert_eq!(dim("kg m**2 / (s**3 A)"), dim("V"));
    assert_eq!(dim("Ohm"), dim("Ω"));
    assert_eq!(dim("1 / s"), dim("Hz"));
    assert_eq!(dim("s**-1"), dim("Hz"));
    assert_eq!(dim(""), Dimension::DIMENSIONLESS);
    assert_eq!(dim("  kg   m  "), dim("m kg"));
    assert_eq!(dim("N").numerator(), 6);
    assert_eq!(dim("N").denominator(), 25);
}

#[test]
fn derived_table_is_consistent() {
    for unit in DerivedUnit::LIST {
        let (num, den) = unit.ratio();
        let d = Dimension::new(num, den).unwrap();
        assert_eq!(d, dim(unit.symbol()));
        assert_eq!(d.symbol(), Some(unit.symbol()));
    }
}

#[test]
fn unit_names() {
    assert_eq!(BaseUnit::Candela.name(), "candela");
    assert_eq!(BaseUnit::Mole.quantity(), "amount of substance");
    assert_eq!(BaseUnit::from_prime(11), Some(BaseUnit::Kelvin));
    assert_eq!(BaseUnit::from_prime(19), None);
    assert_eq!(DerivedUnit::from_symbol("Ω").map(|u| u.name()), Some("ohm"));
}

#[test]
fn parse_errors() {
    assert_eq!(
        Dimension::parse("furlong"),
        Err(UnitError::UnknownUnit(String::from("furlong")))
    );
    assert!(matches!(
        Dimension::parse("m / s / s"),
        Err(UnitError::ParseError(_))
    ));
    assert!(matches!(
        Dimension::parse("m**"),
        Err(UnitError::ParseError(_))
    ));
    assert!(matches!(Dimension::new(19, 1), Err(UnitError::ParseError(_))));
}

#[test]
fn multiplication_and_division() {
    assert_eq!((dim("V") * dim("A")).unwrap(), dim("W"));
    assert_eq!((dim("J") / dim("s")).unwrap(), dim("W"));
    assert_eq!((dim("H") * dim("F")).unwrap(), dim("s**2"));
    assert_eq!((dim("m") / dim("m")).unwrap(), Dimension::DIMENSIONLESS);

    let (a, b, c) = (dim("N"), dim("Ω"), dim("cd"));
    assert_eq!((a * b).unwrap(), (b * a).unwrap());
    assert_eq!(
        ((a * b).unwrap() * c).unwrap(),
        (a * (b * c).unwrap()).unwrap()
    );
}

#[test]
fn inverse_law() {
    for s in ["m", "N", "Ω", "lx", "kg m**2 / (s**3 A)"] {
        let d = dim(s);
        assert!((d * d.powi(-1).unwrap()).unwrap().is_dimensionless());
        assert_eq!(d.recip(), d.powi(-1).unwrap());
    }
}

#[test]
fn powers() {
    let hf = (dim("H") * dim("F")).unwrap();
    assert_eq!(hf.powf(0.5).unwrap(), dim("s"));
    assert_eq!(hf.powf(-0.5).unwrap(), dim("Hz"));
    assert_eq!(hf.powf(0.5).unwrap().to_string(), "s");
    assert_eq!(hf.powf(-0.5).unwrap().to_string(), "Hz");

    assert_eq!(dim("Ω").powi(2).unwrap(), dim("V**2 / A**2"));
    assert_eq!(
        dim("Ω").powf(0.5),
        Err(UnitError::Pow(dim("Ω"), 0.5))
    );
    assert_eq!(dim("m").powi(0).unwrap(), Dimension::DIMENSIONLESS);
    assert_eq!(
        Dimension::DIMENSIONLESS.powf(0.3).unwrap(),
        Dimension::DIMENSIONLESS
    );
    assert_eq!(dim("m**6").powf(1.0 / 3.0).unwrap(), dim("m**2"));
}

#[test]
fn overflow_is_an_error() {
    let big = dim("cd").powi(15).unwrap();
    assert!(matches!(big * big, Err(UnitError::Mul(_, _))));
    assert!(matches!(big / big.recip(), Err(UnitError::Div(_, _))));
    assert!(matches!(dim("cd").powi(100), Err(UnitError::Pow(_, _))));
}

#[test]
fn exponents() {
    let v = dim("V");
    assert_eq!(v.exponent(BaseUnit::Kilogram), 1);
    assert_eq!(v.exponent(BaseUnit::Meter), 2);
    assert_eq!(v.exponent(BaseUnit::Second), -3);
    assert_eq!(v.exponent(BaseUnit::Ampere), -1);
    assert_eq!(v.exponents().filter(|(_, e)| *e != 0).count(), 4);
}

#[test]
fn rendering() {
    assert_eq!(dim("kg m / s**2").to_string(), "N");
    assert_eq!(dim("1 / Ω").to_string(), "S");
    assert_eq!(dim("1 / N").to_string(), "1 / N");
    assert_eq!(dim("m**2").to_string(), "m**2");
    assert_eq!(dim("m / s").to_string(), "m / s");
    assert_eq!(dim("m / s**2").to_string(), "m / s**2");
    assert_eq!(dim("m**2 / (kg s)").to_string(), "m**2 / (kg s)");
    assert_eq!(dim("1 / m**2").to_string(), "1 / m**2");
    assert_eq!(dim("Ω").render(true), "Ohm");
    assert_eq!(dim("Ω").to_ascii_string(), "Ohm");
    assert_eq!(Dimension::DIMENSIONLESS.to_string(), "");
}

#[test]
fn serde() {
    assert_eq!(serde_json::to_string(&dim("V")).unwrap(), "\"V\"");
    assert_eq!(
        serde_json::from_str::<Dimension>("\"kg m / s**2\"").unwrap(),
        dim("N")
    );
    assert!(serde_json::from_str::<Dimension>("\"parsec\"").is_err());
}
