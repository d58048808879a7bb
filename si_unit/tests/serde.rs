/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use num::complex::Complex64;
use serde::de::DeserializeSeed;
use serde_json::json;

use si_unit::{
    Dimension, Magnitude, Quantity, QuantityOptions, QuantitySeed, Value,
};

fn q(s: &str) -> Quantity {
    Quantity::parse(s).unwrap()
}

fn dim(s: &str) -> Dimension {
    Dimension::parse(s).unwrap()
}

#[test]
fn quantity_serializes_as_object() {
    assert_eq!(
        serde_json::to_value(q("3.3 kΩ")).unwrap(),
        json!({ "value": 3300.0, "unit": "Ω" })
    );
    assert_eq!(
        serde_json::to_value(q("9.81 m / s**2")).unwrap(),
        json!({ "value": 9.81, "unit": "m / s**2" })
    );
    assert_eq!(
        serde_json::to_value(q("3.3 kΩ").with_digits(3).with_ascii_only(true))
            .unwrap(),
        json!({
            "value": 3300.0,
            "unit": "Ohm",
            "options": { "digits": 3, "ascii_only": true }
        })
    );
}

#[test]
fn quantity_deserializes_from_all_forms() {
    let from_text: Quantity = serde_json::from_value(json!("3.3 kΩ")).unwrap();
    assert_eq!(from_text, q("3300 Ω"));

    let from_number: Quantity = serde_json::from_value(json!(5)).unwrap();
    assert_eq!(from_number, 5.0);
    assert!(from_number.is_dimensionless());

    let from_object: Quantity =
        serde_json::from_value(json!({ "value": 4.7, "unit": "pF" }))
            .unwrap();
    assert_eq!(from_object.dimension(), dim("F"));
    assert_eq!(from_object.to_string(), "4.70000 pF");

    let compound: Quantity =
        serde_json::from_value(json!({ "value": 2, "unit": "kg m / s**2" }))
            .unwrap();
    assert_eq!(compound, Quantity::with_dimension(2.0, dim("N")));
}

#[test]
fn quantity_deserialization_errors() {
    assert!(serde_json::from_value::<Quantity>(json!("3 parsec")).is_err());
    assert!(serde_json::from_value::<Quantity>(json!(true)).is_err());
    assert!(serde_json::from_value::<Quantity>(
        json!({ "value": 1, "unit": "m / s / s" })
    )
    .is_err());
    assert!(serde_json::from_value::<Quantity>(json!({
        "value": 1.5,
        "unit": "V",
        "options": { "print_unit": "mA" }
    }))
    .is_err());
}

#[test]
fn options_survive_a_round_trip() {
    let quantity = q("1.5 V")
        .with_digits(3)
        .with_precision(Some(1))
        .with_print_unit("mV")
        .unwrap();
    let json = serde_json::to_string(&quantity).unwrap();
    let back: Quantity = serde_json::from_str(&json).unwrap();
    assert_eq!(back, quantity);
    assert_eq!(back.options(), quantity.options());
    assert_eq!(back.to_string(), "1500.0 mV");

    let options: QuantityOptions =
        serde_json::from_value(json!({ "precision": 2 })).unwrap();
    assert_eq!(options.digits, si_unit::DEFAULT_DIGITS);
    assert!(!options.ascii_only);
    assert_eq!(options.precision, Some(2));
}

#[test]
fn complex_magnitudes() {
    let c = Magnitude::Complex(Complex64::new(1.0, -2.0));
    assert_eq!(
        serde_json::to_value(c).unwrap(),
        json!({ "re": 1.0, "im": -2.0 })
    );
    assert_eq!(serde_json::to_value(Magnitude::Real(2.5)).unwrap(), json!(2.5));
    assert_eq!(
        serde_json::from_value::<Magnitude>(json!({ "re": 1, "im": -2 }))
            .unwrap(),
        c
    );

    let quantity = Quantity::with_dimension(c, dim("V"));
    let json = serde_json::to_value(&quantity).unwrap();
    assert_eq!(
        json,
        json!({ "value": { "re": 1.0, "im": -2.0 }, "unit": "V" })
    );
    assert_eq!(serde_json::from_value::<Quantity>(json).unwrap(), quantity);
}

#[test]
fn values_are_untagged() {
    assert_eq!(serde_json::to_value(Value::from(2.0)).unwrap(), json!(2.0));
    assert_eq!(
        serde_json::to_value(Value::from(q("2 V"))).unwrap(),
        json!({ "value": 2.0, "unit": "V" })
    );

    let number: Value = serde_json::from_value(json!(3.5)).unwrap();
    assert!(matches!(number, Value::Number(Magnitude::Real(_))));

    let text: Value = serde_json::from_value(json!("2 mA")).unwrap();
    assert_eq!(text, Value::from(q("0.002 A")));

    let object: Value =
        serde_json::from_value(json!({ "value": 2, "unit": "W" })).unwrap();
    assert_eq!(object, Value::from(q("2 W")));
}

#[test]
fn seed_accepts_matching_units() {
    let volt = dim("V");

    let q1 = QuantitySeed(volt).deserialize(json!("3 mV")).unwrap();
    assert_eq!(q1, q("0.003 V"));

    let q2 = QuantitySeed(volt)
        .deserialize(json!({ "value": 230, "unit": "V", "comment": "mains" }))
        .unwrap();
    assert_eq!(q2, q("230 V"));

    let text = "\"12 kg m**2 / (s**3 A)\"";
    let mut de = serde_json::Deserializer::from_str(text);
    let q3 = QuantitySeed(volt).deserialize(&mut de).unwrap();
    assert_eq!(q3, q("12 V"));

    let unitless = QuantitySeed(Dimension::DIMENSIONLESS)
        .deserialize(json!(-7))
        .unwrap();
    assert_eq!(unitless, -7.0);
}

#[test]
fn seed_rejects_other_units() {
    let volt = dim("V");
    assert!(QuantitySeed(volt).deserialize(json!("3 A")).is_err());
    assert!(QuantitySeed(volt).deserialize(json!(3)).is_err());
    assert!(QuantitySeed(volt)
        .deserialize(json!({ "value": 1, "unit": "Ω" }))
        .is_err());
    assert!(QuantitySeed(volt).deserialize(json!({ "unit": "V" })).is_err());
    assert!(QuantitySeed(volt).deserialize(json!([1, "V"])).is_err());

    let err = QuantitySeed(volt).deserialize(json!("3 A")).unwrap_err();
    assert!(err.to_string().contains("Expected a quantity in V, got A"));
}
