//! Plane angle

use std::f64::consts::PI;

use measura_core::{unit_enum, Quantity, QuantityKind, Scale, SymbolRules};

unit_enum! {
    pub enum AngleUnit {
        kind: QuantityKind::Angle,
        base: Radian,
        default: Radian,
        rules: SymbolRules::BASIC
            .with_synonyms(&[
                ("radian", "rad"),
                ("radians", "rad"),
                ("grad", "gon"),
                ("gradian", "gon"),
                ("gradians", "gon"),
                ("revolution", "rev"),
                ("revolutions", "rev"),
                ("turn", "rev"),
                ("turns", "rev"),
            ])
            .with_degrees(),
        units: {
            Radian => ("rad", Scale::IDENTITY),
            Degree => ("°", Scale::linear(PI / 180.0)),
            Gon => ("gon", Scale::linear(PI / 200.0)),
            Revolution => ("rev", Scale::linear(2.0 * PI)),
        }
    }
}

pub type Angle = Quantity<AngleUnit>;

#[cfg(test)]
mod tests {
    use super::*;
    use measura_core::Unit;
    use rstest::rstest;

    #[rstest]
    #[case("rad", AngleUnit::Radian)]
    #[case("Radians", AngleUnit::Radian)]
    #[case("°", AngleUnit::Degree)]
    #[case("deg", AngleUnit::Degree)]
    #[case("degrees", AngleUnit::Degree)]
    #[case("º", AngleUnit::Degree)]
    #[case("o", AngleUnit::Degree)]
    #[case("grad", AngleUnit::Gon)]
    #[case("turn", AngleUnit::Revolution)]
    fn test_resolve(#[case] raw: &str, #[case] expected: AngleUnit) {
        assert_eq!(AngleUnit::from_symbol(raw).unwrap(), expected);
    }

    #[test]
    fn test_right_angle() {
        let right = Angle::new(90.0, AngleUnit::Degree);
        assert!((right.base_value() - PI / 2.0).abs() < 1e-12);
        assert!((right.to_unit(AngleUnit::Gon).value() - 100.0).abs() < 1e-9);
        assert!((right.to_unit(AngleUnit::Revolution).value() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_eng_format() {
        let q: Angle = "52.5[deg]".parse().unwrap();
        assert_eq!(q.unit(), AngleUnit::Degree);
        assert_eq!(q.to_eng_format(), "52.5[°]");
    }
}
