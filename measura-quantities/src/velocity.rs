//! Velocity

use measura_core::{unit_enum, Quantity, QuantityKind, Scale, SymbolRules};

unit_enum! {
    /// Velocity units. `mph` is rewritten to `mi/h` before the `p` divide
    /// rule can turn it into meters per hour.
    pub enum VelocityUnit {
        kind: QuantityKind::Velocity,
        base: MeterPerSecond,
        default: MeterPerSecond,
        rules: SymbolRules::COMPOUND.with_p_divide().with_synonyms(&[
            ("mph", "mi/h"),
            ("kph", "km/h"),
            ("kmph", "km/h"),
            ("fpm", "ft/min"),
            ("knot", "kn"),
            ("knots", "kn"),
            ("kt", "kn"),
        ]),
        units: {
            MeterPerSecond => ("m/s", Scale::IDENTITY),
            KilometerPerHour => ("km/h", Scale::linear(1.0 / 3.6)),
            FootPerMinute => ("ft/min", Scale::linear(0.005_08)),
            MilePerHour => ("mph", Scale::linear(0.447_04)),
            Knot => ("kn", Scale::linear(1_852.0 / 3_600.0)),
        }
    }
}

pub type Velocity = Quantity<VelocityUnit>;

#[cfg(test)]
mod tests {
    use super::*;
    use measura_core::Unit;
    use rstest::rstest;

    #[rstest]
    #[case("m/s", VelocityUnit::MeterPerSecond)]
    #[case("mps", VelocityUnit::MeterPerSecond)]
    #[case("km/h", VelocityUnit::KilometerPerHour)]
    #[case("KPH", VelocityUnit::KilometerPerHour)]
    #[case("fpm", VelocityUnit::FootPerMinute)]
    #[case("mph", VelocityUnit::MilePerHour)]
    #[case("mi/h", VelocityUnit::MilePerHour)]
    #[case("knots", VelocityUnit::Knot)]
    fn test_resolve(#[case] raw: &str, #[case] expected: VelocityUnit) {
        assert_eq!(VelocityUnit::from_symbol(raw).unwrap(), expected);
    }

    #[test]
    fn test_meters_per_hour_is_not_mph() {
        assert!(VelocityUnit::from_symbol("m/h").is_err());
    }

    #[test]
    fn test_conversions() {
        let q = Velocity::new(36.0, VelocityUnit::KilometerPerHour);
        assert!((q.base_value() - 10.0).abs() < 1e-12);
        let mph = Velocity::new(60.0, VelocityUnit::MilePerHour);
        assert!((mph.to_unit(VelocityUnit::KilometerPerHour).value() - 96.560_64).abs() < 1e-9);
    }
}
