//! Relative humidity and humidity ratio
//!
//! Relative humidity is stored in percent but defaults to the dimensionless
//! decimal form: `0.45` with no unit means 45 %. Humidity ratio always means
//! mass of vapor per mass of dry air and defaults to its base `kg/kg`.

use measura_core::{unit_enum, Quantity, QuantityKind, Scale, SymbolRules};

unit_enum! {
    pub enum RelativeHumidityUnit {
        kind: QuantityKind::RelativeHumidity,
        base: Percent,
        default: Decimal,
        rules: SymbolRules::BASIC
            .with_synonyms(&[("percent", "%"), ("decimal", ""), ("-", "")])
            .with_suffixes(&["rh"]),
        units: {
            Percent => ("%", Scale::IDENTITY),
            /// Fraction of saturation, 0..1
            Decimal => ("", Scale::linear(100.0)),
        }
    }
}

pub type RelativeHumidity = Quantity<RelativeHumidityUnit>;

unit_enum! {
    pub enum HumidityRatioUnit {
        kind: QuantityKind::HumidityRatio,
        base: KilogramPerKilogram,
        default: KilogramPerKilogram,
        rules: SymbolRules::COMPOUND
            .with_p_divide()
            .with_suffixes(&["dryair", "da"]),
        units: {
            KilogramPerKilogram => ("kg/kg", Scale::IDENTITY),
            GramPerKilogram => ("g/kg", Scale::linear(0.001)),
            PoundPerPound => ("lb/lb", Scale::IDENTITY),
            GrainPerPound => ("gr/lb", Scale::linear(1.0 / 7_000.0)),
        }
    }
}

pub type HumidityRatio = Quantity<HumidityRatioUnit>;

#[cfg(test)]
mod tests {
    use super::*;
    use measura_core::Unit;
    use rstest::rstest;

    #[rstest]
    #[case("%", RelativeHumidityUnit::Percent)]
    #[case("%RH", RelativeHumidityUnit::Percent)]
    #[case("% rh", RelativeHumidityUnit::Percent)]
    #[case("percent", RelativeHumidityUnit::Percent)]
    #[case("decimal", RelativeHumidityUnit::Decimal)]
    #[case("-", RelativeHumidityUnit::Decimal)]
    #[case("", RelativeHumidityUnit::Decimal)]
    fn test_resolve_relative(#[case] raw: &str, #[case] expected: RelativeHumidityUnit) {
        assert_eq!(RelativeHumidityUnit::from_symbol(raw).unwrap(), expected);
    }

    #[test]
    fn test_relative_default_is_decimal() {
        assert_eq!(RelativeHumidityUnit::resolve(None).unwrap(), RelativeHumidityUnit::Decimal);
        assert_ne!(RelativeHumidityUnit::DEFAULT, RelativeHumidityUnit::BASE);
    }

    #[test]
    fn test_relative_without_brackets() {
        let rh: RelativeHumidity = "0.45".parse().unwrap();
        assert_eq!(rh.unit(), RelativeHumidityUnit::Decimal);
        assert!((rh.base_value() - 45.0).abs() < 1e-12);
        assert_eq!(rh.to_string(), "0.45");

        let percent: RelativeHumidity = "45[%]".parse().unwrap();
        assert!(rh.is_equal_with_precision(&percent, 1e-12));
    }

    #[rstest]
    #[case("kg/kg", HumidityRatioUnit::KilogramPerKilogram)]
    #[case("kg/kg(da)", HumidityRatioUnit::KilogramPerKilogram)]
    #[case("g/kg dry air", HumidityRatioUnit::GramPerKilogram)]
    #[case("gpkg", HumidityRatioUnit::GramPerKilogram)]
    #[case("gr/lb", HumidityRatioUnit::GrainPerPound)]
    fn test_resolve_ratio(#[case] raw: &str, #[case] expected: HumidityRatioUnit) {
        assert_eq!(HumidityRatioUnit::from_symbol(raw).unwrap(), expected);
    }

    #[test]
    fn test_ratio_default_is_base() {
        assert_eq!(HumidityRatioUnit::resolve(None).unwrap(), HumidityRatioUnit::KilogramPerKilogram);
    }

    #[test]
    fn test_grains() {
        let q = HumidityRatio::new(70.0, HumidityRatioUnit::GrainPerPound);
        assert!((q.to_unit(HumidityRatioUnit::GramPerKilogram).value() - 10.0).abs() < 1e-9);
    }
}
