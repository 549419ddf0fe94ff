//! Density

use measura_core::{unit_enum, Quantity, QuantityKind, Scale, SymbolRules};

unit_enum! {
    pub enum DensityUnit {
        kind: QuantityKind::Density,
        base: KilogramPerCubicMeter,
        default: KilogramPerCubicMeter,
        rules: SymbolRules::COMPOUND.with_p_divide(),
        units: {
            KilogramPerCubicMeter => ("kg/m³", Scale::IDENTITY),
            GramPerCubicCentimeter => ("g/cm³", Scale::linear(1_000.0)),
            PoundPerCubicFoot => ("lb/ft³", Scale::linear(16.018_463_373_960_138)),
            PoundPerCubicInch => ("lb/in³", Scale::linear(27_679.904_710_203_125)),
        }
    }
}

pub type Density = Quantity<DensityUnit>;

#[cfg(test)]
mod tests {
    use super::*;
    use measura_core::Unit;
    use rstest::rstest;

    #[rstest]
    #[case("kg/m³", DensityUnit::KilogramPerCubicMeter)]
    #[case("kg/m3", DensityUnit::KilogramPerCubicMeter)]
    #[case("kg / m^3", DensityUnit::KilogramPerCubicMeter)]
    #[case("kgpm3", DensityUnit::KilogramPerCubicMeter)]
    #[case("kg per m3", DensityUnit::KilogramPerCubicMeter)]
    #[case("g/cm3", DensityUnit::GramPerCubicCentimeter)]
    #[case("LB/FT³", DensityUnit::PoundPerCubicFoot)]
    fn test_resolve(#[case] raw: &str, #[case] expected: DensityUnit) {
        assert_eq!(DensityUnit::from_symbol(raw).unwrap(), expected);
    }

    #[test]
    fn test_water() {
        let water = Density::new(1.0, DensityUnit::GramPerCubicCentimeter);
        assert_eq!(water.base_value(), 1_000.0);
        assert!((water.to_unit(DensityUnit::PoundPerCubicFoot).value() - 62.428).abs() < 1e-3);
    }
}
