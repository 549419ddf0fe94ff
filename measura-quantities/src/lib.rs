//! Measura Quantities - Standard physical quantities
//!
//! One unit enum and one `Quantity` alias per quantity type, plus the
//! registry that parses all of them by kind.
//!
//! Types:
//! - Temperature (K, °C, °F, °R)
//! - Pressure (Pa, kPa, bar, psi, ...)
//! - Density (kg/m³, g/cm³, lb/ft³, ...)
//! - Dynamic and kinematic viscosity (Pa·s, cP, m²/s, cSt, ...)
//! - Mass and volumetric flow (kg/s, t/h, m³/h, L/min, ...)
//! - Relative humidity (%, decimal) and humidity ratio (kg/kg, g/kg, ...)
//! - Angle (rad, °, gon, rev) and geographic coordinates
//! - Mass, thermal conductivity, specific heat, power, velocity

use std::sync::LazyLock;

use measura_registry::QuantityRegistry;

mod angle;
mod density;
pub mod derived;
mod flow;
pub mod geo;
mod humidity;
mod mass;
mod power;
mod pressure;
mod temperature;
mod thermal;
mod velocity;
mod viscosity;

pub use angle::{Angle, AngleUnit};
pub use density::{Density, DensityUnit};
pub use flow::{MassFlow, MassFlowUnit, VolumetricFlow, VolumetricFlowUnit};
pub use geo::{Latitude, Longitude};
pub use humidity::{HumidityRatio, HumidityRatioUnit, RelativeHumidity, RelativeHumidityUnit};
pub use mass::{Mass, MassUnit};
pub use power::{Power, PowerUnit};
pub use pressure::{Pressure, PressureUnit};
pub use temperature::{Temperature, TemperatureUnit};
pub use thermal::{SpecificHeat, SpecificHeatUnit, ThermalConductivity, ThermalConductivityUnit};
pub use velocity::{Velocity, VelocityUnit};
pub use viscosity::{DynamicViscosity, DynamicViscosityUnit, KinematicViscosity, KinematicViscosityUnit};

/// Process-wide registry with every standard quantity type.
/// Built on first use and read-only afterwards.
pub static QUANTITIES: LazyLock<QuantityRegistry> = LazyLock::new(standard_registry);

/// Load the standard quantity parsers into a registry
pub fn load_quantity_parsers(registry: QuantityRegistry) -> QuantityRegistry {
    registry
        // Thermodynamic state
        .with_unit::<TemperatureUnit>()
        .with_unit::<PressureUnit>()
        .with_unit::<DensityUnit>()

        // Fluid properties
        .with_unit::<DynamicViscosityUnit>()
        .with_unit::<KinematicViscosityUnit>()
        .with_unit::<ThermalConductivityUnit>()
        .with_unit::<SpecificHeatUnit>()

        // Flow
        .with_unit::<MassFlowUnit>()
        .with_unit::<VolumetricFlowUnit>()
        .with_unit::<VelocityUnit>()

        // Moist air
        .with_unit::<RelativeHumidityUnit>()
        .with_unit::<HumidityRatioUnit>()

        // General
        .with_unit::<AngleUnit>()
        .with_unit::<MassUnit>()
        .with_unit::<PowerUnit>()
}

/// A fresh registry holding the standard quantity set
pub fn standard_registry() -> QuantityRegistry {
    load_quantity_parsers(QuantityRegistry::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use measura_core::{canonicalize, AnyQuantity, Quantity, QuantityKind, Unit, UnitError};
    use std::collections::HashSet;

    fn assert_round_trip<U: Unit>() {
        let values = [-1_234.5, -1.0, 0.0, 1e-6, 0.3, 1.0, 42.0, 98_765.4321];
        for &from in U::units() {
            for &to in U::units() {
                for &v in &values {
                    let original = Quantity::new(v, from);
                    let back = original.to_unit(to).to_unit(from);
                    let tolerance = 1e-9 * v.abs().max(1.0);
                    assert!(
                        (back.value() - v).abs() <= tolerance,
                        "{}: {} {} -> {} -> {} gave {}",
                        U::KIND,
                        v,
                        from,
                        to,
                        from,
                        back.value()
                    );
                    assert_eq!(back.unit(), from);
                }
            }
        }
    }

    fn assert_unit_table<U: Unit>() {
        assert!(U::BASE.scale().is_identity(), "{}", U::KIND);
        assert!(U::units().contains(&U::BASE));
        assert!(U::units().contains(&U::DEFAULT));

        // Canonical symbols are unique, and every unit resolves to itself
        let mut seen = HashSet::new();
        for &unit in U::units() {
            let canonical = canonicalize(unit.symbol(), &U::RULES);
            assert!(seen.insert(canonical.clone()), "{}: duplicate canonical symbol {:?}", U::KIND, canonical);
            if !unit.symbol().is_empty() {
                assert_eq!(U::from_symbol(unit.symbol()).unwrap(), unit, "{}", U::KIND);
            }
        }
    }

    macro_rules! check_all_units {
        ($check:ident) => {
            $check::<TemperatureUnit>();
            $check::<PressureUnit>();
            $check::<DensityUnit>();
            $check::<DynamicViscosityUnit>();
            $check::<KinematicViscosityUnit>();
            $check::<MassFlowUnit>();
            $check::<VolumetricFlowUnit>();
            $check::<RelativeHumidityUnit>();
            $check::<HumidityRatioUnit>();
            $check::<AngleUnit>();
            $check::<MassUnit>();
            $check::<ThermalConductivityUnit>();
            $check::<SpecificHeatUnit>();
            $check::<PowerUnit>();
            $check::<VelocityUnit>();
        };
    }

    #[test]
    fn test_round_trip_every_unit_pair() {
        check_all_units!(assert_round_trip);
    }

    #[test]
    fn test_unit_tables() {
        check_all_units!(assert_unit_table);
    }

    #[test]
    fn test_every_builtin_kind_registered() {
        let registry = standard_registry();
        assert_eq!(registry.len(), QuantityKind::BUILT_IN.len());
        for kind in QuantityKind::BUILT_IN {
            assert!(registry.contains(kind), "{} not registered", kind);
        }
    }

    #[test]
    fn test_parse_by_kind() {
        let q = QUANTITIES
            .parse_from_symbol(QuantityKind::MassFlow, 2.0, Some("kgps"))
            .unwrap();
        assert_eq!(q.symbol(), "kg/s");

        let q = QUANTITIES
            .parse_from_eng_format(QuantityKind::DynamicViscosity, "15.1 [kg / (m·s)]")
            .unwrap();
        assert_eq!(q.symbol(), "kg/(m·s)");
        assert_eq!(q.value(), 15.1);

        let q = QUANTITIES
            .parse_from_eng_format(QuantityKind::ThermalConductivity, "0.5[BTU p (h x ft x F)]")
            .unwrap();
        assert_eq!(q.symbol(), "BTU/(h·ft·°F)");

        let q = QUANTITIES
            .parse_from_eng_format(QuantityKind::Temperature, "70[  deg f  ]")
            .unwrap();
        assert_eq!(q.symbol(), "°F");
    }

    #[test]
    fn test_relative_humidity_default() {
        let q = QUANTITIES
            .parse_from_symbol(QuantityKind::RelativeHumidity, 0.5, None)
            .unwrap();
        assert_eq!(q.symbol(), "");
        assert_eq!(QUANTITIES.to_eng_format(q.as_ref()), "0.5");

        let q = QUANTITIES
            .parse_from_symbol(QuantityKind::RelativeHumidity, 0.5, Some(""))
            .unwrap();
        assert_eq!(q.base_value(), 50.0);

        let q = QUANTITIES
            .parse_from_eng_format(QuantityKind::RelativeHumidity, "0.5")
            .unwrap();
        assert_eq!(q.symbol(), "");
    }

    #[test]
    fn test_eng_format_round_trip() {
        let cases = [
            (QuantityKind::Temperature, "20.1234[°C]"),
            (QuantityKind::Pressure, "1[bar]"),
            (QuantityKind::VolumetricFlow, "3.5[m³/h]"),
            (QuantityKind::RelativeHumidity, "0.45"),
            (QuantityKind::HumidityRatio, "12[g/kg]"),
            (QuantityKind::Angle, "90[°]"),
        ];
        for (kind, text) in cases {
            let q = QUANTITIES.parse_from_eng_format(kind, text).unwrap();
            assert_eq!(QUANTITIES.to_eng_format(q.as_ref()), text);
        }
    }

    #[test]
    fn test_typed_parse() {
        let p: Pressure = QUANTITIES.parse_eng("1[bar]").unwrap();
        assert_eq!(p, Pressure::new(100_000.0, PressureUnit::Pascal));

        let t = QUANTITIES.parse::<TemperatureUnit>(20.0, Some("°C")).unwrap();
        assert_eq!(t.unit(), TemperatureUnit::Celsius);
    }

    #[test]
    fn test_errors() {
        let err = QUANTITIES
            .parse_from_symbol(QuantityKind::Pressure, 1.0, Some("furlong"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Unsupported symbol 'furlong' for Pressure");

        let err = QUANTITIES
            .parse_from_symbol(QuantityKind::Custom("Luminance"), 1.0, None)
            .unwrap_err();
        assert_eq!(err, UnitError::NotRegistered(QuantityKind::Custom("Luminance")));

        assert!(matches!(
            QUANTITIES.parse_from_eng_format(QuantityKind::Pressure, "one[bar]"),
            Err(UnitError::MalformedNumber(_))
        ));
        assert!(matches!(
            QUANTITIES.parse_from_eng_format(QuantityKind::Pressure, "1[bar"),
            Err(UnitError::MalformedUnitBracket(_))
        ));
        assert!(matches!(
            QUANTITIES.parse_from_eng_format(QuantityKind::Pressure, "1"),
            Err(UnitError::MalformedUnitBracket(_))
        ));
    }

    #[test]
    fn test_conversion_through_dyn() {
        let q = QUANTITIES
            .parse_from_eng_format(QuantityKind::Pressure, "1[atm]")
            .unwrap();
        let psi = q.convert_to_symbol("psi").unwrap();
        assert!((psi.value() - 14.695_948_8).abs() < 1e-6);
        assert_eq!(q.to_base_unit_boxed().symbol(), "Pa");
    }
}
