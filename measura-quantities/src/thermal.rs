//! Thermal conductivity and specific heat

use measura_core::{unit_enum, Quantity, QuantityKind, Scale, SymbolRules};

unit_enum! {
    pub enum ThermalConductivityUnit {
        kind: QuantityKind::ThermalConductivity,
        base: WattPerMeterKelvin,
        default: WattPerMeterKelvin,
        rules: SymbolRules::COMPOUND.with_p_divide().with_degrees(),
        units: {
            WattPerMeterKelvin => ("W/(m·K)", Scale::IDENTITY),
            KilowattPerMeterKelvin => ("kW/(m·K)", Scale::linear(1_000.0)),
            // International table BTU
            BtuPerHourFootFahrenheit => ("BTU/(h·ft·°F)", Scale::linear(1.730_734_666)),
        }
    }
}

pub type ThermalConductivity = Quantity<ThermalConductivityUnit>;

unit_enum! {
    pub enum SpecificHeatUnit {
        kind: QuantityKind::SpecificHeat,
        base: JoulePerKilogramKelvin,
        default: JoulePerKilogramKelvin,
        rules: SymbolRules::COMPOUND.with_p_divide().with_degrees(),
        units: {
            JoulePerKilogramKelvin => ("J/(kg·K)", Scale::IDENTITY),
            KilojoulePerKilogramKelvin => ("kJ/(kg·K)", Scale::linear(1_000.0)),
            BtuPerPoundFahrenheit => ("BTU/(lb·°F)", Scale::linear(4_186.8)),
            // Thermochemical calorie
            CaloriePerGramCelsius => ("cal/(g·°C)", Scale::linear(4_184.0)),
        }
    }
}

pub type SpecificHeat = Quantity<SpecificHeatUnit>;
