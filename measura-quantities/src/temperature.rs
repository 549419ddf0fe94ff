//! Temperature

use measura_core::{unit_enum, Quantity, QuantityKind, Scale, SymbolRules};

unit_enum! {
    /// Temperature units. Kelvin is the base; Celsius and Fahrenheit carry an offset.
    pub enum TemperatureUnit {
        kind: QuantityKind::Temperature,
        base: Kelvin,
        default: Kelvin,
        rules: SymbolRules::BASIC
            .with_synonyms(&[
                ("kelvin", "k"),
                ("celsius", "c"),
                ("centigrade", "c"),
                ("fahrenheit", "f"),
                ("rankine", "r"),
            ])
            .with_degrees(),
        units: {
            Kelvin => ("K", Scale::IDENTITY),
            // K = C + 273.15
            Celsius => ("°C", Scale::affine(1.0, 273.15)),
            // K = (F - 32) * 5/9 + 273.15
            Fahrenheit => ("°F", Scale::affine(5.0 / 9.0, 273.15 - 32.0 * 5.0 / 9.0)),
            // K = R * 5/9
            Rankine => ("°R", Scale::linear(5.0 / 9.0)),
        }
    }
}

pub type Temperature = Quantity<TemperatureUnit>;
