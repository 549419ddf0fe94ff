//! Mass and volumetric flow

use measura_core::{unit_enum, Quantity, QuantityKind, Scale, SymbolRules};

unit_enum! {
    pub enum MassFlowUnit {
        kind: QuantityKind::MassFlow,
        base: KilogramPerSecond,
        default: KilogramPerSecond,
        rules: SymbolRules::COMPOUND.with_p_divide(),
        units: {
            KilogramPerSecond => ("kg/s", Scale::IDENTITY),
            KilogramPerHour => ("kg/h", Scale::linear(1.0 / 3_600.0)),
            TonnePerHour => ("t/h", Scale::linear(1_000.0 / 3_600.0)),
            PoundPerSecond => ("lb/s", Scale::linear(0.453_592_37)),
            PoundPerHour => ("lb/h", Scale::linear(0.453_592_37 / 3_600.0)),
        }
    }
}

pub type MassFlow = Quantity<MassFlowUnit>;

unit_enum! {
    pub enum VolumetricFlowUnit {
        kind: QuantityKind::VolumetricFlow,
        base: CubicMeterPerSecond,
        default: CubicMeterPerSecond,
        rules: SymbolRules::COMPOUND.with_p_divide().with_synonyms(&[
            ("cfm", "ft3/min"),
            ("gpm", "gal/min"),
            ("lpm", "l/min"),
        ]),
        units: {
            CubicMeterPerSecond => ("m³/s", Scale::IDENTITY),
            CubicMeterPerHour => ("m³/h", Scale::linear(1.0 / 3_600.0)),
            LiterPerSecond => ("L/s", Scale::linear(0.001)),
            LiterPerMinute => ("L/min", Scale::linear(0.001 / 60.0)),
            CubicFootPerMinute => ("ft³/min", Scale::linear(0.028_316_846_592 / 60.0)),
            // US gallon
            GallonPerMinute => ("gal/min", Scale::linear(0.003_785_411_784 / 60.0)),
        }
    }
}

pub type VolumetricFlow = Quantity<VolumetricFlowUnit>;
