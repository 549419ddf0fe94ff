//! Dynamic and kinematic viscosity

use measura_core::{unit_enum, Quantity, QuantityKind, Scale, SymbolRules};

unit_enum! {
    /// Dynamic viscosity units. `P` is the poise, so `p` never means "per" here.
    pub enum DynamicViscosityUnit {
        kind: QuantityKind::DynamicViscosity,
        base: PascalSecond,
        default: PascalSecond,
        rules: SymbolRules::COMPOUND.with_synonyms(&[
            ("poise", "p"),
            ("centipoise", "cp"),
            ("mpas", "cp"),
        ]),
        units: {
            PascalSecond => ("Pa·s", Scale::IDENTITY),
            KilogramPerMeterSecond => ("kg/(m·s)", Scale::IDENTITY),
            Centipoise => ("cP", Scale::linear(0.001)),
            Poise => ("P", Scale::linear(0.1)),
            PoundPerFootSecond => ("lb/(ft·s)", Scale::linear(1.488_163_943_569_553_7)),
        }
    }
}

pub type DynamicViscosity = Quantity<DynamicViscosityUnit>;

unit_enum! {
    pub enum KinematicViscosityUnit {
        kind: QuantityKind::KinematicViscosity,
        base: SquareMeterPerSecond,
        default: SquareMeterPerSecond,
        rules: SymbolRules::COMPOUND
            .with_p_divide()
            .with_synonyms(&[("stokes", "st"), ("centistokes", "cst")]),
        units: {
            SquareMeterPerSecond => ("m²/s", Scale::IDENTITY),
            SquareFootPerSecond => ("ft²/s", Scale::linear(0.092_903_04)),
            Centistokes => ("cSt", Scale::linear(1e-6)),
            Stokes => ("St", Scale::linear(1e-4)),
        }
    }
}

pub type KinematicViscosity = Quantity<KinematicViscosityUnit>;
