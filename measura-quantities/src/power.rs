//! Power

use measura_core::{unit_enum, Quantity, QuantityKind, Scale, SymbolRules};

unit_enum! {
    pub enum PowerUnit {
        kind: QuantityKind::Power,
        base: Watt,
        default: Watt,
        rules: SymbolRules::COMPOUND.with_p_divide().with_synonyms(&[
            ("watt", "w"),
            ("watts", "w"),
            ("kilowatt", "kw"),
            ("megawatt", "mw"),
            ("btuh", "btu/h"),
            ("horsepower", "hp"),
        ]),
        units: {
            Watt => ("W", Scale::IDENTITY),
            Kilowatt => ("kW", Scale::linear(1_000.0)),
            Megawatt => ("MW", Scale::linear(1_000_000.0)),
            // International table BTU
            BtuPerHour => ("BTU/h", Scale::linear(0.293_071_070_172_222_2)),
            // Mechanical horsepower
            Horsepower => ("hp", Scale::linear(745.699_871_582_270_2)),
        }
    }
}

pub type Power = Quantity<PowerUnit>;
