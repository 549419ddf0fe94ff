//! Pressure

use measura_core::{unit_enum, Quantity, QuantityKind, Scale, SymbolRules};

unit_enum! {
    /// Pressure units, absolute. Pascal is the base.
    ///
    /// No operator stage: `p` is part of `Pa` and `psi`.
    pub enum PressureUnit {
        kind: QuantityKind::Pressure,
        base: Pascal,
        default: Pascal,
        rules: SymbolRules::BASIC.with_synonyms(&[
            ("pascal", "pa"),
            ("pascals", "pa"),
            ("kilopascal", "kpa"),
            ("bars", "bar"),
            ("millibar", "mbar"),
            ("psia", "psi"),
            ("atmosphere", "atm"),
            ("atmospheres", "atm"),
        ]),
        units: {
            Pascal => ("Pa", Scale::IDENTITY),
            Hectopascal => ("hPa", Scale::linear(100.0)),
            Kilopascal => ("kPa", Scale::linear(1_000.0)),
            Megapascal => ("MPa", Scale::linear(1_000_000.0)),
            Bar => ("bar", Scale::linear(100_000.0)),
            Millibar => ("mbar", Scale::linear(100.0)),
            Psi => ("psi", Scale::linear(6_894.757_293_168_361)),
            InchOfMercury => ("inHg", Scale::linear(3_386.389)),
            MillimeterOfMercury => ("mmHg", Scale::linear(133.322_387_415)),
            Atmosphere => ("atm", Scale::linear(101_325.0)),
        }
    }
}

pub type Pressure = Quantity<PressureUnit>;
