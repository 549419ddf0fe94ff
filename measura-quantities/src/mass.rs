//! Mass

use measura_core::{unit_enum, Quantity, QuantityKind, Scale, SymbolRules};

unit_enum! {
    /// Mass units. No degree handling: `oz` must not lose its `o`.
    pub enum MassUnit {
        kind: QuantityKind::Mass,
        base: Kilogram,
        default: Kilogram,
        rules: SymbolRules::BASIC.with_synonyms(&[
            ("kilogram", "kg"),
            ("kilograms", "kg"),
            ("kgs", "kg"),
            ("gram", "g"),
            ("grams", "g"),
            ("milligram", "mg"),
            ("tonne", "t"),
            ("tonnes", "t"),
            ("pound", "lb"),
            ("pounds", "lb"),
            ("lbs", "lb"),
            ("ounce", "oz"),
            ("ounces", "oz"),
        ]),
        units: {
            Kilogram => ("kg", Scale::IDENTITY),
            Gram => ("g", Scale::linear(0.001)),
            Milligram => ("mg", Scale::linear(1e-6)),
            Tonne => ("t", Scale::linear(1_000.0)),
            // International avoirdupois pound
            Pound => ("lb", Scale::linear(0.453_592_37)),
            Ounce => ("oz", Scale::linear(0.028_349_523_125)),
        }
    }
}

pub type Mass = Quantity<MassUnit>;
