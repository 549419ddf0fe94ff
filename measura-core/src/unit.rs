//! Unit representation with conversion to and from a base unit

use std::fmt;
use std::hash::Hash;
use tracing::debug;

use crate::symbol::{canonicalize, SymbolRules};
use crate::{QuantityKind, UnitError};

/// Affine conversion to the base unit of a quantity type.
///
/// `base = value * factor + offset` and `value = (base - offset) / factor`.
/// Offsets only appear on temperature-like scales.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub factor: f64,
    pub offset: f64,
}

impl Scale {
    pub const IDENTITY: Scale = Scale { factor: 1.0, offset: 0.0 };

    /// Proportional conversion (no offset)
    pub const fn linear(factor: f64) -> Self {
        Scale { factor, offset: 0.0 }
    }

    /// Conversion with offset (Celsius, Fahrenheit)
    pub const fn affine(factor: f64, offset: f64) -> Self {
        Scale { factor, offset }
    }

    pub fn is_identity(&self) -> bool {
        self.factor == 1.0 && self.offset == 0.0
    }

    pub fn to_base(&self, value: f64) -> f64 {
        value * self.factor + self.offset
    }

    pub fn from_base(&self, base: f64) -> f64 {
        (base - self.offset) / self.factor
    }
}

/// A unit of one physical quantity type.
///
/// Implemented by closed enums (usually through [`unit_enum!`](crate::unit_enum)).
/// Exactly one variant is the base unit; every conversion hops through it.
pub trait Unit: Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Registry key of the quantity type this unit measures
    const KIND: QuantityKind;
    /// The unit all conversions route through
    const BASE: Self;
    /// The unit a blank or absent symbol resolves to
    const DEFAULT: Self;
    /// Canonicalization stages for this quantity type's symbols
    const RULES: SymbolRules;

    /// Every unit of the type, in declaration (and resolution) order
    fn units() -> &'static [Self];

    /// Display and parse symbol, unique within the type
    fn symbol(&self) -> &'static str;

    fn scale(&self) -> Scale;

    fn base_unit(&self) -> Self {
        Self::BASE
    }

    fn is_base(&self) -> bool {
        *self == Self::BASE
    }

    fn to_base(&self, value: f64) -> f64 {
        self.scale().to_base(value)
    }

    fn from_base(&self, base: f64) -> f64 {
        self.scale().from_base(base)
    }

    fn canonical_symbol(&self) -> String {
        canonicalize(self.symbol(), &Self::RULES)
    }

    /// Resolve a raw, possibly noisy symbol to a unit.
    ///
    /// Blank input resolves to [`Unit::DEFAULT`]. Otherwise the first unit
    /// whose canonical symbol equals the canonicalized input wins.
    fn from_symbol(raw: &str) -> Result<Self, UnitError> {
        if raw.trim().is_empty() {
            debug!(quantity = %Self::KIND, unit = Self::DEFAULT.symbol(), "blank symbol, using default unit");
            return Ok(Self::DEFAULT);
        }

        let requested = canonicalize(raw, &Self::RULES);
        Self::units()
            .iter()
            .copied()
            .find(|unit| unit.canonical_symbol() == requested)
            .ok_or_else(|| UnitError::unsupported_symbol(raw, Self::KIND))
    }

    /// Like [`Unit::from_symbol`], with `None` resolving to the default unit
    fn resolve(raw: Option<&str>) -> Result<Self, UnitError> {
        match raw {
            Some(symbol) => Self::from_symbol(symbol),
            None => {
                debug!(quantity = %Self::KIND, unit = Self::DEFAULT.symbol(), "no symbol, using default unit");
                Ok(Self::DEFAULT)
            }
        }
    }
}
