//! Parser traits

use std::marker::PhantomData;

use measura_core::{AnyQuantity, Quantity, QuantityKind, Unit, UnitError};
use serde::Serialize;

/// Metadata describing what a parser accepts
#[derive(Debug, Clone, Serialize)]
pub struct ParserMeta {
    pub kind: QuantityKind,
    /// Display symbols of every unit, in resolution order
    pub units: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_unit: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_unit: Option<&'static str>,
}

/// Constructs quantities of one kind from a value and a raw symbol
pub trait QuantityParser: Send + Sync {
    fn meta(&self) -> ParserMeta;

    fn kind(&self) -> QuantityKind {
        self.meta().kind
    }

    /// Whether engineering-format input may omit the `[symbol]` part
    fn brackets_optional(&self) -> bool {
        false
    }

    /// `None` or a blank symbol selects the kind's default unit
    fn parse(&self, value: f64, symbol: Option<&str>) -> Result<Box<dyn AnyQuantity>, UnitError>;
}

/// Parser backed by a [`Unit`] enum
pub struct UnitParser<U: Unit> {
    _unit: PhantomData<fn() -> U>,
}

impl<U: Unit> UnitParser<U> {
    pub fn new() -> Self {
        UnitParser { _unit: PhantomData }
    }
}

impl<U: Unit> Default for UnitParser<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U: Unit> QuantityParser for UnitParser<U> {
    fn meta(&self) -> ParserMeta {
        ParserMeta {
            kind: U::KIND,
            units: U::units().iter().map(|u| u.symbol()).collect(),
            base_unit: Some(U::BASE.symbol()),
            default_unit: Some(U::DEFAULT.symbol()),
        }
    }

    fn kind(&self) -> QuantityKind {
        U::KIND
    }

    fn brackets_optional(&self) -> bool {
        U::DEFAULT.symbol().is_empty()
    }

    fn parse(&self, value: f64, symbol: Option<&str>) -> Result<Box<dyn AnyQuantity>, UnitError> {
        let unit = U::resolve(symbol)?;
        Ok(Box::new(Quantity::new(value, unit)))
    }
}

/// Parser wrapping a closure, for kinds without a unit enum
pub struct FnParser<F> {
    kind: QuantityKind,
    brackets_optional: bool,
    f: F,
}

impl<F> FnParser<F>
where
    F: Fn(f64, Option<&str>) -> Result<Box<dyn AnyQuantity>, UnitError> + Send + Sync,
{
    pub fn new(kind: QuantityKind, f: F) -> Self {
        FnParser {
            kind,
            brackets_optional: false,
            f,
        }
    }

    pub fn with_optional_brackets(mut self) -> Self {
        self.brackets_optional = true;
        self
    }
}

impl<F> QuantityParser for FnParser<F>
where
    F: Fn(f64, Option<&str>) -> Result<Box<dyn AnyQuantity>, UnitError> + Send + Sync,
{
    fn meta(&self) -> ParserMeta {
        ParserMeta {
            kind: self.kind,
            units: Vec::new(),
            base_unit: None,
            default_unit: None,
        }
    }

    fn kind(&self) -> QuantityKind {
        self.kind
    }

    fn brackets_optional(&self) -> bool {
        self.brackets_optional
    }

    fn parse(&self, value: f64, symbol: Option<&str>) -> Result<Box<dyn AnyQuantity>, UnitError> {
        (self.f)(value, symbol)
    }
}
