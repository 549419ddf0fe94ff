//! Quantity Registry

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use measura_core::{parse_number, split_eng_format, AnyQuantity, Quantity, QuantityKind, Unit, UnitError};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{ParserMeta, QuantityParser, UnitParser};

/// Map from quantity kind to parser.
///
/// Built once with the consuming `with_*` methods, then shared read-only
/// (behind a `LazyLock`, an `Arc` or a plain reference).
pub struct QuantityRegistry {
    parsers: HashMap<QuantityKind, Arc<dyn QuantityParser>>,
}

impl QuantityRegistry {
    pub fn new() -> Self {
        Self {
            parsers: HashMap::new(),
        }
    }

    /// Register a parser. A later registration for the same kind replaces the
    /// earlier one.
    pub fn with_parser<P: QuantityParser + 'static>(mut self, parser: P) -> Self {
        let kind = parser.kind();
        if self.parsers.insert(kind, Arc::new(parser)).is_some() {
            warn!(quantity = %kind, "parser registered twice, keeping the latest");
        } else {
            debug!(quantity = %kind, "parser registered");
        }
        self
    }

    /// Register the parser for a unit enum
    pub fn with_unit<U: Unit>(self) -> Self {
        self.with_parser(UnitParser::<U>::new())
    }

    pub fn get_parser(&self, kind: QuantityKind) -> Option<&dyn QuantityParser> {
        self.parsers.get(&kind).map(|p| p.as_ref())
    }

    pub fn contains(&self, kind: QuantityKind) -> bool {
        self.parsers.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    /// Registered kinds, sorted by name
    pub fn kinds(&self) -> Vec<QuantityKind> {
        let mut kinds: Vec<QuantityKind> = self.parsers.keys().copied().collect();
        kinds.sort_by_key(|k| k.name());
        kinds
    }

    /// Parser metadata, sorted by kind name
    pub fn metas(&self) -> Vec<ParserMeta> {
        self.kinds()
            .into_iter()
            .filter_map(|k| self.get_parser(k))
            .map(|p| p.meta())
            .collect()
    }

    /// Look up a registered kind by name, ignoring case and separators
    pub fn kind_by_name(&self, name: &str) -> Option<QuantityKind> {
        self.parsers.keys().copied().find(|k| k.matches_name(name))
    }

    /// Registered kind names resembling `name`, best match first
    pub fn similar_kinds(&self, name: &str) -> Vec<QuantityKind> {
        let query = name.to_lowercase();
        let mut matches: Vec<(QuantityKind, usize)> = self
            .parsers
            .keys()
            .filter_map(|kind| {
                let score = similarity_score(&query, &kind.name().to_lowercase());
                (score > 0).then_some((*kind, score))
            })
            .collect();

        matches.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.name().cmp(b.0.name())));
        matches.into_iter().map(|(kind, _)| kind).collect()
    }

    fn require_parser(&self, kind: QuantityKind) -> Result<&dyn QuantityParser, UnitError> {
        self.get_parser(kind).ok_or(UnitError::NotRegistered(kind))
    }

    /// Build a quantity of `kind` from a value and a raw symbol.
    /// `None` or a blank symbol selects the kind's default unit.
    pub fn parse_from_symbol(
        &self,
        kind: QuantityKind,
        value: f64,
        symbol: Option<&str>,
    ) -> Result<Box<dyn AnyQuantity>, UnitError> {
        let parser = self.require_parser(kind)?;
        parser.parse(value, symbol).inspect_err(|e| {
            if let UnitError::UnsupportedSymbol { symbol, .. } = e {
                warn!(quantity = %kind, symbol = %symbol, "unsupported unit symbol");
            }
        })
    }

    /// Parse `<number>[<symbol>]` into a quantity of `kind`
    pub fn parse_from_eng_format(&self, kind: QuantityKind, text: &str) -> Result<Box<dyn AnyQuantity>, UnitError> {
        let parser = self.require_parser(kind)?;
        let (value, symbol) = split_eng_format(text, parser.brackets_optional())?;
        self.parse_from_symbol(kind, value, symbol)
    }

    /// Parse the JSON forms of a quantity: `{"value": 1.5, "unit": "bar"}`
    /// (unit optional), a bare number in the default unit, or an
    /// engineering-format string.
    pub fn parse_from_json(&self, kind: QuantityKind, json: &Value) -> Result<Box<dyn AnyQuantity>, UnitError> {
        match json {
            Value::Number(n) => {
                let value = n.as_f64().ok_or_else(|| UnitError::malformed_number(n.to_string()))?;
                self.parse_from_symbol(kind, value, None)
            }
            Value::String(text) => self.parse_from_eng_format(kind, text),
            Value::Object(map) => {
                let value = match map.get("value") {
                    Some(Value::Number(n)) => n.as_f64(),
                    Some(Value::String(s)) => Some(parse_number(s)?),
                    _ => None,
                }
                .ok_or_else(|| UnitError::malformed_number(json.to_string()))?;

                match map.get("unit") {
                    None | Some(Value::Null) => self.parse_from_symbol(kind, value, None),
                    Some(Value::String(unit)) => self.parse_from_symbol(kind, value, Some(unit)),
                    Some(other) => Err(UnitError::unsupported_symbol(other.to_string(), kind)),
                }
            }
            other => Err(UnitError::malformed_number(other.to_string())),
        }
    }

    /// `<value>[<symbol>]`, brackets omitted for dimensionless units
    pub fn to_eng_format(&self, quantity: &dyn AnyQuantity) -> String {
        quantity.to_eng_format()
    }

    /// Typed front-end to [`parse_from_symbol`](Self::parse_from_symbol)
    pub fn parse<U: Unit>(&self, value: f64, symbol: Option<&str>) -> Result<Quantity<U>, UnitError> {
        let boxed = self.parse_from_symbol(U::KIND, value, symbol)?;
        downcast::<U>(boxed.as_ref())
    }

    /// Typed front-end to [`parse_from_eng_format`](Self::parse_from_eng_format)
    pub fn parse_eng<U: Unit>(&self, text: &str) -> Result<Quantity<U>, UnitError> {
        let boxed = self.parse_from_eng_format(U::KIND, text)?;
        downcast::<U>(boxed.as_ref())
    }
}

impl Default for QuantityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn downcast<U: Unit>(quantity: &dyn AnyQuantity) -> Result<Quantity<U>, UnitError> {
    quantity
        .as_any()
        .downcast_ref::<Quantity<U>>()
        .copied()
        .ok_or(UnitError::KindMismatch {
            expected: U::KIND,
            found: quantity.kind(),
        })
}

/// Similarity between a query and a candidate name (higher is closer)
fn similarity_score(query: &str, candidate: &str) -> usize {
    let mut score = 0;

    if candidate.starts_with(query) {
        score += 100;
    } else if candidate.contains(query) {
        score += 50;
    } else if query.contains(candidate) {
        score += 30;
    }

    let query_chars: HashSet<char> = query.chars().collect();
    let candidate_chars: HashSet<char> = candidate.chars().collect();
    let common = query_chars.intersection(&candidate_chars).count();

    // Sharing a couple of letters is noise
    if score == 0 && common * 2 < candidate_chars.len() {
        return 0;
    }
    score + common * 2
}
