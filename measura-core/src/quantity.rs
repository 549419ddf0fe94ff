//! Quantity type - a value with an associated unit

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::format::{self, FormatSettings};
use crate::{QuantityKind, Unit, UnitError};

/// A physical quantity: a numeric value with a unit of one quantity type.
///
/// The base-unit value is computed at construction. Equality and ordering
/// compare base values, so `0 °C == 273.15 K`.
#[derive(Debug, Clone, Copy)]
pub struct Quantity<U: Unit> {
    value: f64,
    unit: U,
    base_value: f64,
}

impl<U: Unit> Quantity<U> {
    /// Create a new quantity. NaN and infinities are accepted; range checks
    /// belong to [`validation`](crate::validation).
    pub fn new(value: f64, unit: U) -> Self {
        Quantity {
            value,
            unit,
            base_value: unit.to_base(value),
        }
    }

    /// Create a quantity in the base unit
    pub fn from_base(base_value: f64) -> Self {
        Self::new(base_value, U::BASE)
    }

    /// Create a quantity from a raw symbol string
    pub fn from_symbol(value: f64, symbol: &str) -> Result<Self, UnitError> {
        Ok(Self::new(value, U::from_symbol(symbol)?))
    }

    /// Parse `<number>[<symbol>]`
    pub fn from_eng_format(text: &str) -> Result<Self, UnitError> {
        let (value, symbol) = format::split_eng_format(text, brackets_optional::<U>())?;
        Ok(Self::new(value, U::resolve(symbol)?))
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> U {
        self.unit
    }

    pub fn base_value(&self) -> f64 {
        self.base_value
    }

    pub fn symbol(&self) -> &'static str {
        self.unit.symbol()
    }

    pub fn kind(&self) -> QuantityKind {
        U::KIND
    }

    /// Same unit, new value
    pub fn with_value(&self, value: f64) -> Self {
        Self::new(value, self.unit)
    }

    /// Convert to another unit of the same type, through the base unit
    pub fn to_unit(&self, target: U) -> Self {
        if target == self.unit {
            return *self;
        }
        Self::new(target.from_base(self.base_value), target)
    }

    pub fn to_base_unit(&self) -> Self {
        self.to_unit(U::BASE)
    }

    // ========== Comparison (base values only) ==========

    pub fn lower_than(&self, other: &Self) -> bool {
        self.base_value < other.base_value
    }

    pub fn greater_than(&self, other: &Self) -> bool {
        self.base_value > other.base_value
    }

    pub fn equal_or_lower_than(&self, other: &Self) -> bool {
        self.base_value <= other.base_value
    }

    pub fn equal_or_greater_than(&self, other: &Self) -> bool {
        self.base_value >= other.base_value
    }

    pub fn is_equal_with_precision(&self, other: &Self, epsilon: f64) -> bool {
        (self.base_value - other.base_value).abs() <= epsilon
    }

    // ========== Arithmetic (result in the left operand's unit) ==========

    /// Add another quantity. The right operand is converted into this unit
    /// through the base unit, so `20 °C + 10 °C = 30 °C`.
    pub fn plus(&self, other: &Self) -> Self {
        self.with_value(self.value + other.to_unit(self.unit).value)
    }

    pub fn minus(&self, other: &Self) -> Self {
        self.with_value(self.value - other.to_unit(self.unit).value)
    }

    pub fn plus_value(&self, value: f64) -> Self {
        self.with_value(self.value + value)
    }

    pub fn minus_value(&self, value: f64) -> Self {
        self.with_value(self.value - value)
    }

    pub fn multiply(&self, factor: f64) -> Self {
        self.with_value(self.value * factor)
    }

    pub fn div(&self, divisor: f64) -> Self {
        self.with_value(self.value / divisor)
    }

    /// Dimensionless ratio of two quantities of the same type
    pub fn ratio(&self, other: &Self) -> f64 {
        self.base_value / other.base_value
    }

    pub fn negate(&self) -> Self {
        self.with_value(-self.value)
    }

    pub fn abs(&self) -> Self {
        self.with_value(self.value.abs())
    }

    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }

    // ========== Formatting ==========

    /// `<value>[<symbol>]`, exact value
    pub fn to_eng_format(&self) -> String {
        format::eng_format(self.value, self.symbol())
    }

    /// `<value>[<symbol>]` with the value rounded to `digits` significant digits
    pub fn to_eng_format_rounded(&self, digits: u32) -> String {
        format::eng_format(format::round_significant(self.value, digits), self.symbol())
    }

    /// `<value> <symbol>` rounded per the settings
    pub fn format_with(&self, settings: &FormatSettings) -> String {
        let rounded = format::round_significant(self.value, settings.relevant_digits);
        display_text(rounded, self.symbol())
    }
}

/// Brackets may be omitted only when the default unit has no symbol
pub(crate) fn brackets_optional<U: Unit>() -> bool {
    U::DEFAULT.symbol().is_empty()
}

fn display_text(value: f64, symbol: &str) -> String {
    if symbol.is_empty() {
        format::format_number(value)
    } else {
        format!("{} {}", format::format_number(value), symbol)
    }
}

impl<U: Unit> fmt::Display for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&display_text(self.value, self.symbol()))
    }
}

impl<U: Unit> PartialEq for Quantity<U> {
    fn eq(&self, other: &Self) -> bool {
        self.base_value == other.base_value
    }
}

impl<U: Unit> PartialOrd for Quantity<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.base_value.partial_cmp(&other.base_value)
    }
}

impl<U: Unit> FromStr for Quantity<U> {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_eng_format(s)
    }
}

impl<U: Unit> Add for Quantity<U> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.plus(&rhs)
    }
}

impl<U: Unit> Sub for Quantity<U> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.minus(&rhs)
    }
}

impl<U: Unit> Mul<f64> for Quantity<U> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.multiply(rhs)
    }
}

impl<U: Unit> Div<f64> for Quantity<U> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Quantity::div(&self, rhs)
    }
}

impl<U: Unit> Div for Quantity<U> {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.ratio(&rhs)
    }
}

impl<U: Unit> Neg for Quantity<U> {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

// ========== JSON object form: {"value": 20.5, "unit": "°C"} ==========

#[derive(Serialize, Deserialize)]
struct QuantityRepr {
    value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    unit: Option<String>,
}

impl<U: Unit> Serialize for Quantity<U> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        QuantityRepr {
            value: self.value,
            unit: Some(self.symbol().to_string()),
        }
        .serialize(serializer)
    }
}

impl<'de, U: Unit> Deserialize<'de> for Quantity<U> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = QuantityRepr::deserialize(deserializer)?;
        let unit = U::resolve(repr.unit.as_deref()).map_err(serde::de::Error::custom)?;
        Ok(Quantity::new(repr.value, unit))
    }
}

// ========== Type-erased access ==========

/// Object-safe view of any `Quantity<U>`, returned by registry lookups
/// where the quantity type is only known at runtime.
pub trait AnyQuantity: fmt::Debug + fmt::Display + Send + Sync {
    fn kind(&self) -> QuantityKind;

    fn value(&self) -> f64;

    fn base_value(&self) -> f64;

    fn symbol(&self) -> &'static str;

    fn base_symbol(&self) -> &'static str;

    fn to_eng_format(&self) -> String;

    fn format_with(&self, settings: &FormatSettings) -> String;

    /// Convert to the unit named by a raw symbol of the same quantity type
    fn convert_to_symbol(&self, symbol: &str) -> Result<Box<dyn AnyQuantity>, UnitError>;

    fn to_base_unit_boxed(&self) -> Box<dyn AnyQuantity>;

    fn as_any(&self) -> &dyn Any;
}

impl<U: Unit> AnyQuantity for Quantity<U> {
    fn kind(&self) -> QuantityKind {
        U::KIND
    }

    fn value(&self) -> f64 {
        self.value
    }

    fn base_value(&self) -> f64 {
        self.base_value
    }

    fn symbol(&self) -> &'static str {
        self.unit.symbol()
    }

    fn base_symbol(&self) -> &'static str {
        U::BASE.symbol()
    }

    fn to_eng_format(&self) -> String {
        format::eng_format(self.value, self.unit.symbol())
    }

    fn format_with(&self, settings: &FormatSettings) -> String {
        Quantity::format_with(self, settings)
    }

    fn convert_to_symbol(&self, symbol: &str) -> Result<Box<dyn AnyQuantity>, UnitError> {
        let target = U::from_symbol(symbol)?;
        Ok(Box::new(self.to_unit(target)))
    }

    fn to_base_unit_boxed(&self) -> Box<dyn AnyQuantity> {
        Box::new(self.to_base_unit())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Scale, SymbolRules};

    crate::unit_enum! {
        pub enum TestTemperature {
            kind: QuantityKind::Temperature,
            base: Kelvin,
            default: Kelvin,
            rules: SymbolRules::BASIC.with_degrees(),
            units: {
                Kelvin => ("K", Scale::IDENTITY),
                Celsius => ("°C", Scale::affine(1.0, 273.15)),
                Fahrenheit => ("°F", Scale::affine(5.0 / 9.0, 273.15 - 32.0 * 5.0 / 9.0)),
            }
        }
    }

    crate::unit_enum! {
        pub enum TestRatio {
            kind: QuantityKind::RelativeHumidity,
            base: Percent,
            default: Decimal,
            rules: SymbolRules::BASIC,
            units: {
                Percent => ("%", Scale::IDENTITY),
                Decimal => ("", Scale::linear(100.0)),
            }
        }
    }

    type Temp = Quantity<TestTemperature>;

    #[test]
    fn test_quantity_creation() {
        let q = Temp::new(20.0, TestTemperature::Celsius);
        assert_eq!(q.value(), 20.0);
        assert_eq!(q.unit(), TestTemperature::Celsius);
        assert!((q.base_value() - 293.15).abs() < 1e-9);
        assert_eq!(q.symbol(), "°C");
        assert_eq!(q.kind(), QuantityKind::Temperature);
    }

    #[test]
    fn test_equality_is_unit_independent() {
        let celsius = Temp::new(0.0, TestTemperature::Celsius);
        let kelvin = Temp::new(273.15, TestTemperature::Kelvin);
        assert_eq!(celsius, kelvin);
        assert_ne!(celsius, Temp::new(0.0, TestTemperature::Kelvin));
    }

    #[test]
    fn test_to_unit() {
        let boiling = Temp::new(100.0, TestTemperature::Celsius);
        let fahrenheit = boiling.to_unit(TestTemperature::Fahrenheit);
        assert!((fahrenheit.value() - 212.0).abs() < 1e-9);
        assert_eq!(fahrenheit.unit(), TestTemperature::Fahrenheit);

        let back = fahrenheit.to_unit(TestTemperature::Celsius);
        assert!(back.is_equal_with_precision(&boiling, 1e-9));
        assert_eq!(boiling.to_base_unit().unit(), TestTemperature::Kelvin);
    }

    #[test]
    fn test_comparisons() {
        let cold = Temp::new(-10.0, TestTemperature::Celsius);
        let warm = Temp::new(290.0, TestTemperature::Kelvin);
        assert!(cold.lower_than(&warm));
        assert!(warm.greater_than(&cold));
        assert!(cold.equal_or_lower_than(&cold));
        assert!(warm.equal_or_greater_than(&warm));
        assert!(cold < warm);
    }

    #[test]
    fn test_plus_keeps_left_unit() {
        let a = Temp::new(20.0, TestTemperature::Celsius);
        let b = Temp::new(10.0, TestTemperature::Celsius);
        let sum = a + b;
        assert_eq!(sum.value(), 30.0);
        assert_eq!(sum.unit(), TestTemperature::Celsius);

        let k = Temp::new(300.0, TestTemperature::Kelvin);
        let diff = k.minus(&Temp::new(0.0, TestTemperature::Celsius));
        assert!((diff.value() - 26.85).abs() < 1e-9);
        assert_eq!(diff.unit(), TestTemperature::Kelvin);
    }

    #[test]
    fn test_scalar_arithmetic() {
        let k = Temp::new(100.0, TestTemperature::Kelvin);
        assert_eq!((k * 2.0).value(), 200.0);
        assert_eq!((k / 4.0).value(), 25.0);
        assert_eq!((-k).value(), -100.0);
        assert_eq!(k / Temp::new(50.0, TestTemperature::Kelvin), 2.0);
        assert_eq!(k.plus_value(1.0).value(), 101.0);
        assert_eq!(k.minus_value(1.0).value(), 99.0);
    }

    #[test]
    fn test_nan_is_accepted() {
        let q = Temp::new(f64::NAN, TestTemperature::Kelvin);
        assert!(!q.is_finite());
        assert_ne!(q, q);
    }

    #[test]
    fn test_eng_format() {
        let q = Temp::new(20.1234, TestTemperature::Celsius);
        assert_eq!(q.to_eng_format(), "20.1234[°C]");
        assert_eq!(q.to_eng_format_rounded(3), "20.1[°C]");

        let parsed: Temp = "20.1234[°C]".parse().unwrap();
        assert_eq!(parsed.to_eng_format(), "20.1234[°C]");

        let spaced = Temp::from_eng_format(" 20,5 [ deg C ] ").unwrap();
        assert_eq!(spaced.value(), 20.5);
        assert_eq!(spaced.unit(), TestTemperature::Celsius);
    }

    #[test]
    fn test_brackets_required_unless_dimensionless() {
        assert!(matches!(
            Temp::from_eng_format("20.5"),
            Err(UnitError::MalformedUnitBracket(_))
        ));

        let ratio = Quantity::<TestRatio>::from_eng_format("0.5").unwrap();
        assert_eq!(ratio.unit(), TestRatio::Decimal);
        assert_eq!(ratio.to_eng_format(), "0.5");
        assert_eq!(ratio.to_unit(TestRatio::Percent).to_eng_format(), "50[%]");
    }

    #[test]
    fn test_display() {
        let q = Temp::new(20.123456, TestTemperature::Celsius);
        assert_eq!(q.to_string(), "20.123456 °C");
        assert_eq!(q.format_with(&FormatSettings::new().with_relevant_digits(4)), "20.12 °C");
        assert_eq!(Quantity::new(0.5, TestRatio::Decimal).to_string(), "0.5");
    }

    #[test]
    fn test_json_round_trip() {
        let q = Temp::new(20.5, TestTemperature::Celsius);
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, r#"{"value":20.5,"unit":"°C"}"#);

        let back: Temp = serde_json::from_str(&json).unwrap();
        assert_eq!(back.unit(), TestTemperature::Celsius);

        let defaulted: Temp = serde_json::from_str(r#"{"value": 300}"#).unwrap();
        assert_eq!(defaulted.unit(), TestTemperature::Kelvin);

        let bad: Result<Temp, _> = serde_json::from_str(r#"{"value": 1, "unit": "parsec"}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_any_quantity() {
        let boxed: Box<dyn AnyQuantity> = Box::new(Temp::new(25.0, TestTemperature::Celsius));
        assert_eq!(boxed.kind(), QuantityKind::Temperature);
        assert_eq!(boxed.base_symbol(), "K");
        assert_eq!(boxed.to_eng_format(), "25[°C]");

        let converted = boxed.convert_to_symbol("K").unwrap();
        assert!((converted.value() - 298.15).abs() < 1e-9);
        assert_eq!(converted.symbol(), "K");
        assert!(boxed.convert_to_symbol("bar").is_err());

        let typed = boxed.as_any().downcast_ref::<Temp>().unwrap();
        assert_eq!(typed.value(), 25.0);
    }
}
