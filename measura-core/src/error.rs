//! Structured errors for quantity parsing and validation
//!
//! Errors are values. Every failure carries a stable, machine-readable code
//! so adapters (JSON, CLI) can report it without matching on messages.

use thiserror::Error;

use crate::validation::ValidationFailure;
use crate::QuantityKind;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNSUPPORTED_SYMBOL: &str = "UNSUPPORTED_SYMBOL";
    pub const NOT_REGISTERED: &str = "NOT_REGISTERED";
    pub const MALFORMED_NUMBER: &str = "MALFORMED_NUMBER";
    pub const MALFORMED_UNIT_BRACKET: &str = "MALFORMED_UNIT_BRACKET";
    pub const MALFORMED_COORDINATE: &str = "MALFORMED_COORDINATE";
    pub const KIND_MISMATCH: &str = "KIND_MISMATCH";
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
}

/// Error type for unit resolution, parsing and validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    /// The symbol did not canonicalize to any unit of the requested quantity
    #[error("Unsupported symbol '{symbol}' for {quantity}")]
    UnsupportedSymbol { symbol: String, quantity: QuantityKind },

    /// No parser is registered for the requested quantity kind
    #[error("Quantity type not registered: {0}")]
    NotRegistered(QuantityKind),

    /// The numeric part of a quantity string is not a number
    #[error("Malformed number: '{0}'")]
    MalformedNumber(String),

    /// Unit brackets are unbalanced, misplaced or missing where required
    #[error("Malformed unit bracket in '{0}', expected <number>[<symbol>]")]
    MalformedUnitBracket(String),

    /// A geographic coordinate string could not be parsed
    #[error("Malformed coordinate: '{0}'")]
    MalformedCoordinate(String),

    /// A registered parser produced a quantity of another kind
    #[error("Parser registered for {expected} produced {found}")]
    KindMismatch {
        expected: QuantityKind,
        found: QuantityKind,
    },

    /// One or more constraint violations, all reported together
    #[error(transparent)]
    Validation(#[from] ValidationFailure),
}

impl UnitError {
    pub fn unsupported_symbol(symbol: impl Into<String>, quantity: QuantityKind) -> Self {
        Self::UnsupportedSymbol {
            symbol: symbol.into(),
            quantity,
        }
    }

    pub fn malformed_number(input: impl Into<String>) -> Self {
        Self::MalformedNumber(input.into())
    }

    pub fn malformed_bracket(input: impl Into<String>) -> Self {
        Self::MalformedUnitBracket(input.into())
    }

    pub fn malformed_coordinate(input: impl Into<String>) -> Self {
        Self::MalformedCoordinate(input.into())
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedSymbol { .. } => codes::UNSUPPORTED_SYMBOL,
            Self::NotRegistered(_) => codes::NOT_REGISTERED,
            Self::MalformedNumber(_) => codes::MALFORMED_NUMBER,
            Self::MalformedUnitBracket(_) => codes::MALFORMED_UNIT_BRACKET,
            Self::MalformedCoordinate(_) => codes::MALFORMED_COORDINATE,
            Self::KindMismatch { .. } => codes::KIND_MISMATCH,
            Self::Validation(_) => codes::VALIDATION_FAILED,
        }
    }

    /// Client-input errors are never worth retrying with the same input;
    /// the rest point at registration or programming mistakes.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::NotRegistered(_) | Self::KindMismatch { .. })
    }
}
