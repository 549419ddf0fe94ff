//! Measura Core - Units of measure
//!
//! This crate provides the model shared by every quantity type:
//! - `Unit`: closed per-type unit sets with affine conversion to a base unit
//! - `Quantity<U>`: values normalized to base units for comparison
//! - `canonicalize`: noisy symbol strings to comparable tokens
//! - `validation`: accumulating checks over quantities
//! - `UnitError`: structured errors with stable codes

mod error;
mod format;
mod kind;
mod macros;
mod quantity;
pub mod symbol;
mod unit;
pub mod validation;

pub use error::{codes, UnitError};
pub use format::{eng_format, format_number, parse_number, round_significant, split_eng_format, FormatSettings};
pub use kind::QuantityKind;
pub use quantity::{AnyQuantity, Quantity};
pub use symbol::{canonicalize, SymbolRules};
pub use unit::{Scale, Unit};
pub use validation::{Validated, ValidationFailure, Violation};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::codes;
    pub use crate::validation::{
        collect_all, require_non_null, require_not_exceed_maximum, require_not_exceed_minimum,
        require_positive, require_within, zip, zip3,
    };
    pub use crate::{
        AnyQuantity, FormatSettings, Quantity, QuantityKind, Scale, SymbolRules, Unit, UnitError,
        Validated, ValidationFailure, Violation,
    };
}
