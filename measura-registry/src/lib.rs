//! Measura Registry
//!
//! Maps a runtime quantity kind to a parser that builds the quantity from a
//! value and a raw unit symbol, or from engineering-format text.
//!
//! - `QuantityParser`: the parser seam, implemented by `UnitParser<U>` for
//!   unit enums and by `FnParser` for closures
//! - `QuantityRegistry`: build once, read concurrently

mod registry;
mod traits;

pub use registry::QuantityRegistry;
pub use traits::{FnParser, ParserMeta, QuantityParser, UnitParser};

/// Re-export core types for parser authors
pub mod prelude {
    pub use crate::{FnParser, ParserMeta, QuantityParser, QuantityRegistry, UnitParser};
    pub use measura_core::prelude::*;
}
