//! Accumulating validation
//!
//! Checks return [`Validated<T>`]. Independent checks are combined with
//! [`zip`], [`zip3`] or [`collect_all`], which always evaluate every input
//! and merge all failures, so a caller with two bad inputs hears about both.
//!
//! ```ignore
//! let nu = zip(
//!     require_non_null(dynamic, "DynamicViscosity").and_then(require_positive),
//!     require_non_null(density, "Density")
//!         .and_then(|rho| require_not_exceed_minimum(rho, min_density)),
//! )
//! .map(|(mu, rho)| mu.base_value() / rho.base_value())?;
//! ```

use std::fmt;

use serde::Serialize;

use crate::{Quantity, Unit};

/// A single violated constraint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub message: String,
    /// Offending quantities in engineering format
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subjects: Vec<String>,
}

impl Violation {
    pub fn new(message: impl Into<String>) -> Self {
        Violation {
            message: message.into(),
            subjects: Vec::new(),
        }
    }

    pub fn with_subjects(message: impl Into<String>, subjects: Vec<String>) -> Self {
        Violation {
            message: message.into(),
            subjects,
        }
    }
}

/// One or more violations. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationFailure {
    violations: Vec<Violation>,
}

impl ValidationFailure {
    pub fn new(violation: Violation) -> Self {
        ValidationFailure {
            violations: vec![violation],
        }
    }

    /// `None` when there is nothing to report
    pub fn from_violations(violations: Vec<Violation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(ValidationFailure { violations })
        }
    }

    /// Append another failure's violations, keeping order
    pub fn merge(mut self, other: ValidationFailure) -> Self {
        self.violations.extend(other.violations);
        self
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Always false; present for clippy's `len_without_is_empty`
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// All messages, newline-joined
    pub fn message(&self) -> String {
        self.violations
            .iter()
            .map(|v| v.message.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for ValidationFailure {}

impl From<Violation> for ValidationFailure {
    fn from(violation: Violation) -> Self {
        ValidationFailure::new(violation)
    }
}

pub type Validated<T> = Result<T, ValidationFailure>;

// ========== Primitive checks ==========

/// Fails with "`<name>` must not be null" when the value is absent
pub fn require_non_null<T>(value: Option<T>, name: &str) -> Validated<T> {
    value.ok_or_else(|| Violation::new(format!("{} must not be null", name)).into())
}

/// Fails when `quantity` is below `min` (compared in base units).
/// NaN is never within a limit.
pub fn require_not_exceed_minimum<U: Unit>(
    quantity: Quantity<U>,
    min: Quantity<U>,
) -> Validated<Quantity<U>> {
    if !quantity.equal_or_greater_than(&min) {
        return Err(Violation::with_subjects(
            format!(
                "{} = {} must not be lower than minimum limit {}",
                U::KIND,
                quantity.to_eng_format(),
                min.to_eng_format()
            ),
            vec![quantity.to_eng_format()],
        )
        .into());
    }
    Ok(quantity)
}

/// Fails when `quantity` is above `max` (compared in base units)
pub fn require_not_exceed_maximum<U: Unit>(
    quantity: Quantity<U>,
    max: Quantity<U>,
) -> Validated<Quantity<U>> {
    if !quantity.equal_or_lower_than(&max) {
        return Err(Violation::with_subjects(
            format!(
                "{} = {} must not be greater than maximum limit {}",
                U::KIND,
                quantity.to_eng_format(),
                max.to_eng_format()
            ),
            vec![quantity.to_eng_format()],
        )
        .into());
    }
    Ok(quantity)
}

/// Fails when the base value is negative or NaN. Zero passes.
pub fn require_positive<U: Unit>(quantity: Quantity<U>) -> Validated<Quantity<U>> {
    let base = quantity.base_value();
    if base.is_nan() || base < 0.0 {
        return Err(Violation::with_subjects(
            format!("{} = {} must not be negative", U::KIND, quantity.to_eng_format()),
            vec![quantity.to_eng_format()],
        )
        .into());
    }
    Ok(quantity)
}

/// Both limit checks, accumulated. Limits are inclusive.
pub fn require_within<U: Unit>(
    quantity: Quantity<U>,
    min: Quantity<U>,
    max: Quantity<U>,
) -> Validated<Quantity<U>> {
    zip(
        require_not_exceed_minimum(quantity, min),
        require_not_exceed_maximum(quantity, max),
    )
    .map(|(q, _)| q)
}

// ========== Combinators ==========

/// Combine two independent results, keeping every failure
pub fn zip<A, B>(a: Validated<A>, b: Validated<B>) -> Validated<(A, B)> {
    match (a, b) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (Err(e), Ok(_)) | (Ok(_), Err(e)) => Err(e),
        (Err(ea), Err(eb)) => Err(ea.merge(eb)),
    }
}

pub fn zip3<A, B, C>(a: Validated<A>, b: Validated<B>, c: Validated<C>) -> Validated<(A, B, C)> {
    zip(zip(a, b), c).map(|((a, b), c)| (a, b, c))
}

/// Evaluate every item; all values on success, every failure otherwise
pub fn collect_all<T, I>(items: I) -> Validated<Vec<T>>
where
    I: IntoIterator<Item = Validated<T>>,
{
    let mut values = Vec::new();
    let mut failure: Option<ValidationFailure> = None;

    for item in items {
        match item {
            Ok(value) => values.push(value),
            Err(e) => {
                failure = Some(match failure {
                    Some(existing) => existing.merge(e),
                    None => e,
                });
            }
        }
    }

    match failure {
        Some(e) => Err(e),
        None => Ok(values),
    }
}
