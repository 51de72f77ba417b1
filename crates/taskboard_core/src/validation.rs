//! Declarative single-field validation.
//!
//! # Responsibility
//! - Check one text or numeric field against an optional constraint set.
//! - Report the first failing constraint for per-field feedback.
//!
//! # Invariants
//! - Every bound is strict: length must exceed `min_length` and stay below
//!   `max_length`; numbers must exceed `min` and stay below `max`.
//! - Constraints that do not apply to the value kind are skipped.
//! - Validation is pure and never panics.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Field value under validation.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            // A number always stringifies to something visible, NaN included.
            Self::Number(_) => false,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// One field plus the constraints it must satisfy.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Validatable {
    pub value: Option<FieldValue>,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    /// Starts a constraint set with no constraints.
    pub fn new(value: impl Into<FieldValue>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, bound: usize) -> Self {
        self.min_length = Some(bound);
        self
    }

    pub fn max_length(mut self, bound: usize) -> Self {
        self.max_length = Some(bound);
        self
    }

    pub fn min(mut self, bound: f64) -> Self {
        self.min = Some(bound);
        self
    }

    pub fn max(mut self, bound: f64) -> Self {
        self.max = Some(bound);
        self
    }
}

/// First constraint a field failed.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstraintViolation {
    /// Value is missing or whitespace-only.
    Required,
    /// Text is not longer than `min_length`.
    TooShort { min_length: usize, actual: usize },
    /// Text is not shorter than `max_length`.
    TooLong { max_length: usize, actual: usize },
    /// Number is not greater than `min`.
    BelowMin { min: f64, actual: f64 },
    /// Number is not less than `max`.
    AboveMax { max: f64, actual: f64 },
}

impl Display for ConstraintViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => write!(f, "value is required"),
            Self::TooShort { min_length, actual } => write!(
                f,
                "length {actual} must be greater than {min_length}"
            ),
            Self::TooLong { max_length, actual } => {
                write!(f, "length {actual} must be less than {max_length}")
            }
            Self::BelowMin { min, actual } => {
                write!(f, "value {actual} must be greater than {min}")
            }
            Self::AboveMax { max, actual } => write!(f, "value {actual} must be less than {max}"),
        }
    }
}

impl Error for ConstraintViolation {}

/// Returns whether every applicable constraint passes.
pub fn validate(input: &Validatable) -> bool {
    check(input).is_ok()
}

/// Checks constraints in declaration order and returns the first failure.
pub fn check(input: &Validatable) -> Result<(), ConstraintViolation> {
    let Some(value) = input.value.as_ref() else {
        return if input.required {
            Err(ConstraintViolation::Required)
        } else {
            Ok(())
        };
    };

    if input.required && value.is_blank() {
        return Err(ConstraintViolation::Required);
    }

    match value {
        FieldValue::Text(text) => {
            let actual = text.chars().count();
            if let Some(min_length) = input.min_length {
                if actual <= min_length {
                    return Err(ConstraintViolation::TooShort { min_length, actual });
                }
            }
            if let Some(max_length) = input.max_length {
                if actual >= max_length {
                    return Err(ConstraintViolation::TooLong { max_length, actual });
                }
            }
        }
        FieldValue::Number(actual) => {
            let actual = *actual;
            if let Some(min) = input.min {
                // Negated so NaN fails.
                if !(actual > min) {
                    return Err(ConstraintViolation::BelowMin { min, actual });
                }
            }
            if let Some(max) = input.max {
                if !(actual < max) {
                    return Err(ConstraintViolation::AboveMax { max, actual });
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{check, validate, ConstraintViolation, Validatable};

    #[test]
    fn min_length_is_strict() {
        assert!(!validate(&Validatable::new("abcde").min_length(5)));
        assert!(validate(&Validatable::new("abcdef").min_length(5)));
    }

    #[test]
    fn max_length_is_strict() {
        assert!(!validate(&Validatable::new("abc").max_length(3)));
        assert!(validate(&Validatable::new("ab").max_length(3)));
    }

    #[test]
    fn numeric_bounds_are_strict() {
        assert!(validate(&Validatable::new(10.0).min(0.0).max(15.0)));
        assert!(!validate(&Validatable::new(15.0).max(15.0)));
        assert!(!validate(&Validatable::new(0.0).min(0.0)));
    }

    #[test]
    fn required_rejects_whitespace_only_text() {
        let err = check(&Validatable::new("   ").required()).unwrap_err();
        assert_eq!(err, ConstraintViolation::Required);
    }

    #[test]
    fn required_accepts_any_number() {
        assert!(validate(&Validatable::new(0.0).required()));
    }

    #[test]
    fn nan_fails_numeric_bounds() {
        assert!(!validate(&Validatable::new(f64::NAN).min(0.0)));
        assert!(!validate(&Validatable::new(f64::NAN).max(15.0)));
    }

    #[test]
    fn bounds_for_other_kind_are_skipped() {
        assert!(validate(&Validatable::new("x").min(5.0).max(1.0)));
        assert!(validate(&Validatable::new(3.0).min_length(10)));
    }

    #[test]
    fn missing_value_only_fails_when_required() {
        assert!(validate(&Validatable::default()));
        assert!(!validate(&Validatable {
            required: true,
            ..Validatable::default()
        }));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(validate(&Validatable::new("привет").max_length(7)));
    }
}
