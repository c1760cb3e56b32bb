// File: src/error.rs
// Purpose: Caller-contract violations raised by the form engine

use cms_forms_validation::UnknownRuleError;
use thiserror::Error;

/// Errors for misuse of the engine API.
///
/// Invalid user input is never reported here; it shows up as a vetoed
/// keystroke, a [`BlurOutcome`](crate::BlurOutcome) or a
/// [`Verdict`](crate::Verdict).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    UnknownRule(#[from] UnknownRuleError),

    #[error("field spec at position {0} has no name")]
    MissingFieldName(usize),

    #[error("field `{0}` is declared more than once")]
    DuplicateField(String),

    #[error("form has no field named `{0}`")]
    UnknownField(String),
}

pub type FormResult<T> = Result<T, FormError>;
