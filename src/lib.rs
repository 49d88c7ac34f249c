//! # iran-validators
//!
//! Field validation predicates for Iranian user-registration forms: cellphone
//! number formats, name character sets (English and Persian), and the national
//! identity code (کد ملی) check-digit algorithm.
//!
//! Every validator is a pure, stateless function over a borrowed string: it
//! either accepts the value silently or rejects it with a [`ValidationError`]
//! carrying a fixed human-readable message, an error kind, and (for some rules)
//! a stable machine-readable code. No I/O, no shared state, no normalization of
//! the input — callers decide when validation runs and how failures are shown.
//!
//! ## Quick Start
//!
//! ```rust
//! use iran_validators::{FieldValidator, ValidationErrorKind};
//!
//! assert!(FieldValidator::validate_cellphone_number("09123456789").is_ok());
//! assert!(FieldValidator::validate_national_code("0499370899").is_ok());
//!
//! let err = FieldValidator::letters_only("ali123").unwrap_err();
//! assert_eq!(err.kind, ValidationErrorKind::InvalidCharacterSet);
//! assert_eq!(err.code.as_deref(), Some("invalid_english"));
//! ```

pub mod error;
pub mod validators;

// Validator exports (registration-field entry points)
pub use validators::{FieldValidator, RegexRule};

// Error exports
pub use error::{ValidationError, ValidationErrorKind};

// Result type alias
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Prelude module for convenient importing
pub mod prelude {
    pub use crate::{
        FieldValidator, RegexRule,
        ValidationError, ValidationErrorKind, Result,
    };
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
