pub mod validation_error;

pub use validation_error::{ValidationError, ValidationErrorKind};

pub type Result<T> = std::result::Result<T, ValidationError>;
