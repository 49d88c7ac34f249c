use crate::error::Result;
use crate::validators::{national_code, regex_rules};

/// Registration-field validation entry points.
///
/// Each operation is stateless and side-effect-free: it borrows the candidate
/// value for the duration of one call and either accepts it or rejects it with
/// a [`crate::ValidationError`]. No trimming or normalization is performed.
pub struct FieldValidator;

impl FieldValidator {
    /// Validate a domestic cellphone number: "09" followed by exactly nine
    /// digits, eleven characters total.
    pub fn validate_cellphone_number(value: &str) -> Result<()> {
        regex_rules::CELLPHONE_NUMBER.validate(value)
    }

    /// Validate that a value consists exclusively of ASCII letters, one or
    /// more characters. Rejects with code `invalid_english` otherwise.
    pub fn letters_only(value: &str) -> Result<()> {
        regex_rules::ENGLISH_LETTERS.validate(value)
    }

    /// Validate that every character is an ASCII letter or falls in the
    /// Persian/Arabic block U+0600..=U+06FF. Rejects with code
    /// `invalid_english_persian` otherwise.
    pub fn letters_or_persian(value: &str) -> Result<()> {
        regex_rules::ENGLISH_PERSIAN_LETTERS.validate(value)
    }

    /// Validate the international form of a mobile number: "+98" then "9"
    /// and exactly nine digits.
    pub fn validate_phone_international(value: &str) -> Result<()> {
        regex_rules::INTERNATIONAL_PHONE.validate(value)
    }

    /// Validate an Iranian national code: ten digits, not a repeated-digit
    /// value, with a correct mod-11 check digit.
    pub fn validate_national_code(value: &str) -> Result<()> {
        national_code::validate(value)
    }
}
