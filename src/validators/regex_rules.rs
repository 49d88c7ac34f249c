use crate::error::{Result, ValidationError, ValidationErrorKind};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// A declarative validation rule: a full-match pattern bound to the fixed
/// message, error kind, and optional machine-readable code reported on
/// mismatch. All field rules share one executor ([`RegexRule::validate`])
/// instead of duplicating the match-or-fail body per field.
pub struct RegexRule {
    regex: &'static Lazy<Regex>,
    kind: ValidationErrorKind,
    message: &'static str,
    code: Option<&'static str>,
}

static CELLPHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^09\d{9}$").unwrap());
static ENGLISH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]+$").unwrap());
static ENGLISH_PERSIAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\u{0600}-\u{06FF}]+$").unwrap());
static INTERNATIONAL_PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+98(9\d{9})$").unwrap());

/// Domestic cellphone format: "09" followed by nine digits.
pub static CELLPHONE_NUMBER: RegexRule = RegexRule {
    regex: &CELLPHONE_RE,
    kind: ValidationErrorKind::InvalidFormat,
    message: "Enter a valid Iranian cellphone number.",
    code: None,
};

/// Names restricted to ASCII letters.
pub static ENGLISH_LETTERS: RegexRule = RegexRule {
    regex: &ENGLISH_RE,
    kind: ValidationErrorKind::InvalidCharacterSet,
    message: "Only letters (A-Z) and (a-z) are allowed.",
    code: Some("invalid_english"),
};

/// Names restricted to ASCII letters plus the Persian/Arabic block
/// (U+0600 through U+06FF).
pub static ENGLISH_PERSIAN_LETTERS: RegexRule = RegexRule {
    regex: &ENGLISH_PERSIAN_RE,
    kind: ValidationErrorKind::InvalidCharacterSet,
    message: "Only English(A-Z) and Persian(ی-ا) characters are allowed.",
    code: Some("invalid_english_persian"),
};

/// International form of the same mobile numbering scheme: "+98" then "9"
/// and nine digits.
pub static INTERNATIONAL_PHONE: RegexRule = RegexRule {
    regex: &INTERNATIONAL_PHONE_RE,
    kind: ValidationErrorKind::InvalidFormat,
    message: "Enter a valid Iranian phone number in the format +98912xxxxxxx.",
    code: Some("invalid_iranian_phone"),
};

impl RegexRule {
    /// Accepts the value if the whole string matches the rule's pattern,
    /// otherwise rejects with the rule's fixed message and code.
    pub fn validate(&self, value: &str) -> Result<()> {
        if self.regex.is_match(value) {
            return Ok(());
        }

        debug!(
            "regex rule rejected value (kind: {}, code: {:?})",
            self.kind, self.code
        );
        Err(match self.code {
            Some(code) => ValidationError::with_code(self.kind, self.message, code),
            None => ValidationError::new(self.kind, self.message),
        })
    }

    /// Returns the fixed rejection message for this rule
    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Returns the stable machine-readable code, if the rule defines one
    pub fn code(&self) -> Option<&'static str> {
        self.code
    }
}
