//! Check-digit validation for the Iranian national identity code (کد ملی).
//!
//! A code is ten digits; the tenth is a check digit over the first nine.
//! Digit i (0-indexed from the left) is weighted by `10 - i`, the weighted
//! sum is reduced mod 11, and the check digit must equal the remainder when
//! the remainder is below 2, or complete it to 11 otherwise.

use crate::error::{Result, ValidationError, ValidationErrorKind};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

static TEN_ASCII_DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

const FORMAT_MESSAGE: &str = "کد ملی باید ۱۰ رقم باشد.";
const INVALID_MESSAGE: &str = "کد ملی وارد شده معتبر نیست.";

/// Validates an Iranian national code: ten ASCII digits, not a repeated-digit
/// denylist entry, and a correct mod-11 check digit.
pub fn validate(value: &str) -> Result<()> {
    if !TEN_ASCII_DIGITS_RE.is_match(value) {
        debug!("national code rejected: not ten ASCII digits");
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidFormat,
            FORMAT_MESSAGE,
        ));
    }

    // Repeated-digit codes satisfy the checksum but are never issued.
    if is_repeated_digit(value) {
        debug!("national code rejected: repeated-digit value");
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidChecksum,
            INVALID_MESSAGE,
        ));
    }

    // Format stage guarantees exactly ten ASCII digit bytes.
    let digits: Vec<u32> = value.bytes().map(|b| u32::from(b - b'0')).collect();
    let check = digits[9];
    let sum: u32 = digits[..9]
        .iter()
        .enumerate()
        .map(|(i, d)| *d * (10 - i as u32))
        .sum();
    let remainder = sum % 11;

    let valid = (remainder < 2 && check == remainder)
        || (remainder >= 2 && check + remainder == 11);
    if !valid {
        debug!(
            "national code rejected: check digit {} does not match remainder {}",
            check, remainder
        );
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidChecksum,
            INVALID_MESSAGE,
        ));
    }

    Ok(())
}

fn is_repeated_digit(value: &str) -> bool {
    let mut bytes = value.bytes();
    match bytes.next() {
        Some(first) => bytes.all(|b| b == first),
        None => false,
    }
}
