use iran_validators::*;

/// Cellphone Number Tests - domestic "09xxxxxxxxx" format
/// The validator performs a full-string match with no trimming or
/// normalization, so anything beyond the bare eleven characters rejects.

#[test]
fn test_valid_cellphone_numbers() {
    let valid_numbers = vec![
        "09123456789",
        "09000000000",
        "09999999999",
        "09351112233",
    ];

    for number in valid_numbers {
        assert!(
            FieldValidator::validate_cellphone_number(number).is_ok(),
            "Expected acceptance for cellphone number: {}",
            number
        );
    }
}

#[test]
fn test_invalid_cellphone_numbers() {
    let invalid_numbers = vec![
        "",
        "0912345678",      // ten characters, one digit short
        "091234567890",    // twelve characters, one digit over
        "9123456789",      // missing leading zero
        "08123456789",     // wrong prefix
        "+989123456789",   // international form is a separate validator
        "0912345678a",
        " 09123456789",    // leading whitespace is not trimmed
        "09123456789 ",
        "09-12345678",
    ];

    for number in invalid_numbers {
        let result = FieldValidator::validate_cellphone_number(number);
        assert!(
            result.is_err(),
            "Expected rejection for cellphone number: {:?}",
            number
        );

        let error = result.unwrap_err();
        assert_eq!(error.kind, ValidationErrorKind::InvalidFormat);
        assert_eq!(error.message, "Enter a valid Iranian cellphone number.");
        assert_eq!(error.code(), None);
    }
}
