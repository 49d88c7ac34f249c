use iran_validators::*;

/// Edge Case Tests - idempotence and error object behavior shared by
/// all validators.

#[test]
fn test_validators_are_idempotent() {
    let _ = env_logger::builder().is_test(true).try_init();

    let inputs = vec![
        "09123456789",
        "0912345678",
        "Ali",
        "ali123",
        "علی",
        "+989123456789",
        "1234567891",
        "0000000000",
        "",
    ];

    for input in inputs {
        assert_eq!(
            FieldValidator::validate_cellphone_number(input),
            FieldValidator::validate_cellphone_number(input),
            "Cellphone outcome changed between calls for: {:?}",
            input
        );
        assert_eq!(
            FieldValidator::letters_only(input),
            FieldValidator::letters_only(input),
            "Letters-only outcome changed between calls for: {:?}",
            input
        );
        assert_eq!(
            FieldValidator::letters_or_persian(input),
            FieldValidator::letters_or_persian(input),
            "Letters-or-Persian outcome changed between calls for: {:?}",
            input
        );
        assert_eq!(
            FieldValidator::validate_phone_international(input),
            FieldValidator::validate_phone_international(input),
            "International phone outcome changed between calls for: {:?}",
            input
        );
        assert_eq!(
            FieldValidator::validate_national_code(input),
            FieldValidator::validate_national_code(input),
            "National code outcome changed between calls for: {:?}",
            input
        );
    }
}

#[test]
fn test_error_objects_serialize_for_host_frameworks() {
    let error = FieldValidator::letters_or_persian("Али").unwrap_err();
    let json = serde_json::to_string(&error).unwrap();

    assert!(json.contains("\"kind\":\"INVALID_CHARACTER_SET\""));
    assert!(json.contains("\"code\":\"invalid_english_persian\""));

    let round_tripped: ValidationError = serde_json::from_str(&json).unwrap();
    assert_eq!(round_tripped, error);
}

#[test]
fn test_prelude_exports() {
    use iran_validators::prelude::*;

    let result: Result<()> = FieldValidator::validate_cellphone_number("09123456789");
    assert!(result.is_ok());
}
