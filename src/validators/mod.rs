pub mod field_validator;
pub mod national_code;
pub mod regex_rules;

pub use field_validator::FieldValidator;
pub use regex_rules::RegexRule;
