use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

// Israeli landline (0 + area code + 7 digits) or mobile (05 + 8 digits).
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0[23489][0-9]{7}|05[0-9]{8})$").expect("phone pattern compiles"));

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// A contact form field that failed validation. The `Display` text is what
/// the visitor sees under the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("נא להזין שם")]
    MissingName,
    #[error("נא להזין מספר טלפון")]
    MissingPhone,
    #[error("נא להזין מספר טלפון תקין")]
    InvalidPhone,
    #[error("נא להזין כתובת אימייל")]
    MissingEmail,
    #[error("נא להזין כתובת אימייל תקינה")]
    InvalidEmail,
    #[error("נא להזין הודעה")]
    MissingMessage,
}

/// Blank after trimming whitespace and the byte order mark.
pub fn is_blank(value: &str) -> bool {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}').is_empty()
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn check_name(name: &str) -> Option<ValidationError> {
    is_blank(name).then_some(ValidationError::MissingName)
}

/// Format is checked on the raw value, so surrounding spaces fail it.
pub fn check_phone(phone: &str) -> Option<ValidationError> {
    if is_blank(phone) {
        Some(ValidationError::MissingPhone)
    } else if !is_valid_phone(phone) {
        Some(ValidationError::InvalidPhone)
    } else {
        None
    }
}

pub fn check_email(email: &str) -> Option<ValidationError> {
    if is_blank(email) {
        Some(ValidationError::MissingEmail)
    } else if !is_valid_email(email) {
        Some(ValidationError::InvalidEmail)
    } else {
        None
    }
}

pub fn check_message(message: &str) -> Option<ValidationError> {
    is_blank(message).then_some(ValidationError::MissingMessage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_landline_and_mobile_numbers() {
        assert!(is_valid_phone("031234567"));
        assert!(is_valid_phone("091234567"));
        assert!(is_valid_phone("0501234567"));
        assert_eq!(check_phone("0501234567"), None);
    }

    #[test]
    fn rejects_malformed_numbers() {
        assert_eq!(check_phone("123456"), Some(ValidationError::InvalidPhone));
        // ten digits with a landline prefix is outside the pattern
        assert_eq!(check_phone("0312345678"), Some(ValidationError::InvalidPhone));
        assert_eq!(check_phone("051234567"), Some(ValidationError::InvalidPhone));
        assert_eq!(check_phone("061234567"), Some(ValidationError::InvalidPhone));
        assert_eq!(check_phone(" 031234567"), Some(ValidationError::InvalidPhone));
        assert_eq!(check_phone("03-1234567"), Some(ValidationError::InvalidPhone));
    }

    #[test]
    fn blank_phone_is_missing_not_invalid() {
        assert_eq!(check_phone(""), Some(ValidationError::MissingPhone));
        assert_eq!(check_phone("   "), Some(ValidationError::MissingPhone));
    }

    #[test]
    fn byte_order_mark_counts_as_blank() {
        assert!(is_blank("\u{FEFF}"));
        assert!(is_blank(" \u{FEFF}\t"));
        assert_eq!(check_name("\u{FEFF}"), Some(ValidationError::MissingName));
        assert_eq!(check_message("\u{FEFF} "), Some(ValidationError::MissingMessage));
        assert_eq!(check_phone("\u{FEFF}"), Some(ValidationError::MissingPhone));
        assert_eq!(check_name("\u{FEFF}דנה"), None);
    }

    #[test]
    fn email_format() {
        assert_eq!(check_email("a@b.com"), None);
        assert_eq!(check_email("a@b"), Some(ValidationError::InvalidEmail));
        assert_eq!(check_email("notanemail"), Some(ValidationError::InvalidEmail));
        assert_eq!(check_email("a@@b.com"), Some(ValidationError::InvalidEmail));
        assert_eq!(check_email("a b@c.com"), Some(ValidationError::InvalidEmail));
        assert_eq!(check_email(""), Some(ValidationError::MissingEmail));
    }

    #[test]
    fn messages_are_hebrew_copy() {
        assert_eq!(ValidationError::MissingName.to_string(), "נא להזין שם");
        assert_eq!(ValidationError::InvalidPhone.to_string(), "נא להזין מספר טלפון תקין");
        assert_eq!(ValidationError::InvalidEmail.to_string(), "נא להזין כתובת אימייל תקינה");
        assert_eq!(ValidationError::MissingMessage.to_string(), "נא להזין הודעה");
    }

    proptest! {
        #[test]
        fn any_landline_passes(area in prop::sample::select(vec!['2', '3', '4', '8', '9']), rest in "[0-9]{7}") {
            let phone = format!("0{area}{rest}");
            prop_assert!(is_valid_phone(&phone));
        }

        #[test]
        fn any_mobile_passes(rest in "[0-9]{8}") {
            let phone = format!("05{rest}");
            prop_assert!(is_valid_phone(&phone));
        }

        #[test]
        fn non_digit_phones_fail(phone in "[^0-9]+") {
            prop_assert!(check_phone(&phone).is_some());
        }

        #[test]
        fn whitespace_only_is_blank(value in "[ \t\n]*") {
            prop_assert!(is_blank(&value));
            prop_assert_eq!(check_name(&value), Some(ValidationError::MissingName));
            prop_assert_eq!(check_message(&value), Some(ValidationError::MissingMessage));
        }
    }
}
