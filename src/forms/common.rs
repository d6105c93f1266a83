use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Lifecycle of a form: `Submitted` is transient and is reverted to
/// `Editing` by a timer in the hosting component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

/// Field-keyed validation messages, recomputed wholesale on every
/// validation pass. An empty map means the form may be submitted.
pub type ValidationErrors = HashMap<&'static str, &'static str>;

/// What a controller decides when asked to submit.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitAttempt<P> {
    /// A submission is already in flight; do nothing.
    InFlight,
    /// Validation failed; display the errors, dispatch nothing.
    Invalid(ValidationErrors),
    /// Payload built; move to `Submitting` and dispatch exactly once.
    Ready(P),
}

// Deliberately permissive: the provider bounces anything undeliverable.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

// Optional leading +, first digit 1-9, at most 15 further digits.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").unwrap());

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Internal whitespace is stripped before matching, so grouped numbers
/// like "+91 87675 04553" pass.
pub fn is_valid_phone(phone: &str) -> bool {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_PATTERN.is_match(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_emails() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("patient.name+tag@clinic.example.org"));
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(!is_valid_email("invalid"));
        assert!(!is_valid_email("missing@domain"));
        assert!(!is_valid_email("@nothing.here "));
    }

    #[test]
    fn accepts_international_phone_numbers() {
        assert!(is_valid_phone("+14155551234"));
        assert!(is_valid_phone("+91 87675 04553"));
        assert!(is_valid_phone("8767504553"));
    }

    #[test]
    fn rejects_bad_phone_numbers() {
        assert!(!is_valid_phone("abc"));
        assert!(!is_valid_phone("0123456"));
        assert!(!is_valid_phone("+"));
        assert!(!is_valid_phone("+1415555123456789012"));
    }

    #[test]
    fn default_phase_is_editing() {
        assert_eq!(FormPhase::default(), FormPhase::Editing);
    }
}
