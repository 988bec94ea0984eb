//! Client-side validation for the values the vendor is known to reject:
//! phone numbers, activation codes, dates of birth and emails. Validating
//! before the request avoids burning a verification challenge on input the
//! server would bounce anyway.

use crate::constants::{ACTIVATION_CODE_LEN, PHONE_MAX_DIGITS, PHONE_MIN_DIGITS};
use crate::error::AuthError;
use once_cell::sync::Lazy;
use regex::Regex;

static NON_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D").expect("non-digit regex"));
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])$").expect("date regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email regex"));

/// Normalizes a phone number to its digits and checks it is plausible as an
/// international number (9 to 15 digits).
///
/// Separators, spaces and a leading `+` are stripped before counting.
///
/// # Errors
/// [`AuthError::InvalidPhoneNumber`] when too few or too many digits remain.
pub fn validate_phone_number(phone_number: &str) -> Result<u64, AuthError> {
    let digits = NON_DIGITS.replace_all(phone_number, "");
    if digits.len() < PHONE_MIN_DIGITS || digits.len() > PHONE_MAX_DIGITS {
        return Err(AuthError::InvalidPhoneNumber(phone_number.to_string()));
    }
    digits
        .parse::<u64>()
        .map_err(|_| AuthError::InvalidPhoneNumber(phone_number.to_string()))
}

/// Checks an SMS activation code: exactly six digits.
pub fn validate_activation_code(code: &str) -> Result<(), AuthError> {
    if code.len() == ACTIVATION_CODE_LEN && code.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(AuthError::InvalidActivationCode)
    }
}

/// Checks a date of birth in `YYYY-MM-DD` format.
pub fn is_valid_date(date: &str) -> bool {
    DATE_RE.is_match(date)
}

/// Loose email shape check, matching what the original client accepts.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
