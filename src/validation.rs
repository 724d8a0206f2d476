//! Result-returning validators used by the error-handling demo and by
//! `Person::try_new`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{ArithmeticError, ValidationError};

pub const MAX_AGE: i64 = 150;

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern");
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(email.to_string()))
    }
}

/// Accepts `0..=150`. Takes a signed value so negative input can be rejected
/// rather than being unrepresentable.
pub fn validate_age(age: i64) -> Result<u32, ValidationError> {
    if age < 0 {
        return Err(ValidationError::NegativeAge);
    }
    if age > MAX_AGE {
        return Err(ValidationError::AgeTooLarge);
    }
    Ok(age as u32)
}

pub fn safe_divide(a: f64, b: f64) -> Result<f64, ArithmeticError> {
    if b == 0.0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(a / b)
}
