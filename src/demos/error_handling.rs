use std::io::{self, Write};

use crate::validation::{safe_divide, validate_age, validate_email};

pub const EMAILS: [&str; 3] = ["valid@example.com", "invalid-email", "another@valid.com"];
pub const AGES: [i64; 3] = [-5, 200, 30];
pub const DIVISIONS: [(f64, f64); 2] = [(10.0, 2.0), (10.0, 0.0)];

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    for email in EMAILS {
        match validate_email(email) {
            Ok(()) => writeln!(out, "{}: Valid", email)?,
            Err(e) => writeln!(out, "{}: Error - {}", email, e)?,
        }
    }

    for age in AGES {
        match validate_age(age) {
            Ok(age) => writeln!(out, "Age {}: Valid", age)?,
            Err(e) => writeln!(out, "Age validation error: {}", e)?,
        }
    }

    for (a, b) in DIVISIONS {
        match safe_divide(a, b) {
            Ok(result) => writeln!(out, "{:.1} / {:.1} = {:.2}", a, b, result)?,
            Err(e) => writeln!(out, "Division error: {}", e)?,
        }
    }
    Ok(())
}
