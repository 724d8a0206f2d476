use std::io::{self, Write};
use std::num::ParseIntError;

use lazy_static::lazy_static;
use regex::Regex;

use super::bracketed;

pub const SAMPLE: &str = "The numbers are 123, 456 and 789 in this text.";

lazy_static! {
    // ASCII only: `\d` would also match other Unicode decimal digits.
    static ref DIGIT_RUN: Regex = Regex::new(r"[0-9]+").expect("digit pattern");
}

/// Every maximal run of ASCII digits, left to right, parsed as an integer.
/// Fails only when a run does not fit in a `u64`.
pub fn extract_numbers(text: &str) -> Result<Vec<u64>, ParseIntError> {
    DIGIT_RUN
        .find_iter(text)
        .map(|m| m.as_str().parse::<u64>())
        .collect()
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Original text: {}", SAMPLE)?;

    match extract_numbers(SAMPLE) {
        Ok(numbers) => writeln!(out, "Extracted numbers: {}", bracketed(numbers))?,
        Err(e) => writeln!(out, "Extracted numbers: error - {}", e)?,
    }

    writeln!(out, "Contains 'numbers': {}", SAMPLE.contains("numbers"))?;
    writeln!(out, "To uppercase: {}", SAMPLE.to_uppercase())?;
    writeln!(
        out,
        "Replace 'numbers' with 'digits': {}",
        SAMPLE.replace("numbers", "digits")
    )?;
    Ok(())
}
