use std::cmp::Reverse;
use std::io::{self, Write};

use itertools::Itertools;

use super::bracketed;
use super::pipelines::summarize;

/// Name/score pairs in insertion order. A `Vec` of pairs keeps that order,
/// which a `HashMap` would not.
pub type Gradebook = Vec<(&'static str, u32)>;

pub fn gradebook() -> Gradebook {
    vec![("Alice", 95), ("Bob", 87), ("Charlie", 92), ("Diana", 88)]
}

pub fn evens(numbers: &[i32]) -> Vec<i32> {
    numbers.iter().copied().filter(|n| n % 2 == 0).collect()
}

/// Widened to `i64`: the square of any `i32` fits.
pub fn squares(numbers: &[i32]) -> Vec<i64> {
    numbers.iter().map(|&n| i64::from(n) * i64::from(n)).collect()
}

/// Highest score first. The sort is stable, so equal scores keep their
/// insertion order.
pub fn by_score_desc(grades: &[(&'static str, u32)]) -> Gradebook {
    grades
        .iter()
        .copied()
        .sorted_by_key(|&(_, score)| Reverse(score))
        .collect()
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let numbers: Vec<i32> = (1..=10).collect();
    let summary = summarize(&numbers);

    writeln!(out, "Original: {}", bracketed(&numbers))?;
    writeln!(out, "Even numbers: {}", bracketed(evens(&numbers)))?;
    writeln!(out, "Squared: {}", bracketed(squares(&numbers)))?;
    writeln!(out, "Sum: {}, Average: {:.2}", summary.sum, summary.average)?;
    writeln!(out)?;

    let grades = gradebook();
    writeln!(out, "Student grades:")?;
    for (name, score) in &grades {
        writeln!(out, "  {}: {}", name, score)?;
    }

    writeln!(out, "Sorted by grade:")?;
    for (name, score) in by_score_desc(&grades) {
        writeln!(out, "  {}: {}", name, score)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evens_and_squares() {
        let numbers: Vec<i32> = (1..=10).collect();
        assert_eq!(evens(&numbers), vec![2, 4, 6, 8, 10]);
        assert_eq!(squares(&numbers), vec![1, 4, 9, 16, 25, 36, 49, 64, 81, 100]);
    }

    #[test]
    fn squares_of_extremes_do_not_overflow() {
        assert_eq!(
            squares(&[i32::MIN, i32::MAX]),
            vec![1_i64 << 62, i64::from(i32::MAX) * i64::from(i32::MAX)]
        );
    }

    #[test]
    fn sum_and_average() {
        let numbers: Vec<i32> = (1..=10).collect();
        let summary = summarize(&numbers);
        assert_eq!(summary.sum, 55);
        assert_eq!(summary.average, 5.5);
    }

    #[test]
    fn grades_sorted_descending() {
        let names: Vec<&str> = by_score_desc(&gradebook())
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, ["Alice", "Charlie", "Diana", "Bob"]);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let grades = vec![("Zed", 80), ("Amy", 90), ("Bea", 80), ("Cal", 90)];
        let names: Vec<&str> = by_score_desc(&grades).into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["Amy", "Cal", "Zed", "Bea"]);
    }

    #[test]
    fn prints_insertion_order_then_sorted() {
        let mut buf = Vec::new();
        run(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Sum: 55, Average: 5.50"));
        assert!(text.contains(
            "Student grades:\n  Alice: 95\n  Bob: 87\n  Charlie: 92\n  Diana: 88\n"
        ));
        assert!(text.contains(
            "Sorted by grade:\n  Alice: 95\n  Charlie: 92\n  Diana: 88\n  Bob: 87\n"
        ));
    }
}
