//! Iterator adapters chained the way a stream pipeline would be: filter,
//! map, partition, and a one-pass summary.

use std::fmt;
use std::io::{self, Write};

use itertools::{Itertools, MinMaxResult};

use super::bracketed;

/// Count, sum, mean and range of a slice, gathered in one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub sum: i64,
    pub average: f64,
    pub min: Option<i32>,
    pub max: Option<i32>,
}

pub fn summarize(numbers: &[i32]) -> Summary {
    let count = numbers.len();
    let sum: i64 = numbers.iter().map(|&n| i64::from(n)).sum();
    let average = if count == 0 { 0.0 } else { sum as f64 / count as f64 };

    let (min, max) = match numbers.iter().copied().minmax() {
        MinMaxResult::NoElements => (None, None),
        MinMaxResult::OneElement(n) => (Some(n), Some(n)),
        MinMaxResult::MinMax(lo, hi) => (Some(lo), Some(hi)),
    };

    Summary {
        count,
        sum,
        average,
        min,
        max,
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |v: Option<i32>| v.map_or_else(|| "-".to_string(), |n| n.to_string());
        write!(
            f,
            "Count: {}, Sum: {}, Avg: {:.2}, Min: {}, Max: {}",
            self.count,
            self.sum,
            self.average,
            show(self.min),
            show(self.max)
        )
    }
}

/// Squares come back as `i64`, so large inputs cannot overflow.
pub fn even_squares(numbers: &[i32]) -> Vec<i64> {
    numbers
        .iter()
        .filter(|&&n| n % 2 == 0)
        .map(|&n| i64::from(n) * i64::from(n))
        .collect()
}

/// `(evens, odds)`, each in input order.
pub fn partition_parity(numbers: &[i32]) -> (Vec<i32>, Vec<i32>) {
    numbers.iter().copied().partition(|&n| n % 2 == 0)
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let numbers: Vec<i32> = (1..=10).collect();

    writeln!(out, "Even squares: {}", bracketed(even_squares(&numbers)))?;

    let (evens, odds) = partition_parity(&numbers);
    writeln!(out, "Even numbers: {}", bracketed(evens))?;
    writeln!(out, "Odd numbers: {}", bracketed(odds))?;

    writeln!(out, "Statistics - {}", summarize(&numbers))?;
    Ok(())
}
