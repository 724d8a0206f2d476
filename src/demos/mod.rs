//! One module per tour stop. Each exposes its pure helpers for testing and
//! a `run` that prints the section body to the given writer.

pub mod basic_types;
pub mod collections;
pub mod concurrency;
pub mod error_handling;
pub mod files;
pub mod generics;
pub mod oop;
pub mod patterns;
pub mod pipelines;

use std::fmt::Display;

use itertools::Itertools;

/// `[a, b, c]`, the way the tour prints every list.
pub fn bracketed<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    format!("[{}]", items.into_iter().join(", "))
}
