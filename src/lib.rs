//! Language Tour - Runnable Walkthrough
//!
//! Nine self-contained demonstrations of everyday Rust: primitive types,
//! collections, structs and enums, generics, iterator pipelines, typed
//! errors, file I/O, threads, and regular expressions.
//!
//! Run it with:
//! ```bash
//! cargo run --bin language_tour
//! ```

pub mod config;
pub mod demos;
pub mod error;
pub mod logger;
pub mod model;
pub mod runner;
pub mod validation;

pub use config::TourConfig;
pub use error::{ArithmeticError, ConfigError, TourError, ValidationError};
pub use model::{Container, Person, Shape};
pub use runner::{Demo, DemoRunner};
