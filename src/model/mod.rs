//! Value types the demos build and throw away: a person record, a closed
//! shape enum, and a generic container.

mod container;
mod person;
mod shape;

pub use container::Container;
pub use person::Person;
pub use shape::Shape;
