use std::fmt;

use crate::error::ValidationError;
use crate::validation::validate_age;

pub const ADULT_AGE: u32 = 18;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    age: u32,
    email: Option<String>,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32, email: Option<String>) -> Self {
        Self {
            name: name.into(),
            age,
            email,
        }
    }

    /// Like `new`, but the age goes through the same bounds check as the
    /// error-handling demo.
    pub fn try_new(
        name: impl Into<String>,
        age: i64,
        email: Option<String>,
    ) -> Result<Self, ValidationError> {
        let age = validate_age(age)?;
        Ok(Self::new(name, age, email))
    }

    pub fn greet(&self) -> String {
        format!(
            "Hello, my name is {} and I'm {} years old!",
            self.name, self.age
        )
    }

    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }

    /// Bumps the age and returns the new one.
    pub fn celebrate_birthday(&mut self) -> u32 {
        self.age = self.age.saturating_add(1);
        self.age
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn set_age(&mut self, age: u32) {
        self.age = age;
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn set_email(&mut self, email: Option<String>) {
        self.email = email;
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {}",
            self.name,
            self.age,
            self.email.as_deref().unwrap_or("N/A")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Person {
        Person::new("Alice", 30, Some("alice@example.com".into()))
    }

    #[test]
    fn display_with_and_without_email() {
        assert_eq!(alice().to_string(), "Alice (30) - alice@example.com");
        assert_eq!(Person::new("Bob", 25, None).to_string(), "Bob (25) - N/A");
    }

    #[test]
    fn greeting() {
        assert_eq!(
            alice().greet(),
            "Hello, my name is Alice and I'm 30 years old!"
        );
    }

    #[test]
    fn adulthood_threshold() {
        assert!(alice().is_adult());
        assert!(Person::new("Teen", 18, None).is_adult());
        assert!(!Person::new("Kid", 17, None).is_adult());
    }

    #[test]
    fn birthday_increments_age() {
        let mut person = alice();
        assert_eq!(person.celebrate_birthday(), 31);
        assert_eq!(person.age(), 31);
        assert_eq!(person.to_string(), "Alice (31) - alice@example.com");
    }

    #[test]
    fn try_new_validates_age() {
        assert_eq!(
            Person::try_new("Ghost", -1, None),
            Err(ValidationError::NegativeAge)
        );
        assert_eq!(
            Person::try_new("Elder", 151, None),
            Err(ValidationError::AgeTooLarge)
        );
        assert_eq!(Person::try_new("Ok", 40, None).unwrap().age(), 40);
    }

    #[test]
    fn setters() {
        let mut person = Person::new("Bob", 25, None);
        person.set_name("Robert");
        person.set_age(26);
        person.set_email(Some("rob@example.com".into()));
        assert_eq!(person.name(), "Robert");
        assert_eq!(person.email(), Some("rob@example.com"));
        assert_eq!(person.to_string(), "Robert (26) - rob@example.com");
    }
}
