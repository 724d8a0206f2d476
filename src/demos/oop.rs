use std::io::{self, Write};

use crate::model::{Person, Shape};

pub fn shapes() -> [Shape; 3] {
    [
        Shape::circle(5.0),
        Shape::rectangle(4.0, 6.0),
        Shape::triangle(3.0, 4.0, 5.0),
    ]
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let mut alice = Person::new("Alice", 30, Some("alice@example.com".to_string()));
    let bob = Person::new("Bob", 25, None);

    writeln!(out, "Person 1: {}", alice)?;
    writeln!(out, "Person 2: {}", bob)?;
    writeln!(out, "Person 1 greeting: {}", alice.greet())?;
    writeln!(out, "Is person 1 adult? {}", alice.is_adult())?;

    let age = alice.celebrate_birthday();
    writeln!(out, "Happy birthday! You're now {} years old.", age)?;
    writeln!(out, "After birthday: {}", alice)?;
    writeln!(out)?;

    for shape in shapes() {
        writeln!(out, "{}", shape.summary())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_people_and_shapes() {
        let mut buf = Vec::new();
        run(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Person 1: Alice (30) - alice@example.com");
        assert_eq!(lines[1], "Person 2: Bob (25) - N/A");
        assert_eq!(lines[2], "Person 1 greeting: Hello, my name is Alice and I'm 30 years old!");
        assert_eq!(lines[3], "Is person 1 adult? true");
        assert_eq!(lines[4], "Happy birthday! You're now 31 years old.");
        assert_eq!(lines[5], "After birthday: Alice (31) - alice@example.com");
        assert_eq!(lines[6], "");
        assert_eq!(lines[7], "Circle with radius 5.00 -> Area: 78.54, Perimeter: 31.42");
        assert_eq!(lines[8], "Rectangle 4.00 x 6.00 -> Area: 24.00, Perimeter: 20.00");
        assert_eq!(
            lines[9],
            "Triangle with sides 3.00, 4.00, 5.00 -> Area: 6.00, Perimeter: 12.00"
        );
    }
}
