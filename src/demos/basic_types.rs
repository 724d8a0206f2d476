use std::io::{self, Write};

#[allow(clippy::approx_constant)]
pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let text: &str = "Hello, Rust World!";
    let integer: i32 = 42;
    let float: f64 = 3.14159;
    let flag: bool = true;
    let letter: char = 'R';

    writeln!(out, "String: {}", text)?;
    writeln!(out, "Integer: {}", integer)?;
    writeln!(out, "Double: {}", float)?;
    writeln!(out, "Boolean: {}", flag)?;
    writeln!(out, "Character: {}", letter)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_each_literal() {
        let mut buf = Vec::new();
        run(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "String: Hello, Rust World!\nInteger: 42\nDouble: 3.14159\nBoolean: true\nCharacter: R\n"
        );
    }
}
