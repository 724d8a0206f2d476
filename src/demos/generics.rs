use std::io::{self, Write};

use super::bracketed;
use crate::model::Container;

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let mut words: Container<String> = Container::new();
    words.add("Hello".to_string());
    words.add("World".to_string());
    words.add("Rust".to_string());

    writeln!(out, "Container size: {}", words.len())?;

    write!(out, "Container contents: ")?;
    for word in &words {
        write!(out, "{} ", word)?;
    }
    writeln!(out)?;

    let long_words = words.filter(|w| w.len() > 4);
    writeln!(out, "Long words: {}", bracketed(&long_words))?;

    let lengths = words.map(|w| w.len());
    writeln!(out, "Word lengths: {}", bracketed(&lengths))?;
    Ok(())
}
