use std::io::{self, Write};

use colored::Colorize;
use tracing::debug;

use crate::config::TourConfig;
use crate::demos::{
    basic_types, collections, concurrency, error_handling, files, generics, oop, patterns,
    pipelines,
};
use crate::error::TourError;

/// The tour stops, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    BasicTypes,
    Collections,
    ObjectOriented,
    Generics,
    Pipelines,
    ErrorHandling,
    FileOperations,
    Concurrency,
    Patterns,
}

impl Demo {
    pub const ALL: [Demo; 9] = [
        Demo::BasicTypes,
        Demo::Collections,
        Demo::ObjectOriented,
        Demo::Generics,
        Demo::Pipelines,
        Demo::ErrorHandling,
        Demo::FileOperations,
        Demo::Concurrency,
        Demo::Patterns,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Demo::BasicTypes => "Basic Data Types",
            Demo::Collections => "Collections",
            Demo::ObjectOriented => "Object-Oriented Programming",
            Demo::Generics => "Generics",
            Demo::Pipelines => "Iterator Pipelines",
            Demo::ErrorHandling => "Error Handling",
            Demo::FileOperations => "File Operations (Demo)",
            Demo::Concurrency => "Concurrency",
            Demo::Patterns => "Patterns and Regular Expressions",
        }
    }
}

pub struct DemoRunner {
    config: TourConfig,
}

impl DemoRunner {
    pub fn new(config: TourConfig) -> Self {
        Self { config }
    }

    /// Banner, every demo in order, closing banner. Demo failures are
    /// handled inside each demo; only a failed write to `out`/`err` is
    /// returned.
    pub fn run_all<W, E>(&self, out: &mut W, err: &mut E) -> Result<(), TourError>
    where
        W: Write + Send,
        E: Write + Send,
    {
        writeln!(out, "=== {} ===", self.config.app_name)?;
        writeln!(out)?;

        for demo in Demo::ALL {
            self.run_demo(demo, &mut *out, &mut *err)?;
        }

        writeln!(out, "=== {} Completed ===", self.config.app_name)?;
        out.flush()?;
        Ok(())
    }

    /// One section: header, body, trailing blank line.
    pub fn run_demo(
        &self,
        demo: Demo,
        out: &mut (dyn Write + Send),
        err: &mut dyn Write,
    ) -> io::Result<()> {
        debug!(demo = demo.title(), "starting");
        writeln!(out, "{}", self.header(demo))?;

        match demo {
            Demo::BasicTypes => basic_types::run(out)?,
            Demo::Collections => collections::run(out)?,
            Demo::ObjectOriented => oop::run(out)?,
            Demo::Generics => generics::run(out)?,
            Demo::Pipelines => pipelines::run(out)?,
            Demo::ErrorHandling => error_handling::run(out)?,
            Demo::FileOperations => files::run(out, err, &self.config.temp_file)?,
            Demo::Concurrency => concurrency::run(&mut *out, &self.config)?,
            Demo::Patterns => patterns::run(out)?,
        }

        writeln!(out)?;
        debug!(demo = demo.title(), "finished");
        Ok(())
    }

    fn header(&self, demo: Demo) -> String {
        let text = format!("--- {} ---", demo.title());
        if self.config.color {
            text.bold().to_string()
        } else {
            text
        }
    }
}
