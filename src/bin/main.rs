use std::io::{self, IsTerminal};

use language_tour::logger::init_logger;
use language_tour::{DemoRunner, TourConfig, TourError};

fn main() -> Result<(), TourError> {
    let (mut config, rejected) = match TourConfig::bundled() {
        Ok(config) => (config, None),
        Err(e) => (TourConfig::default(), Some(e)),
    };

    match init_logger(&config) {
        Ok(_) => {}
        Err(e) => eprintln!("logging disabled: {}", e),
    }
    if let Some(e) = rejected {
        tracing::warn!("bundled config rejected, using defaults: {}", e);
    }

    // Bold headers only when a person is watching.
    config.color = config.color && io::stdout().is_terminal();

    tracing::debug!(?config, "starting tour");
    let runner = DemoRunner::new(config);
    runner.run_all(&mut io::stdout(), &mut io::stderr())?;
    Ok(())
}
