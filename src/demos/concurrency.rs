use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use rayon::prelude::*;
use tracing::{debug, warn};

use super::bracketed;
use crate::config::TourConfig;

/// Squares each element on the rayon pool, sleeping `delay` before each one.
/// Work finishes in any order; `collect` still returns input order.
/// Squares are widened to `u64`, so no `u32` input can overflow.
pub fn parallel_squares(numbers: &[u32], delay: Duration) -> Vec<u64> {
    numbers
        .par_iter()
        .map(|&n| {
            if !delay.is_zero() {
                thread::sleep(delay);
            }
            u64::from(n) * u64::from(n)
        })
        .collect()
}

/// Spawns one named worker that borrows `out`, then waits for it with no
/// timeout. A panicking worker is logged and otherwise ignored.
pub fn run_worker(out: &mut (dyn Write + Send), delay: Duration) -> io::Result<()> {
    thread::scope(|scope| {
        let handle = thread::Builder::new()
            .name("tour-worker".into())
            .spawn_scoped(scope, move || -> io::Result<()> {
                writeln!(out, "Hello from thread!")?;
                thread::sleep(delay);
                writeln!(out, "Thread finished!")
            })?;

        match handle.join() {
            Ok(result) => result,
            Err(_) => {
                warn!("worker thread panicked; continuing");
                Ok(())
            }
        }
    })
}

pub fn run(out: &mut (dyn Write + Send), config: &TourConfig) -> io::Result<()> {
    let numbers: [u32; 5] = [1, 2, 3, 4, 5];

    debug!(threads = rayon::current_num_threads(), "parallel map");
    let squares = parallel_squares(&numbers, config.parallel_delay());
    writeln!(out, "Squares from parallel iterator: {}", bracketed(&squares))?;

    run_worker(out, config.worker_delay())
}
