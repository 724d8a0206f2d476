//! Write, read back, and delete one scratch file. The file is removed on
//! every exit path, including a failure halfway through.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

pub const CONTENT: [&str; 3] = [
    "This is a test file created by the Rust example.",
    "Line 2",
    "Line 3",
];

/// Scratch file that deletes itself on drop unless `remove` already did.
pub struct TempFile {
    path: PathBuf,
    armed: bool,
}

impl TempFile {
    /// Creates (or truncates) `path` and writes one line per entry.
    /// The guard exists before the first write, so a failed write still
    /// cleans up.
    pub fn create(path: impl Into<PathBuf>, lines: &[&str]) -> io::Result<Self> {
        let guard = TempFile {
            path: path.into(),
            armed: true,
        };
        let mut file = File::create(&guard.path)?;
        for line in lines {
            writeln!(file, "{}", line)?;
        }
        file.flush()?;
        debug!(path = %guard.path.display(), lines = lines.len(), "temp file written");
        Ok(guard)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read_lines(&self) -> io::Result<Vec<String>> {
        BufReader::new(File::open(&self.path)?).lines().collect()
    }

    /// Deletes the file now and reports the outcome. The drop guard is
    /// disarmed either way; a failed delete is not retried.
    pub fn remove(mut self) -> io::Result<()> {
        self.armed = false;
        fs::remove_file(&self.path)
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != io::ErrorKind::NotFound {
                warn!(path = %self.path.display(), error = %e, "could not remove temp file");
            }
        }
    }
}

/// Prints progress to `out`, I/O failures to `err`, and never fails on a
/// file error. Only errors writing to `out`/`err` themselves escape.
pub fn run(out: &mut dyn Write, err: &mut dyn Write, path: &Path) -> io::Result<()> {
    let file = match TempFile::create(path, &CONTENT) {
        Ok(file) => file,
        Err(e) => return report(err, &e),
    };
    writeln!(out, "Created temporary file: {}", file.path().display())?;

    let lines = match file.read_lines() {
        Ok(lines) => lines,
        Err(e) => return report(err, &e),
    };
    writeln!(out, "File content:")?;
    for (number, line) in lines.iter().enumerate() {
        writeln!(out, "  {}: {}", number + 1, line)?;
    }

    match file.remove() {
        Ok(()) => writeln!(out, "Cleaned up temporary file")?,
        Err(e) => report(err, &e)?,
    }
    Ok(())
}

fn report(err: &mut dyn Write, e: &io::Error) -> io::Result<()> {
    writeln!(err, "File operation error: {}", e)
}
