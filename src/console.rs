//! Console output seam.
//!
//! The pipeline writes user-facing lines (e.g. the debug directive's attach
//! announcement) through this trait so hosts and tests can swap the sink.
//! This is the same channel normal command output uses, not a side channel.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Line-oriented output sink for one run.
pub trait Console {
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Default console writing to the process's stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdConsole;

impl Console for StdConsole {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()
    }
}

/// In-memory console. Cloning shares the underlying buffer, so a test can
/// hand one clone to the runner and read lines back from the other.
#[derive(Debug, Default, Clone)]
pub struct BufferedConsole {
    lines: Arc<Mutex<Vec<String>>>,
}

impl BufferedConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl Console for BufferedConsole {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }
}
