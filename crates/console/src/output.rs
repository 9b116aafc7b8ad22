use std::io::{self, Write};

/// Plain-text line sink for everything the console user is told.
///
/// Usage hints, warnings and errors go here rather than through `tracing`:
/// they are the console's answer to the user, not diagnostics about the
/// process.
pub struct ConsoleOutput<W: Write = io::Stdout> {
    writer: W,
}

impl ConsoleOutput<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Default for ConsoleOutput<io::Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> ConsoleOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Writes one line and flushes.
    pub fn line(&mut self, message: impl AsRef<str>) {
        // The console has no other channel to report a broken stdout on.
        writeln!(self.writer, "{}", message.as_ref()).ok();
        self.writer.flush().ok();
    }

    /// Writes a prompt without a trailing newline.
    pub fn prompt(&mut self, prompt: &str) {
        write!(self.writer, "{prompt}> ").ok();
        self.writer.flush().ok();
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
