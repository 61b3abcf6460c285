//! Output formatting for the recognized text.

use std::io::Write;

use anyhow::Result;
use textgrab_protocol::OcrOutput;

/// Writes records as JSON lines.
pub struct Output<W: Write> {
    writer: W,
}

impl Output<std::io::Stdout> {
    /// Output to stdout.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Output<W> {
    /// Create a new output formatter.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Print one record followed by a newline.
    pub fn print_record(&mut self, record: &OcrOutput) -> Result<()> {
        writeln!(self.writer, "{}", record.to_json()?)?;
        self.writer.flush()?;
        Ok(())
    }
}
