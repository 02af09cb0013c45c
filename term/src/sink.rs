use std::fs::{File, OpenOptions};
use std::io::{self, LineWriter, Write};
use std::path::Path;

use sweeper_core::{CellSnapshot, DiagnosticSink};

/// Writes each snapshot as one JSON object per line.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl JsonLinesSink<LineWriter<File>> {
    pub fn append(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(LineWriter::new(file)))
    }
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(&mut self, snapshot: &CellSnapshot) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, snapshot)?;
        self.writer.write_all(b"\n")
    }
}

impl<W: Write> DiagnosticSink for JsonLinesSink<W> {
    fn record(&mut self, snapshot: &CellSnapshot) {
        match self.write_line(snapshot) {
            Ok(()) => log::debug!(target: "diagnostics", "{snapshot}"),
            Err(err) => log::warn!("Could not write diagnostics: {err}"),
        }
    }
}
