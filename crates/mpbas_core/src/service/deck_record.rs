//! Append-only line buffer for one rendered deck.

use std::io::Write;

/// Ordered deck lines, flushed once to the output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeckRecord {
    lines: Vec<String>,
}

impl DeckRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = String>) {
        self.lines.extend(lines);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Writes every line terminated by `\n`, consuming the record.
    pub fn write_to<W: Write>(self, out: &mut W) -> std::io::Result<()> {
        for line in &self.lines {
            out.write_all(line.as_bytes())?;
            out.write_all(b"\n")?;
        }
        Ok(())
    }
}

impl std::fmt::Display for DeckRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
