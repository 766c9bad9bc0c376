//! Reading the optional override file into raw lines.
//!
//! The builder consumes an in-memory sequence of lines so the two scan
//! passes (directive detection, then entry validation) never re-read the
//! file. Absence of the file is a legitimate non-error input and maps to
//! `None` at the open step.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use tracing::debug;

/// Comment line that switches on the diagnostic dump.
///
/// Matched as a line prefix, so trailing text after the token is allowed.
pub const DUMP_DIRECTIVE: &str = "#dbgOut";

/// Longest line the reader keeps intact; anything longer is split at this
/// boundary and the pieces are processed as separate lines.
pub const MAX_LINE_LEN: usize = 1024;

/// Raw text lines of an override file, in file order.
#[derive(Debug, Clone, Default)]
pub struct OverrideSource {
    lines: Vec<String>,
}

impl OverrideSource {
    /// Build a source from already-split lines. Intended for tests.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Read all lines from `reader`.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the underlying reader, including invalid
    /// UTF-8 in the file.
    pub fn from_reader(reader: impl Read) -> io::Result<Self> {
        let mut lines = Vec::new();
        for line in BufReader::new(reader).lines() {
            push_bounded(&mut lines, &line?);
        }
        Ok(Self { lines })
    }

    /// Open and read the override file at `path`.
    ///
    /// A missing file yields `Ok(None)`: the registry degrades to the
    /// built-in list without an error.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be opened or read.
    pub fn open(path: &Path) -> io::Result<Option<Self>> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = ?path, "no override file, using built-in vendor list only");
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        debug!(path = ?path, "reading vendor ID override file");
        Ok(Some(Self::from_reader(file)?))
    }

    /// All lines in file order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when the file had no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// True when any line carries the [`DUMP_DIRECTIVE`]. Stops at the
    /// first match.
    pub fn requests_dump(&self) -> bool {
        self.lines.iter().any(|line| line.starts_with(DUMP_DIRECTIVE))
    }
}

/// Append `line`, splitting it at the [`MAX_LINE_LEN`] boundary the way a
/// bounded line reader would.
fn push_bounded(lines: &mut Vec<String>, line: &str) {
    if line.len() < MAX_LINE_LEN {
        lines.push(line.to_string());
        return;
    }

    let mut chunk = String::with_capacity(MAX_LINE_LEN);
    for ch in line.chars() {
        if chunk.len() + ch.len_utf8() >= MAX_LINE_LEN {
            lines.push(std::mem::take(&mut chunk));
        }
        chunk.push(ch);
    }
    if !chunk.is_empty() {
        lines.push(chunk);
    }
}
