use std::fmt;

use crate::names::{COMPOSED, DECOMPOSED, EXPECTED_ENTRY_COUNT, ProbeFile, expected_entry_names};

/// What the probe observed, kept for human inspection only.
///
/// Nothing in here feeds the classification except the two contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    /// Entry names reported by the directory listing, sorted by bytes.
    pub entry_names: Vec<String>,
    /// Bytes read back through the composed name.
    pub composed_content: Vec<u8>,
    /// Bytes read back through the decomposed name.
    pub decomposed_content: Vec<u8>,
}

impl Diagnostics {
    pub fn entry_count(&self) -> usize {
        self.entry_names.len()
    }

    fn fmt_content(f: &mut fmt::Formatter<'_>, file: &ProbeFile, got: &[u8]) -> fmt::Result {
        writeln!(f, "Content of {} ({}):", file.name, file.escaped_name)?;
        writeln!(f, "\tExpected: {}", String::from_utf8_lossy(file.content))?;
        writeln!(f, "\tGot:      {}", String::from_utf8_lossy(got))
    }
}

fn bracketed<S: AsRef<str>>(names: &[S]) -> String {
    let joined: Vec<&str> = names.iter().map(|name| name.as_ref()).collect();
    format!("[{}]", joined.join(" "))
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of files:")?;
        writeln!(f, "\tExpected: {}", EXPECTED_ENTRY_COUNT)?;
        writeln!(f, "\tGot:      {}", self.entry_count())?;

        writeln!(f, "Files:")?;
        writeln!(f, "\tExpected: {}", bracketed(&expected_entry_names()))?;
        writeln!(f, "\tGot:      {}", bracketed(&self.entry_names))?;

        Self::fmt_content(f, &COMPOSED, &self.composed_content)?;
        Self::fmt_content(f, &DECOMPOSED, &self.decomposed_content)
    }
}
