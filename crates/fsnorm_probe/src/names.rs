//! The two files the probe writes.

/// One of the probe's files: its name, a printable escape of that name, and its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeFile {
    /// Name as written to the filesystem.
    pub name: &'static str,
    /// The name's code points spelled out as `\u` escapes, for diagnostics.
    pub escaped_name: &'static str,
    /// Bytes written to, and expected back from, the file.
    pub content: &'static [u8],
}

/// `ö.txt` spelled with the precomposed code point U+00F6.
pub const COMPOSED: ProbeFile = ProbeFile {
    name: "\u{00F6}.txt",
    escaped_name: "\\u00F6.txt",
    content: b"composed",
};

/// `ö.txt` spelled as `o` followed by U+0308 COMBINING DIAERESIS.
pub const DECOMPOSED: ProbeFile = ProbeFile {
    name: "\u{006F}\u{0308}.txt",
    escaped_name: "\\u006F\\u0308.txt",
    content: b"decomposed",
};

/// Number of entries a non-normalizing filesystem shows after both writes.
pub const EXPECTED_ENTRY_COUNT: usize = 2;

/// Both names, ordered by their bytes the way directory listings are reported.
pub fn expected_entry_names() -> Vec<&'static str> {
    let mut names = vec![COMPOSED.name, DECOMPOSED.name];
    names.sort_unstable();
    names
}
