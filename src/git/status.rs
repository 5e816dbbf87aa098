// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Parsing of `git status --porcelain` output.
//!
//! Each line is a two-character status code, a space, and a path. Paths
//! with unusual characters are wrapped in double quotes with C-style
//! escapes. Renames and copies report `ORIG -> PATH`.

/// One changed file reported by the status query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    /// Path of the file as it is now.
    pub path: String,

    /// Path the file was renamed or copied from.
    pub original: Option<String>,
}

impl FileChange {
    /// A change to a single path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            original: None,
        }
    }

    /// A rename or copy from `original` to `path`.
    pub fn renamed(original: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            original: Some(original.into()),
        }
    }

    /// Paths a commit of this change must cover. For a rename the old path
    /// is included so the deletion lands in the same commit.
    pub fn pathspecs(&self) -> Vec<String> {
        self.original
            .iter()
            .chain(std::iter::once(&self.path))
            .cloned()
            .collect()
    }
}

/// Parse porcelain status output, in the order git reported it.
///
/// Lines whose path is not valid UTF-8 are skipped with a warning; they
/// could not be passed back to git unchanged.
pub fn parse_porcelain(output: &[u8]) -> Vec<FileChange> {
    output
        .split(|b| *b == b'\n')
        .filter_map(|line| match std::str::from_utf8(line) {
            Ok(line) => parse_status_line(line),
            Err(_) => {
                tracing::warn!(
                    "Skipping {}: path is not valid UTF-8",
                    String::from_utf8_lossy(line)
                );
                None
            }
        })
        .collect()
}

/// Parse a single porcelain line.
pub fn parse_status_line(line: &str) -> Option<FileChange> {
    if line.trim().is_empty() {
        return None;
    }

    let code = line.get(..2)?;
    let raw = line.get(3..)?;
    if raw.is_empty() {
        return None;
    }

    if code.contains(['R', 'C']) {
        if let Some((original, dest)) = split_rename(raw) {
            return Some(FileChange::renamed(decode(original)?, decode(dest)?));
        }
    }

    Some(FileChange::new(decode(raw)?))
}

/// Split `ORIG -> PATH` into its two halves.
fn split_rename(raw: &str) -> Option<(&str, &str)> {
    if raw.starts_with('"') {
        let end = closing_quote(raw)?;
        let dest = raw[end + 1..].strip_prefix(" -> ")?;
        return Some((&raw[..=end], dest));
    }

    raw.split_once(" -> ")
}

/// Byte index of the quote that closes a token starting with `"`.
fn closing_quote(raw: &str) -> Option<usize> {
    let mut escaped = false;
    for (idx, ch) in raw.char_indices().skip(1) {
        match ch {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => return Some(idx),
            _ => {}
        }
    }
    None
}

fn decode(raw: &str) -> Option<String> {
    match unquote(raw) {
        Ok(path) => Some(path),
        Err(bytes) => {
            tracing::warn!(
                "Skipping {}: path is not valid UTF-8 ({} bytes)",
                raw,
                bytes.len()
            );
            None
        }
    }
}

/// Remove surrounding quotes and decode git's C-style escapes.
///
/// Returns the raw bytes as the error when the decoded path is not UTF-8.
pub fn unquote(raw: &str) -> Result<String, Vec<u8>> {
    let inner = match raw
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        Some(inner) => inner,
        None => return Ok(raw.to_string()),
    };

    let mut bytes = Vec::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            let mut buf = [0u8; 4];
            bytes.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            continue;
        }

        match chars.next() {
            Some('n') => bytes.push(b'\n'),
            Some('t') => bytes.push(b'\t'),
            Some('r') => bytes.push(b'\r'),
            Some('a') => bytes.push(0x07),
            Some('b') => bytes.push(0x08),
            Some('f') => bytes.push(0x0c),
            Some('v') => bytes.push(0x0b),
            Some('"') => bytes.push(b'"'),
            Some('\\') => bytes.push(b'\\'),
            Some(first @ '0'..='7') => {
                let mut digits = String::from(first);
                while digits.len() < 3 {
                    match chars.peek().copied() {
                        Some(c) if c.is_digit(8) => {
                            digits.push(c);
                            chars.next();
                        }
                        _ => break,
                    }
                }
                // git only escapes single bytes, so anything above \377 is
                // kept as written
                match u32::from_str_radix(&digits, 8)
                    .ok()
                    .and_then(|value| u8::try_from(value).ok())
                {
                    Some(byte) => bytes.push(byte),
                    None => {
                        bytes.push(b'\\');
                        bytes.extend_from_slice(digits.as_bytes());
                    }
                }
            }
            Some(other) => {
                bytes.push(b'\\');
                let mut buf = [0u8; 4];
                bytes.extend_from_slice(other.encode_utf8(&mut buf).as_bytes());
            }
            None => bytes.push(b'\\'),
        }
    }

    String::from_utf8(bytes).map_err(|e| e.into_bytes())
}
