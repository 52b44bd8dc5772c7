use std::fs;
use std::path::Path;

use tracing::debug;

/// Check whether data looks binary by looking for null bytes
/// in the first 512 bytes.
pub fn is_binary(data: &[u8]) -> bool {
    data[..data.len().min(512)].contains(&0)
}

/// Read a source file as text (lossy UTF-8). Returns `None` when the file
/// cannot be read or looks binary; callers treat that as an empty file.
pub fn read_source(path: &Path) -> Option<String> {
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(err) => {
            debug!(path = %path.display(), %err, "unreadable file, counting as empty");
            return None;
        }
    };
    if is_binary(&bytes) {
        debug!(path = %path.display(), "binary file, counting as empty");
        return None;
    }
    Some(String::from_utf8_lossy(&bytes).into_owned())
}

/// Split text into lines on `\r\n`, `\n` or `\r`. Like a regex split, a final
/// terminator yields a trailing empty segment, and empty input yields one
/// empty segment.
pub fn split_lines(content: &str) -> Vec<&str> {
    let bytes = content.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&content[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&content[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    lines.push(&content[start..]);
    lines
}

/// Convert a relative path to a `/`-separated string.
pub fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
#[path = "util_test.rs"]
mod tests;
