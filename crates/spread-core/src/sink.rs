//! Sink Directory
//!
//! Best-effort access to the file-like collaborators of a run. Every
//! acquisition returns an `Option`: `None` means the sink is unavailable
//! and the caller skips its step. Handles are never kept between calls.

use std::borrow::Cow;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Root directory that all sink names resolve against
#[derive(Debug, Clone)]
pub struct SinkDir {
    root: PathBuf,
}

impl SinkDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Full path of a named sink
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Open a source for reading.
    pub fn open_source(&self, name: &str) -> Option<BufReader<File>> {
        let path = self.path(name);
        File::open(&path)
            .map(BufReader::new)
            .map_err(|e| log_unavailable(&path, "read", &e))
            .ok()
    }

    /// Create (or truncate) a sink for writing.
    pub fn create(&self, name: &str) -> Option<File> {
        let path = self.path(name);
        File::create(&path)
            .map_err(|e| log_unavailable(&path, "create", &e))
            .ok()
    }

    /// Open a sink in append mode, creating it if missing.
    pub fn append(&self, name: &str) -> Option<File> {
        let path = self.path(name);
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| log_unavailable(&path, "append", &e))
            .ok()
    }

    /// Read every line of a source. A missing source reads as empty. Line
    /// terminators (`\n` or `\r\n`) are stripped; a line that is not valid
    /// UTF-8 is decoded lossily and reading continues past it.
    pub fn read_lines(&self, name: &str) -> Vec<String> {
        let Some(mut reader) = self.open_source(name) else {
            return Vec::new();
        };

        let mut lines = Vec::new();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {
                    let raw = strip_terminator(&buf);
                    let line = String::from_utf8_lossy(raw);
                    if let Cow::Owned(_) = line {
                        tracing::debug!("Invalid UTF-8 in {:?}, decoded lossily", self.path(name));
                    }
                    lines.push(line.into_owned());
                }
                Err(e) => {
                    tracing::debug!("Stopped reading {:?}: {}", self.path(name), e);
                    break;
                }
            }
        }
        lines
    }

    /// Create a sink and write `body` to it. Returns whether the whole
    /// body was written.
    pub fn write_all(&self, name: &str, body: &str) -> bool {
        let Some(mut file) = self.create(name) else {
            return false;
        };
        match file.write_all(body.as_bytes()) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!("Write to {:?} failed: {}", self.path(name), e);
                false
            }
        }
    }

    /// Append one line (plus newline) to a sink.
    pub fn append_line(&self, name: &str, line: &str) -> bool {
        let Some(mut file) = self.append(name) else {
            return false;
        };
        match writeln!(file, "{}", line) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!("Append to {:?} failed: {}", self.path(name), e);
                false
            }
        }
    }
}

fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn log_unavailable(path: &Path, action: &str, e: &io::Error) {
    tracing::debug!("Sink {:?} unavailable for {}: {}", path, action, e);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_source_is_none() {
        let dir = tempdir().unwrap();
        let sinks = SinkDir::new(dir.path());

        assert!(sinks.open_source("absent.txt").is_none());
        assert!(sinks.read_lines("absent.txt").is_empty());
    }

    #[test]
    fn test_create_in_missing_directory_is_none() {
        let dir = tempdir().unwrap();
        let sinks = SinkDir::new(dir.path().join("does/not/exist"));

        assert!(sinks.create("out.txt").is_none());
        assert!(!sinks.write_all("out.txt", "body"));
        assert!(!sinks.append_line("log.txt", "line"));
    }

    #[test]
    fn test_append_accumulates() {
        let dir = tempdir().unwrap();
        let sinks = SinkDir::new(dir.path());

        assert!(sinks.append_line("log.txt", "one"));
        assert!(sinks.append_line("log.txt", "two"));

        let content = fs::read_to_string(dir.path().join("log.txt")).unwrap();
        assert_eq!(content, "one\ntwo\n");
    }

    #[test]
    fn test_write_all_truncates() {
        let dir = tempdir().unwrap();
        let sinks = SinkDir::new(dir.path());

        assert!(sinks.write_all("out.txt", "a much longer first body"));
        assert!(sinks.write_all("out.txt", "short"));

        let content = fs::read_to_string(dir.path().join("out.txt")).unwrap();
        assert_eq!(content, "short");
    }

    #[test]
    fn test_read_lines_strips_terminators() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("in.txt"), "a\r\nb\n\nc").unwrap();
        let sinks = SinkDir::new(dir.path());

        assert_eq!(sinks.read_lines("in.txt"), vec!["a", "b", "", "c"]);
    }

    #[test]
    fn test_read_lines_continues_past_invalid_utf8() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("in.txt"), b"A B\nC \xffD\nE F\n").unwrap();
        let sinks = SinkDir::new(dir.path());

        let lines = sinks.read_lines("in.txt");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "A B");
        assert_eq!(lines[1], "C \u{FFFD}D");
        assert_eq!(lines[2], "E F");
    }
}
