//! Reading experiment input from disk or stdin.
//!
//! Both sources go through [`read_capped`], which never buffers more than
//! one byte past `--max-file-size`. Files are also rejected up front from
//! their metadata so the error can report the real size. Every failure here
//! is an input failure (exit code 2).
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::PathOrStdin;
use crate::error::CliError;

/// Reads `source` as UTF-8 text of at most `max_size` bytes.
///
/// # Errors
///
/// Returns [`CliError`] (exit code 2) for a missing or unreadable file, input
/// larger than `max_size`, any other I/O error, or invalid UTF-8.
pub fn read_input(source: &PathOrStdin, max_size: u64) -> Result<String, CliError> {
    let (bytes, label) = match source {
        PathOrStdin::Path(path) => (read_file(path, max_size)?, path.display().to_string()),
        PathOrStdin::Stdin => (read_stdin(max_size)?, "-".to_owned()),
    };
    String::from_utf8(bytes).map_err(|e| CliError::InvalidUtf8 {
        source: label,
        byte_offset: e.utf8_error().valid_up_to(),
    })
}

/// Reads all of `reader`, or `None` once it yields more than `limit` bytes.
pub(crate) fn read_capped<R: Read>(reader: R, limit: u64) -> std::io::Result<Option<Vec<u8>>> {
    let mut buf = Vec::new();
    reader.take(limit.saturating_add(1)).read_to_end(&mut buf)?;
    if buf.len() as u64 > limit {
        Ok(None)
    } else {
        Ok(Some(buf))
    }
}

fn read_file(path: &Path, max_size: u64) -> Result<Vec<u8>, CliError> {
    let too_large = |actual| CliError::FileTooLarge {
        source: path.display().to_string(),
        limit: max_size,
        actual,
    };

    let size = std::fs::metadata(path)
        .map_err(|e| file_error(&e, path))?
        .len();
    if size > max_size {
        return Err(too_large(Some(size)));
    }

    let file = std::fs::File::open(path).map_err(|e| file_error(&e, path))?;
    read_capped(file, max_size)
        .map_err(|e| file_error(&e, path))?
        .ok_or_else(|| too_large(None))
}

fn read_stdin(max_size: u64) -> Result<Vec<u8>, CliError> {
    read_capped(std::io::stdin().lock(), max_size)
        .map_err(|e| CliError::StdinReadError {
            detail: e.to_string(),
        })?
        .ok_or(CliError::FileTooLarge {
            source: "-".to_owned(),
            limit: max_size,
            actual: None,
        })
}

fn file_error(e: &std::io::Error, path: &Path) -> CliError {
    let kind = e.kind();
    if kind == ErrorKind::NotFound {
        CliError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else if kind == ErrorKind::PermissionDenied {
        CliError::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else {
        CliError::IoError {
            source: path.display().to_string(),
            detail: e.to_string(),
        }
    }
}
