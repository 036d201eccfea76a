use std::io::BufRead;
use std::path::PathBuf;

use fixarr_base::{ErrorKind, FixarrError, FixarrResult};

fn invalid(message: String) -> Box<FixarrError> {
    ErrorKind::InvalidInput { message }.into()
}

/// Parse one line of user input as an array size in `1..=max_size`.
pub fn parse_size(line: &str, max_size: usize) -> FixarrResult<usize> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(invalid("expected an array size on standard input".to_string()));
    }
    let value: i64 = trimmed
        .parse()
        .map_err(|_| invalid(format!("`{}` is not an integer", trimmed)))?;
    if value < 1 {
        return Err(invalid(format!("array size must be at least 1, got {}", value)));
    }
    let size = usize::try_from(value).unwrap_or(usize::MAX);
    if size > max_size {
        return Err(invalid(format!(
            "array size {} exceeds the configured maximum of {}",
            value, max_size
        )));
    }
    Ok(size)
}

/// Read a single line from `reader` and parse it with [`parse_size`].
pub fn read_size(mut reader: impl BufRead, max_size: usize) -> FixarrResult<usize> {
    let mut line = String::new();
    reader.read_line(&mut line).map_err(|e| {
        Box::new(FixarrError::new(ErrorKind::FileError {
            path: PathBuf::from("<stdin>"),
            source: e,
        }))
    })?;
    parse_size(&line, max_size)
}
