use std::fs;
use std::io::{self, Read};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("pattern is required: use positional argument or -f/--pattern-file")]
    MissingPattern,

    #[error("subject is required: use positional argument or -i/--input")]
    MissingSubject,

    #[error("failed to read '{path}': {source}")]
    Read { path: String, source: io::Error },

    #[error("pattern in '{0}' is not valid UTF-8")]
    PatternNotUtf8(String),
}

/// Pattern from inline text or a file. A single trailing newline is dropped
/// from file contents so `echo 'a+' > p.txt` reads as `a+`.
pub fn load_pattern(text: Option<&str>, path: Option<&Path>) -> Result<String, InputError> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }

    let Some(path) = path else {
        return Err(InputError::MissingPattern);
    };
    let bytes = read(path)?;
    let mut pattern = String::from_utf8(bytes)
        .map_err(|_| InputError::PatternNotUtf8(path.display().to_string()))?;
    if pattern.ends_with('\n') {
        pattern.pop();
        if pattern.ends_with('\r') {
            pattern.pop();
        }
    }
    Ok(pattern)
}

/// Subject bytes from inline text, a file, or stdin (`-`). File contents
/// are used as is.
pub fn load_subject(text: Option<&str>, path: Option<&Path>) -> Result<Vec<u8>, InputError> {
    if let Some(text) = text {
        return Ok(text.as_bytes().to_vec());
    }

    match path {
        Some(path) => read(path),
        None => Err(InputError::MissingSubject),
    }
}

fn read(path: &Path) -> Result<Vec<u8>, InputError> {
    let wrap = |source| InputError::Read {
        path: path.display().to_string(),
        source,
    };

    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf).map_err(wrap)?;
        return Ok(buf);
    }
    fs::read(path).map_err(wrap)
}
