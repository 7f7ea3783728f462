use std::{fs, io, path::PathBuf};

use swiftread_core::content::sample_text;
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) enum TextSource {
    File(PathBuf),
    Sample,
}

#[derive(Debug, Error)]
pub(super) enum SourceError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} contains no readable text", path.display())]
    Empty { path: PathBuf },
}

/// Loads the raw text to tokenize. Invalid UTF-8 is replaced rather than
/// rejected so any `.txt` file can be read.
pub(super) fn load(source: &TextSource) -> Result<String, SourceError> {
    match source {
        TextSource::Sample => Ok(sample_text()),
        TextSource::File(path) => {
            let bytes = fs::read(path).map_err(|source| SourceError::Read {
                path: path.clone(),
                source,
            })?;
            let text = String::from_utf8_lossy(&bytes).into_owned();
            if text.trim().is_empty() {
                return Err(SourceError::Empty { path: path.clone() });
            }
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("swiftread-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn sample_is_always_available() {
        let text = load(&TextSource::Sample).unwrap();
        assert!(text.starts_with("Speed reading"));
    }

    #[test]
    fn file_text_is_loaded_lossily() {
        let path = temp_file("lossy.txt", b"caf\xff au lait");
        let text = load(&TextSource::File(path.clone())).unwrap();
        assert_eq!(text, "caf\u{fffd} au lait");
        let _ = fs::remove_file(path);
    }

    #[test]
    fn blank_file_is_rejected() {
        let path = temp_file("blank.txt", b" \n\n\t ");
        let err = load(&TextSource::File(path.clone())).unwrap_err();
        assert!(matches!(err, SourceError::Empty { .. }));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_file_reports_path() {
        let path = PathBuf::from("/nonexistent/swiftread/book.txt");
        let err = load(&TextSource::File(path)).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/swiftread/book.txt"));
    }
}
