/// Error handling for the file-conversion wrapper.
///
/// The conversion core is total — `convert` produces an output for every
/// input — so errors only arise while locating, reading, or writing files.
use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the file-conversion wrapper.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The source path does not reference an existing file.
    #[error("Missing {}", path.display())]
    MissingSource { path: PathBuf },

    /// Reading the source or writing the destination failed.
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// Convenience alias for results in the wrapper layer.
pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_source_names_the_path() {
        let error = ConvertError::MissingSource {
            path: PathBuf::from("notes.md"),
        };
        assert_eq!(format!("{}", error), "Missing notes.md");
    }

    #[test]
    fn io_errors_convert_from_std() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: ConvertError = io_error.into();
        assert!(format!("{}", error).contains("denied"));
    }
}
