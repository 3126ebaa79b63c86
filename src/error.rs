//! Error handling for the sort pipeline

use std::io;
use std::path::Path;
use thiserror::Error;

/// Custom error type for sort operations
#[derive(Error, Debug)]
pub enum SortError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("No such file or directory: {file}")]
    FileNotFound { file: String },

    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    #[error("No input files in directory: {path}")]
    EmptyInputDir { path: String },

    #[error("Invalid ordering policy: {value}")]
    InvalidPolicy { value: String },

    #[error("Invalid algorithm: {value}")]
    InvalidAlgorithm { value: String },

    #[error("Thread pool error: {message}")]
    ThreadPool { message: String },

    #[error("Partition {index} ({file}) failed: {message}")]
    PartitionFailed {
        index: usize,
        file: String,
        message: String,
    },

    #[error("Parse error: {message}")]
    Parse { message: String },
}

impl SortError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SortError::FileNotFound { .. }
            | SortError::NotADirectory { .. }
            | SortError::EmptyInputDir { .. }
            | SortError::PartitionFailed { .. }
            | SortError::Io(_) => crate::SORT_FAILURE,

            _ => crate::EXIT_FAILURE,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(file: &str) -> Self {
        SortError::FileNotFound {
            file: file.to_string(),
        }
    }

    /// Create a not-a-directory error
    pub fn not_a_directory(path: &Path) -> Self {
        SortError::NotADirectory {
            path: path.display().to_string(),
        }
    }

    /// Create an empty input directory error
    pub fn empty_input_dir(path: &Path) -> Self {
        SortError::EmptyInputDir {
            path: path.display().to_string(),
        }
    }

    /// Create a thread pool error
    pub fn thread_pool(message: &str) -> Self {
        SortError::ThreadPool {
            message: message.to_string(),
        }
    }

    /// Create a per-partition failure error
    pub fn partition_failed(index: usize, file: &Path, message: &str) -> Self {
        SortError::PartitionFailed {
            index,
            file: file.display().to_string(),
            message: message.to_string(),
        }
    }

    /// Create a parse error
    pub fn parse(message: &str) -> Self {
        SortError::Parse {
            message: message.to_string(),
        }
    }
}

/// Result type for sort operations
pub type SortResult<T> = Result<T, SortError>;

/// Context trait for attaching a file name to I/O errors
pub trait SortContext<T> {
    fn with_file_context(self, filename: &Path) -> SortResult<T>;
}

impl<T> SortContext<T> for Result<T, io::Error> {
    fn with_file_context(self, filename: &Path) -> SortResult<T> {
        self.map_err(|io_err| match io_err.kind() {
            io::ErrorKind::NotFound => SortError::file_not_found(&filename.display().to_string()),
            _ => SortError::Io(io::Error::new(
                io_err.kind(),
                format!("{}: {}", filename.display(), io_err),
            )),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            SortError::file_not_found("missing.txt").exit_code(),
            crate::SORT_FAILURE
        );
        assert_eq!(SortError::parse("bad flag").exit_code(), crate::EXIT_FAILURE);
    }

    #[test]
    fn test_file_context_maps_not_found() {
        let err: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "gone"));
        match err.with_file_context(Path::new("a.txt")) {
            Err(SortError::FileNotFound { file }) => assert_eq!(file, "a.txt"),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
