//! Compile errors.

use std::path::PathBuf;

/// Fatal configuration errors that abort a compile pass.
///
/// Missing optional assets are never errors; they resolve to absent
/// references instead.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("Invalid component pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Base directory {} is not accessible", path.display())]
    BaseDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Base directory {} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to read components under {}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}
