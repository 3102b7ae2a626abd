/// Application error type
///
/// Every fallible operation (disk access, decoding, settings) funnels
/// into `AppError` so the UI can show a single status line for it.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The file could not be opened or decoded as an image
    #[error("failed to open {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The image could not be written to the working directory
    #[error("failed to save {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Filesystem error (create dir, remove file, ...)
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A command referenced a path that is not in the library
    #[error("image not in library: {}", .0.display())]
    UnknownImage(PathBuf),

    /// The picked path has no file name to mirror under
    #[error("not a file: {}", .0.display())]
    NotAFile(PathBuf),

    /// Settings file could not be parsed or serialized
    #[error("settings error: {0}")]
    Settings(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
