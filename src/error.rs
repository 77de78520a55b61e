use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CarouselError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid manifest {path}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no image files found in directory: {0}")]
    NoImages(PathBuf),

    #[error("invalid color `{0}`, expected #rgb or #rrggbb")]
    InvalidColor(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, CarouselError>;
