use std::path::PathBuf;

use thiserror::Error;

/// Failures at the I/O edges; clustering itself never fails.
#[derive(Error, Debug)]
pub enum SurveyError {
    #[error("failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("density must be within 0..=16 sixteenths, got {0}")]
    InvalidDensity(u32),
    #[error("{columns}x{rows} tiles at scale {scale} exceed the maximum image size")]
    ImageTooLarge {
        columns: usize,
        rows: usize,
        scale: u32,
    },
    #[error("image encoding: {0}")]
    Image(#[from] image::ImageError),
    #[error("report serialization: {0}")]
    Json(#[from] serde_json::Error),
}

impl SurveyError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
