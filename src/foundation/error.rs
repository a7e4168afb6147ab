use std::path::PathBuf;

/// Convenience result type used across heroforge.
pub type ForgeResult<T> = Result<T, ForgeError>;

/// Top-level error taxonomy. Every variant is terminal for a batch.
#[derive(thiserror::Error, Debug)]
pub enum ForgeError {
    /// Invalid canvas size, scene data or output settings.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The raster encoder rejected the image.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Directory creation, file write or metadata read failed.
    #[error("io error at '{path}': {source}")]
    Io {
        /// Path the operation was acting on.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// A single output image could not be produced.
    #[error("failed to produce '{path}': {source}")]
    Output {
        /// Destination of the failing image.
        path: PathBuf,
        /// What went wrong.
        #[source]
        source: Box<ForgeError>,
    },

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ForgeError {
    /// Build a [`ForgeError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`ForgeError::Encoding`] value.
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    /// Build a [`ForgeError::Io`] value.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Attach the output path that was being produced when `self` occurred.
    pub fn for_output(self, path: impl Into<PathBuf>) -> Self {
        Self::Output {
            path: path.into(),
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
