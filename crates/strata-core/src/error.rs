use std::io;
use std::path::PathBuf;

use strata_domain::PathError;

/// Failures that abort layer resolution. No partial partition is returned.
#[derive(Debug, thiserror::Error)]
pub enum LayerError {
    #[error("[ST100] {} is not a directory", path.display())]
    NotADirectory { path: PathBuf },
    #[error("[ST101] failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("[ST102] cannot map {} into the image: {source}", path.display())]
    UnmappablePath {
        path: PathBuf,
        #[source]
        source: PathError,
    },
}

impl LayerError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotADirectory { .. } => "ST100",
            Self::Io { .. } => "ST101",
            Self::UnmappablePath { .. } => "ST102",
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn unmappable(path: impl Into<PathBuf>, source: PathError) -> Self {
        Self::UnmappablePath {
            path: path.into(),
            source,
        }
    }
}
