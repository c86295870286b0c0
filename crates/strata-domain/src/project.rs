//! Read-only view of the build tool's project model.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Naming convention the build tool uses for mutable pre-release artifacts.
pub const SNAPSHOT_MARKER: &str = "SNAPSHOT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Packaging {
    /// Compiled classes plus resolved dependency jars.
    Plain,
    /// Exploded web archive staged under the build directory.
    Archive,
}

impl Packaging {
    /// Maps a build-tool packaging string. Only `war` selects the archive
    /// layout; every other kind is laid out as plain classes.
    #[must_use]
    pub fn from_kind(kind: &str) -> Self {
        if kind.trim().eq_ignore_ascii_case("war") {
            Packaging::Archive
        } else {
            Packaging::Plain
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedArtifact {
    path: PathBuf,
    snapshot: bool,
}

impl ResolvedArtifact {
    pub fn new(path: impl Into<PathBuf>, snapshot: bool) -> Self {
        Self {
            path: path.into(),
            snapshot,
        }
    }

    /// Infers the snapshot flag from the file name convention.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let snapshot = path.to_string_lossy().contains(SNAPSHOT_MARKER);
        Self { path, snapshot }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn is_snapshot(&self) -> bool {
        self.snapshot
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDescriptor {
    pub packaging: Packaging,
    pub artifacts: Vec<ResolvedArtifact>,
    /// Compiled classes and processed resources.
    pub output_directory: PathBuf,
    pub build_directory: PathBuf,
    pub final_name: String,
}

impl ProjectDescriptor {
    /// Conventional exploded-archive location: `<build dir>/<final name>`.
    #[must_use]
    pub fn staging_directory(&self) -> PathBuf {
        self.build_directory.join(&self.final_name)
    }
}
