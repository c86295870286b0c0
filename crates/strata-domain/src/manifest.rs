//! `strata.toml` reader: turns the on-disk project description into a
//! [`ProjectDescriptor`] plus the optional layer settings.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::path::{AbsoluteUnixPath, PathError};
use crate::project::{Packaging, ProjectDescriptor, ResolvedArtifact};

pub const MANIFEST_FILE: &str = "strata.toml";

const DEFAULT_PACKAGING: &str = "jar";
const DEFAULT_BUILD_DIRECTORY: &str = "target";
const DEFAULT_CLASSES_DIRECTORY: &str = "classes";

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("[ST200] failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("[ST200] {} is not a valid strata manifest: {reason}", path.display())]
    Invalid { path: PathBuf, reason: String },
    #[error("[ST200] {}: project.final-name must not be empty", path.display())]
    MissingFinalName { path: PathBuf },
    #[error("[ST201] {}: layers.app-root: {source}", path.display())]
    AppRoot {
        path: PathBuf,
        #[source]
        source: PathError,
    },
}

impl ManifestError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Read { .. } | Self::Invalid { .. } | Self::MissingFinalName { .. } => "ST200",
            Self::AppRoot { .. } => "ST201",
        }
    }
}

/// Layer placement knobs carried in the manifest's `[layers]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerSettings {
    pub app_root: Option<AbsoluteUnixPath>,
    pub extra_directory: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectManifest {
    /// Directory holding the manifest; relative paths resolve against it.
    pub root: PathBuf,
    pub descriptor: ProjectDescriptor,
    pub layers: LayerSettings,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawManifest {
    project: RawProject,
    #[serde(default)]
    artifacts: Vec<RawArtifact>,
    #[serde(default)]
    layers: RawLayers,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawProject {
    packaging: Option<String>,
    build_directory: Option<PathBuf>,
    output_directory: Option<PathBuf>,
    final_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawArtifact {
    path: PathBuf,
    snapshot: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawLayers {
    app_root: Option<String>,
    extra_directory: Option<PathBuf>,
}

pub fn read_manifest(path: &Path) -> Result<ProjectManifest, ManifestError> {
    let contents = fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let root = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    parse_manifest(&root, &contents, path)
}

/// Parses manifest text. `origin` only labels errors.
pub fn parse_manifest(
    root: &Path,
    contents: &str,
    origin: &Path,
) -> Result<ProjectManifest, ManifestError> {
    let raw: RawManifest =
        toml_edit::de::from_str(contents).map_err(|err| ManifestError::Invalid {
            path: origin.to_path_buf(),
            reason: err.to_string().trim().to_string(),
        })?;

    let final_name = raw.project.final_name.trim().to_string();
    if final_name.is_empty() {
        return Err(ManifestError::MissingFinalName {
            path: origin.to_path_buf(),
        });
    }

    let packaging = Packaging::from_kind(
        raw.project
            .packaging
            .as_deref()
            .unwrap_or(DEFAULT_PACKAGING),
    );
    let build_directory = root.join(
        raw.project
            .build_directory
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BUILD_DIRECTORY)),
    );
    let output_directory = raw.project.output_directory.map_or_else(
        || build_directory.join(DEFAULT_CLASSES_DIRECTORY),
        |dir| root.join(dir),
    );
    let artifacts = raw
        .artifacts
        .into_iter()
        .map(|artifact| {
            let path = root.join(artifact.path);
            match artifact.snapshot {
                Some(snapshot) => ResolvedArtifact::new(path, snapshot),
                None => ResolvedArtifact::from_path(path),
            }
        })
        .collect::<Vec<_>>();

    let app_root = raw
        .layers
        .app_root
        .as_deref()
        .map(AbsoluteUnixPath::parse)
        .transpose()
        .map_err(|source| ManifestError::AppRoot {
            path: origin.to_path_buf(),
            source,
        })?;
    let extra_directory = raw.layers.extra_directory.map(|dir| root.join(dir));

    debug!(
        manifest = %origin.display(),
        ?packaging,
        artifacts = artifacts.len(),
        "loaded project manifest"
    );

    Ok(ProjectManifest {
        root: root.to_path_buf(),
        descriptor: ProjectDescriptor {
            packaging,
            artifacts,
            output_directory,
            build_directory,
            final_name,
        },
        layers: LayerSettings {
            app_root,
            extra_directory,
        },
    })
}

/// Walks up from `start` looking for a `strata.toml`.
#[must_use]
pub fn discover_manifest(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let candidate = dir.join(MANIFEST_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}
