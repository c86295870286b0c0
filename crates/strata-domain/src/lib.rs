#![deny(clippy::all, warnings)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

pub mod layer;
pub mod manifest;
pub mod path;
pub mod project;

pub use layer::{FileEntry, Layer, LayerName, LayerPartition, LayerPartitionBuilder};
pub use manifest::{
    discover_manifest, parse_manifest, read_manifest, LayerSettings, ManifestError,
    ProjectManifest, MANIFEST_FILE,
};
pub use path::{AbsoluteUnixPath, PathError};
pub use project::{Packaging, ProjectDescriptor, ResolvedArtifact, SNAPSHOT_MARKER};
