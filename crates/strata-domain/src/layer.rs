//! Layer partition model handed to image assembly.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::path::AbsoluteUnixPath;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayerName {
    Dependencies,
    SnapshotDependencies,
    Resources,
    Classes,
    ExtraFiles,
}

impl LayerName {
    /// Partition order, least to most frequently changing.
    pub const ALL: [LayerName; 5] = [
        LayerName::Dependencies,
        LayerName::SnapshotDependencies,
        LayerName::Resources,
        LayerName::Classes,
        LayerName::ExtraFiles,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            LayerName::Dependencies => "dependencies",
            LayerName::SnapshotDependencies => "snapshot dependencies",
            LayerName::Resources => "resources",
            LayerName::Classes => "classes",
            LayerName::ExtraFiles => "extra files",
        }
    }

    fn index(self) -> usize {
        match self {
            LayerName::Dependencies => 0,
            LayerName::SnapshotDependencies => 1,
            LayerName::Resources => 2,
            LayerName::Classes => 3,
            LayerName::ExtraFiles => 4,
        }
    }
}

impl fmt::Display for LayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    source: PathBuf,
    destination: AbsoluteUnixPath,
}

impl FileEntry {
    pub fn new(source: impl Into<PathBuf>, destination: AbsoluteUnixPath) -> Self {
        Self {
            source: source.into(),
            destination,
        }
    }

    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    #[must_use]
    pub fn destination(&self) -> &AbsoluteUnixPath {
        &self.destination
    }
}

/// Named, append-only sequence of entries. Entry order is archive order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    name: LayerName,
    entries: Vec<FileEntry>,
}

impl Layer {
    #[must_use]
    pub fn new(name: LayerName) -> Self {
        Self {
            name,
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> LayerName {
        self.name
    }

    #[must_use]
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn push(&mut self, entry: FileEntry) {
        self.entries.push(entry);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter()
    }

    /// True when `source` was added to this layer.
    #[must_use]
    pub fn contains_source(&self, source: &Path) -> bool {
        self.entries.iter().any(|entry| entry.source == source)
    }
}

/// The five layers of one resolution, frozen once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerPartition {
    layers: [Layer; 5],
}

impl LayerPartition {
    #[must_use]
    pub fn builder() -> LayerPartitionBuilder {
        LayerPartitionBuilder::default()
    }

    #[must_use]
    pub fn get(&self, name: LayerName) -> &Layer {
        &self.layers[name.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter()
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.layers.iter().map(Layer::len).sum()
    }
}

#[derive(Debug)]
pub struct LayerPartitionBuilder {
    layers: [Layer; 5],
}

impl Default for LayerPartitionBuilder {
    fn default() -> Self {
        Self {
            layers: LayerName::ALL.map(Layer::new),
        }
    }
}

impl LayerPartitionBuilder {
    pub fn add_file(
        &mut self,
        name: LayerName,
        source: impl Into<PathBuf>,
        destination: AbsoluteUnixPath,
    ) -> &mut Self {
        self.layer_mut(name).push(FileEntry::new(source, destination));
        self
    }

    pub fn layer_mut(&mut self, name: LayerName) -> &mut Layer {
        &mut self.layers[name.index()]
    }

    #[must_use]
    pub fn build(self) -> LayerPartition {
        LayerPartition {
            layers: self.layers,
        }
    }
}
