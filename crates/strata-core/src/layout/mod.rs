//! Packaging-specific layer layouts.
//!
//! - plain compiled output + resolved jars: `layout/plain.rs`
//! - exploded web archive staged under the build directory: `layout/archive.rs`

mod archive;
mod plain;

use std::path::Path;

use strata_domain::{
    AbsoluteUnixPath, LayerName, LayerPartition, LayerPartitionBuilder, Packaging,
    ProjectDescriptor,
};
use tracing::debug;

use crate::assign::add_files_to_layer;
use crate::error::LayerError;

pub const DEFAULT_APP_ROOT: &str = "/app";

pub const DEPENDENCIES_PATH: &str = "libs";
pub const RESOURCES_PATH: &str = "resources";
pub const CLASSES_PATH: &str = "classes";

pub const ARCHIVE_LIB_PATH: &str = "WEB-INF/lib";
pub const ARCHIVE_CLASSES_PATH: &str = "WEB-INF/classes";

/// Partitions the project's build output into the five layers.
///
/// `extra_directory` is optional and skipped when it does not exist. Any
/// filesystem failure aborts the whole resolution.
pub fn resolve_layers(
    project: &ProjectDescriptor,
    extra_directory: Option<&Path>,
    app_root: &AbsoluteUnixPath,
) -> Result<LayerPartition, LayerError> {
    let mut builder = LayerPartition::builder();
    match project.packaging {
        Packaging::Plain => plain::add_layers(project, app_root, &mut builder)?,
        Packaging::Archive => archive::add_layers(project, app_root, &mut builder)?,
    }
    if let Some(extra) = extra_directory {
        add_extra_files(extra, &mut builder)?;
    }
    let partition = builder.build();
    debug!(
        packaging = ?project.packaging,
        %app_root,
        entries = partition.entry_count(),
        "resolved layer partition"
    );
    Ok(partition)
}

/// Extra files land at the image root, keeping their directory structure.
fn add_extra_files(extra: &Path, builder: &mut LayerPartitionBuilder) -> Result<(), LayerError> {
    if !extra.exists() {
        debug!(path = %extra.display(), "no extra files directory");
        return Ok(());
    }
    add_files_to_layer(
        extra,
        |_| true,
        &AbsoluteUnixPath::root(),
        builder.layer_mut(LayerName::ExtraFiles),
    )?;
    Ok(())
}
