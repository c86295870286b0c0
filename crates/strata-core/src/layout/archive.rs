use strata_domain::{AbsoluteUnixPath, LayerName, LayerPartitionBuilder, ProjectDescriptor};
use tracing::debug;

use super::{ARCHIVE_CLASSES_PATH, ARCHIVE_LIB_PATH};
use crate::assign::add_files_to_layer;
use crate::error::LayerError;
use crate::predicates::{is_class_file, is_resource_in_archive_layout, is_snapshot_dependency};

// The staging directory is assumed to be `<build dir>/<final name>`. A
// customized webapp directory, or packaging rules that include or exclude
// files from the final archive, are not reflected here.
pub(super) fn add_layers(
    project: &ProjectDescriptor,
    app_root: &AbsoluteUnixPath,
    builder: &mut LayerPartitionBuilder,
) -> Result<(), LayerError> {
    let staging = project.staging_directory();
    let lib_root = staging.join("WEB-INF").join("lib");
    let classes_root = staging.join("WEB-INF").join("classes");

    let dependencies_base = app_root.resolve_unix(ARCHIVE_LIB_PATH);
    let classes_base = app_root.resolve_unix(ARCHIVE_CLASSES_PATH);

    if lib_root.exists() {
        add_files_to_layer(
            &lib_root,
            is_snapshot_dependency,
            &dependencies_base,
            builder.layer_mut(LayerName::SnapshotDependencies),
        )?;
        add_files_to_layer(
            &lib_root,
            |path| !is_snapshot_dependency(path),
            &dependencies_base,
            builder.layer_mut(LayerName::Dependencies),
        )?;
    } else {
        debug!(path = %lib_root.display(), "exploded archive has no library directory");
    }

    if classes_root.exists() {
        add_files_to_layer(
            &classes_root,
            is_class_file,
            &classes_base,
            builder.layer_mut(LayerName::Classes),
        )?;
    } else {
        debug!(path = %classes_root.display(), "exploded archive has no classes directory");
    }

    if staging.exists() {
        add_files_to_layer(
            &staging,
            |path| is_resource_in_archive_layout(path, &classes_root, &lib_root, is_class_file),
            app_root,
            builder.layer_mut(LayerName::Resources),
        )?;
    } else {
        debug!(path = %staging.display(), "exploded archive staging directory is missing");
    }
    Ok(())
}
