use strata_domain::{AbsoluteUnixPath, LayerName, LayerPartitionBuilder, ProjectDescriptor};
use tracing::warn;

use super::{CLASSES_PATH, DEPENDENCIES_PATH, RESOURCES_PATH};
use crate::assign::add_files_to_layer;
use crate::error::LayerError;
use crate::predicates::is_class_file;

pub(super) fn add_layers(
    project: &ProjectDescriptor,
    app_root: &AbsoluteUnixPath,
    builder: &mut LayerPartitionBuilder,
) -> Result<(), LayerError> {
    let dependencies_base = app_root.resolve_unix(DEPENDENCIES_PATH);
    let resources_base = app_root.resolve_unix(RESOURCES_PATH);
    let classes_base = app_root.resolve_unix(CLASSES_PATH);

    // Dependencies are flattened to their file names.
    for artifact in &project.artifacts {
        let path = artifact.path();
        let Some(file_name) = path.file_name() else {
            warn!(path = %path.display(), "skipping dependency without a file name");
            continue;
        };
        let layer = if artifact.is_snapshot() {
            LayerName::SnapshotDependencies
        } else {
            LayerName::Dependencies
        };
        let destination = dependencies_base
            .resolve(file_name)
            .map_err(|err| LayerError::unmappable(path, err))?;
        builder.add_file(layer, path, destination);
    }

    let output = project.output_directory.as_path();
    add_files_to_layer(
        output,
        is_class_file,
        &classes_base,
        builder.layer_mut(LayerName::Classes),
    )?;
    add_files_to_layer(
        output,
        |path| !is_class_file(path),
        &resources_base,
        builder.layer_mut(LayerName::Resources),
    )?;
    Ok(())
}
