//! Path classifiers passed to [`crate::assign::add_files_to_layer`].

use std::path::Path;

use strata_domain::SNAPSHOT_MARKER;

pub const CLASS_FILE_SUFFIX: &str = ".class";

#[must_use]
pub fn is_class_file(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(CLASS_FILE_SUFFIX))
}

/// Filename convention only: any path containing the marker counts, including
/// artifacts that merely happen to carry it in their name.
#[must_use]
pub fn is_snapshot_dependency(path: &Path) -> bool {
    path.to_string_lossy().contains(SNAPSHOT_MARKER)
}

/// Resource rule for an exploded archive: anything outside both subtrees, or a
/// non-class file under `classes_root`. Nothing under `lib_root` qualifies.
pub fn is_resource_in_archive_layout<F>(
    path: &Path,
    classes_root: &Path,
    lib_root: &Path,
    is_class: F,
) -> bool
where
    F: Fn(&Path) -> bool,
{
    let in_classes = path.starts_with(classes_root);
    let in_lib = path.starts_with(lib_root);
    (!in_classes && !in_lib) || (in_classes && !is_class(path))
}
