use std::fs;
use std::path::Path;

use strata_domain::{AbsoluteUnixPath, FileEntry, Layer};
use tracing::{debug, trace};

use crate::error::LayerError;
use crate::walker::DirectoryWalker;

/// Adds the contents of `source_root` to `target` under `base`.
///
/// Non-empty directories are never added; their contents are visited instead.
/// Empty directories are always added, whatever `filter` says. Everything else
/// is added when `filter` accepts it. For example, with `source_root` at
/// `/usr/home` and `base` at `/etc`, the file `/usr/home/passwd` lands at
/// `/etc/passwd`.
///
/// Returns the number of entries appended.
pub fn add_files_to_layer<F>(
    source_root: &Path,
    filter: F,
    base: &AbsoluteUnixPath,
    target: &mut Layer,
) -> Result<usize, LayerError>
where
    F: Fn(&Path) -> bool,
{
    let mut added = 0usize;
    let visited = DirectoryWalker::new(source_root).walk(|path| {
        if !is_empty_directory(path)? && (path.is_dir() || !filter(path)) {
            return Ok(());
        }
        let Ok(relative) = path.strip_prefix(source_root) else {
            return Ok(());
        };
        let destination = base
            .resolve(relative)
            .map_err(|err| LayerError::unmappable(path, err))?;
        trace!(
            layer = target.name().label(),
            source = %path.display(),
            %destination,
            "layer entry"
        );
        target.push(FileEntry::new(path, destination));
        added += 1;
        Ok(())
    })?;
    debug!(
        layer = target.name().label(),
        root = %source_root.display(),
        %base,
        visited,
        added,
        "assigned files to layer"
    );
    Ok(added)
}

/// Symlinks to directories count as directories, matching `Path::is_dir`.
pub fn is_empty_directory(path: &Path) -> Result<bool, LayerError> {
    if !path.is_dir() {
        return Ok(false);
    }
    let mut entries = fs::read_dir(path).map_err(|err| LayerError::io(path, err))?;
    Ok(entries.next().is_none())
}
