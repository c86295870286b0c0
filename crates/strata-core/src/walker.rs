use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::LayerError;

/// Depth-first walk of a directory tree. Visits the root first, parents before
/// their children, and siblings in file-name order. Symlinks are reported but
/// never followed.
#[derive(Debug, Clone)]
pub struct DirectoryWalker {
    root: PathBuf,
}

impl DirectoryWalker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Calls `visitor` once per path and returns how many paths were visited.
    /// The first visitor or listing error stops the walk.
    pub fn walk<F>(&self, mut visitor: F) -> Result<usize, LayerError>
    where
        F: FnMut(&Path) -> Result<(), LayerError>,
    {
        match fs::metadata(&self.root) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(LayerError::NotADirectory {
                    path: self.root.clone(),
                })
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(LayerError::NotADirectory {
                    path: self.root.clone(),
                })
            }
            Err(err) => return Err(LayerError::io(&self.root, err)),
        }

        let mut visited = 0usize;
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.map_err(|err| self.walk_error(err))?;
            visitor(entry.path())?;
            visited += 1;
        }
        tracing::trace!(root = %self.root.display(), visited, "directory walk finished");
        Ok(visited)
    }

    fn walk_error(&self, err: walkdir::Error) -> LayerError {
        let path = err
            .path()
            .map_or_else(|| self.root.clone(), Path::to_path_buf);
        let source = err
            .into_io_error()
            .unwrap_or_else(|| io::Error::other("filesystem loop while walking"));
        LayerError::io(path, source)
    }
}
