//! Absolute paths inside the image filesystem.
//!
//! Image paths are always `/`-separated regardless of the host, so they are
//! kept apart from `std::path::Path`.

use std::fmt;
use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PathError {
    #[error("[ST201] image path must be absolute (got '{0}')")]
    NotAbsolute(String),
    #[error("[ST202] host path is not valid UTF-8 (got '{0}')")]
    NotUtf8(String),
}

impl PathError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotAbsolute(_) => "ST201",
            Self::NotUtf8(_) => "ST202",
        }
    }
}

/// Normalized absolute path in the image: no empty or `.` components and no
/// trailing separator except for the root itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AbsoluteUnixPath {
    components: Vec<String>,
}

impl AbsoluteUnixPath {
    #[must_use]
    pub fn root() -> Self {
        Self {
            components: Vec::new(),
        }
    }

    pub fn parse(raw: &str) -> Result<Self, PathError> {
        if !raw.starts_with('/') {
            return Err(PathError::NotAbsolute(raw.to_string()));
        }
        let mut path = Self::root();
        path.push_unix(raw);
        Ok(path)
    }

    /// Appends a host-relative path. Root and prefix components are ignored so
    /// the result always stays under `self`. Names that are not valid UTF-8
    /// are rejected so distinct host paths never share an image path.
    pub fn resolve(&self, relative: impl AsRef<Path>) -> Result<Self, PathError> {
        let relative = relative.as_ref();
        let mut resolved = self.clone();
        for component in relative.components() {
            match component {
                Component::Normal(name) => {
                    let Some(name) = name.to_str() else {
                        return Err(PathError::NotUtf8(relative.to_string_lossy().into_owned()));
                    };
                    resolved.components.push(name.to_string());
                }
                Component::ParentDir => {
                    resolved.components.pop();
                }
                Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
            }
        }
        Ok(resolved)
    }

    /// Appends a `/`-separated relative path such as `WEB-INF/lib`.
    #[must_use]
    pub fn resolve_unix(&self, relative: &str) -> Self {
        let mut resolved = self.clone();
        resolved.push_unix(relative);
        resolved
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.components.is_empty()
    }

    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.components.last().map(String::as_str)
    }

    fn push_unix(&mut self, raw: &str) {
        for part in raw.split('/') {
            match part {
                "" | "." => {}
                ".." => {
                    self.components.pop();
                }
                name => self.components.push(name.to_string()),
            }
        }
    }
}

impl Default for AbsoluteUnixPath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for AbsoluteUnixPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.components.is_empty() {
            return f.write_str("/");
        }
        for component in &self.components {
            write!(f, "/{component}")?;
        }
        Ok(())
    }
}

impl TryFrom<String> for AbsoluteUnixPath {
    type Error = PathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AbsoluteUnixPath> for String {
    fn from(value: AbsoluteUnixPath) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parse_normalizes_separators() {
        let path = AbsoluteUnixPath::parse("//app/./libs/").expect("absolute");
        assert_eq!(path.to_string(), "/app/libs");
        assert_eq!(path.file_name(), Some("libs"));
    }

    #[test]
    fn parse_rejects_relative_paths() {
        let err = AbsoluteUnixPath::parse("app/libs").unwrap_err();
        assert_eq!(err, PathError::NotAbsolute("app/libs".into()));
        assert_eq!(err.code(), "ST201");
    }

    #[test]
    fn root_displays_as_slash() {
        assert_eq!(AbsoluteUnixPath::root().to_string(), "/");
        assert!(AbsoluteUnixPath::parse("/").expect("root").is_root());
    }

    #[test]
    fn resolve_appends_host_relative_components() {
        let base = AbsoluteUnixPath::parse("/app/classes").expect("absolute");
        let rel: PathBuf = ["com", "app", "Main.class"].iter().collect();
        assert_eq!(
            base.resolve(&rel).expect("utf-8").to_string(),
            "/app/classes/com/app/Main.class"
        );
    }

    #[test]
    fn resolve_with_empty_relative_is_identity() {
        let base = AbsoluteUnixPath::parse("/app").expect("absolute");
        assert_eq!(base.resolve("").expect("utf-8"), base);
    }

    #[cfg(unix)]
    #[test]
    fn resolve_rejects_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let base = AbsoluteUnixPath::parse("/app").expect("absolute");
        let rel = Path::new("dir").join(OsStr::from_bytes(b"a\xff.txt"));
        let err = base.resolve(&rel).unwrap_err();
        assert!(matches!(err, PathError::NotUtf8(_)));
        assert_eq!(err.code(), "ST202");
    }

    #[test]
    fn resolve_unix_splits_on_slashes() {
        let base = AbsoluteUnixPath::parse("/app").expect("absolute");
        assert_eq!(base.resolve_unix("WEB-INF/lib").to_string(), "/app/WEB-INF/lib");
    }

    #[test]
    fn serde_uses_string_form() {
        let path = AbsoluteUnixPath::parse("/app/libs").expect("absolute");
        let encoded = serde_json::to_string(&path).expect("encode");
        assert_eq!(encoded, "\"/app/libs\"");
        let decoded: Result<AbsoluteUnixPath, _> = serde_json::from_str("\"relative\"");
        assert!(decoded.is_err());
    }
}
