use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context;
use strata_domain::{AbsoluteUnixPath, LayerSettings};

use crate::layout::DEFAULT_APP_ROOT;

pub const APP_ROOT_ENV: &str = "STRATA_APP_ROOT";
pub const EXTRA_DIR_ENV: &str = "STRATA_EXTRA_DIR";
pub const DEFAULT_EXTRA_DIRECTORY: &str = "src/main/jib";

#[derive(Debug, Clone)]
pub(crate) struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    pub(crate) fn capture() -> Self {
        Self {
            vars: env::vars().collect(),
        }
    }

    pub(crate) fn var(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    #[cfg(test)]
    pub(crate) fn testing(pairs: &[(&str, &str)]) -> Self {
        let vars = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Self { vars }
    }
}

/// Values given explicitly on the command line; they win over everything.
#[derive(Debug, Clone, Default)]
pub struct LayerOverrides {
    pub app_root: Option<String>,
    pub extra_directory: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerConfig {
    pub app_root: AbsoluteUnixPath,
    pub extra_directory: PathBuf,
}

impl LayerConfig {
    /// Resolves settings with precedence flag > environment > manifest > default.
    /// Relative extra directories from the environment, manifest, or default
    /// are anchored at `project_root`.
    pub fn from_env(
        project_root: &Path,
        manifest: &LayerSettings,
        overrides: &LayerOverrides,
    ) -> anyhow::Result<Self> {
        Self::from_snapshot(&EnvSnapshot::capture(), project_root, manifest, overrides)
    }

    pub(crate) fn from_snapshot(
        snapshot: &EnvSnapshot,
        project_root: &Path,
        manifest: &LayerSettings,
        overrides: &LayerOverrides,
    ) -> anyhow::Result<Self> {
        let app_root = resolve_app_root(snapshot, manifest.app_root.as_ref(), overrides)?;
        let extra_directory = if let Some(dir) = overrides.extra_directory.as_ref() {
            dir.clone()
        } else if let Some(dir) = snapshot.var(EXTRA_DIR_ENV) {
            project_root.join(dir)
        } else if let Some(dir) = manifest.extra_directory.as_ref() {
            dir.clone()
        } else {
            project_root.join(DEFAULT_EXTRA_DIRECTORY)
        };
        Ok(Self {
            app_root,
            extra_directory,
        })
    }
}

/// App root without a project manifest: flag > environment > default.
pub fn app_root_from_env(overrides: &LayerOverrides) -> anyhow::Result<AbsoluteUnixPath> {
    resolve_app_root(&EnvSnapshot::capture(), None, overrides)
}

fn resolve_app_root(
    snapshot: &EnvSnapshot,
    manifest: Option<&AbsoluteUnixPath>,
    overrides: &LayerOverrides,
) -> anyhow::Result<AbsoluteUnixPath> {
    if let Some(raw) = overrides.app_root.as_deref() {
        return AbsoluteUnixPath::parse(raw).context("invalid --app-root");
    }
    if let Some(raw) = snapshot.var(APP_ROOT_ENV) {
        return AbsoluteUnixPath::parse(raw).with_context(|| format!("invalid {APP_ROOT_ENV}"));
    }
    if let Some(app_root) = manifest {
        return Ok(app_root.clone());
    }
    Ok(AbsoluteUnixPath::parse(DEFAULT_APP_ROOT)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest_settings() -> LayerSettings {
        LayerSettings {
            app_root: Some(AbsoluteUnixPath::parse("/manifest").expect("absolute")),
            extra_directory: Some(PathBuf::from("/project/docker")),
        }
    }

    #[test]
    fn defaults_apply_without_any_source() {
        let config = LayerConfig::from_snapshot(
            &EnvSnapshot::testing(&[]),
            Path::new("/project"),
            &LayerSettings::default(),
            &LayerOverrides::default(),
        )
        .expect("config");
        assert_eq!(config.app_root.to_string(), "/app");
        assert_eq!(
            config.extra_directory,
            Path::new("/project").join(DEFAULT_EXTRA_DIRECTORY)
        );
    }

    #[test]
    fn manifest_beats_defaults() {
        let config = LayerConfig::from_snapshot(
            &EnvSnapshot::testing(&[]),
            Path::new("/project"),
            &manifest_settings(),
            &LayerOverrides::default(),
        )
        .expect("config");
        assert_eq!(config.app_root.to_string(), "/manifest");
        assert_eq!(config.extra_directory, PathBuf::from("/project/docker"));
    }

    #[test]
    fn environment_beats_manifest() {
        let snapshot =
            EnvSnapshot::testing(&[(APP_ROOT_ENV, "/from-env"), (EXTRA_DIR_ENV, "extra")]);
        let config = LayerConfig::from_snapshot(
            &snapshot,
            Path::new("/project"),
            &manifest_settings(),
            &LayerOverrides::default(),
        )
        .expect("config");
        assert_eq!(config.app_root.to_string(), "/from-env");
        assert_eq!(config.extra_directory, Path::new("/project").join("extra"));
    }

    #[test]
    fn flags_beat_environment() {
        let snapshot = EnvSnapshot::testing(&[(APP_ROOT_ENV, "/from-env")]);
        let overrides = LayerOverrides {
            app_root: Some("/from-flag".into()),
            extra_directory: Some(PathBuf::from("/elsewhere")),
        };
        let config = LayerConfig::from_snapshot(
            &snapshot,
            Path::new("/project"),
            &manifest_settings(),
            &overrides,
        )
        .expect("config");
        assert_eq!(config.app_root.to_string(), "/from-flag");
        assert_eq!(config.extra_directory, PathBuf::from("/elsewhere"));
    }

    #[test]
    fn blank_environment_values_are_ignored() {
        let snapshot = EnvSnapshot::testing(&[(APP_ROOT_ENV, "  ")]);
        let app_root = resolve_app_root(&snapshot, None, &LayerOverrides::default())
            .expect("app root");
        assert_eq!(app_root.to_string(), "/app");
    }

    #[test]
    fn relative_app_root_is_rejected() {
        let snapshot = EnvSnapshot::testing(&[(APP_ROOT_ENV, "app")]);
        let err = resolve_app_root(&snapshot, None, &LayerOverrides::default()).unwrap_err();
        assert!(format!("{err:#}").contains(APP_ROOT_ENV));
    }
}
