//! Command handlers behind the `strata` binary. Each returns an
//! [`ExecutionOutcome`]; only unexpected failures surface as `Err`.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde_json::{json, Value};
use strata_domain::{discover_manifest, read_manifest, LayerPartition, MANIFEST_FILE};
use tracing::{debug, info};

use crate::config::{app_root_from_env, LayerConfig, LayerOverrides};
use crate::entrypoint::default_entrypoint;
use crate::layout::resolve_layers;
use crate::outcome::ExecutionOutcome;

#[derive(Debug, Clone, Default)]
pub struct LayersRequest {
    /// Explicit manifest; discovered from the working directory when absent.
    pub manifest: Option<PathBuf>,
    pub overrides: LayerOverrides,
}

#[derive(Debug, Clone, Default)]
pub struct EntrypointRequest {
    pub main_class: String,
    pub jvm_flags: Vec<String>,
    pub overrides: LayerOverrides,
}

pub fn plan_layers(request: &LayersRequest) -> Result<ExecutionOutcome> {
    let manifest_path = if let Some(path) = request.manifest.clone() {
        path
    } else {
        let cwd = env::current_dir().context("unable to determine the working directory")?;
        let Some(found) = discover_manifest(&cwd) else {
            return Ok(ExecutionOutcome::user_error(
                format!("no {MANIFEST_FILE} found"),
                json!({
                    "code": "ST200",
                    "searched_from": cwd.display().to_string(),
                    "hint": format!("run inside a project with a {MANIFEST_FILE} or pass --manifest"),
                }),
            ));
        };
        found
    };
    debug!(manifest = %manifest_path.display(), "planning layers");

    let manifest = match read_manifest(&manifest_path) {
        Ok(manifest) => manifest,
        Err(err) => {
            return Ok(ExecutionOutcome::user_error(
                err.to_string(),
                json!({
                    "code": err.code(),
                    "manifest": manifest_path.display().to_string(),
                }),
            ))
        }
    };

    let config = match LayerConfig::from_env(&manifest.root, &manifest.layers, &request.overrides)
    {
        Ok(config) => config,
        Err(err) => {
            return Ok(ExecutionOutcome::user_error(
                format!("{err:#}"),
                json!({ "code": "ST201" }),
            ))
        }
    };

    let partition = match resolve_layers(
        &manifest.descriptor,
        Some(&config.extra_directory),
        &config.app_root,
    ) {
        Ok(partition) => partition,
        Err(err) => {
            return Ok(ExecutionOutcome::failure(
                err.to_string(),
                json!({
                    "code": err.code(),
                    "reason": "layer_resolution_failed",
                    "manifest": manifest_path.display().to_string(),
                }),
            ))
        }
    };

    let entries = partition.entry_count();
    let populated = partition.iter().filter(|layer| !layer.is_empty()).count();
    info!(entries, populated, "layer partition ready");
    Ok(ExecutionOutcome::success(
        format!("planned {entries} entries across {populated} layers"),
        json!({
            "manifest": manifest_path.display().to_string(),
            "packaging": manifest.descriptor.packaging,
            "app_root": config.app_root.to_string(),
            "extra_directory": config.extra_directory.display().to_string(),
            "entries": entries,
            "layers": layers_json(&partition),
        }),
    ))
}

pub fn plan_entrypoint(request: &EntrypointRequest) -> Result<ExecutionOutcome> {
    let main_class = request.main_class.trim();
    if main_class.is_empty() {
        return Ok(ExecutionOutcome::user_error(
            "main class must not be empty",
            json!({ "hint": "pass --main-class com.example.Main" }),
        ));
    }
    let app_root = match app_root_from_env(&request.overrides) {
        Ok(app_root) => app_root,
        Err(err) => {
            return Ok(ExecutionOutcome::user_error(
                format!("{err:#}"),
                json!({ "code": "ST201" }),
            ))
        }
    };
    let command = default_entrypoint(&app_root, &request.jvm_flags, main_class);
    Ok(ExecutionOutcome::success(
        command.join(" "),
        json!({
            "app_root": app_root.to_string(),
            "entrypoint": command,
        }),
    ))
}

fn layers_json(partition: &LayerPartition) -> Value {
    partition
        .iter()
        .map(|layer| {
            let entries = layer
                .iter()
                .map(|entry| {
                    json!({
                        "source": entry.source().display().to_string(),
                        "destination": entry.destination().to_string(),
                    })
                })
                .collect::<Vec<_>>();
            json!({
                "name": layer.name(),
                "label": layer.name().label(),
                "entries": entries,
            })
        })
        .collect()
}
