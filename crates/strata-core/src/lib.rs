#![deny(clippy::all, warnings)]

pub mod assign;
pub mod commands;
pub mod config;
pub mod entrypoint;
mod error;
pub mod layout;
pub mod outcome;
pub mod predicates;
pub mod walker;

pub use strata_domain as domain;

pub use crate::assign::{add_files_to_layer, is_empty_directory};
pub use crate::commands::{plan_entrypoint, plan_layers, EntrypointRequest, LayersRequest};
pub use crate::config::{LayerConfig, LayerOverrides};
pub use crate::entrypoint::{default_classpath, default_entrypoint};
pub use crate::error::LayerError;
pub use crate::layout::{resolve_layers, DEFAULT_APP_ROOT};
pub use crate::outcome::{format_status_message, to_json_response, CommandStatus, ExecutionOutcome};
pub use crate::predicates::{is_class_file, is_resource_in_archive_layout, is_snapshot_dependency};
pub use crate::walker::DirectoryWalker;
