use clap::Parser;
use color_eyre::{eyre::eyre, Result};
use strata_core::{EntrypointRequest, LayerOverrides, LayersRequest};

mod cli;
mod output;
mod style;

use cli::{CommandCli, StrataCli};
use output::{emit_output, OutputOptions};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = StrataCli::parse();
    init_tracing(cli.trace, cli.verbose);

    let outcome = match &cli.command {
        CommandCli::Layers(args) => strata_core::plan_layers(&LayersRequest {
            manifest: args.manifest.clone(),
            overrides: LayerOverrides {
                app_root: args.app_root.clone(),
                extra_directory: args.extra_dir.clone(),
            },
        }),
        CommandCli::Entrypoint(args) => strata_core::plan_entrypoint(&EntrypointRequest {
            main_class: args.main_class.clone(),
            jvm_flags: args.jvm_flags.clone(),
            overrides: LayerOverrides {
                app_root: args.app_root.clone(),
                extra_directory: None,
            },
        }),
    }
    .map_err(|err| eyre!("{err:?}"))?;

    let opts = OutputOptions {
        quiet: cli.quiet,
        json: cli.json,
        no_color: cli.no_color,
    };
    let code = emit_output(&opts, cli.command.name(), &outcome)?;

    if code == 0 {
        Ok(())
    } else {
        std::process::exit(code);
    }
}

fn init_tracing(trace: bool, verbose: u8) {
    let level = if trace {
        "trace"
    } else {
        match verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = format!("strata_core={level},strata_domain={level},strata={level}");
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
