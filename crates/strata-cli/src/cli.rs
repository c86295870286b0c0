use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

pub const STRATA_BEFORE_HELP: &str = concat!(
    "strata ",
    env!("CARGO_PKG_VERSION"),
    " – container layer planning for compiled JVM projects\n\n",
    "\x1b[1;36mCommands\x1b[0m\n",
    "  layers           Partition build output into dependency, resource, class, and extra-file layers.\n",
    "  entrypoint       Print the default java entrypoint for the plain layout.\n",
);

#[derive(Parser, Debug)]
#[command(
    name = "strata",
    author,
    version,
    disable_help_subcommand = true,
    before_help = STRATA_BEFORE_HELP
)]
pub struct StrataCli {
    #[arg(
        short,
        long,
        help = "Suppress human output (errors still print to stderr)",
        global = true
    )]
    pub quiet: bool,
    #[arg(short, long, action = ArgAction::Count, help = "Increase logging (-vv reaches trace)", global = true)]
    pub verbose: u8,
    #[arg(long, help = "Force trace logging regardless of -v/-q", global = true)]
    pub trace: bool,
    #[arg(
        long,
        help = "Emit {status,message,details} JSON envelopes",
        global = true
    )]
    pub json: bool,
    #[arg(long, help = "Disable colored human output", global = true)]
    pub no_color: bool,
    #[command(subcommand)]
    pub command: CommandCli,
}

#[derive(Subcommand, Debug)]
pub enum CommandCli {
    #[command(
        about = "Partition build output into image layers and print each entry.",
        override_usage = "strata layers [--manifest PATH] [--app-root PATH] [--extra-dir DIR]"
    )]
    Layers(LayersArgs),
    #[command(
        about = "Print the default java entrypoint for the plain layout.",
        override_usage = "strata entrypoint --main-class CLASS [--jvm-flag FLAG]..."
    )]
    Entrypoint(EntrypointArgs),
}

impl CommandCli {
    pub fn name(&self) -> &'static str {
        match self {
            CommandCli::Layers(_) => "layers",
            CommandCli::Entrypoint(_) => "entrypoint",
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct LayersArgs {
    #[arg(
        long,
        value_name = "PATH",
        help = "Project manifest (defaults to the nearest strata.toml)"
    )]
    pub manifest: Option<PathBuf>,
    #[arg(
        long,
        value_name = "PATH",
        help = "Application root inside the image (env: STRATA_APP_ROOT, default /app)"
    )]
    pub app_root: Option<String>,
    #[arg(
        long = "extra-dir",
        value_name = "DIR",
        help = "Directory copied to the image root (env: STRATA_EXTRA_DIR, default src/main/jib)"
    )]
    pub extra_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct EntrypointArgs {
    #[arg(long, value_name = "CLASS", help = "Fully qualified main class")]
    pub main_class: String,
    #[arg(
        long = "jvm-flag",
        value_name = "FLAG",
        action = ArgAction::Append,
        allow_hyphen_values = true,
        help = "JVM flag placed before the classpath (repeatable)"
    )]
    pub jvm_flags: Vec<String>,
    #[arg(
        long,
        value_name = "PATH",
        help = "Application root inside the image (env: STRATA_APP_ROOT, default /app)"
    )]
    pub app_root: Option<String>,
}
