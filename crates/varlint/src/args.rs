use crate::logging::LogLevel;
use crate::output_format::OutputFormat;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Configures Clap v3-style help menu colors
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser)]
#[command(
    author,
    name = "varlint",
    about = "varlint: use variables, not magic values, in your stylesheets",
    after_help = "For help with a specific command, see: `varlint help <command>`."
)]
#[command(version)]
#[command(styles = STYLES)]
pub struct Args {
    #[command(subcommand)]
    pub(crate) command: Command,
    #[clap(flatten)]
    pub(crate) global_options: GlobalOptions,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Check a set of stylesheet trees or directories
    Check(CheckCommand),
}

#[derive(Clone, Debug, Parser)]
#[command(arg_required_else_help(true))]
pub struct CheckCommand {
    #[arg(
        required = true,
        help = "List of files or directories to check, for example `varlint check .`. Directories are searched for `*.json` stylesheet trees."
    )]
    pub files: Vec<PathBuf>,
    #[arg(
        long,
        value_enum,
        default_value_t = OutputFormat::default(),
        help = "Output serialization format for violations."
    )]
    pub output_format: OutputFormat,
    #[arg(
        long,
        help = "Path to a `varlint.toml` to use for all files instead of the discovered ones."
    )]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, Default, Parser)]
pub(crate) struct GlobalOptions {
    #[arg(
        long,
        global = true,
        value_enum,
        help = "The log level. Logs are written to stderr."
    )]
    pub log_level: Option<LogLevel>,
    #[arg(
        long,
        global = true,
        default_value = "false",
        help = "Disable colored output. The `NO_COLOR` environment variable is also respected."
    )]
    pub no_color: bool,
}
