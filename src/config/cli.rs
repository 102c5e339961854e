use crate::core::ViewOptions;
use crate::utils::error::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "appctl")]
#[command(about = "Command line client for the application management API")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Path to the config file [default: ~/.appctl/config.toml]")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Config context to use instead of current_context")]
    pub context: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Manage applications
    #[command(subcommand)]
    App(AppCommand),
}

#[derive(Debug, Clone, Subcommand)]
pub enum AppCommand {
    /// Display application(s)
    #[command(
        long_about = "Displays the contents of a specific application based on name or id",
        after_help = "Examples:\n  appctl app view <app-name>\n  appctl app view <app-id>\n  appctl app view --all"
    )]
    View(ViewArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ViewArgs {
    /// Application name or id; several words form one name
    pub identifier: Vec<String>,

    #[arg(short = 'a', long, help = "(optional) view all applications available")]
    pub all: bool,

    #[arg(
        short = 'o',
        long,
        default_value = "yaml",
        help = "(optional) format to display in [json|yaml]"
    )]
    pub output_format: String,
}

impl ViewArgs {
    pub fn options(&self) -> Result<ViewOptions> {
        ViewOptions::new(self.identifier.clone(), self.all, &self.output_format)
    }
}
