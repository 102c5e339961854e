use anyhow::Context;
use appctl::config::cli::{AppCommand, Command};
use appctl::utils::logger;
use appctl::{CliConfig, ClientConfig, ReqwestTransport, StdoutSink, ViewEngine, ViewError};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let config = ClientConfig::load(cli.config.as_deref(), cli.context.as_deref())
        .context("error processing config")?;
    tracing::debug!("Using API at {}", config.base_url);

    let result = match &cli.command {
        Command::App(AppCommand::View(args)) => run_view(&config, args).await,
    };

    if let Err(e) = result {
        tracing::error!(
            "app view failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("Error: {}", e.user_friendly_message());
        eprintln!("Hint: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}

async fn run_view(
    config: &ClientConfig,
    args: &appctl::config::cli::ViewArgs,
) -> Result<usize, ViewError> {
    let options = args.options()?;
    let transport = ReqwestTransport::from_config(config, config.timeout())?;
    let engine = ViewEngine::from_config(config, transport);

    engine.run(&options, &mut StdoutSink).await
}
