/*
[INPUT]:  CLI arguments, YAML configuration file, credential environment variables
[OUTPUT]: Endpoint responses printed as JSON on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tradeogre_cli::command::{self, Command};
use tradeogre_cli::{CliConfig, Clients};

#[derive(Parser, Debug)]
#[command(name = "tradeogre", version, about = "TradeOgre exchange REST client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
    #[arg(long = "dry-run")]
    dry_run: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = load_config(args.config_path.as_deref())?.with_env_overrides();
    debug!(
        api_url = config.api_url(),
        has_credentials = config.credentials.is_some(),
        "configuration loaded"
    );

    let clients = Clients::connect(&config, args.command.as_ref())?;

    if args.dry_run {
        info!("dry-run requested; configuration validated");
        return Ok(());
    }

    let Some(command) = args.command else {
        bail!("no command given, see --help");
    };

    let value = command::run(&command, &clients).await?;
    let rendered = serde_json::to_string_pretty(&value).context("render response")?;
    println!("{rendered}");
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<CliConfig> {
    let Some(path) = path else {
        return Ok(CliConfig::default());
    };
    let path_str = path.to_str().context("config path must be valid utf-8")?;
    CliConfig::from_file(path_str).context("load config")
}
