//! `webchnl` CLI - viewer counts and stream URLs from the WebChnl API

mod cmd;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use webchnl::config::{load_config, load_config_from, Config};
use webchnl::{ApiClient, ClientOptions};

use cmd::streams::StreamQuery;
use cmd::viewers::ViewerQuery;

#[derive(Parser)]
#[command(name = "webchnl")]
#[command(about = "Viewer counts and stream URLs from the WebChnl API")]
#[command(version)]
struct Cli {
    /// API base URL (overrides the config file)
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,

    /// Config file [default: ~/.config/webchnl/config.toml]
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log requests and parse statistics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables and summaries
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Show live viewer counts per channel
    #[command(group(ArgGroup::new("query").multiple(false)))]
    Viewers {
        /// Only channels that are live
        #[arg(long, group = "query")]
        online: bool,

        /// Only channels that are offline
        #[arg(long, group = "query")]
        offline: bool,

        /// Look up a single channel by slug
        #[arg(long, group = "query", value_name = "SLUG")]
        slug: Option<String>,

        /// Print the total viewer count across online channels
        #[arg(long, group = "query")]
        total: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List channel stream URLs from the master playlist
    #[command(group(ArgGroup::new("query").multiple(false)))]
    Streams {
        /// Look up a channel by its tvg-name
        #[arg(long, group = "query", value_name = "NAME")]
        name: Option<String>,

        /// Look up a channel by its tvg-id
        #[arg(long, group = "query", value_name = "ID")]
        id: Option<String>,

        /// List channel names only
        #[arg(long, group = "query")]
        names: bool,

        /// List channel name and stream URL pairs
        #[arg(long, group = "query")]
        urls: bool,

        /// List channel name and logo URL pairs
        #[arg(long, group = "query")]
        logos: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = resolve_options(&cli)?;
    let client = ApiClient::with_options(options).context("invalid client configuration")?;

    match cli.command {
        Commands::Viewers {
            online,
            offline,
            slug,
            total,
            format,
        } => {
            let query = if let Some(slug) = slug {
                ViewerQuery::Slug(slug)
            } else if online {
                ViewerQuery::Online
            } else if offline {
                ViewerQuery::Offline
            } else if total {
                ViewerQuery::Total
            } else {
                ViewerQuery::Summary
            };
            cmd::viewers::cmd_viewers(client, query, format).await?;
        }
        Commands::Streams {
            name,
            id,
            names,
            urls,
            logos,
            format,
        } => {
            let query = if let Some(name) = name {
                StreamQuery::Name(name)
            } else if let Some(id) = id {
                StreamQuery::Id(id)
            } else if names {
                StreamQuery::Names
            } else if urls {
                StreamQuery::Urls
            } else if logos {
                StreamQuery::Logos
            } else {
                StreamQuery::Summary
            };
            cmd::streams::cmd_streams(client, query, format).await?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "webchnl=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

/// Config file first, then command-line overrides.
fn resolve_options(cli: &Cli) -> Result<ClientOptions> {
    let config: Config = match &cli.config {
        Some(path) => {
            anyhow::ensure!(path.exists(), "config file {} not found", path.display());
            load_config_from(path)?
        }
        None => load_config()?,
    };

    let mut options = config.client_options();
    if let Some(base_url) = &cli.base_url {
        options.base_url.clone_from(base_url);
    }
    if let Some(secs) = cli.timeout {
        options.timeout = Duration::from_secs(secs);
    }

    tracing::debug!(base_url = %options.base_url, timeout = ?options.timeout, "Resolved client options");
    Ok(options)
}
