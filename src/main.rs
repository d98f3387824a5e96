use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use release_collector::collector::pipeline::ReleaseCollector;
use release_collector::config::{CollectorConfig, DEFAULT_LOG_FILTER};

#[derive(Parser)]
#[command(name = "release-collector")]
#[command(version, about = "Collects Python releases and their download links")]
struct Cli {
    /// JSON config file; flags below take precedence over it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listing page URL
    #[arg(long)]
    listing_url: Option<String>,

    /// Origin prepended to detail page paths
    #[arg(long)]
    site_origin: Option<String>,

    /// Output file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fixed User-Agent instead of a random browser string
    #[arg(long)]
    user_agent: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<CollectorConfig> {
        let mut config = match &self.config {
            Some(path) => CollectorConfig::from_file(path)?,
            None => CollectorConfig::default(),
        };

        if let Some(listing_url) = self.listing_url {
            config.listing_url = listing_url;
        }
        if let Some(site_origin) = self.site_origin {
            config.site_origin = site_origin;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if self.user_agent.is_some() {
            config.user_agent = self.user_agent;
        }
        if self.timeout_secs.is_some() {
            config.timeout_secs = self.timeout_secs;
        }

        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let config = Cli::parse().into_config()?;

    let (writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .init();

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            ReleaseCollector::from_config(&config)?.run().await?;
            Ok::<_, anyhow::Error>(())
        })
}
