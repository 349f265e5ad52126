//! Fetch the S&P 500 and NASDAQ-100 membership pages, extract their tickers
//! and write `sp500.txt`, `nasdaq100.txt`, `combined.txt` and `tickers.json`.

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rs_index_tickers::{run_pipeline, Config, ConfigOverrides, Fetcher, OutputWriter, Source};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

/// Scrape index membership pages into ticker lists.
#[derive(Parser, Debug)]
#[command(name = "fetch_indices", version, about)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long, env = "TICKERS_CONFIG")]
    config: Option<PathBuf>,

    /// Output directory (overrides the config file).
    #[arg(short, long, env = "TICKERS_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// User-Agent header (overrides the config file).
    #[arg(long)]
    user_agent: Option<String>,

    /// Request timeout in seconds (overrides the config file).
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Log format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

fn init_tracing(cli: &Cli) {
    let filter = match cli.verbose {
        0 => "rs_index_tickers=info,fetch_indices=info",
        1 => "rs_index_tickers=debug,fetch_indices=debug",
        _ => "rs_index_tickers=trace,fetch_indices=trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => fmt().with_env_filter(env_filter).with_target(false).init(),
        LogFormat::Json => fmt().json().with_env_filter(env_filter).init(),
    }
}

fn resolve_config(cli: &Cli) -> rs_index_tickers::Result<Config> {
    let overrides = ConfigOverrides {
        output_dir: cli.output_dir.clone(),
        user_agent: cli.user_agent.clone(),
        timeout_secs: cli.timeout_secs,
    };
    Config::resolve(cli.config.as_deref(), overrides)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(&cli);
    let config = resolve_config(&cli)?;

    let fetcher = Fetcher::new(&config)?;
    let sp500_url = Url::parse(Source::Sp500.url())?;
    let nasdaq_url = Url::parse(Source::Nasdaq100.url())?;
    info!("fetching index pages");
    let (sp500, nasdaq100) = tokio::join!(fetcher.fetch(&sp500_url), fetcher.fetch(&nasdaq_url));
    let pages = vec![(Source::Sp500, sp500?), (Source::Nasdaq100, nasdaq100?)];

    let report = run_pipeline(&pages);
    let writer = OutputWriter::new(&config.output_dir)?;
    let written = report.write(&writer)?;

    println!("Done!");
    for source in &report.sources {
        let tier = source.tier.map_or("none", |t| t.as_str());
        println!("- {}: {} tickers (tier: {tier})", source.source, source.symbols.len());
    }
    println!("- Combined (unique): {} tickers", report.merged.len());
    println!("\nFiles saved in {}/", writer.dir().display());
    for path in &written {
        if let Some(name) = path.file_name() {
            println!("- {}", name.to_string_lossy());
        }
    }

    Ok(())
}
