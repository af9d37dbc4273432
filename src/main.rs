use anyhow::Context;
use clap::Parser;
use std::io::Write;

use listing_probe::config::{CONFIG, Config, KNOWN_CITIES};
use listing_probe::{SearchParams, SearchRequest, Transport};

/// Send one search to the listings API and print what came back.
#[derive(Parser, Debug)]
#[command(name = "listing-probe", version)]
struct Cli {
    /// City slug in the search path (tehran, karaj, ...)
    #[arg(long)]
    city: Option<String>,

    /// Category filter, also the last path segment
    #[arg(long)]
    category: Option<String>,

    /// Pagination cursor sent as last-post-date
    #[arg(long)]
    cursor: Option<i64>,

    /// Search endpoint without the city/category suffix
    #[arg(long)]
    base_url: Option<String>,

    #[arg(long)]
    user_agent: Option<String>,

    /// Request deadline in seconds, 0 for none
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Characters of the body to print
    #[arg(long)]
    body_limit: Option<usize>,

    /// Print the request instead of sending it
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    fn merge(self, base: &Config) -> Config {
        Config {
            base_url: self.base_url.unwrap_or_else(|| base.base_url.clone()),
            city: self.city.unwrap_or_else(|| base.city.clone()),
            category: self.category.unwrap_or_else(|| base.category.clone()),
            cursor: self.cursor.unwrap_or(base.cursor),
            user_agent: self.user_agent.unwrap_or_else(|| base.user_agent.clone()),
            timeout_secs: self.timeout_secs.unwrap_or(base.timeout_secs),
            body_limit: self.body_limit.unwrap_or(base.body_limit),
        }
    }
}

/// Writes the request line, the headers, a blank line and the JSON body.
fn render_dry_run<W: Write>(out: &mut W, request: &SearchRequest) -> anyhow::Result<()> {
    writeln!(out, "POST {}", request.url)?;
    for (name, value) in &request.headers {
        writeln!(out, "{name}: {value}")?;
    }
    writeln!(out)?;
    out.write_all(&request.body_bytes()?)?;
    writeln!(out)?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr, stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let dry_run = cli.dry_run;
    let config = cli.merge(&CONFIG);

    if !KNOWN_CITIES.contains(&config.city.as_str()) {
        log::warn!("city {:?} is not one of {:?}", config.city, KNOWN_CITIES);
    }

    let params = SearchParams::from(&config);

    if dry_run {
        let request = SearchRequest::build(&params);
        render_dry_run(&mut std::io::stdout().lock(), &request)?;
        return Ok(());
    }

    let transport =
        Transport::new(config.timeout()).context("failed to build the HTTP client")?;
    let mut stdout = std::io::stdout().lock();
    let response = listing_probe::probe(&params, &transport, &mut stdout, config.body_limit)
        .await
        .with_context(|| format!("search request for {}/{} failed", config.city, config.category))?;

    tracing::info!(status = response.status_code, "search finished");
    Ok(())
}
