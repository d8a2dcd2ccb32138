//! # NHK Easy News fetcher
//!
//! Command-line companion to the `nhk_easy_news` library. Fetches the
//! selected NHK Easy News feed(s), merges and sorts the articles, and
//! prints them as JSON on stdout.
//!
//! ## Usage
//!
//! ```sh
//! nhk_easy_news --feed both --pretty --limit 10
//! ```
//!
//! When both feeds are requested they are fetched concurrently and merged,
//! deduplicating by article id (the top feed repeats easy-feed items).
//! Articles are ordered newest first by publication time.

use clap::Parser;
use itertools::Itertools;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

use nhk_easy_news::{Article, NhkClient, Result};

mod cli;

use cli::{Cli, Feed};

#[tokio::main]
async fn main() -> Result<()> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    debug!(?args.feed, args.pretty, ?args.limit, "Parsed CLI arguments");

    let client = NhkClient::new();
    let mut articles = match args.feed {
        Feed::Easy => client.fetch_easy_news().await?,
        Feed::Top => client.fetch_top_news().await?,
        Feed::Both => {
            let (easy, top) = futures::try_join!(client.fetch_easy_news(), client.fetch_top_news())?;
            let easy_count = easy.len();
            let top_count = top.len();
            let merged: Vec<Article> = easy
                .into_iter()
                .chain(top)
                .unique_by(|article| article.id.clone())
                .collect();
            info!(
                easy = easy_count,
                top = top_count,
                merged = merged.len(),
                "Merged feeds"
            );
            merged
        }
    };

    // Newest first; unparseable timestamps sink to the end.
    articles.sort_by(|a, b| b.publication_time_parsed().cmp(&a.publication_time_parsed()));
    if let Some(limit) = args.limit {
        articles.truncate(limit);
    }
    info!(count = articles.len(), "Writing articles to stdout");

    let json = if args.pretty {
        serde_json::to_string_pretty(&articles)?
    } else {
        serde_json::to_string(&articles)?
    };
    println!("{json}");

    Ok(())
}
