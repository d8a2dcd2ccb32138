//! Command-line interface definitions.
//!
//! This module defines the CLI arguments and options using the `clap` crate.

use clap::{Parser, ValueEnum};

/// Which feed(s) to fetch.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum Feed {
    /// The day-grouped easy news list.
    Easy,
    /// The flat top/featured news list.
    Top,
    /// Both feeds, merged and deduplicated by article id.
    Both,
}

/// Command-line arguments for the NHK Easy News fetcher.
///
/// # Examples
///
/// ```sh
/// # Print today's easy news as JSON
/// nhk_easy_news --feed easy
///
/// # Both feeds, pretty-printed, newest five articles only
/// nhk_easy_news --feed both --pretty --limit 5
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Feed to fetch
    #[arg(short, long, value_enum, default_value_t = Feed::Both)]
    pub feed: Feed,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Keep only the newest N articles
    #[arg(short, long)]
    pub limit: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["nhk_easy_news"]);
        assert_eq!(cli.feed, Feed::Both);
        assert!(!cli.pretty);
        assert_eq!(cli.limit, None);
    }

    #[test]
    fn test_cli_feed_selection() {
        let cli = Cli::parse_from(["nhk_easy_news", "--feed", "easy"]);
        assert_eq!(cli.feed, Feed::Easy);

        let cli = Cli::parse_from(["nhk_easy_news", "-f", "top", "-p", "-l", "5"]);
        assert_eq!(cli.feed, Feed::Top);
        assert!(cli.pretty);
        assert_eq!(cli.limit, Some(5));
    }
}
