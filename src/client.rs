//! Feed retrieval for the two NHK Easy News endpoints.
//!
//! Both endpoints are plain unauthenticated GETs returning UTF-8 JSON, but
//! their shapes differ:
//!
//! - **Easy feed** (`news-list.json`): a single-element array whose first
//!   element is an object grouping raw records into arrays by day.
//! - **Top feed** (`top-list.json`): a flat array of raw records with a
//!   few extra fields per item.
//!
//! Each retrieval is a single-shot, stateless round trip. A non-2xx
//! response or transport failure is an error; a payload that parses but is
//! not shaped like the feed is treated as an empty feed. The two methods
//! share no state and may be called concurrently.

use serde_json::Value;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::error::{Error, Result};
use crate::models::Article;
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::utils::{trim_stray, truncate_for_log};

/// Base URL both feed endpoints hang off of.
pub const NEWS_BASE_URL: &str = "https://www3.nhk.or.jp/news/easy/";

const EASY_LIST_FILE: &str = "news-list.json";
const TOP_LIST_FILE: &str = "top-list.json";

/// Client for the NHK Easy News feeds.
///
/// Generic over the [`HttpTransport`] used to issue requests;
/// [`NhkClient::new`] picks the reqwest-backed default.
///
/// # Examples
///
/// ```no_run
/// # async fn run() -> nhk_easy_news::Result<()> {
/// let client = nhk_easy_news::NhkClient::new();
/// let articles = client.fetch_easy_news().await?;
/// for article in &articles {
///     println!("{}: {}", article.id, article.title);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct NhkClient<T = ReqwestTransport> {
    transport: T,
}

impl NhkClient<ReqwestTransport> {
    /// Create a client with the default reqwest transport.
    pub fn new() -> Self {
        Self {
            transport: ReqwestTransport::default(),
        }
    }
}

impl Default for NhkClient<ReqwestTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HttpTransport> NhkClient<T> {
    /// Create a client over a caller-supplied transport.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Fetch the easy feed and flatten its day groups into one list.
    ///
    /// Records keep the order they appear in upstream: day groups in the
    /// object's key order, records in per-day array order. Day-group
    /// properties that are not arrays are skipped, and records that are
    /// not JSON objects are dropped individually without aborting the
    /// fetch.
    ///
    /// # Errors
    ///
    /// [`Error::Fetch`] on a non-2xx response, [`Error::Http`] on a
    /// transport failure, [`Error::Json`] when the body is not JSON text.
    /// A payload that parses to anything other than the expected
    /// array-of-day-groups yields `Ok` with an empty list.
    #[instrument(level = "info", skip_all)]
    pub async fn fetch_easy_news(&self) -> Result<Vec<Article>> {
        let body = self.fetch_feed_body(EASY_LIST_FILE).await?;
        let json: Value = serde_json::from_str(trim_stray(&body))?;

        let mut articles = Vec::new();
        if !json.is_array() {
            debug!("easy feed payload is not an array; treating as empty");
            return Ok(articles);
        }
        let Some(day_groups) = json.get(0).and_then(Value::as_object) else {
            debug!("easy feed has no day-group object; treating as empty");
            return Ok(articles);
        };

        for (day, group) in day_groups {
            let Some(records) = group.as_array() else {
                debug!(%day, "skipping non-array day group property");
                continue;
            };
            for record in records {
                match record.as_object() {
                    Some(raw) => articles.push(Article::decode(raw)),
                    None => warn!(%day, "dropping easy feed record that is not an object"),
                }
            }
        }

        info!(count = articles.len(), days = day_groups.len(), "Fetched easy news articles");
        Ok(articles)
    }

    /// Fetch the top feed and decode its flat article list.
    ///
    /// Unlike the easy feed, a single record that is not a JSON object
    /// invalidates the whole batch to an empty list. The asymmetry
    /// mirrors upstream behavior and is covered by tests.
    ///
    /// # Errors
    ///
    /// Same contract as [`fetch_easy_news`](Self::fetch_easy_news).
    #[instrument(level = "info", skip_all)]
    pub async fn fetch_top_news(&self) -> Result<Vec<Article>> {
        let body = self.fetch_feed_body(TOP_LIST_FILE).await?;
        let json: Value = serde_json::from_str(trim_stray(&body))?;

        let Some(records) = json.as_array() else {
            debug!("top feed payload is not an array; treating as empty");
            return Ok(Vec::new());
        };

        let decoded: Option<Vec<Article>> = records
            .iter()
            .map(|record| record.as_object().map(Article::decode))
            .collect();

        match decoded {
            Some(articles) => {
                info!(count = articles.len(), "Fetched top news articles");
                Ok(articles)
            }
            None => {
                warn!(count = records.len(), "top feed contained non-object records; discarding batch");
                Ok(Vec::new())
            }
        }
    }

    /// GET one feed file and return the body of a successful response.
    async fn fetch_feed_body(&self, file: &str) -> Result<String> {
        let endpoint = Url::parse(NEWS_BASE_URL)?.join(file)?;
        debug!(endpoint = %endpoint, "Fetching feed");

        let response = self.transport.get(endpoint.as_str()).await?;
        if !response.is_success() {
            warn!(
                status = response.status,
                body_preview = %truncate_for_log(&response.body, 200),
                "Feed fetch failed"
            );
            return Err(Error::Fetch {
                status: response.status,
                body: response.body,
            });
        }
        Ok(response.body)
    }
}
