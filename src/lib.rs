//! # NHK Easy News client
//!
//! A client library for the [NHK News Web Easy](https://www3.nhk.or.jp/news/easy/)
//! JSON feeds. Two endpoints exist upstream with structurally different
//! shapes; this crate fetches both and normalizes every raw record into one
//! [`Article`] type:
//!
//! - the **easy feed**, grouped by day (`news-list.json`)
//! - the **top feed**, a flat list of featured items (`top-list.json`)
//!
//! The interesting part is the normalization layer: some fields were
//! renamed between the two feeds (`news_priority_number` vs
//! `top_priority_number`), payloads arrive wrapped in stray zero-width
//! characters, and records can be partial or malformed. Decoding resolves
//! field aliases, substitutes per-field defaults, and never fails on an
//! unexpected record.
//!
//! ## Usage
//!
//! ```no_run
//! # async fn run() -> nhk_easy_news::Result<()> {
//! use nhk_easy_news::NhkClient;
//!
//! let client = NhkClient::new();
//! let easy = client.fetch_easy_news().await?;
//! let top = client.fetch_top_news().await?;
//! println!("{} easy articles, {} top articles", easy.len(), top.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Only transport-level problems surface as errors: a non-2xx status, a
//! failed request, or a body that is not JSON text. Payloads that parse
//! but are not shaped like a feed are reported as empty feeds.
//!
//! HTTP is abstracted behind [`HttpTransport`], so alternative backends
//! (or canned responses in tests) can be injected via
//! [`NhkClient::with_transport`].

pub mod client;
pub mod error;
pub mod models;
pub mod transport;
pub mod utils;

pub use client::{NhkClient, NEWS_BASE_URL};
pub use error::{Error, Result};
pub use models::Article;
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
