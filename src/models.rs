//! The normalized article model and its decoder.
//!
//! This module defines [`Article`], the uniform representation of one news
//! item, and the hand-written decode step that maps a raw feed record onto
//! it. The two NHK feeds use different key names for some fields
//! (`news_priority_number` vs `top_priority_number`), so decoding resolves
//! an ordered list of source keys per field and falls back to a static
//! default when none is present.
//!
//! # Decode semantics
//!
//! - The first source key present with a non-null value wins.
//! - Missing or null keys never error; the field keeps its default.
//! - Decoding is total over any JSON object: `{}` yields the all-defaults
//!   article.

use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::{Map, Value};

/// One normalized NHK news article.
///
/// Instances are produced by [`Article::decode`] and are not modified
/// afterwards. String fields default to empty, booleans to `false` except
/// [`publication_status`](Self::publication_status), and
/// [`priority_number`](Self::priority_number) to the textual `"0"` the
/// upstream feed uses.
///
/// # Presence flags
///
/// Each media URI field (`web_image_uri`, `easy_voice_uri`, ...) is paired
/// with a `has_*` flag. The upstream feed is not always consistent between
/// the two, so both decode independently: a non-empty URI does not imply
/// the flag, nor the reverse. Check the flag before using the URI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    /// Priority of the article, as a decimal string.
    pub priority_number: String,
    /// Scheduled publication time, an opaque timestamp string.
    pub prearranged_time: String,
    /// Article identifier.
    pub id: String,
    /// Headline text.
    pub title: String,
    /// Headline with ruby (furigana) annotations.
    pub title_with_ruby: String,
    /// Summary with ruby annotations. Only the top feed populates this.
    pub outline_with_ruby: String,
    /// Undocumented upstream flag.
    pub file_version: bool,
    /// Creation time of the article.
    pub creation_time: String,
    /// Preview time of the article.
    pub preview_time: String,
    /// Publication time, formatted `YYYY-MM-DD HH:MM:SS` upstream.
    pub publication_time: String,
    /// Whether the article is published. Defaults to `true`.
    pub publication_status: bool,
    /// Whether a web image URI is available.
    pub has_web_image: bool,
    /// Whether a web movie URI is available.
    pub has_web_movie: bool,
    /// Whether an easy image URI is available.
    pub has_easy_image: bool,
    /// Whether an easy movie URI is available.
    pub has_easy_movie: bool,
    /// Whether a voiced reading URI is available.
    pub has_easy_voice: bool,
    /// Web image URI; may be empty, check [`has_web_image`](Self::has_web_image).
    pub web_image_uri: String,
    /// Web movie URI; may be empty, check [`has_web_movie`](Self::has_web_movie).
    pub web_movie_uri: String,
    /// Easy image URI; may be empty, check [`has_easy_image`](Self::has_easy_image).
    pub easy_image_uri: String,
    /// Easy movie URI; may be empty, check [`has_easy_movie`](Self::has_easy_movie).
    pub easy_movie_uri: String,
    /// Voiced reading URI; may be empty, check [`has_easy_voice`](Self::has_easy_voice).
    pub easy_voice_uri: String,
    /// Undocumented upstream display flag.
    pub display_flag: bool,
    /// Full URL to the complete article.
    pub web_url: String,
}

impl Default for Article {
    fn default() -> Self {
        Self {
            priority_number: "0".to_string(),
            prearranged_time: String::new(),
            id: String::new(),
            title: String::new(),
            title_with_ruby: String::new(),
            outline_with_ruby: String::new(),
            file_version: false,
            creation_time: String::new(),
            preview_time: String::new(),
            publication_time: String::new(),
            publication_status: true,
            has_web_image: false,
            has_web_movie: false,
            has_easy_image: false,
            has_easy_movie: false,
            has_easy_voice: false,
            web_image_uri: String::new(),
            web_movie_uri: String::new(),
            easy_image_uri: String::new(),
            easy_movie_uri: String::new(),
            easy_voice_uri: String::new(),
            display_flag: false,
            web_url: String::new(),
        }
    }
}

impl Article {
    /// Decode a raw feed record into an [`Article`].
    ///
    /// One line per target field: source key(s) in fallback order plus the
    /// field default. Never fails; unknown keys in `raw` are ignored and
    /// an empty record decodes to [`Article::default`].
    pub fn decode(raw: &Map<String, Value>) -> Article {
        Article {
            priority_number: string_field(raw, &["news_priority_number", "top_priority_number"], "0"),
            prearranged_time: string_field(raw, &["news_prearranged_time"], ""),
            id: string_field(raw, &["news_id"], ""),
            title: string_field(raw, &["title"], ""),
            title_with_ruby: string_field(raw, &["title_with_ruby"], ""),
            outline_with_ruby: string_field(raw, &["outline_with_ruby"], ""),
            file_version: bool_field(raw, &["news_file_ver"], false),
            creation_time: string_field(raw, &["news_creation_time"], ""),
            preview_time: string_field(raw, &["news_preview_time"], ""),
            publication_time: string_field(raw, &["news_publication_time"], ""),
            publication_status: bool_field(raw, &["news_publication_status"], true),
            has_web_image: bool_field(raw, &["has_news_web_image"], false),
            has_web_movie: bool_field(raw, &["has_news_web_movie"], false),
            has_easy_image: bool_field(raw, &["has_news_easy_image"], false),
            has_easy_movie: bool_field(raw, &["has_news_easy_movie"], false),
            has_easy_voice: bool_field(raw, &["has_news_easy_voice"], false),
            web_image_uri: string_field(raw, &["news_web_image_uri"], ""),
            web_movie_uri: string_field(raw, &["news_web_movie_uri"], ""),
            easy_image_uri: string_field(raw, &["news_easy_image_uri"], ""),
            easy_movie_uri: string_field(raw, &["news_easy_movie_uri"], ""),
            easy_voice_uri: string_field(raw, &["news_easy_voice_uri"], ""),
            display_flag: bool_field(raw, &["news_display_flag", "top_display_flag"], false),
            web_url: string_field(raw, &["news_web_url"], ""),
        }
    }

    /// Parse [`publication_time`](Self::publication_time) into a timestamp.
    ///
    /// The feed renders publication times as `YYYY-MM-DD HH:MM:SS` with no
    /// timezone. Returns `None` for empty or unparseable values.
    pub fn publication_time_parsed(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.publication_time, "%Y-%m-%d %H:%M:%S").ok()
    }
}

/// First value among `keys` that is present and non-null.
fn first_present<'a>(raw: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| raw.get(*key))
        .find(|value| !value.is_null())
}

/// Resolve a string field: strings verbatim, numbers rendered as decimal.
///
/// Values of any other shape keep the default; the feed has no business
/// putting arrays or objects in these slots.
fn string_field(raw: &Map<String, Value>, keys: &[&str], default: &str) -> String {
    match first_present(raw, keys) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => default.to_string(),
    }
}

/// Resolve a boolean field: bools verbatim, numbers as a non-zero test.
fn bool_field(raw: &Map<String, Value>, keys: &[&str], default: bool) -> bool {
    match first_present(raw, keys) {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        value.as_object().expect("test record must be an object").clone()
    }

    #[test]
    fn test_decode_empty_record_yields_defaults() {
        let article = Article::decode(&Map::new());
        assert_eq!(article, Article::default());
        assert_eq!(article.priority_number, "0");
        assert!(article.publication_status);
        assert!(!article.display_flag);
        assert_eq!(article.title, "");
    }

    #[test]
    fn test_decode_ignores_unrelated_keys() {
        let raw = record(json!({"totally_unrelated": 1, "another": {"nested": true}}));
        assert_eq!(Article::decode(&raw), Article::default());
    }

    #[test]
    fn test_priority_number_news_alias_wins() {
        let raw = record(json!({"news_priority_number": "3"}));
        assert_eq!(Article::decode(&raw).priority_number, "3");
    }

    #[test]
    fn test_priority_number_top_alias_fallback() {
        let raw = record(json!({"top_priority_number": "7"}));
        assert_eq!(Article::decode(&raw).priority_number, "7");
    }

    #[test]
    fn test_priority_number_first_alias_preferred_when_both_present() {
        let raw = record(json!({
            "news_priority_number": "1",
            "top_priority_number": "9"
        }));
        assert_eq!(Article::decode(&raw).priority_number, "1");
    }

    #[test]
    fn test_priority_number_null_first_alias_falls_through() {
        let raw = record(json!({
            "news_priority_number": null,
            "top_priority_number": "5"
        }));
        assert_eq!(Article::decode(&raw).priority_number, "5");
    }

    #[test]
    fn test_priority_number_defaults_when_both_absent() {
        assert_eq!(Article::decode(&Map::new()).priority_number, "0");
    }

    #[test]
    fn test_priority_number_accepts_numeric_value() {
        let raw = record(json!({"news_priority_number": 4}));
        assert_eq!(Article::decode(&raw).priority_number, "4");
    }

    #[test]
    fn test_display_flag_aliases() {
        let raw = record(json!({"top_display_flag": true}));
        assert!(Article::decode(&raw).display_flag);

        let raw = record(json!({"news_display_flag": false, "top_display_flag": true}));
        assert!(!Article::decode(&raw).display_flag);
    }

    #[test]
    fn test_publication_status_keeps_true_default() {
        assert!(Article::decode(&Map::new()).publication_status);
        let raw = record(json!({"news_publication_status": false}));
        assert!(!Article::decode(&raw).publication_status);
    }

    #[test]
    fn test_bool_field_numeric_coercion() {
        let raw = record(json!({"has_news_easy_voice": 1, "has_news_web_movie": 0}));
        let article = Article::decode(&raw);
        assert!(article.has_easy_voice);
        assert!(!article.has_web_movie);
    }

    #[test]
    fn test_full_record_decodes_all_fields() {
        let raw = record(json!({
            "news_id": "k10012345",
            "title": "見出し",
            "title_with_ruby": "見出し(みだし)",
            "outline_with_ruby": "概要",
            "news_prearranged_time": "2024-01-01 11:30:00",
            "news_creation_time": "2024-01-01 10:00:00",
            "news_preview_time": "2024-01-01 11:00:00",
            "news_publication_time": "2024-01-01 12:00:00",
            "news_publication_status": true,
            "news_file_ver": 1,
            "has_news_web_image": true,
            "news_web_image_uri": "http://x/y.jpg",
            "has_news_easy_voice": true,
            "news_easy_voice_uri": "voice.mp3",
            "news_display_flag": true,
            "news_web_url": "https://www3.nhk.or.jp/news/easy/k10012345/index.html"
        }));
        let article = Article::decode(&raw);
        assert_eq!(article.id, "k10012345");
        assert_eq!(article.title, "見出し");
        assert_eq!(article.title_with_ruby, "見出し(みだし)");
        assert_eq!(article.outline_with_ruby, "概要");
        assert_eq!(article.publication_time, "2024-01-01 12:00:00");
        assert!(article.file_version);
        assert!(article.has_web_image);
        assert_eq!(article.web_image_uri, "http://x/y.jpg");
        assert!(article.has_easy_voice);
        assert_eq!(article.easy_voice_uri, "voice.mp3");
        assert!(article.display_flag);
        assert_eq!(
            article.web_url,
            "https://www3.nhk.or.jp/news/easy/k10012345/index.html"
        );
    }

    #[test]
    fn test_uri_and_presence_flag_decode_independently() {
        // Inconsistent upstream record: flag false, URI populated.
        let raw = record(json!({
            "has_news_web_image": false,
            "news_web_image_uri": "http://x/y.jpg"
        }));
        let article = Article::decode(&raw);
        assert!(!article.has_web_image);
        assert_eq!(article.web_image_uri, "http://x/y.jpg");

        // The reverse: flag true, URI missing.
        let raw = record(json!({"has_news_easy_movie": true}));
        let article = Article::decode(&raw);
        assert!(article.has_easy_movie);
        assert_eq!(article.easy_movie_uri, "");
    }

    #[test]
    fn test_string_field_rejects_non_scalar_values() {
        let raw = record(json!({"news_id": ["not", "a", "string"]}));
        assert_eq!(Article::decode(&raw).id, "");
    }

    #[test]
    fn test_publication_time_parsed() {
        let raw = record(json!({"news_publication_time": "2024-01-01 12:00:00"}));
        let parsed = Article::decode(&raw).publication_time_parsed().unwrap();
        assert_eq!(parsed.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-01-01 12:00:00");

        assert!(Article::default().publication_time_parsed().is_none());
        let raw = record(json!({"news_publication_time": "yesterday-ish"}));
        assert!(Article::decode(&raw).publication_time_parsed().is_none());
    }

    #[test]
    fn test_article_serializes_to_json() {
        let raw = record(json!({"news_id": "a1", "title": "t"}));
        let article = Article::decode(&raw);
        let json = serde_json::to_string(&article).unwrap();
        assert!(json.contains("\"id\":\"a1\""));
        assert!(json.contains("\"priority_number\":\"0\""));
    }
}
