//! Helper functions for payload cleanup and log formatting.
//!
//! The NHK endpoints are known to wrap otherwise valid JSON in stray
//! whitespace and zero-width characters that break naive parsers, so the
//! client trims every body through [`trim_stray`] before parsing.

/// Strip leading/trailing whitespace and invisible marker characters.
///
/// The easy-news endpoint has been observed to prepend a byte-order mark
/// and occasionally zero-width spaces around the JSON text. Plain
/// [`str::trim`] does not cover those, so this trims both regular
/// whitespace and the zero-width family.
///
/// # Examples
///
/// ```
/// use nhk_easy_news::utils::trim_stray;
/// assert_eq!(trim_stray("\u{feff}[1,2]\n"), "[1,2]");
/// ```
pub fn trim_stray(s: &str) -> &str {
    s.trim_matches(|c: char| {
        c.is_whitespace() || matches!(c, '\u{feff}' | '\u{200b}' | '\u{200c}' | '\u{200d}')
    })
}

/// Truncate a string for logging and error messages.
///
/// Long response bodies are cut to `max` bytes with an ellipsis and a
/// remaining-byte count appended, so diagnostics stay readable.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        let mut cut = max;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
    }
}
