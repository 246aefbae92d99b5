use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

// Site CDN first, then the host serving the bundled jQuery build. A match runs
// until a double quote, whitespace, `)` or `>`.
static CDN_URL_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r#"https://cdn\.prod\.website-files\.com/[^"\s)>]+"#)
            .expect("primary CDN pattern is valid"),
        Regex::new(r#"https://d3e54v103j8qbb\.cloudfront\.net/[^"\s)>]+"#)
            .expect("script CDN pattern is valid"),
    ]
});

/// Collects every distinct CDN asset URL referenced in `html`.
///
/// This is a plain text scan, not an HTML parse: URLs are found wherever they
/// appear (attributes, inline styles, scripts, comments). The returned set is
/// ordered lexicographically, which is also the order assets are downloaded in.
pub fn extract_cdn_urls(html: &str) -> BTreeSet<String> {
    CDN_URL_PATTERNS
        .iter()
        .flat_map(|pattern| pattern.find_iter(html))
        .map(|m| m.as_str().to_string())
        .collect()
}
