use url::Url;

/// Domain family of the site CDN.
pub const PRIMARY_CDN_DOMAIN: &str = "website-files.com";

/// Domain family of the CDN serving the bundled script library.
pub const SCRIPT_CDN_DOMAIN: &str = "cloudfront.net";

/// Bucket an asset is filed under in the output tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetCategory {
    Css,
    JavaScript,
    Image,
    Other,
}

impl AssetCategory {
    /// Directory, relative to the output root, holding assets of this kind.
    pub fn directory(self) -> &'static str {
        match self {
            AssetCategory::Css => "assets/css",
            AssetCategory::JavaScript => "assets/js",
            AssetCategory::Image => "assets/images",
            AssetCategory::Other => "assets",
        }
    }
}

/// Decides which bucket `url` belongs to.
///
/// Rules are tried in order and the first match wins:
/// 1. site CDN with at least two path segments: `/css/` or `/js/` marker,
///    otherwise image
/// 2. script CDN: always JavaScript
/// 3. anything else
pub fn classify(url: &str) -> AssetCategory {
    let host = Url::parse(url).ok().and_then(|u| u.host_str().map(str::to_string));
    let path = raw_path(url);

    match host.as_deref() {
        Some(host) if in_domain_family(host, PRIMARY_CDN_DOMAIN) => {
            if path.split('/').count() < 2 {
                AssetCategory::Other
            } else if path.contains("/css/") {
                AssetCategory::Css
            } else if path.contains("/js/") {
                AssetCategory::JavaScript
            } else {
                AssetCategory::Image
            }
        }
        Some(host) if in_domain_family(host, SCRIPT_CDN_DOMAIN) => AssetCategory::JavaScript,
        _ => AssetCategory::Other,
    }
}

/// Maps an asset URL to its forward-slash path relative to the output root.
///
/// Total and deterministic: every input yields a path, even a degenerate one
/// such as `assets/` for a URL without a final segment.
pub fn local_path_for(url: &str) -> String {
    format!("{}/{}", classify(url).directory(), file_name(url))
}

/// Last `/`-delimited segment of the URL path, without any query string.
pub fn file_name(url: &str) -> &str {
    let last = raw_path(url).rsplit('/').next().unwrap_or_default();
    last.split('?').next().unwrap_or_default()
}

fn in_domain_family(host: &str, domain: &str) -> bool {
    host == domain
        || host
            .strip_suffix(domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

// Path segments are read from the URL text itself so filenames keep the
// spelling used in the HTML (no percent-encoding normalization). Leading
// slashes are dropped, as are the query and fragment.
fn raw_path(url: &str) -> &str {
    let after_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    let path = match after_scheme.find('/') {
        Some(idx) => &after_scheme[idx..],
        None => "",
    };
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.trim_start_matches('/')
}
