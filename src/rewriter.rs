use std::collections::btree_map::{self, BTreeMap};

/// Downloaded asset URLs and the local paths they were saved under.
///
/// Entries are only ever added, never replaced: a URL is recorded once, right
/// after its download succeeds. Iteration is in URL order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetMapping {
    entries: BTreeMap<String, String>,
}

impl AssetMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `url -> local_path`. Returns `false` and leaves the mapping
    /// untouched if `url` is already present.
    pub fn record(&mut self, url: impl Into<String>, local_path: impl Into<String>) -> bool {
        match self.entries.entry(url.into()) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(local_path.into());
                true
            }
            btree_map::Entry::Occupied(_) => false,
        }
    }

    pub fn get(&self, url: &str) -> Option<&str> {
        self.entries.get(url).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(u, p)| (u.as_str(), p.as_str()))
    }
}

/// Replaces every occurrence of each mapped URL in `html` with its local path.
///
/// Replacement is literal and runs once per mapping entry in URL order. When one
/// mapped URL is a prefix of another, the shorter one is replaced first and the
/// longer one will no longer be found.
pub fn rewrite_html(html: &str, mapping: &AssetMapping) -> String {
    mapping
        .iter()
        .fold(html.to_string(), |acc, (url, local_path)| {
            acc.replace(url, local_path)
        })
}
