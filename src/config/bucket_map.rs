use std::collections::BTreeMap;

use serde::Serialize;

/// Immutable agency → bucket mapping.
///
/// Keys are lower-cased when the map is built, so lookups with an already
/// lower-cased agency key are case-insensitive with respect to the
/// configured names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BucketMap {
    entries: BTreeMap<String, String>,
}

impl BucketMap {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(agency, bucket)| (agency.as_ref().to_lowercase(), bucket.into()))
            .collect();
        BucketMap { entries }
    }

    /// Look up the bucket for an agency key.
    pub fn get(&self, agency: &str) -> Option<&str> {
        self.entries.get(agency).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
