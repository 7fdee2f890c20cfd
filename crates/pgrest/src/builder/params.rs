//! Ordered multi-valued query parameter storage.

/// An ordered multi-map from column key to encoded filter values.
///
/// A column may accumulate several filters (e.g. a `gt` and an `lt` bound),
/// so each key holds an ordered list of encoded values rather than a single
/// string. Keys iterate in first-insertion order and values in application
/// order, which keeps a replayed builder chain byte-identical.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParamMap {
    entries: Vec<(String, Vec<String>)>,
}

impl ParamMap {
    /// Create a new empty parameter map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an encoded value under `key`.
    ///
    /// An existing entry for the key is never overwritten; the value is
    /// appended to its list.
    pub fn push(&mut self, key: &str, value: String) {
        if let Some((_, values)) = self.entries.iter_mut().find(|(k, _)| k == key) {
            values.push(value);
        } else {
            self.entries.push((key.to_string(), vec![value]));
        }
    }

    /// Get the encoded values for a key, in application order.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.as_slice())
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, values)` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(k, values)| (k.as_str(), values.as_slice()))
    }

    /// Flatten into `(key, value)` pairs, repeating the key once per value.
    ///
    /// This is the wire shape: one query-parameter occurrence per filter.
    pub fn to_query(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .flat_map(|(k, values)| values.iter().map(move |v| (k.clone(), v.clone())))
            .collect()
    }
}
