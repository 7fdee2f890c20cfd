//! Selection and shape modifiers: projection, writes, ordering, pagination.

use crate::builder::state::{Method, RequestState};
use serde::Serialize;

impl RequestState {
    /// Project specific columns via the `select` header and force GET.
    pub fn select(mut self, columns: &[&str]) -> Self {
        self.headers
            .insert("select".to_string(), columns.join(","));
        self.method = Method::Get;
        self
    }

    /// Insert rows: POST with the rows as body.
    ///
    /// With `upsert` the `Prefer` header requests merge-duplicates conflict
    /// resolution; otherwise it is set to the empty string.
    pub fn insert<T: Serialize>(mut self, rows: &T, upsert: bool) -> Self {
        let prefer = if upsert {
            "resolution=merge-duplicates"
        } else {
            ""
        };
        self.headers.insert("Prefer".to_string(), prefer.to_string());
        self.method = Method::Post;
        self.set_body(rows)
    }

    /// Update matching rows: PATCH with the changes as body, asking the
    /// server to return the updated representation.
    pub fn update<T: Serialize>(mut self, rows: &T) -> Self {
        self.headers
            .insert("Prefer".to_string(), "return=representation".to_string());
        self.method = Method::Patch;
        self.set_body(rows)
    }

    /// Delete matching rows: DELETE with the criteria as body.
    pub fn delete<T: Serialize>(mut self, criteria: &T) -> Self {
        self.method = Method::Delete;
        self.set_body(criteria)
    }

    /// Sort by a column via the `order` header.
    ///
    /// The value is the space-joined token list
    /// `"<column> <.desc?> <.nullsfirst?>"`; absent tokens stay as empty
    /// strings, so `order("age", true, false)` yields `"age .desc "`.
    pub fn order(mut self, column: &str, desc: bool, nulls_first: bool) -> Self {
        let desc_token = if desc { ".desc" } else { "" };
        let nulls_token = if nulls_first { ".nullsfirst" } else { "" };
        self.headers.insert(
            "order".to_string(),
            format!("{column} {desc_token} {nulls_token}"),
        );
        self
    }

    /// Request `size` items starting at item `start` (item-range pagination).
    pub fn limit(self, size: u64, start: u64) -> Self {
        self.range(start, start + size.saturating_sub(1))
    }

    /// Request the inclusive item range `start..=end` via `Range` headers.
    pub fn range(mut self, start: u64, end: u64) -> Self {
        self.headers
            .insert("Range".to_string(), format!("{start}-{end}"));
        self.headers
            .insert("Range-Unit".to_string(), "items".to_string());
        self
    }

    /// Request a singular (non-array) JSON result.
    pub fn single(mut self) -> Self {
        self.headers.insert(
            "Accept".to_string(),
            "application/vnd.pgrst.object+json".to_string(),
        );
        self
    }
}
