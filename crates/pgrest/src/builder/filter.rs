//! Filter engine: column/operator/criteria triples into query parameters.

use crate::builder::state::RequestState;

/// Characters PostgREST treats as syntax inside filter values.
const RESERVED: [char; 5] = [',', '.', ':', '(', ')'];

/// Quote a value that contains reserved characters.
///
/// PostgREST parses `,`, `.`, `:`, `(` and `)` as filter syntax, so a value
/// containing any of them is wrapped in double quotes. Everything else passes
/// through unchanged.
pub fn sanitize_param(value: &str) -> String {
    if value.chars().any(|c| RESERVED.contains(&c)) {
        format!("\"{value}\"")
    } else {
        value.to_string()
    }
}

/// Rewrite `%` wildcard markers to `*`, the PostgREST pattern convention.
pub fn sanitize_pattern_param(value: &str) -> String {
    value.replace('%', "*")
}

impl RequestState {
    /// Add a filter on a column: the central primitive.
    ///
    /// A pending [`RequestState::not`] wraps the operator in `not.` and is
    /// cleared. The encoded value `<operator>.<criteria>` is appended under
    /// the sanitized column key; an existing entry for the column is never
    /// overwritten, values accumulate in application order.
    pub fn filter(mut self, column: &str, operator: &str, criteria: &str) -> Self {
        let operator = if self.negate_next {
            self.negate_next = false;
            format!("not.{operator}")
        } else {
            operator.to_string()
        };
        let key = sanitize_param(column);
        self.params.push(&key, format!("{operator}.{criteria}"));
        self
    }

    /// Negate the next filter application.
    ///
    /// Affects exactly one subsequent [`RequestState::filter`] call; the flag
    /// clears as soon as it is consumed. Method, params and body are left
    /// untouched.
    pub fn not(mut self) -> Self {
        self.negate_next = true;
        self
    }

    // ==================== Comparison operators ====================

    /// Add filter: column equals value
    pub fn eq(self, column: &str, criteria: &str) -> Self {
        let criteria = sanitize_param(criteria);
        self.filter(column, "eq", &criteria)
    }

    /// Add filter: column does not equal value
    pub fn neq(self, column: &str, criteria: &str) -> Self {
        let criteria = sanitize_param(criteria);
        self.filter(column, "neq", &criteria)
    }

    /// Add filter: column greater than value
    pub fn gt(self, column: &str, criteria: &str) -> Self {
        let criteria = sanitize_param(criteria);
        self.filter(column, "gt", &criteria)
    }

    /// Add filter: column greater than or equal to value
    pub fn gte(self, column: &str, criteria: &str) -> Self {
        let criteria = sanitize_param(criteria);
        self.filter(column, "gte", &criteria)
    }

    /// Add filter: column less than value
    pub fn lt(self, column: &str, criteria: &str) -> Self {
        let criteria = sanitize_param(criteria);
        self.filter(column, "lt", &criteria)
    }

    /// Add filter: column less than or equal to value
    pub fn lte(self, column: &str, criteria: &str) -> Self {
        let criteria = sanitize_param(criteria);
        self.filter(column, "lte", &criteria)
    }

    /// Add filter: column IS value (`true`, `false`, `null`)
    pub fn is(self, column: &str, criteria: &str) -> Self {
        let criteria = sanitize_param(criteria);
        self.filter(column, "is", &criteria)
    }

    // ==================== Pattern matching ====================

    /// Add filter: column matches a pattern (`%` wildcards become `*`)
    pub fn like(self, column: &str, pattern: &str) -> Self {
        let pattern = sanitize_pattern_param(pattern);
        self.filter(column, "like", &pattern)
    }

    /// Add filter: column matches a pattern, case-insensitive
    pub fn ilike(self, column: &str, pattern: &str) -> Self {
        let pattern = sanitize_pattern_param(pattern);
        self.filter(column, "ilike", &pattern)
    }

    // ==================== Full-text search ====================

    /// Add filter: full-text search using `to_tsquery`
    pub fn fts(self, column: &str, query: &str) -> Self {
        let query = sanitize_param(query);
        self.filter(column, "fts", &query)
    }

    /// Add filter: full-text search using `plainto_tsquery`
    pub fn plfts(self, column: &str, query: &str) -> Self {
        let query = sanitize_param(query);
        self.filter(column, "plfts", &query)
    }

    /// Add filter: full-text search using `phraseto_tsquery`
    pub fn phfts(self, column: &str, query: &str) -> Self {
        let query = sanitize_param(query);
        self.filter(column, "phfts", &query)
    }

    /// Add filter: full-text search using `websearch_to_tsquery`
    pub fn wfts(self, column: &str, query: &str) -> Self {
        let query = sanitize_param(query);
        self.filter(column, "wfts", &query)
    }

    // ==================== Set operators ====================

    /// Add filter: column is one of the values, encoded as `in.(a,b,c)`
    pub fn in_(self, column: &str, values: &[&str]) -> Self {
        self.filter_set(column, "in", values, '(', ')')
    }

    /// Add filter: column contains the values, encoded as `cs.{a,b}`
    pub fn cs(self, column: &str, values: &[&str]) -> Self {
        self.filter_set(column, "cs", values, '{', '}')
    }

    /// Add filter: column is contained in the values, encoded as `cd.{a,b}`
    pub fn cd(self, column: &str, values: &[&str]) -> Self {
        self.filter_set(column, "cd", values, '{', '}')
    }

    /// Add filter: column overlaps the values, encoded as `ov.{a,b}`
    pub fn ov(self, column: &str, values: &[&str]) -> Self {
        self.filter_set(column, "ov", values, '{', '}')
    }

    fn filter_set(
        self,
        column: &str,
        operator: &str,
        values: &[&str],
        open: char,
        close: char,
    ) -> Self {
        let joined = values
            .iter()
            .map(|v| sanitize_param(v))
            .collect::<Vec<_>>()
            .join(",");
        self.filter(column, operator, &format!("{open}{joined}{close}"))
    }

    // ==================== Range operators ====================

    /// Add filter: column range is strictly left of `(lower,upper)`
    pub fn sl(self, column: &str, range: (&str, &str)) -> Self {
        self.filter_range(column, "sl", range)
    }

    /// Add filter: column range is strictly right of `(lower,upper)`
    pub fn sr(self, column: &str, range: (&str, &str)) -> Self {
        self.filter_range(column, "sr", range)
    }

    /// Add filter: column range does not extend to the left of `(lower,upper)`
    pub fn nxl(self, column: &str, range: (&str, &str)) -> Self {
        self.filter_range(column, "nxl", range)
    }

    /// Add filter: column range does not extend to the right of `(lower,upper)`
    pub fn nxr(self, column: &str, range: (&str, &str)) -> Self {
        self.filter_range(column, "nxr", range)
    }

    /// Add filter: column range is adjacent to `(lower,upper)`
    pub fn adj(self, column: &str, range: (&str, &str)) -> Self {
        self.filter_range(column, "adj", range)
    }

    fn filter_range(self, column: &str, operator: &str, (lower, upper): (&str, &str)) -> Self {
        self.filter(column, operator, &format!("({lower},{upper})"))
    }
}
