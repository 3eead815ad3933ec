//! Query-string parameters shared by several endpoints.

use chrono::{DateTime, SecondsFormat, Utc};

// ---------------------------------------------------------------------------
// QueryParams
// ---------------------------------------------------------------------------

/// Ordered `key=value` pairs for a request's query string.
///
/// Keys may repeat (`?username=a&username=b`), which the panel uses for list
/// filters. Values are stored unencoded; percent-encoding happens when the
/// request is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one pair.
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.0.push((key.into(), value.to_string()));
        self
    }

    /// Append a pair only when `value` is `Some`.
    pub fn with_opt<T: ToString>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.with(key, v),
            None => self,
        }
    }

    /// Append one pair per value, all under the same key.
    pub fn with_all<T: ToString>(mut self, key: &str, values: impl IntoIterator<Item = T>) -> Self {
        for v in values {
            self.0.push((key.to_string(), v.to_string()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The pairs in insertion order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    /// First value recorded for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        )
    }
}

/// Types that render themselves as query parameters.
///
/// Implementations emit a key only when the corresponding field is set.
pub trait ToQuery {
    fn to_query(&self) -> QueryParams;
}

/// Render a timestamp the way the panel's date filters expect it.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

// ---------------------------------------------------------------------------
// Common query shapes
// ---------------------------------------------------------------------------

/// `offset` / `limit` pagination, used by `GET /api/user_template`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl ToQuery for PageQuery {
    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("offset", self.offset)
            .with_opt("limit", self.limit)
    }
}

/// A `start` / `end` date window for usage statistics.
///
/// Both bounds are optional; the panel defaults to the last 30 days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UsageRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl UsageRange {
    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }
}

impl ToQuery for UsageRange {
    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("start", self.start.as_ref().map(format_timestamp))
            .with_opt("end", self.end.as_ref().map(format_timestamp))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn absent_fields_emit_no_keys() {
        assert!(PageQuery::default().to_query().is_empty());
        assert!(UsageRange::default().to_query().is_empty());
    }

    #[test]
    fn page_query_keeps_order() {
        let q = PageQuery {
            offset: Some(20),
            limit: Some(10),
        }
        .to_query();
        assert_eq!(
            q.pairs(),
            &[
                ("offset".to_string(), "20".to_string()),
                ("limit".to_string(), "10".to_string())
            ]
        );
    }

    #[test]
    fn repeated_keys_are_preserved() {
        let q = QueryParams::new().with_all("username", ["a", "b"]);
        assert_eq!(q.len(), 2);
        assert_eq!(q.get("username"), Some("a"));
    }

    #[test]
    fn usage_range_renders_rfc3339() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let q = UsageRange {
            start: Some(start),
            end: None,
        }
        .to_query();
        assert_eq!(q.get("start"), Some("2024-01-01T00:00:00Z"));
        assert_eq!(q.get("end"), None);
    }
}
