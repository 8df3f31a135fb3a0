//! Request parameters as the search pipeline sees them.

use crate::config::SearchConfig;

/// Query string parameters in arrival order.
///
/// Lookups return the first value of a repeated key, so `?q=a&q=b` searches
/// for `a`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// First value for `key`, if the key is present at all.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl From<Vec<(String, String)>> for QueryParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self::new(pairs)
    }
}

/// Resolve the result limit for a request.
///
/// Missing, non-numeric, zero or negative values fall back to
/// `config.default_limit`; anything larger than `config.max_limit` is clamped.
/// Never fails.
pub fn resolve_limit(params: &QueryParams, config: &SearchConfig) -> usize {
    let requested = params
        .get("limit")
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .filter(|limit| *limit > 0)
        .map(|limit| usize::try_from(limit).unwrap_or(usize::MAX));

    match requested {
        Some(limit) => limit.min(config.max_limit),
        None => config.default_limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SearchConfig {
        SearchConfig {
            default_limit: 500,
            max_limit: 1000,
            ..SearchConfig::default()
        }
    }

    fn limit_of(raw: &str) -> usize {
        resolve_limit(&QueryParams::from_pairs([("limit", raw)]), &config())
    }

    #[test]
    fn test_first_value_wins() {
        let params = QueryParams::from_pairs([("q", "first"), ("hex", "ffffff"), ("q", "second")]);
        assert_eq!(params.get("q"), Some("first"));
        assert_eq!(params.get("hex"), Some("ffffff"));
        assert_eq!(params.get("lat"), None);
        assert!(params.contains("hex"));
    }

    #[test]
    fn test_present_but_empty_value() {
        let params = QueryParams::from_pairs([("hex", "")]);
        assert!(params.contains("hex"));
        assert_eq!(params.get("hex"), Some(""));
    }

    #[test]
    fn test_limit_defaults() {
        assert_eq!(resolve_limit(&QueryParams::default(), &config()), 500);
        assert_eq!(limit_of("abc"), 500);
        assert_eq!(limit_of(""), 500);
        assert_eq!(limit_of("0"), 500);
        assert_eq!(limit_of("-5"), 500);
        assert_eq!(limit_of("2.5"), 500);
    }

    #[test]
    fn test_limit_parsing_and_clamp() {
        assert_eq!(limit_of("10"), 10);
        assert_eq!(limit_of(" 25 "), 25);
        assert_eq!(limit_of("1000"), 1000);
        assert_eq!(limit_of("5000"), 1000);
        assert_eq!(limit_of("99999999999999999999"), 500);
    }
}
