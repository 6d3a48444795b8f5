//! Ordered query parameters of a built map.
//!
//! `UrlParams` is the introspection surface for a finished build: exactly
//! the `key=value` pairs, in exactly the order, that the final URL carries.
//! It is returned per build call — there is no process-wide "last built"
//! state to race on.

/// Ordered list of query parameters.
///
/// Keys may repeat (`markers=` appears once per marker set). Values are
/// already percent-encoded where the parameter requires it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParams {
    entries: Vec<(&'static str, String)>,
}

impl UrlParams {
    /// Creates an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, key: &'static str, value: String) {
        self.entries.push((key, value));
    }

    /// Returns the value of the first parameter with the given key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns all values for the given key, in order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> {
        self.entries
            .iter()
            .filter(move |(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates over `(key, value)` pairs in output order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no parameter was built.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the `key=value&...` query string.
    pub fn query_string(&self) -> String {
        let pairs: Vec<String> = self
            .entries
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        pairs.join("&")
    }

    /// Renders the full URL against a base endpoint.
    pub fn render(&self, endpoint: &str) -> String {
        format!("{}?{}", endpoint, self.query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UrlParams {
        let mut params = UrlParams::new();
        params.push("zoom", "5".to_string());
        params.push("markers", "A".to_string());
        params.push("markers", "B".to_string());
        params
    }

    #[test]
    fn test_get_returns_first_match() {
        let params = sample();
        assert_eq!(params.get("markers"), Some("A"));
        assert_eq!(params.get("center"), None);
    }

    #[test]
    fn test_get_all_preserves_order() {
        let params = sample();
        let markers: Vec<&str> = params.get_all("markers").collect();
        assert_eq!(markers, ["A", "B"]);
    }

    #[test]
    fn test_render() {
        assert_eq!(
            sample().render("http://example.com/map"),
            "http://example.com/map?zoom=5&markers=A&markers=B"
        );
    }
}
