//! Request URL assembly: a base path plus ordered, percent-encoded query parameters.

/// Builds a request URL from a base path and query parameters.
///
/// Parameters keep their insertion order. Setting a parameter that already
/// exists overwrites its value in place. A parameter set to `""` is still
/// rendered as `name=`; a parameter never set is omitted.
#[derive(Debug, Clone)]
pub struct UriBuilder {
    base: String,
    params: Vec<(String, String)>,
}

impl UriBuilder {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            params: Vec::new(),
        }
    }

    /// Appends `name=value`, or replaces the value if `name` was already set.
    pub fn set_parameter(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match self.params.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value,
            None => self.params.push((name.to_string(), value)),
        }
        self
    }

    /// Returns true if no parameter was ever set.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn build(&self) -> String {
        if self.params.is_empty() {
            return self.base.clone();
        }
        let query = self
            .params
            .iter()
            .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.base, query)
    }
}

#[cfg(test)]
mod tests {
    use super::UriBuilder;

    #[test]
    fn no_parameters_returns_base_unchanged() {
        let uri = UriBuilder::new("https://example.com/v3/1/profile");
        assert_eq!(uri.build(), "https://example.com/v3/1/profile");
    }

    #[test]
    fn parameters_are_encoded_in_insertion_order() {
        let mut uri = UriBuilder::new("base");
        uri.set_parameter("a", "1").set_parameter("b", "x y");
        assert_eq!(uri.build(), "base?a=1&b=x%20y");
    }

    #[test]
    fn empty_value_is_still_sent() {
        let mut uri = UriBuilder::new("base");
        uri.set_parameter("keyword", "");
        assert_eq!(uri.build(), "base?keyword=");
    }

    #[test]
    fn setting_twice_overwrites_in_place() {
        let mut uri = UriBuilder::new("base");
        uri.set_parameter("offset", "0")
            .set_parameter("limit", "10")
            .set_parameter("offset", "20");
        assert_eq!(uri.build(), "base?offset=20&limit=10");
    }

    #[test]
    fn reserved_characters_are_percent_encoded() {
        let mut uri = UriBuilder::new("base");
        uri.set_parameter("keyword", "t-shirt & cap/50%~_.");
        insta::assert_snapshot!(uri.build(), @"base?keyword=t-shirt%20%26%20cap%2F50%25~_.");
    }
}
