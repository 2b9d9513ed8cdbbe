//! Shared query infrastructure: the [`Query`] and [`Paginated`] traits and [`Paging`].

/// Trait implemented by all query builders. Renders the optional query
/// parameters of one endpoint, in a fixed order. Unset filters are left out.
pub trait Query {
    /// Returns the `(name, value)` pairs to append to the request URL.
    fn to_query_pairs(&self) -> Vec<(&'static str, String)>;
}

/// Query builders for list endpoints that accept `offset`/`limit`.
pub trait Paginated: Query {
    /// Returns a mutable reference to the paging fields.
    fn paging_mut(&mut self) -> &mut Paging;

    /// Skips the first `offset` records.
    fn with_offset(mut self, offset: i64) -> Self
    where
        Self: Sized,
    {
        self.paging_mut().offset = Some(offset);
        self
    }

    /// Maximum records per page. The API caps this at 100.
    fn with_limit(mut self, limit: i64) -> Self
    where
        Self: Sized,
    {
        self.paging_mut().limit = Some(limit);
        self
    }
}

/// Offset and limit shared by paginated queries. `None` uses the API default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Paging {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl Paging {
    pub(crate) fn push_offset(&self, pairs: &mut Vec<(&'static str, String)>) {
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
    }

    pub(crate) fn push_limit(&self, pairs: &mut Vec<(&'static str, String)>) {
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
    }
}

/// Pushes `name=value` when the filter is set.
pub(crate) fn push_opt<T: ToString>(
    pairs: &mut Vec<(&'static str, String)>,
    name: &'static str,
    value: &Option<T>,
) {
    if let Some(value) = value {
        pairs.push((name, value.to_string()));
    }
}

/// Pushes a comma separated list when it is non-empty.
pub(crate) fn push_list<T: ToString>(
    pairs: &mut Vec<(&'static str, String)>,
    name: &'static str,
    values: &[T],
) {
    if !values.is_empty() {
        let joined = values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        pairs.push((name, joined));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booleans_render_as_words() {
        let mut pairs = Vec::new();
        push_opt(&mut pairs, "enabled", &Some(true));
        push_opt(&mut pairs, "inStock", &Some(false));
        push_opt::<bool>(&mut pairs, "skipped", &None);
        assert_eq!(
            pairs,
            vec![
                ("enabled", "true".to_string()),
                ("inStock", "false".to_string())
            ]
        );
    }

    #[test]
    fn lists_are_comma_separated() {
        let mut pairs = Vec::new();
        push_list(&mut pairs, "productIds", &[1, 2, 3]);
        push_list::<i64>(&mut pairs, "empty", &[]);
        assert_eq!(pairs, vec![("productIds", "1,2,3".to_string())]);
    }
}
