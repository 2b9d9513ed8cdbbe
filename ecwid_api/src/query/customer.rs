use super::{
    common::{push_opt, Paging},
    Paginated, Query,
};

/// Filters for the customer search endpoint.
#[derive(Debug, Clone, Default)]
pub struct CustomerQuery {
    pub paging: Paging,
    /// Matched against every customer field.
    pub keyword: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub min_order_count: Option<i64>,
    pub max_order_count: Option<i64>,
    pub sort_by: Option<CustomerSortBy>,
}

impl Query for CustomerQuery {
    fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_opt(&mut pairs, "keyword", &self.keyword);
        push_opt(&mut pairs, "name", &self.name);
        push_opt(&mut pairs, "email", &self.email);
        push_opt(&mut pairs, "minOrderCount", &self.min_order_count);
        push_opt(&mut pairs, "maxOrderCount", &self.max_order_count);
        push_opt(&mut pairs, "sortBy", &self.sort_by);
        self.paging.push_offset(&mut pairs);
        self.paging.push_limit(&mut pairs);
        pairs
    }
}

impl Paginated for CustomerQuery {
    fn paging_mut(&mut self) -> &mut Paging {
        &mut self.paging
    }
}

impl CustomerQuery {
    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.keyword = Some(keyword.to_string());
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    pub fn with_order_count(mut self, min: Option<i64>, max: Option<i64>) -> Self {
        self.min_order_count = min;
        self.max_order_count = max;
        self
    }

    pub fn with_sort_by(mut self, sort_by: CustomerSortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }
}

/// Sort order for customer search results. The API defaults to `NameAsc`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CustomerSortBy {
    #[default]
    NameAsc,
    NameDesc,
    EmailAsc,
    EmailDesc,
    OrderCountAsc,
    OrderCountDesc,
}

impl std::fmt::Display for CustomerSortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CustomerSortBy::NameAsc => "NAME_ASC",
                CustomerSortBy::NameDesc => "NAME_DESC",
                CustomerSortBy::EmailAsc => "EMAIL_ASC",
                CustomerSortBy::EmailDesc => "EMAIL_DESC",
                CustomerSortBy::OrderCountAsc => "ORDER_COUNT_ASC",
                CustomerSortBy::OrderCountDesc => "ORDER_COUNT_DESC",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_query() {
        let pairs = CustomerQuery::default()
            .with_email("jane@example.com")
            .with_order_count(Some(1), None)
            .with_sort_by(CustomerSortBy::OrderCountDesc)
            .with_limit(5)
            .to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("email", "jane@example.com".to_string()),
                ("minOrderCount", "1".to_string()),
                ("sortBy", "ORDER_COUNT_DESC".to_string()),
                ("limit", "5".to_string()),
            ]
        );
    }
}
