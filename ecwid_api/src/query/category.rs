use super::{
    common::{push_opt, Paging},
    Paginated, Query,
};

/// Filters for the category list endpoint.
#[derive(Debug, Clone, Default)]
pub struct CategoryQuery {
    pub paging: Paging,
    /// Only direct children of this category. `0` lists root categories.
    pub parent: Option<i64>,
    pub hidden_categories: Option<bool>,
    /// Include the `productIds` of each category in the response.
    pub product_ids: Option<bool>,
}

impl Query for CategoryQuery {
    fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_opt(&mut pairs, "parent", &self.parent);
        push_opt(&mut pairs, "hidden_categories", &self.hidden_categories);
        push_opt(&mut pairs, "productIds", &self.product_ids);
        self.paging.push_limit(&mut pairs);
        self.paging.push_offset(&mut pairs);
        pairs
    }
}

impl Paginated for CategoryQuery {
    fn paging_mut(&mut self) -> &mut Paging {
        &mut self.paging
    }
}

impl CategoryQuery {
    pub fn with_parent(mut self, parent: i64) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_hidden_categories(mut self, hidden: bool) -> Self {
        self.hidden_categories = Some(hidden);
        self
    }

    pub fn with_product_ids(mut self, product_ids: bool) -> Self {
        self.product_ids = Some(product_ids);
        self
    }
}
