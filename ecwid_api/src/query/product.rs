use super::{
    common::{push_opt, Paging},
    Paginated, Query,
};

/// Filters for the product search endpoint.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    pub paging: Paging,
    pub keyword: Option<String>,
    pub price_from: Option<f64>,
    pub price_to: Option<f64>,
    pub category: Option<i64>,
    pub with_subcategories: Option<bool>,
    pub sort_by: Option<ProductSortBy>,
    pub created_from: Option<String>,
    pub created_to: Option<String>,
    pub updated_from: Option<String>,
    pub updated_to: Option<String>,
    pub enabled: Option<bool>,
    pub in_stock: Option<bool>,
}

impl Query for ProductQuery {
    fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_opt(&mut pairs, "keyword", &self.keyword);
        push_opt(&mut pairs, "priceFrom", &self.price_from);
        push_opt(&mut pairs, "priceTo", &self.price_to);
        push_opt(&mut pairs, "category", &self.category);
        push_opt(&mut pairs, "withSubcategories", &self.with_subcategories);
        push_opt(&mut pairs, "sortBy", &self.sort_by);
        self.paging.push_offset(&mut pairs);
        self.paging.push_limit(&mut pairs);
        push_opt(&mut pairs, "createdFrom", &self.created_from);
        push_opt(&mut pairs, "createdTo", &self.created_to);
        push_opt(&mut pairs, "updatedFrom", &self.updated_from);
        push_opt(&mut pairs, "updatedTo", &self.updated_to);
        push_opt(&mut pairs, "enabled", &self.enabled);
        push_opt(&mut pairs, "inStock", &self.in_stock);
        pairs
    }
}

impl Paginated for ProductQuery {
    fn paging_mut(&mut self) -> &mut Paging {
        &mut self.paging
    }
}

impl ProductQuery {
    /// Full-text search over name, description and SKU.
    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.keyword = Some(keyword.to_string());
        self
    }

    pub fn with_price_range(mut self, from: Option<f64>, to: Option<f64>) -> Self {
        self.price_from = from;
        self.price_to = to;
        self
    }

    /// Restricts to one category. `0` selects products without a category.
    pub fn with_category(mut self, category: i64) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_subcategories(mut self, with_subcategories: bool) -> Self {
        self.with_subcategories = Some(with_subcategories);
        self
    }

    pub fn with_sort_by(mut self, sort_by: ProductSortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    /// Creation date bounds; dates or UNIX timestamps as the API accepts them.
    pub fn with_created(mut self, from: Option<&str>, to: Option<&str>) -> Self {
        self.created_from = from.map(str::to_string);
        self.created_to = to.map(str::to_string);
        self
    }

    pub fn with_updated(mut self, from: Option<&str>, to: Option<&str>) -> Self {
        self.updated_from = from.map(str::to_string);
        self.updated_to = to.map(str::to_string);
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn with_in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = Some(in_stock);
        self
    }
}

/// Sort order for product search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProductSortBy {
    #[default]
    Relevance,
    AddedTimeDesc,
    AddedTimeAsc,
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
    UpdatedTimeAsc,
    UpdatedTimeDesc,
}

impl std::fmt::Display for ProductSortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ProductSortBy::Relevance => "RELEVANCE",
                ProductSortBy::AddedTimeDesc => "ADDED_TIME_DESC",
                ProductSortBy::AddedTimeAsc => "ADDED_TIME_ASC",
                ProductSortBy::NameAsc => "NAME_ASC",
                ProductSortBy::NameDesc => "NAME_DESC",
                ProductSortBy::PriceAsc => "PRICE_ASC",
                ProductSortBy::PriceDesc => "PRICE_DESC",
                ProductSortBy::UpdatedTimeAsc => "UPDATED_TIME_ASC",
                ProductSortBy::UpdatedTimeDesc => "UPDATED_TIME_DESC",
            }
        )
    }
}
