use anyhow::Result;
use clap::{Args, ValueEnum};
use ecwid_api::{Paginated, ProductQuery, ProductSortBy, Store};

use crate::output::{
    build_product_entry_rows, build_product_rows, print, print_page_summary, OutputFormat,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ProductSort {
    Relevance,
    AddedDesc,
    AddedAsc,
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
    UpdatedAsc,
    UpdatedDesc,
}

impl From<ProductSort> for ProductSortBy {
    fn from(sort: ProductSort) -> Self {
        match sort {
            ProductSort::Relevance => ProductSortBy::Relevance,
            ProductSort::AddedDesc => ProductSortBy::AddedTimeDesc,
            ProductSort::AddedAsc => ProductSortBy::AddedTimeAsc,
            ProductSort::NameAsc => ProductSortBy::NameAsc,
            ProductSort::NameDesc => ProductSortBy::NameDesc,
            ProductSort::PriceAsc => ProductSortBy::PriceAsc,
            ProductSort::PriceDesc => ProductSortBy::PriceDesc,
            ProductSort::UpdatedAsc => ProductSortBy::UpdatedTimeAsc,
            ProductSort::UpdatedDesc => ProductSortBy::UpdatedTimeDesc,
        }
    }
}

#[derive(Args)]
pub struct ProductsArgs {
    /// Get a single product by ID
    #[arg(long)]
    pub id: Option<i64>,

    /// Search by name, description or SKU
    #[arg(long)]
    pub keyword: Option<String>,

    /// Only products in this category (0 = uncategorized)
    #[arg(long)]
    pub category: Option<i64>,

    /// Only enabled products
    #[arg(long)]
    pub enabled: bool,

    /// Only products in stock
    #[arg(long)]
    pub in_stock: bool,

    /// Sort order
    #[arg(long, value_enum)]
    pub sort_by: Option<ProductSort>,

    /// Records to skip
    #[arg(long, default_value = "0")]
    pub offset: i64,

    /// Results per page (max 100)
    #[arg(long, default_value = "20")]
    pub limit: i64,
}

pub fn run(args: &ProductsArgs, store: &Store<'_>, format: &OutputFormat) -> Result<()> {
    if let Some(id) = args.id {
        let product = store.get_product(id)?.execute()?;
        let rows = build_product_rows(std::slice::from_ref(&product));
        return print(format, &product, &rows);
    }

    let mut query = ProductQuery::default()
        .with_offset(args.offset)
        .with_limit(args.limit);

    if let Some(keyword) = &args.keyword {
        query = query.with_keyword(keyword);
    }
    if let Some(category) = args.category {
        query = query.with_category(category);
    }
    if args.enabled {
        query = query.with_enabled(true);
    }
    if args.in_stock {
        query = query.with_in_stock(true);
    }
    if let Some(sort_by) = args.sort_by {
        query = query.with_sort_by(sort_by.into());
    }

    let page = store.search_products(&query)?.execute()?;
    print_page_summary(&page, "Products");
    print(format, &page, &build_product_entry_rows(&page.items))
}
