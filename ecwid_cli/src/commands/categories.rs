use anyhow::Result;
use clap::Args;
use ecwid_api::{CategoryQuery, Paginated, Store};

use crate::output::{build_category_rows, print, print_page_summary, OutputFormat};

#[derive(Args)]
pub struct CategoriesArgs {
    /// Get a single category by ID
    #[arg(long)]
    pub id: Option<i64>,

    /// Only direct children of this category (0 = root categories)
    #[arg(long)]
    pub parent: Option<i64>,

    /// Include disabled categories
    #[arg(long)]
    pub hidden: bool,

    /// Records to skip
    #[arg(long, default_value = "0")]
    pub offset: i64,

    /// Results per page (max 100)
    #[arg(long, default_value = "20")]
    pub limit: i64,
}

pub fn run(args: &CategoriesArgs, store: &Store<'_>, format: &OutputFormat) -> Result<()> {
    if let Some(id) = args.id {
        let category = store.get_category(id)?.execute()?;
        let rows = build_category_rows(std::slice::from_ref(&category));
        return print(format, &category, &rows);
    }

    let mut query = CategoryQuery::default()
        .with_offset(args.offset)
        .with_limit(args.limit);
    if let Some(parent) = args.parent {
        query = query.with_parent(parent);
    }
    if args.hidden {
        query = query.with_hidden_categories(true);
    }

    let page = store.search_categories(&query)?.execute()?;
    print_page_summary(&page, "Categories");
    print(format, &page, &build_category_rows(&page.items))
}
