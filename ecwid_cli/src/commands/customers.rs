use anyhow::Result;
use clap::{Args, ValueEnum};
use ecwid_api::{CustomerQuery, CustomerSortBy, Paginated, Store};

use crate::output::{
    build_customer_entry_rows, build_customer_rows, print, print_page_summary, OutputFormat,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CustomerSort {
    NameAsc,
    NameDesc,
    EmailAsc,
    EmailDesc,
    OrdersAsc,
    OrdersDesc,
}

impl From<CustomerSort> for CustomerSortBy {
    fn from(sort: CustomerSort) -> Self {
        match sort {
            CustomerSort::NameAsc => CustomerSortBy::NameAsc,
            CustomerSort::NameDesc => CustomerSortBy::NameDesc,
            CustomerSort::EmailAsc => CustomerSortBy::EmailAsc,
            CustomerSort::EmailDesc => CustomerSortBy::EmailDesc,
            CustomerSort::OrdersAsc => CustomerSortBy::OrderCountAsc,
            CustomerSort::OrdersDesc => CustomerSortBy::OrderCountDesc,
        }
    }
}

#[derive(Args)]
pub struct CustomersArgs {
    /// Get a single customer by ID
    #[arg(long)]
    pub id: Option<i64>,

    /// Search every customer field
    #[arg(long)]
    pub keyword: Option<String>,

    /// Filter by email
    #[arg(long)]
    pub email: Option<String>,

    /// Sort order
    #[arg(long, value_enum)]
    pub sort_by: Option<CustomerSort>,

    /// Records to skip
    #[arg(long, default_value = "0")]
    pub offset: i64,

    /// Results per page (max 100)
    #[arg(long, default_value = "20")]
    pub limit: i64,
}

pub fn run(args: &CustomersArgs, store: &Store<'_>, format: &OutputFormat) -> Result<()> {
    if let Some(id) = args.id {
        let customer = store.get_customer(id)?.execute()?;
        let rows = build_customer_rows(std::slice::from_ref(&customer));
        return print(format, &customer, &rows);
    }

    let mut query = CustomerQuery::default()
        .with_offset(args.offset)
        .with_limit(args.limit);
    if let Some(keyword) = &args.keyword {
        query = query.with_keyword(keyword);
    }
    if let Some(email) = &args.email {
        query = query.with_email(email);
    }
    if let Some(sort_by) = args.sort_by {
        query = query.with_sort_by(sort_by.into());
    }

    let page = store.search_customers(&query)?.execute()?;
    print_page_summary(&page, "Customers");
    print(format, &page, &build_customer_entry_rows(&page.items))
}
