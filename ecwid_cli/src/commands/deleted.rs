use anyhow::Result;
use clap::{Args, ValueEnum};
use ecwid_api::{DeletedQuery, Paginated, Store};

use crate::output::{
    build_deleted_coupon_rows, build_deleted_rows, print, print_page_summary, OutputFormat,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum DeletedKind {
    Products,
    Customers,
    Orders,
    Coupons,
}

#[derive(Args)]
pub struct DeletedArgs {
    /// Entity type to list
    #[arg(value_enum)]
    pub kind: DeletedKind,

    /// Deleted on or after this date (YYYY-MM-DD or UNIX timestamp)
    #[arg(long)]
    pub from_date: Option<String>,

    /// Deleted on or before this date
    #[arg(long)]
    pub to_date: Option<String>,

    /// Records to skip
    #[arg(long, default_value = "0")]
    pub offset: i64,

    /// Results per page (max 100)
    #[arg(long, default_value = "100")]
    pub limit: i64,
}

pub fn run(args: &DeletedArgs, store: &Store<'_>, format: &OutputFormat) -> Result<()> {
    let mut query = DeletedQuery::default()
        .with_offset(args.offset)
        .with_limit(args.limit);
    if let Some(from) = &args.from_date {
        query = query.with_from_date(from);
    }
    if let Some(to) = &args.to_date {
        query = query.with_to_date(to);
    }

    let page = match args.kind {
        DeletedKind::Products => store.deleted_products(&query)?.execute()?,
        DeletedKind::Customers => store.deleted_customers(&query)?.execute()?,
        DeletedKind::Orders => store.deleted_orders(&query)?.execute()?,
        DeletedKind::Coupons => {
            let page = store.deleted_coupons(&query)?.execute()?;
            print_page_summary(&page, "Deleted coupons");
            return print(format, &page, &build_deleted_coupon_rows(&page.items));
        }
    };
    print_page_summary(&page, "Deleted records");
    print(format, &page, &build_deleted_rows(&page.items))
}
