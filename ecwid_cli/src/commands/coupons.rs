use anyhow::Result;
use clap::Args;
use ecwid_api::{CouponQuery, Paginated, Store};

use crate::output::{build_coupon_rows, print, print_page_summary, OutputFormat};

#[derive(Args)]
pub struct CouponsArgs {
    /// Get a single coupon by code
    #[arg(long)]
    pub code: Option<String>,

    /// Records to skip
    #[arg(long, default_value = "0")]
    pub offset: i64,

    /// Results per page (max 100)
    #[arg(long, default_value = "20")]
    pub limit: i64,
}

pub fn run(args: &CouponsArgs, store: &Store<'_>, format: &OutputFormat) -> Result<()> {
    if let Some(code) = &args.code {
        let coupon = store.get_coupon(code)?.execute()?;
        let rows = build_coupon_rows(std::slice::from_ref(&coupon));
        return print(format, &coupon, &rows);
    }

    let query = CouponQuery::default()
        .with_offset(args.offset)
        .with_limit(args.limit);
    let page = store.search_coupons(&query)?.execute()?;
    print_page_summary(&page, "Coupons");
    print(format, &page, &build_coupon_rows(&page.items))
}
