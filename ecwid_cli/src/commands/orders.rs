use anyhow::Result;
use clap::Args;
use ecwid_api::{OrderQuery, Paginated, Store};

use crate::output::{build_order_rows, print, print_page_summary, OutputFormat};

#[derive(Args)]
pub struct OrdersArgs {
    /// Get a single order by number
    #[arg(long)]
    pub number: Option<i64>,

    /// Search order contents
    #[arg(long)]
    pub keywords: Option<String>,

    /// Payment status, comma-separated (e.g. PAID,AWAITING_PAYMENT)
    #[arg(long, value_delimiter = ',')]
    pub payment_status: Vec<String>,

    /// Fulfillment status, comma-separated (e.g. NEW,PROCESSING)
    #[arg(long, value_delimiter = ',')]
    pub fulfillment_status: Vec<String>,

    /// Records to skip
    #[arg(long, default_value = "0")]
    pub offset: i64,

    /// Results per page (max 100)
    #[arg(long, default_value = "20")]
    pub limit: i64,
}

pub fn run(args: &OrdersArgs, store: &Store<'_>, format: &OutputFormat) -> Result<()> {
    if let Some(number) = args.number {
        let order = store.get_order(number)?.execute()?;
        let rows = build_order_rows(std::slice::from_ref(&order));
        return print(format, &order, &rows);
    }

    let mut query = OrderQuery::default()
        .with_offset(args.offset)
        .with_limit(args.limit);
    if let Some(keywords) = &args.keywords {
        query = query.with_keywords(keywords);
    }
    for status in &args.payment_status {
        query = query.with_payment_status(&status.to_uppercase());
    }
    for status in &args.fulfillment_status {
        query = query.with_fulfillment_status(&status.to_uppercase());
    }

    let page = store.search_orders(&query)?.execute()?;
    print_page_summary(&page, "Orders");
    print(format, &page, &build_order_rows(&page.items))
}
