use anyhow::Result;
use ecwid_api::types::{
    Category, Customer, CustomerSearchEntry, DeletedCoupon, DeletedEntity, DiscountCoupon, Field,
    LatestStats, Order, Page, Product, ProductEntry, Profile,
};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => anyhow::bail!(
                "unknown output format '{}', expected table, json, csv or markdown",
                other
            ),
        }
    }
}

#[derive(Tabled, Serialize)]
pub struct ProductRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "SKU")]
    #[serde(rename = "SKU")]
    sku: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    #[serde(rename = "Price")]
    price: String,
    #[tabled(rename = "Stock")]
    #[serde(rename = "Stock")]
    stock: String,
    #[tabled(rename = "Enabled")]
    #[serde(rename = "Enabled")]
    enabled: String,
}

#[derive(Tabled, Serialize)]
pub struct CategoryRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Parent")]
    #[serde(rename = "Parent")]
    parent: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Products")]
    #[serde(rename = "Products")]
    products: String,
    #[tabled(rename = "Enabled")]
    #[serde(rename = "Enabled")]
    enabled: String,
}

#[derive(Tabled, Serialize)]
pub struct OrderRow {
    #[tabled(rename = "Number")]
    #[serde(rename = "Number")]
    number: String,
    #[tabled(rename = "Created")]
    #[serde(rename = "Created")]
    created: String,
    #[tabled(rename = "Email")]
    #[serde(rename = "Email")]
    email: String,
    #[tabled(rename = "Total")]
    #[serde(rename = "Total")]
    total: String,
    #[tabled(rename = "Payment")]
    #[serde(rename = "Payment")]
    payment: String,
    #[tabled(rename = "Fulfillment")]
    #[serde(rename = "Fulfillment")]
    fulfillment: String,
}

#[derive(Tabled, Serialize)]
pub struct CustomerRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    #[serde(rename = "Email")]
    email: String,
    #[tabled(rename = "Orders")]
    #[serde(rename = "Orders")]
    orders: String,
}

#[derive(Tabled, Serialize)]
pub struct CouponRow {
    #[tabled(rename = "Code")]
    #[serde(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    discount_type: String,
    #[tabled(rename = "Discount")]
    #[serde(rename = "Discount")]
    discount: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Orders")]
    #[serde(rename = "Orders")]
    orders: String,
}

#[derive(Tabled, Serialize)]
pub struct DeletedRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Deleted")]
    #[serde(rename = "Deleted")]
    date: String,
}

/// Two-column rows for single records such as the store profile.
#[derive(Tabled, Serialize)]
pub struct PropertyRow {
    #[tabled(rename = "Property")]
    #[serde(rename = "Property")]
    property: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
}

// -- Field formatting --

fn text(field: &Field<String>) -> String {
    field.value().cloned().unwrap_or_default()
}

fn number(field: &Field<i64>) -> String {
    field.value().map(|v| v.to_string()).unwrap_or_default()
}

fn flag(field: &Field<bool>) -> String {
    match field.value() {
        Some(true) => "yes".to_string(),
        Some(false) => "no".to_string(),
        None => String::new(),
    }
}

fn format_money(field: &Field<f64>) -> String {
    field.value().map(|v| format!("{:.2}", v)).unwrap_or_default()
}

fn stock(unlimited: &Field<bool>, quantity: &Field<i64>) -> String {
    if unlimited.value() == Some(&true) {
        "unlimited".to_string()
    } else {
        number(quantity)
    }
}

fn property(name: &str, value: String) -> PropertyRow {
    PropertyRow {
        property: name.to_string(),
        value,
    }
}

// -- Row builders --

pub fn build_product_entry_rows(products: &[ProductEntry]) -> Vec<ProductRow> {
    products
        .iter()
        .map(|p| ProductRow {
            id: number(&p.id),
            sku: text(&p.sku),
            name: text(&p.name),
            price: format_money(&p.price),
            stock: stock(&p.unlimited, &p.quantity),
            enabled: flag(&p.enabled),
        })
        .collect()
}

pub fn build_product_rows(products: &[Product]) -> Vec<ProductRow> {
    products
        .iter()
        .map(|p| ProductRow {
            id: number(&p.id),
            sku: text(&p.sku),
            name: text(&p.name),
            price: format_money(&p.price),
            stock: stock(&p.unlimited, &p.quantity),
            enabled: flag(&p.enabled),
        })
        .collect()
}

pub fn build_category_rows(categories: &[Category]) -> Vec<CategoryRow> {
    categories
        .iter()
        .map(|c| CategoryRow {
            id: number(&c.id),
            parent: number(&c.parent_id),
            name: text(&c.name),
            products: number(&c.product_count),
            enabled: flag(&c.enabled),
        })
        .collect()
}

pub fn build_order_rows(orders: &[Order]) -> Vec<OrderRow> {
    orders
        .iter()
        .map(|o| OrderRow {
            number: number(&o.order_number),
            created: text(&o.create_date),
            email: text(&o.email),
            total: format_money(&o.total),
            payment: text(&o.payment_status),
            fulfillment: text(&o.fulfillment_status),
        })
        .collect()
}

pub fn build_customer_entry_rows(customers: &[CustomerSearchEntry]) -> Vec<CustomerRow> {
    customers
        .iter()
        .map(|c| CustomerRow {
            id: number(&c.id),
            name: text(&c.name),
            email: text(&c.email),
            orders: number(&c.total_order_count),
        })
        .collect()
}

pub fn build_customer_rows(customers: &[Customer]) -> Vec<CustomerRow> {
    customers
        .iter()
        .map(|c| CustomerRow {
            id: number(&c.id),
            name: c
                .billing_person
                .value()
                .map(|p| text(&p.name))
                .unwrap_or_default(),
            email: text(&c.email),
            orders: String::new(),
        })
        .collect()
}

pub fn build_coupon_rows(coupons: &[DiscountCoupon]) -> Vec<CouponRow> {
    coupons
        .iter()
        .map(|c| CouponRow {
            code: text(&c.code),
            name: text(&c.name),
            discount_type: c
                .discount_type
                .value()
                .map(|t| t.to_string())
                .unwrap_or_default(),
            discount: c.discount.value().map(|d| d.to_string()).unwrap_or_default(),
            status: c.status.value().map(|s| s.to_string()).unwrap_or_default(),
            orders: number(&c.order_count),
        })
        .collect()
}

pub fn build_deleted_rows(entities: &[DeletedEntity]) -> Vec<DeletedRow> {
    entities
        .iter()
        .map(|e| DeletedRow {
            id: number(&e.id),
            date: text(&e.date),
        })
        .collect()
}

pub fn build_deleted_coupon_rows(coupons: &[DeletedCoupon]) -> Vec<DeletedRow> {
    coupons
        .iter()
        .map(|c| DeletedRow {
            id: text(&c.code),
            date: text(&c.date),
        })
        .collect()
}

pub fn build_profile_rows(profile: &Profile) -> Vec<PropertyRow> {
    let mut rows = Vec::new();
    if let Some(general) = profile.general_info.value() {
        rows.push(property("Store ID", number(&general.store_id)));
        rows.push(property("Store URL", text(&general.store_url)));
    }
    if let Some(settings) = profile.settings.value() {
        rows.push(property("Store name", text(&settings.store_name)));
        rows.push(property("Closed", flag(&settings.closed)));
    }
    if let Some(account) = profile.account.value() {
        rows.push(property("Account", text(&account.account_name)));
        rows.push(property("Account email", text(&account.account_email)));
    }
    if let Some(company) = profile.company.value() {
        rows.push(property("Company", text(&company.company_name)));
        rows.push(property("Country", text(&company.country_code)));
    }
    if let Some(formats) = profile.formats_and_units.value() {
        rows.push(property("Currency", text(&formats.currency)));
        rows.push(property("Weight unit", text(&formats.weight_unit)));
    }
    if let Some(languages) = profile.languages.value() {
        let enabled = languages.enabled_languages.value().cloned().unwrap_or_default();
        rows.push(property("Languages", enabled.join(", ")));
    }
    rows
}

pub fn build_stats_rows(stats: &LatestStats) -> Vec<PropertyRow> {
    vec![
        property("Products updated", text(&stats.products_updated)),
        property("Orders updated", text(&stats.orders_updated)),
        property("Profile updated", text(&stats.profile_updated)),
    ]
}

// -- Output --

pub fn print_table<T: Tabled>(rows: &[T]) {
    println!("{}", Table::new(rows));
}

pub fn print_markdown<T: Tabled>(rows: &[T]) {
    let mut table = Table::new(rows);
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_csv<T: Serialize>(rows: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_json<T: serde::Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// Prints `rows` in the selected format. JSON output prints `raw`, the
/// API's own payload, instead of the flattened rows.
pub fn print<T, R>(format: &OutputFormat, raw: &R, rows: &[T]) -> Result<()>
where
    T: Tabled + Serialize,
    R: Serialize + ?Sized,
{
    match format {
        OutputFormat::Table => print_table(rows),
        OutputFormat::Json => print_json(raw),
        OutputFormat::Csv => print_csv(rows)?,
        OutputFormat::Markdown => print_markdown(rows),
    }
    Ok(())
}

/// Paging summary, written to stderr so it never mixes with CSV or JSON.
pub fn print_page_summary<T>(page: &Page<T>, noun: &str) {
    if page.count == 0 {
        eprintln!("No {} found ({} total)", noun, page.total);
    } else {
        eprintln!(
            "{} {}-{} of {}",
            noun,
            page.offset + 1,
            page.offset + page.count,
            page.total
        );
    }
}
