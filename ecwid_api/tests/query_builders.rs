use ecwid_api::types::{CouponStatus, DiscountType};
use ecwid_api::{
    CategoryQuery, CouponQuery, CustomerQuery, CustomerSortBy, OrderQuery, Paginated,
    ProductQuery, ProductSortBy, Query, UriBuilder,
};

fn render(query: &impl Query) -> String {
    let mut uri = UriBuilder::new("https://example.com");
    for (name, value) in query.to_query_pairs() {
        uri.set_parameter(name, value);
    }
    uri.build()
}

#[test]
fn defaults_render_no_parameters() {
    assert_eq!(render(&ProductQuery::default()), "https://example.com");
    assert_eq!(render(&OrderQuery::default()), "https://example.com");
    assert_eq!(render(&CustomerQuery::default()), "https://example.com");
    assert_eq!(render(&CategoryQuery::default()), "https://example.com");
    assert_eq!(render(&CouponQuery::default()), "https://example.com");
}

#[test]
fn product_query_dates_and_flags() {
    let query = ProductQuery::default()
        .with_created(Some("2024-01-01"), None)
        .with_updated(None, Some("1717171717"))
        .with_sort_by(ProductSortBy::UpdatedTimeDesc)
        .with_enabled(false);
    insta::assert_snapshot!(render(&query), @"https://example.com?sortBy=UPDATED_TIME_DESC&createdFrom=2024-01-01&updatedTo=1717171717&enabled=false");
}

#[test]
fn product_query_uncategorized() {
    let query = ProductQuery::default().with_category(0).with_subcategories(false);
    insta::assert_snapshot!(render(&query), @"https://example.com?category=0&withSubcategories=false");
}

#[test]
fn order_query_full() {
    let query = OrderQuery::default()
        .with_limit(50)
        .with_offset(100)
        .with_coupon_code("SPRING10")
        .with_customer("jane@example.com")
        .with_created(Some("2024-01-01 00:00:00"), Some("2024-01-31 23:59:59"))
        .with_payment_method("PayPal")
        .with_shipping_method("Ground")
        .with_fulfillment_status("NEW")
        .with_fulfillment_status("PROCESSING");
    insta::assert_snapshot!(render(&query), @"https://example.com?limit=50&offset=100&couponCode=SPRING10&customer=jane%40example.com&createdFrom=2024-01-01%2000%3A00%3A00&createdTo=2024-01-31%2023%3A59%3A59&paymentMethod=PayPal&shippingMethod=Ground&fulfillmentStatus=NEW%2CPROCESSING");
}

#[test]
fn customer_query_full() {
    let query = CustomerQuery::default()
        .with_keyword("doe")
        .with_name("Jane Doe")
        .with_order_count(Some(2), Some(10))
        .with_sort_by(CustomerSortBy::EmailAsc)
        .with_offset(10)
        .with_limit(10);
    insta::assert_snapshot!(render(&query), @"https://example.com?keyword=doe&name=Jane%20Doe&minOrderCount=2&maxOrderCount=10&sortBy=EMAIL_ASC&offset=10&limit=10");
}

#[test]
fn coupon_query_full() {
    let query = CouponQuery::default()
        .with_code("WELCOME")
        .with_discount_type(DiscountType::Percent)
        .with_availability(CouponStatus::Expired)
        .with_limit(25);
    insta::assert_snapshot!(render(&query), @"https://example.com?code=WELCOME&discount_type=PERCENT&availability=EXPIRED&limit=25");
}

#[test]
fn category_query_hidden() {
    let query = CategoryQuery::default()
        .with_parent(9691094)
        .with_hidden_categories(true)
        .with_product_ids(true)
        .with_offset(0);
    insta::assert_snapshot!(render(&query), @"https://example.com?parent=9691094&hidden_categories=true&productIds=true&offset=0");
}
