use ecwid_api::types::{
    Combination, CouponSearchResult, CouponStatus, DeletedCouponsResponse, DiscountType, Field,
    Order, PriceModifierType, Product, ProductSearchResult, Profile,
};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_product_full() {
    let json = load_fixture("product.json");
    let product: Product = serde_json::from_str(&json).unwrap();

    assert_eq!(product.id, Field::Value(66821181));
    assert_eq!(product.sku.value().map(String::as_str), Some("TSHIRT-BLUE"));
    assert_eq!(product.price, Field::Value(19.99));
    assert_eq!(product.wholesale_prices.value().unwrap().len(), 2);
    assert_eq!(
        product.category_ids,
        Field::Value(vec![9691094, 9691095])
    );

    let choices = product.options.value().unwrap()[0].choices.value().unwrap();
    assert_eq!(choices[1].text.value().map(String::as_str), Some("XL"));
    assert_eq!(
        choices[1].price_modifier_type,
        Field::Value(PriceModifierType::Percent)
    );

    let favorites = product.favorites.value().unwrap();
    assert_eq!(favorites.displayed_count.value().map(String::as_str), Some("4k"));
    assert_eq!(product.files.value().unwrap()[0].size, Field::Value(10240));

    // Present but empty, explicit null and missing stay distinct.
    assert_eq!(product.combinations, Field::Value(vec![]));
    assert!(product.image_url.is_null());
    assert!(product.small_thumbnail_url.is_absent());
}

#[test]
fn deserialize_product_search() {
    let json = load_fixture("products_search.json");
    let page: ProductSearchResult = serde_json::from_str(&json).unwrap();
    assert_eq!(page.total, 57);
    assert_eq!(page.count, 2);
    assert!(page.has_more());
    assert_eq!(page.next_offset(), 2);

    let entry = &page.items[0];
    assert_eq!(entry.description_truncated, Field::Value(true));
    let combination = entry.default_combination.value().unwrap();
    assert_eq!(
        combination.combination.value().unwrap()[0].value.value().map(String::as_str),
        Some("M")
    );
    assert!(page.items[1].quantity.is_absent());
    assert_eq!(page.items[1].price, Field::Value(8.0));
}

#[test]
fn deserialize_order() {
    let json = load_fixture("order.json");
    let order: Order = serde_json::from_str(&json).unwrap();
    assert_eq!(order.order_number, Field::Value(1042));
    assert_eq!(order.payment_status.value().map(String::as_str), Some("PAID"));

    let item = &order.items.value().unwrap()[0];
    assert_eq!(item.quantity, Field::Value(2));
    assert_eq!(
        item.selected_options.value().unwrap()[0].kind.value().map(String::as_str),
        Some("CHOICE")
    );

    let billing = order.billing_person.value().unwrap();
    assert_eq!(billing.country_code.value().map(String::as_str), Some("US"));
    assert_eq!(
        order.additional_info.value().unwrap()["google_customer_id"],
        "123.456"
    );
    assert!(order.payment_params.is_null());
    assert!(order.discount_coupon.is_absent());
}

#[test]
fn deserialize_profile() {
    let json = load_fixture("profile.json");
    let profile: Profile = serde_json::from_str(&json).unwrap();
    let general = profile.general_info.value().unwrap();
    assert_eq!(general.store_id, Field::Value(1003));
    assert_eq!(
        general.starter_site.value().unwrap().ecwid_subdomain.value().map(String::as_str),
        Some("acme")
    );

    let tax = &profile.taxes.value().unwrap()[0];
    assert_eq!(tax.rules.value().unwrap()[0].tax, Field::Value(20.0));
    assert_eq!(
        profile.zones.value().unwrap()[0].country_codes,
        Field::Value(vec!["FR".to_string(), "DE".to_string()])
    );
    assert_eq!(
        profile.business_registration_id.value().unwrap().value.value().map(String::as_str),
        Some("FR123")
    );
}

#[test]
fn deserialize_combinations() {
    let json = load_fixture("combinations.json");
    let combinations: Vec<Combination> = serde_json::from_str(&json).unwrap();
    assert_eq!(combinations.len(), 2);
    assert_eq!(combinations[1].unlimited, Field::Value(true));
    assert!(combinations[1].price.is_absent());
}

#[test]
fn deserialize_deleted_coupons() {
    let json = load_fixture("deleted_coupons.json");
    let page: DeletedCouponsResponse = serde_json::from_str(&json).unwrap();
    assert!(!page.has_more());
    let codes: Vec<_> = page
        .items
        .iter()
        .filter_map(|c| c.code.value().cloned())
        .collect();
    assert_eq!(codes, vec!["SPRING10", "WELCOME"]);
}

#[test]
fn product_round_trip_keeps_only_set_fields() {
    let json = load_fixture("product.json");
    let product: Product = serde_json::from_str(&json).unwrap();
    let encoded = serde_json::to_string(&product).unwrap();
    let decoded: Product = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded, product);
    assert!(decoded.small_thumbnail_url.is_absent());
    assert!(decoded.image_url.is_null());
}

#[test]
fn deserialize_coupon_page_with_unlisted_discount_type() {
    let json = load_fixture("coupons_search.json");
    let page: CouponSearchResult = serde_json::from_str(&json).unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(
        page.items[0].discount_type,
        Field::Value(DiscountType::PercentAndShipping)
    );
    assert_eq!(
        page.items[1].discount_type,
        Field::Value(DiscountType::Other("GIFT_WRAP".to_string()))
    );
    assert_eq!(page.items[1].status, Field::Value(CouponStatus::Paused));
}
