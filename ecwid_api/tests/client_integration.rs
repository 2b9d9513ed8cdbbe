use std::sync::{Arc, Mutex};

use ecwid_api::transport::{ContentType, Executor, HttpEntity, HttpMethod, ResponseEnvelope};
use ecwid_api::types::{
    Category, Combination, Customer, DiscountCoupon, Field, Order, Product, ProductClass, Profile,
};
use ecwid_api::{
    endpoint, Client, CouponFilter, CouponQuery, CategoryQuery, CustomerQuery, DeletedQuery,
    Error, OrderQuery, PendingRequest, ProductQuery,
};
use reqwest::header::HeaderMap;

#[derive(Debug, Clone)]
struct Recorded {
    url: String,
    method: HttpMethod,
    body: Option<HttpEntity>,
}

type Responder = dyn Fn() -> Result<ResponseEnvelope, Error> + Send + Sync;

/// Records every call and answers with a canned response.
#[derive(Clone)]
struct Spy {
    calls: Arc<Mutex<Vec<Recorded>>>,
    respond: Arc<Responder>,
}

impl Spy {
    fn responding(body: &'static str) -> Self {
        Self {
            calls: Arc::default(),
            respond: Arc::new(move || Ok(ResponseEnvelope::with_body(body.as_bytes().to_vec()))),
        }
    }

    fn failing(status: u16, message: &'static str) -> Self {
        Self {
            calls: Arc::default(),
            respond: Arc::new(move || {
                Err(Error::Status {
                    status,
                    message: message.to_string(),
                    body: String::new(),
                })
            }),
        }
    }

    fn calls(&self) -> Vec<Recorded> {
        self.calls.lock().unwrap().clone()
    }
}

impl Executor for Spy {
    fn execute(
        &self,
        url: &str,
        method: HttpMethod,
        body: Option<&HttpEntity>,
        _headers: &HeaderMap,
    ) -> Result<ResponseEnvelope, Error> {
        self.calls.lock().unwrap().push(Recorded {
            url: url.to_string(),
            method,
            body: body.cloned(),
        });
        (self.respond)()
    }
}

fn client(spy: &Spy) -> Client {
    Client::builder()
        .base_url("https://app.ecwid.com/api/v3")
        .executor(spy.clone())
        .build()
        .unwrap()
}

fn missing<T: std::fmt::Debug>(result: Result<T, Error>) -> String {
    match result.unwrap_err() {
        Error::IllegalArgument(name) => name,
        other => panic!("expected IllegalArgument, got {:?}", other),
    }
}

#[test]
fn create_product_returns_new_id() {
    let spy = Spy::responding(r#"{"id":42}"#);
    let client = client(&spy);
    let product = Product {
        name: "Shirt".to_string().into(),
        price: Field::Value(10.0),
        ..Product::default()
    };

    let status = client
        .store(123, "abc")
        .create_product(&product)
        .unwrap()
        .execute()
        .unwrap();
    assert_eq!(status.id.value(), Some(&42));

    let calls = spy.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, HttpMethod::Post);
    assert_eq!(calls[0].url, "https://app.ecwid.com/api/v3/123/products?token=abc");
    let body = calls[0].body.as_ref().unwrap();
    assert_eq!(body.content_type(), ContentType::Json);
    let sent: serde_json::Value = serde_json::from_slice(body.body()).unwrap();
    assert_eq!(sent, serde_json::json!({"name": "Shirt", "price": 10.0}));
}

#[test]
fn not_found_is_a_status_error() {
    let spy = Spy::failing(404, "Not Found");
    let client = client(&spy);

    let err = client
        .store(123, "abc")
        .get_product(999)
        .unwrap()
        .execute()
        .unwrap_err();
    match err {
        Error::Status {
            status, message, ..
        } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Not Found");
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert_eq!(
        spy.calls()[0].url,
        "https://app.ecwid.com/api/v3/123/products/999?token=abc"
    );
}

#[test]
fn empty_body_on_object_endpoint() {
    let spy = Spy::responding("");
    let client = client(&spy);
    let err = client
        .store(123, "abc")
        .get_profile()
        .unwrap()
        .execute()
        .unwrap_err();
    assert!(matches!(err, Error::EmptyBody("JSON object")));
}

#[test]
fn list_endpoint_decodes_in_order() {
    let spy = Spy::responding(r#"[{"id":3,"sku":"A"},{"id":1,"sku":"B"}]"#);
    let client = client(&spy);
    let combinations = client
        .store(1, "t")
        .get_combinations(7)
        .unwrap()
        .execute()
        .unwrap();
    let ids: Vec<_> = combinations.iter().filter_map(|c| c.id.value().copied()).collect();
    assert_eq!(ids, vec![3, 1]);
}

#[test]
fn binary_download_passes_bytes() {
    let spy = Spy::responding("%PDF-1.4");
    let client = client(&spy);
    let bytes = client
        .store(1, "t")
        .download_product_file(7, 8)
        .unwrap()
        .execute()
        .unwrap();
    assert_eq!(bytes, b"%PDF-1.4");
}

#[test]
fn pending_requests_are_inert_until_executed() {
    let spy = Spy::responding(r#"{"deleteCount":1}"#);
    let client = client(&spy);
    let request = client.store(1, "t").delete_product(5).unwrap();
    assert!(spy.calls().is_empty());

    request.execute().unwrap();
    request.execute().unwrap();
    assert_eq!(spy.calls().len(), 2);
}

#[test]
fn missing_required_parameters_never_reach_the_executor() {
    let spy = Spy::responding("{}");
    let client = client(&spy);
    let store = client.store(1, "t");

    assert_eq!(missing(store.get_product(0)), "productId");
    assert_eq!(missing(store.get_coupon("")), "code");
    assert_eq!(missing(store.get_combination(7, 0)), "combinationId");
    assert_eq!(missing(store.update_customer(0, &Customer::default())), "customerId");
    assert_eq!(missing(store.upload_product_image(7, Vec::new())), "body");
    assert_eq!(missing(store.upload_store_logo(Vec::new())), "body");
    assert_eq!(missing(store.upload_product_file(7, "", None, b"x".to_vec())), "fileName");
    assert_eq!(missing(store.upload_product_file(7, "a.pdf", None, Vec::new())), "body");
    assert_eq!(
        missing(store.delete_order_item_option_file(1042, 501, "", 9)),
        "optionName"
    );
    assert_eq!(
        missing(store.upload_order_item_option_file(1042, 0, "", "", Vec::new())),
        "itemId"
    );

    let no_store = client.store(0, "t");
    assert_eq!(missing(no_store.get_product(0)), "storeId");
    assert_eq!(missing(no_store.get_profile()), "storeId");
    assert_eq!(missing(no_store.search_products(&ProductQuery::default())), "storeId");

    assert!(spy.calls().is_empty());
}

#[test]
fn illegal_argument_message() {
    let spy = Spy::responding("{}");
    let client = client(&spy);
    let err = client.store(1, "t").get_order(0).unwrap_err();
    assert_eq!(err.to_string(), "No parameter orderNumber is set");

    let err = client.store(1, "t").upload_store_logo(Vec::new()).unwrap_err();
    assert_eq!(err.to_string(), "No request body");
}

#[test]
fn token_leads_and_empty_token_is_omitted() {
    let spy = Spy::responding("{}");
    let client = client(&spy);

    let query = ProductQuery::default().with_keyword("cap").with_enabled(true);
    let request = client.store(1, "abc").search_products(&query).unwrap();
    insta::assert_snapshot!(request.url(), @"https://app.ecwid.com/api/v3/1/products?token=abc&keyword=cap&enabled=true");

    let request = client.store(1, "").search_products(&query).unwrap();
    insta::assert_snapshot!(request.url(), @"https://app.ecwid.com/api/v3/1/products?keyword=cap&enabled=true");

    let request = client.store(1, "").get_profile().unwrap();
    assert_eq!(request.url(), "https://app.ecwid.com/api/v3/1/profile");
}

#[test]
fn path_segments_are_encoded() {
    let spy = Spy::responding("{}");
    let client = client(&spy);
    let request = client.store(1, "t").get_coupon("SPRING 10%/A").unwrap();
    insta::assert_snapshot!(request.url(), @"https://app.ecwid.com/api/v3/1/discount_coupons/SPRING%2010%25%2FA?token=t");

    let request = client
        .store(1, "t")
        .clear_order_item_option_files(1042, 501, "Gift note")
        .unwrap();
    insta::assert_snapshot!(request.url(), @"https://app.ecwid.com/api/v3/1/orders/1042/items/501/options/Gift%20note/files?token=t");
}

#[test]
fn upload_query_and_body() {
    let spy = Spy::responding(r#"{"id":11}"#);
    let client = client(&spy);
    let request = client
        .store(1, "t")
        .upload_product_file(7, "manual.pdf", Some("User manual"), b"%PDF".to_vec())
        .unwrap();
    insta::assert_snapshot!(request.url(), @"https://app.ecwid.com/api/v3/1/products/7/files?token=t&description=User%20manual&fileName=manual.pdf");

    let body = request.body().unwrap();
    assert_eq!(body.content_type(), ContentType::Binary);
    assert_eq!(body.body(), b"%PDF");

    let status = request.execute().unwrap();
    assert_eq!(status.id.value(), Some(&11));
}

#[test]
fn boolean_and_list_parameters() {
    let spy = Spy::responding("{}");
    let client = client(&spy);
    let store = client.store(1, "t");

    let request = store
        .search_categories(&CategoryQuery::default().with_parent(0).with_product_ids(false))
        .unwrap();
    insta::assert_snapshot!(request.url(), @"https://app.ecwid.com/api/v3/1/categories?token=t&parent=0&productIds=false");

    let filter = CouponFilter::default()
        .with_discount_type(ecwid_api::types::DiscountType::Shipping)
        .with_availability(ecwid_api::types::CouponStatus::Active)
        .with_availability(ecwid_api::types::CouponStatus::Paused);
    let request = store.delete_coupons(&filter).unwrap();
    assert_eq!(request.method(), HttpMethod::Delete);
    insta::assert_snapshot!(request.url(), @"https://app.ecwid.com/api/v3/1/discount_coupons?token=t&discount_type=SHIPPING&availability=ACTIVE%2CPAUSED");
}

/// Builds one request per endpoint with ids of 7 and checks each against
/// its catalogue entry.
#[test]
fn every_endpoint_is_bound() {
    fn check<D: ecwid_api::Decode>(seen: &mut Vec<&'static str>, request: PendingRequest<D>) {
        let endpoint = request.endpoint();
        let expected = endpoint
            .path
            .replace("{storeId}", "1")
            .split('/')
            .map(|s| if s.starts_with('{') { "7" } else { s })
            .collect::<Vec<_>>()
            .join("/");
        let url = request.url();
        let path = url
            .strip_prefix("https://app.ecwid.com/api/v3")
            .and_then(|rest| rest.split('?').next())
            .unwrap();
        assert_eq!(path, expected, "{}", endpoint.name);
        assert_eq!(request.method(), endpoint.method, "{}", endpoint.name);
        assert_eq!(D::SHAPE, endpoint.shape, "{}", endpoint.name);
        seen.push(endpoint.name);
    }

    let spy = Spy::responding("{}");
    let client = client(&spy);
    let s = client.store(1, "t");
    let data = || b"data".to_vec();
    let mut seen = Vec::new();

    check(&mut seen, s.deleted_products(&DeletedQuery::default()).unwrap());
    check(&mut seen, s.deleted_customers(&DeletedQuery::default()).unwrap());
    check(&mut seen, s.deleted_coupons(&DeletedQuery::default()).unwrap());
    check(&mut seen, s.deleted_orders(&DeletedQuery::default()).unwrap());

    check(&mut seen, s.search_coupons(&CouponQuery::default()).unwrap());
    check(&mut seen, s.get_coupon("7").unwrap());
    check(&mut seen, s.delete_coupons(&CouponFilter::default()).unwrap());
    check(&mut seen, s.update_coupon("7", &DiscountCoupon::default()).unwrap());
    check(&mut seen, s.create_coupon(&DiscountCoupon::default()).unwrap());

    check(&mut seen, s.get_product(7).unwrap());
    check(&mut seen, s.search_products(&ProductQuery::default()).unwrap());
    check(&mut seen, s.create_product(&Product::default()).unwrap());
    check(&mut seen, s.update_product(7, &Product::default()).unwrap());
    check(&mut seen, s.delete_product(7).unwrap());
    check(&mut seen, s.upload_product_image(7, data()).unwrap());
    check(&mut seen, s.delete_product_image(7).unwrap());
    check(&mut seen, s.upload_product_file(7, "f", None, data()).unwrap());
    check(&mut seen, s.download_product_file(7, 7).unwrap());
    check(&mut seen, s.delete_product_file(7, 7).unwrap());
    check(&mut seen, s.clear_product_files(7).unwrap());
    check(&mut seen, s.upload_gallery_image(7, None, data()).unwrap());
    check(&mut seen, s.delete_gallery_image(7, 7).unwrap());
    check(&mut seen, s.clear_gallery(7).unwrap());

    check(&mut seen, s.get_combinations(7).unwrap());
    check(&mut seen, s.get_combination(7, 7).unwrap());
    check(&mut seen, s.create_combination(7, &Combination::default()).unwrap());
    check(&mut seen, s.update_combination(7, 7, &Combination::default()).unwrap());
    check(&mut seen, s.delete_combination(7, 7).unwrap());
    check(&mut seen, s.clear_combinations(7).unwrap());
    check(&mut seen, s.upload_combination_image(7, 7, data()).unwrap());
    check(&mut seen, s.delete_combination_image(7, 7).unwrap());

    check(&mut seen, s.get_category(7).unwrap());
    check(&mut seen, s.search_categories(&CategoryQuery::default()).unwrap());
    check(&mut seen, s.create_category(&Category::default()).unwrap());
    check(&mut seen, s.update_category(7, &Category::default()).unwrap());
    check(&mut seen, s.delete_category(7).unwrap());
    check(&mut seen, s.upload_category_image(7, data()).unwrap());
    check(&mut seen, s.delete_category_image(7).unwrap());

    check(&mut seen, s.get_classes().unwrap());
    check(&mut seen, s.get_class(7).unwrap());
    check(&mut seen, s.create_class(&ProductClass::default()).unwrap());
    check(&mut seen, s.update_class(7, &ProductClass::default()).unwrap());
    check(&mut seen, s.delete_class(7).unwrap());

    check(&mut seen, s.search_orders(&OrderQuery::default()).unwrap());
    check(&mut seen, s.get_order(7).unwrap());
    check(&mut seen, s.create_order(&Order::default()).unwrap());
    check(&mut seen, s.update_order(7, &Order::default()).unwrap());
    check(&mut seen, s.delete_order(7).unwrap());
    check(&mut seen, s.upload_order_item_option_file(7, 7, "7", "f", data()).unwrap());
    check(&mut seen, s.delete_order_item_option_file(7, 7, "7", 7).unwrap());
    check(&mut seen, s.clear_order_item_option_files(7, 7, "7").unwrap());

    check(&mut seen, s.get_profile().unwrap());
    check(&mut seen, s.update_profile(&Profile::default()).unwrap());
    check(&mut seen, s.upload_store_logo(data()).unwrap());
    check(&mut seen, s.delete_store_logo().unwrap());
    check(&mut seen, s.upload_invoice_logo(data()).unwrap());
    check(&mut seen, s.delete_invoice_logo().unwrap());
    check(&mut seen, s.upload_email_logo(data()).unwrap());
    check(&mut seen, s.delete_email_logo().unwrap());
    check(&mut seen, s.get_latest_stats().unwrap());

    check(&mut seen, s.get_customer(7).unwrap());
    check(&mut seen, s.search_customers(&CustomerQuery::default()).unwrap());
    check(&mut seen, s.create_customer(&Customer::default()).unwrap());
    check(&mut seen, s.update_customer(7, &Customer::default()).unwrap());
    check(&mut seen, s.delete_customer(7).unwrap());

    let expected: Vec<_> = endpoint::ALL.iter().map(|e| e.name).collect();
    assert_eq!(seen, expected);
    assert!(spy.calls().is_empty());
}
