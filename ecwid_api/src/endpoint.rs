//! The endpoint catalogue and the generic routine that turns one catalogue
//! entry plus call arguments into a [`PendingRequest`].
//!
//! Each typed method on [`crate::Store`] binds to exactly one [`Endpoint`]
//! constant. The constant is the single source of the verb, the path
//! template, the accepted query parameters, the body kind and the result
//! shape; [`ALL`] lists them for table-driven inspection.

use crate::{
    client::Client,
    errors::BODY,
    query::Query,
    request::{Decode, PendingRequest, Shape},
    transport::{HttpEntity, HttpMethod},
    uri::UriBuilder,
    Error,
};

/// Request body an endpoint takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    None,
    /// A DTO serialized as JSON.
    Json,
    /// Raw bytes sent as `application/octet-stream`.
    Upload,
}

/// Static description of one remote operation.
#[derive(Debug, PartialEq, Eq)]
pub struct Endpoint {
    /// Operation name, used in logs.
    pub name: &'static str,
    pub method: HttpMethod,
    /// Path template relative to the API base, e.g.
    /// `/{storeId}/products/{productId}`.
    pub path: &'static str,
    /// Query parameters the operation accepts, besides `token`.
    pub query: &'static [&'static str],
    /// Subset of `query` that must be set.
    pub required_query: &'static [&'static str],
    pub body: BodyKind,
    pub shape: Shape,
}

impl Endpoint {
    /// Names of the `{placeholders}` in the path template, left to right.
    pub fn path_params(&self) -> impl Iterator<Item = &'static str> {
        self.path.split('/').filter_map(placeholder)
    }
}

fn placeholder(segment: &str) -> Option<&str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}

fn missing(name: &str) -> Error {
    Error::IllegalArgument(name.to_string())
}

/// A value usable as a path segment. Zero ids and empty strings count as
/// not set.
pub(crate) trait PathValue {
    fn into_segment(self) -> Option<String>;
}

impl PathValue for u64 {
    fn into_segment(self) -> Option<String> {
        (self != 0).then(|| self.to_string())
    }
}

impl PathValue for i64 {
    fn into_segment(self) -> Option<String> {
        (self != 0).then(|| self.to_string())
    }
}

impl PathValue for &str {
    fn into_segment(self) -> Option<String> {
        (!self.is_empty()).then(|| self.to_string())
    }
}

/// Arguments collected for one endpoint call, validated by [`Call::build`].
pub(crate) struct Call<'a> {
    client: &'a Client,
    endpoint: &'static Endpoint,
    token: &'a str,
    path: Vec<(&'static str, Option<String>)>,
    query: Vec<(&'static str, String)>,
    required: Vec<(&'static str, Option<String>)>,
    body: Option<Result<HttpEntity, Error>>,
}

impl<'a> Call<'a> {
    pub(crate) fn new(
        client: &'a Client,
        endpoint: &'static Endpoint,
        store_id: u64,
        token: &'a str,
    ) -> Self {
        Self {
            client,
            endpoint,
            token,
            path: vec![("storeId", store_id.into_segment())],
            query: Vec::new(),
            required: Vec::new(),
            body: None,
        }
    }

    pub(crate) fn path(mut self, name: &'static str, value: impl PathValue) -> Self {
        self.path.push((name, value.into_segment()));
        self
    }

    pub(crate) fn query(mut self, query: &impl Query) -> Self {
        self.query.extend(query.to_query_pairs());
        self
    }

    /// An optional query parameter outside any query builder.
    pub(crate) fn optional(mut self, name: &'static str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.query.push((name, value.to_string()));
        }
        self
    }

    /// A query parameter that must be non-empty.
    pub(crate) fn required(mut self, name: &'static str, value: &str) -> Self {
        self.required
            .push((name, (!value.is_empty()).then(|| value.to_string())));
        self
    }

    pub(crate) fn json<T: serde::Serialize + ?Sized>(mut self, body: &T) -> Self {
        self.body = Some(HttpEntity::json(body));
        self
    }

    /// Binary upload. An empty payload leaves the body unset.
    pub(crate) fn upload(mut self, data: Vec<u8>) -> Self {
        if !data.is_empty() {
            self.body = Some(Ok(HttpEntity::binary(data)));
        }
        self
    }

    /// Validates the arguments and assembles the pending request.
    ///
    /// Checks run in order: path parameters left to right (`storeId`
    /// first), required query parameters, then the body. The first missing
    /// one is reported. No I/O happens here.
    pub(crate) fn build<D: Decode>(self) -> Result<PendingRequest<D>, Error> {
        let endpoint = self.endpoint;
        debug_assert_eq!(D::SHAPE, endpoint.shape, "decoder mismatch for {}", endpoint.name);

        let mut path = String::with_capacity(endpoint.path.len() + 16);
        for segment in endpoint.path.split('/').skip(1) {
            path.push('/');
            match placeholder(segment) {
                Some(name) => {
                    let value = self
                        .path
                        .iter()
                        .find(|(n, _)| *n == name)
                        .and_then(|(_, v)| v.as_deref())
                        .ok_or_else(|| missing(name))?;
                    path.push_str(&urlencoding::encode(value));
                }
                None => path.push_str(segment),
            }
        }

        for (name, value) in &self.required {
            if value.is_none() {
                return Err(missing(name));
            }
        }

        let body = match (endpoint.body, self.body) {
            (BodyKind::None, _) => None,
            (_, Some(entity)) => Some(entity?),
            (_, None) => return Err(missing(BODY)),
        };

        let mut uri = UriBuilder::new(format!("{}{}", self.client.base_url(), path));
        if !self.token.is_empty() {
            uri.set_parameter("token", self.token);
        }
        let required = self
            .required
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (name, v)));
        for (name, value) in self.query.into_iter().chain(required) {
            debug_assert!(
                endpoint.query.contains(&name),
                "{} does not accept {}",
                endpoint.name,
                name
            );
            uri.set_parameter(name, value);
        }

        tracing::debug!("Built {} {}", endpoint.method, endpoint.name);
        Ok(PendingRequest::new(
            self.client.executor(),
            endpoint,
            uri.build(),
            body,
        ))
    }
}

pub const DELETED_PRODUCTS: Endpoint = Endpoint {
    name: "deletedProducts",
    method: HttpMethod::Get,
    path: "/{storeId}/products/deleted",
    query: &["from_date", "to_date", "offset", "limit"],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const DELETED_CUSTOMERS: Endpoint = Endpoint {
    name: "deletedCustomers",
    method: HttpMethod::Get,
    path: "/{storeId}/customers/deleted",
    query: &["from_date", "to_date", "offset", "limit"],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const DELETED_COUPONS: Endpoint = Endpoint {
    name: "deletedCoupons",
    method: HttpMethod::Get,
    path: "/{storeId}/discount_coupons/deleted",
    query: &["from_date", "to_date", "offset", "limit"],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const DELETED_ORDERS: Endpoint = Endpoint {
    name: "deletedOrders",
    method: HttpMethod::Get,
    path: "/{storeId}/orders/deleted",
    query: &["from_date", "to_date", "offset", "limit"],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const SEARCH_COUPONS: Endpoint = Endpoint {
    name: "searchCoupons",
    method: HttpMethod::Get,
    path: "/{storeId}/discount_coupons",
    query: &["code", "discount_type", "availability", "limit", "offset"],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const GET_COUPON: Endpoint = Endpoint {
    name: "getCoupon",
    method: HttpMethod::Get,
    path: "/{storeId}/discount_coupons/{code}",
    query: &[],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const DELETE_COUPONS: Endpoint = Endpoint {
    name: "deleteCoupons",
    method: HttpMethod::Delete,
    path: "/{storeId}/discount_coupons",
    query: &["code", "discount_type", "availability"],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const UPDATE_COUPON: Endpoint = Endpoint {
    name: "updateCoupon",
    method: HttpMethod::Put,
    path: "/{storeId}/discount_coupons/{code}",
    query: &[],
    required_query: &[],
    body: BodyKind::Json,
    shape: Shape::Object,
};

pub const CREATE_COUPON: Endpoint = Endpoint {
    name: "createCoupon",
    method: HttpMethod::Post,
    path: "/{storeId}/discount_coupons",
    query: &[],
    required_query: &[],
    body: BodyKind::Json,
    shape: Shape::Object,
};

pub const GET_PRODUCT: Endpoint = Endpoint {
    name: "getProduct",
    method: HttpMethod::Get,
    path: "/{storeId}/products/{productId}",
    query: &[],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const SEARCH_PRODUCTS: Endpoint = Endpoint {
    name: "searchProducts",
    method: HttpMethod::Get,
    path: "/{storeId}/products",
    query: &[
        "keyword",
        "priceFrom",
        "priceTo",
        "category",
        "withSubcategories",
        "sortBy",
        "offset",
        "limit",
        "createdFrom",
        "createdTo",
        "updatedFrom",
        "updatedTo",
        "enabled",
        "inStock",
    ],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const CREATE_PRODUCT: Endpoint = Endpoint {
    name: "createProduct",
    method: HttpMethod::Post,
    path: "/{storeId}/products",
    query: &[],
    required_query: &[],
    body: BodyKind::Json,
    shape: Shape::Object,
};

pub const UPDATE_PRODUCT: Endpoint = Endpoint {
    name: "updateProduct",
    method: HttpMethod::Put,
    path: "/{storeId}/products/{productId}",
    query: &[],
    required_query: &[],
    body: BodyKind::Json,
    shape: Shape::Object,
};

pub const DELETE_PRODUCT: Endpoint = Endpoint {
    name: "deleteProduct",
    method: HttpMethod::Delete,
    path: "/{storeId}/products/{productId}",
    query: &[],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const UPLOAD_PRODUCT_IMAGE: Endpoint = Endpoint {
    name: "uploadProductImage",
    method: HttpMethod::Post,
    path: "/{storeId}/products/{productId}/image",
    query: &[],
    required_query: &[],
    body: BodyKind::Upload,
    shape: Shape::Object,
};

pub const DELETE_PRODUCT_IMAGE: Endpoint = Endpoint {
    name: "deleteProductImage",
    method: HttpMethod::Delete,
    path: "/{storeId}/products/{productId}/image",
    query: &[],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const UPLOAD_PRODUCT_FILE: Endpoint = Endpoint {
    name: "uploadProductFile",
    method: HttpMethod::Post,
    path: "/{storeId}/products/{productId}/files",
    query: &["fileName", "description"],
    required_query: &["fileName"],
    body: BodyKind::Upload,
    shape: Shape::Object,
};

pub const DOWNLOAD_PRODUCT_FILE: Endpoint = Endpoint {
    name: "downloadProductFile",
    method: HttpMethod::Get,
    path: "/{storeId}/products/{productId}/files/{fileId}",
    query: &[],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Binary,
};

pub const DELETE_PRODUCT_FILE: Endpoint = Endpoint {
    name: "deleteProductFile",
    method: HttpMethod::Delete,
    path: "/{storeId}/products/{productId}/files/{fileId}",
    query: &[],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const CLEAR_PRODUCT_FILES: Endpoint = Endpoint {
    name: "clearProductFiles",
    method: HttpMethod::Delete,
    path: "/{storeId}/products/{productId}/files",
    query: &[],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const UPLOAD_GALLERY_IMAGE: Endpoint = Endpoint {
    name: "uploadGalleryImage",
    method: HttpMethod::Post,
    path: "/{storeId}/products/{productId}/gallery",
    query: &["fileName"],
    required_query: &[],
    body: BodyKind::Upload,
    shape: Shape::Object,
};

pub const DELETE_GALLERY_IMAGE: Endpoint = Endpoint {
    name: "deleteGalleryImage",
    method: HttpMethod::Delete,
    path: "/{storeId}/products/{productId}/gallery/{fileId}",
    query: &[],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const CLEAR_GALLERY: Endpoint = Endpoint {
    name: "clearGallery",
    method: HttpMethod::Delete,
    path: "/{storeId}/products/{productId}/gallery",
    query: &[],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const GET_COMBINATIONS: Endpoint = Endpoint {
    name: "getCombinations",
    method: HttpMethod::Get,
    path: "/{storeId}/products/{productId}/combinations",
    query: &[],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::List,
};

pub const GET_COMBINATION: Endpoint = Endpoint {
    name: "getCombination",
    method: HttpMethod::Get,
    path: "/{storeId}/products/{productId}/combinations/{combinationId}",
    query: &[],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const CREATE_COMBINATION: Endpoint = Endpoint {
    name: "createCombination",
    method: HttpMethod::Post,
    path: "/{storeId}/products/{productId}/combinations",
    query: &[],
    required_query: &[],
    body: BodyKind::Json,
    shape: Shape::Object,
};

pub const UPDATE_COMBINATION: Endpoint = Endpoint {
    name: "updateCombination",
    method: HttpMethod::Put,
    path: "/{storeId}/products/{productId}/combinations/{combinationId}",
    query: &[],
    required_query: &[],
    body: BodyKind::Json,
    shape: Shape::Object,
};

pub const DELETE_COMBINATION: Endpoint = Endpoint {
    name: "deleteCombination",
    method: HttpMethod::Delete,
    path: "/{storeId}/products/{productId}/combinations/{combinationId}",
    query: &[],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const CLEAR_COMBINATIONS: Endpoint = Endpoint {
    name: "clearCombinations",
    method: HttpMethod::Delete,
    path: "/{storeId}/products/{productId}/combinations",
    query: &[],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const UPLOAD_COMBINATION_IMAGE: Endpoint = Endpoint {
    name: "uploadCombinationImage",
    method: HttpMethod::Post,
    path: "/{storeId}/products/{productId}/combinations/{combinationId}/image",
    query: &[],
    required_query: &[],
    body: BodyKind::Upload,
    shape: Shape::Object,
};

pub const DELETE_COMBINATION_IMAGE: Endpoint = Endpoint {
    name: "deleteCombinationImage",
    method: HttpMethod::Delete,
    path: "/{storeId}/products/{productId}/combinations/{combinationId}/image",
    query: &[],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const GET_CATEGORY: Endpoint = Endpoint {
    name: "getCategory",
    method: HttpMethod::Get,
    path: "/{storeId}/categories/{categoryId}",
    query: &[],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const SEARCH_CATEGORIES: Endpoint = Endpoint {
    name: "searchCategories",
    method: HttpMethod::Get,
    path: "/{storeId}/categories",
    query: &["parent", "hidden_categories", "productIds", "limit", "offset"],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const CREATE_CATEGORY: Endpoint = Endpoint {
    name: "createCategory",
    method: HttpMethod::Post,
    path: "/{storeId}/categories",
    query: &[],
    required_query: &[],
    body: BodyKind::Json,
    shape: Shape::Object,
};

pub const UPDATE_CATEGORY: Endpoint = Endpoint {
    name: "updateCategory",
    method: HttpMethod::Put,
    path: "/{storeId}/categories/{categoryId}",
    query: &[],
    required_query: &[],
    body: BodyKind::Json,
    shape: Shape::Object,
};

pub const DELETE_CATEGORY: Endpoint = Endpoint {
    name: "deleteCategory",
    method: HttpMethod::Delete,
    path: "/{storeId}/categories/{categoryId}",
    query: &[],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const UPLOAD_CATEGORY_IMAGE: Endpoint = Endpoint {
    name: "uploadCategoryImage",
    method: HttpMethod::Post,
    path: "/{storeId}/categories/{categoryId}/image",
    query: &[],
    required_query: &[],
    body: BodyKind::Upload,
    shape: Shape::Object,
};

pub const DELETE_CATEGORY_IMAGE: Endpoint = Endpoint {
    name: "deleteCategoryImage",
    method: HttpMethod::Delete,
    path: "/{storeId}/categories/{categoryId}/image",
    query: &[],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const GET_CLASSES: Endpoint = Endpoint {
    name: "getClasses",
    method: HttpMethod::Get,
    path: "/{storeId}/classes",
    query: &[],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::List,
};

pub const GET_CLASS: Endpoint = Endpoint {
    name: "getClass",
    method: HttpMethod::Get,
    path: "/{storeId}/classes/{classId}",
    query: &[],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const CREATE_CLASS: Endpoint = Endpoint {
    name: "createClass",
    method: HttpMethod::Post,
    path: "/{storeId}/classes",
    query: &[],
    required_query: &[],
    body: BodyKind::Json,
    shape: Shape::Object,
};

pub const UPDATE_CLASS: Endpoint = Endpoint {
    name: "updateClass",
    method: HttpMethod::Put,
    path: "/{storeId}/classes/{classId}",
    query: &[],
    required_query: &[],
    body: BodyKind::Json,
    shape: Shape::Object,
};

pub const DELETE_CLASS: Endpoint = Endpoint {
    name: "deleteClass",
    method: HttpMethod::Delete,
    path: "/{storeId}/classes/{classId}",
    query: &[],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const SEARCH_ORDERS: Endpoint = Endpoint {
    name: "searchOrders",
    method: HttpMethod::Get,
    path: "/{storeId}/orders",
    query: &[
        "limit",
        "offset",
        "couponCode",
        "orderNumber",
        "totalFrom",
        "totalTo",
        "customer",
        "createdFrom",
        "createdTo",
        "paymentMethod",
        "vendorNumber",
        "shippingMethod",
        "keywords",
        "fulfillmentStatus",
        "paymentStatus",
        "updatedFrom",
        "updatedTo",
    ],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const GET_ORDER: Endpoint = Endpoint {
    name: "getOrder",
    method: HttpMethod::Get,
    path: "/{storeId}/orders/{orderNumber}",
    query: &[],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const CREATE_ORDER: Endpoint = Endpoint {
    name: "createOrder",
    method: HttpMethod::Post,
    path: "/{storeId}/orders",
    query: &[],
    required_query: &[],
    body: BodyKind::Json,
    shape: Shape::Object,
};

pub const UPDATE_ORDER: Endpoint = Endpoint {
    name: "updateOrder",
    method: HttpMethod::Put,
    path: "/{storeId}/orders/{orderNumber}",
    query: &[],
    required_query: &[],
    body: BodyKind::Json,
    shape: Shape::Object,
};

pub const DELETE_ORDER: Endpoint = Endpoint {
    name: "deleteOrder",
    method: HttpMethod::Delete,
    path: "/{storeId}/orders/{orderNumber}",
    query: &[],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const UPLOAD_ORDER_ITEM_OPTION_FILE: Endpoint = Endpoint {
    name: "uploadOrderItemOptionFile",
    method: HttpMethod::Post,
    path: "/{storeId}/orders/{orderNumber}/items/{itemId}/options/{optionName}",
    query: &["fileName"],
    required_query: &["fileName"],
    body: BodyKind::Upload,
    shape: Shape::Object,
};

pub const DELETE_ORDER_ITEM_OPTION_FILE: Endpoint = Endpoint {
    name: "deleteOrderItemOptionFile",
    method: HttpMethod::Delete,
    path: "/{storeId}/orders/{orderNumber}/items/{itemId}/options/{optionName}/files/{fileId}",
    query: &[],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const CLEAR_ORDER_ITEM_OPTION_FILES: Endpoint = Endpoint {
    name: "clearOrderItemOptionFiles",
    method: HttpMethod::Delete,
    path: "/{storeId}/orders/{orderNumber}/items/{itemId}/options/{optionName}/files",
    query: &[],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const GET_PROFILE: Endpoint = Endpoint {
    name: "getProfile",
    method: HttpMethod::Get,
    path: "/{storeId}/profile",
    query: &[],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const UPDATE_PROFILE: Endpoint = Endpoint {
    name: "updateProfile",
    method: HttpMethod::Put,
    path: "/{storeId}/profile",
    query: &[],
    required_query: &[],
    body: BodyKind::Json,
    shape: Shape::Object,
};

pub const UPLOAD_STORE_LOGO: Endpoint = Endpoint {
    name: "uploadStoreLogo",
    method: HttpMethod::Post,
    path: "/{storeId}/profile/logo",
    query: &[],
    required_query: &[],
    body: BodyKind::Upload,
    shape: Shape::Object,
};

pub const DELETE_STORE_LOGO: Endpoint = Endpoint {
    name: "deleteStoreLogo",
    method: HttpMethod::Delete,
    path: "/{storeId}/profile/logo",
    query: &[],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const UPLOAD_INVOICE_LOGO: Endpoint = Endpoint {
    name: "uploadInvoiceLogo",
    method: HttpMethod::Post,
    path: "/{storeId}/profile/invoicelogo",
    query: &[],
    required_query: &[],
    body: BodyKind::Upload,
    shape: Shape::Object,
};

pub const DELETE_INVOICE_LOGO: Endpoint = Endpoint {
    name: "deleteInvoiceLogo",
    method: HttpMethod::Delete,
    path: "/{storeId}/profile/invoicelogo",
    query: &[],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const UPLOAD_EMAIL_LOGO: Endpoint = Endpoint {
    name: "uploadEmailLogo",
    method: HttpMethod::Post,
    path: "/{storeId}/profile/emaillogo",
    query: &[],
    required_query: &[],
    body: BodyKind::Upload,
    shape: Shape::Object,
};

pub const DELETE_EMAIL_LOGO: Endpoint = Endpoint {
    name: "deleteEmailLogo",
    method: HttpMethod::Delete,
    path: "/{storeId}/profile/emaillogo",
    query: &[],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const GET_LATEST_STATS: Endpoint = Endpoint {
    name: "getLatestStats",
    method: HttpMethod::Get,
    path: "/{storeId}/latest-stats",
    query: &[],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const GET_CUSTOMER: Endpoint = Endpoint {
    name: "getCustomer",
    method: HttpMethod::Get,
    path: "/{storeId}/customers/{customerId}",
    query: &[],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const SEARCH_CUSTOMERS: Endpoint = Endpoint {
    name: "searchCustomers",
    method: HttpMethod::Get,
    path: "/{storeId}/customers",
    query: &[
        "keyword",
        "name",
        "email",
        "minOrderCount",
        "maxOrderCount",
        "sortBy",
        "offset",
        "limit",
    ],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

pub const CREATE_CUSTOMER: Endpoint = Endpoint {
    name: "createCustomer",
    method: HttpMethod::Post,
    path: "/{storeId}/customers",
    query: &[],
    required_query: &[],
    body: BodyKind::Json,
    shape: Shape::Object,
};

pub const UPDATE_CUSTOMER: Endpoint = Endpoint {
    name: "updateCustomer",
    method: HttpMethod::Put,
    path: "/{storeId}/customers/{customerId}",
    query: &[],
    required_query: &[],
    body: BodyKind::Json,
    shape: Shape::Object,
};

pub const DELETE_CUSTOMER: Endpoint = Endpoint {
    name: "deleteCustomer",
    method: HttpMethod::Delete,
    path: "/{storeId}/customers/{customerId}",
    query: &[],
    required_query: &[],
    body: BodyKind::None,
    shape: Shape::Object,
};

/// Every endpoint, in catalogue order.
pub const ALL: &[&Endpoint] = &[
    &DELETED_PRODUCTS,
    &DELETED_CUSTOMERS,
    &DELETED_COUPONS,
    &DELETED_ORDERS,
    &SEARCH_COUPONS,
    &GET_COUPON,
    &DELETE_COUPONS,
    &UPDATE_COUPON,
    &CREATE_COUPON,
    &GET_PRODUCT,
    &SEARCH_PRODUCTS,
    &CREATE_PRODUCT,
    &UPDATE_PRODUCT,
    &DELETE_PRODUCT,
    &UPLOAD_PRODUCT_IMAGE,
    &DELETE_PRODUCT_IMAGE,
    &UPLOAD_PRODUCT_FILE,
    &DOWNLOAD_PRODUCT_FILE,
    &DELETE_PRODUCT_FILE,
    &CLEAR_PRODUCT_FILES,
    &UPLOAD_GALLERY_IMAGE,
    &DELETE_GALLERY_IMAGE,
    &CLEAR_GALLERY,
    &GET_COMBINATIONS,
    &GET_COMBINATION,
    &CREATE_COMBINATION,
    &UPDATE_COMBINATION,
    &DELETE_COMBINATION,
    &CLEAR_COMBINATIONS,
    &UPLOAD_COMBINATION_IMAGE,
    &DELETE_COMBINATION_IMAGE,
    &GET_CATEGORY,
    &SEARCH_CATEGORIES,
    &CREATE_CATEGORY,
    &UPDATE_CATEGORY,
    &DELETE_CATEGORY,
    &UPLOAD_CATEGORY_IMAGE,
    &DELETE_CATEGORY_IMAGE,
    &GET_CLASSES,
    &GET_CLASS,
    &CREATE_CLASS,
    &UPDATE_CLASS,
    &DELETE_CLASS,
    &SEARCH_ORDERS,
    &GET_ORDER,
    &CREATE_ORDER,
    &UPDATE_ORDER,
    &DELETE_ORDER,
    &UPLOAD_ORDER_ITEM_OPTION_FILE,
    &DELETE_ORDER_ITEM_OPTION_FILE,
    &CLEAR_ORDER_ITEM_OPTION_FILES,
    &GET_PROFILE,
    &UPDATE_PROFILE,
    &UPLOAD_STORE_LOGO,
    &DELETE_STORE_LOGO,
    &UPLOAD_INVOICE_LOGO,
    &DELETE_INVOICE_LOGO,
    &UPLOAD_EMAIL_LOGO,
    &DELETE_EMAIL_LOGO,
    &GET_LATEST_STATS,
    &GET_CUSTOMER,
    &SEARCH_CUSTOMERS,
    &CREATE_CUSTOMER,
    &UPDATE_CUSTOMER,
    &DELETE_CUSTOMER,
];
