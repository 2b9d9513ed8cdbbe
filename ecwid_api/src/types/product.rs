//! Catalog types: products, their options, combinations and classes.

dto! {
    /// A full product record, as returned by `GET /products/{id}` and sent
    /// when creating or updating a product.
    pub struct Product {
        id: i64,
        /// Stock keeping unit. Combinations may override it.
        sku: String,
        thumbnail_url: String,
        /// Stock quantity. Absent when `unlimited` is true.
        quantity: i64,
        unlimited: bool,
        in_stock: bool,
        name: String,
        /// Base price.
        price: f64,
        /// Price shown in product lists; differs from `price` when the default
        /// combination overrides it.
        price_in_product_list: f64,
        /// Sorted (quantity threshold, price) pairs.
        wholesale_prices: Vec<WholesalePrice>,
        /// Strike-through "compare to" price.
        compare_to_price: f64,
        is_shipping_required: bool,
        /// Weight in store units. Absent for intangible products.
        weight: f64,
        url: String,
        created: String,
        updated: String,
        /// `0` is the default "General" class.
        product_class_id: i64,
        enabled: bool,
        options: Vec<ProductOption>,
        /// Low stock notification threshold.
        warning_limit: i64,
        fixed_shipping_rate_only: bool,
        fixed_shipping_rate: f64,
        default_combination_id: i64,
        image_url: String,
        small_thumbnail_url: String,
        original_image_url: String,
        /// HTML description.
        description: String,
        gallery_images: Vec<GalleryImage>,
        category_ids: Vec<i64>,
        default_category_id: i64,
        favorites: Favorites,
        attributes: Vec<AttributeValue>,
        /// E-goods attached to the product. Only present for authorized requests.
        files: Vec<ProductFile>,
        related_products: RelatedProducts,
        /// Only returned on retrieval; ignored when saving.
        combinations: Vec<Combination>,
    }
}

dto! {
    pub struct Favorites {
        count: i64,
        /// Short human form of `count`, e.g. `4k`.
        displayed_count: String,
    }
}

dto! {
    pub struct RelatedProducts {
        product_ids: Vec<i64>,
        related_category: RelatedCategory,
    }
}

dto! {
    /// Random products from a category shown as related.
    pub struct RelatedCategory {
        enabled: bool,
        category_id: i64,
        product_count: i64,
    }
}

dto! {
    pub struct WholesalePrice {
        quantity: i64,
        price: f64,
    }
}

dto! {
    pub struct GalleryImage {
        id: i64,
        alt: String,
        url: String,
        thumbnail: String,
        width: i64,
        height: i64,
    }
}

dto! {
    /// An e-good file attached to a product.
    pub struct ProductFile {
        id: i64,
        name: String,
        description: String,
        /// Size in bytes.
        size: i64,
        /// Direct download link for the store owner.
        admin_url: String,
    }
}

dto! {
    /// A product variation with its own SKU, stock, price and image.
    pub struct Combination {
        id: i64,
        combination_number: i64,
        /// Option values identifying this combination.
        options: Vec<OptionValue>,
        sku: String,
        small_thumbnail_url: String,
        thumbnail_url: String,
        image_url: String,
        original_image_url: String,
        quantity: i64,
        unlimited: bool,
        price: f64,
        wholesale_prices: Vec<WholesalePrice>,
        is_shipping_required: bool,
        weight: f64,
        warning_limit: i64,
        /// Relative stock change to apply on update instead of setting `quantity`.
        inventory_delta: i64,
    }
}

dto! {
    pub struct OptionValue {
        name: String,
        value: String,
    }
}

dto! {
    pub struct ProductOption {
        /// SELECT, RADIO, CHECKBOX, TEXTFIELD, TEXTAREA, DATE or FILES.
        #[serde(rename = "type")]
        kind: String,
        name: String,
        /// Only for SELECT, RADIO and CHECKBOX options.
        choices: Vec<ProductOptionChoice>,
        /// Zero-based index into `choices`.
        default_choice: i64,
        required: bool,
    }
}

wire_enum! {
    /// How a choice modifies the product price.
    pub enum PriceModifierType {
        Percent = "PERCENT",
        Absolute = "ABSOLUTE",
    }
}

dto! {
    pub struct ProductOptionChoice {
        text: String,
        price_modifier: f64,
        price_modifier_type: PriceModifierType,
    }
}

dto! {
    /// A product type ("Books") with its attribute set.
    pub struct ProductClass {
        id: i64,
        name: String,
        google_taxonomy: String,
        ebay_taxonomy_id: String,
        ebay_condition: String,
        attributes: Vec<Attribute>,
    }
}

dto! {
    pub struct Attribute {
        id: i64,
        name: String,
        /// CUSTOM attributes can be removed; other types are built in.
        #[serde(rename = "type")]
        kind: String,
        /// Where the attribute is shown in the storefront.
        show: String,
        internal_name: String,
    }
}

dto! {
    /// A product's value for one class attribute.
    pub struct AttributeValue {
        id: i64,
        /// Shortcut name such as BRAND or UPC.
        alias: String,
        name: String,
        value: String,
    }
}

dto! {
    /// A product as listed by the search endpoint.
    pub struct ProductEntry {
        id: i64,
        sku: String,
        small_thumbnail_url: String,
        thumbnail_url: String,
        image_url: String,
        original_image_url: String,
        quantity: i64,
        unlimited: bool,
        in_stock: bool,
        name: String,
        price: f64,
        compare_to_price: f64,
        weight: f64,
        url: String,
        created: String,
        updated: String,
        product_class_id: i64,
        enabled: bool,
        description: String,
        description_truncated: bool,
        price_in_product_list: f64,
        default_combination: ProductEntryCombination,
        category_ids: Vec<i64>,
        default_category_id: i64,
        favorites: Favorites,
    }
}

dto! {
    pub struct ProductEntryCombination {
        id: i64,
        sku: String,
        quantity: i64,
        unlimited: bool,
        price: f64,
        weight: f64,
        small_thumbnail_url: String,
        thumbnail_url: String,
        image_url: String,
        combination: Vec<OptionValue>,
    }
}
