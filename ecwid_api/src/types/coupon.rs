//! Discount coupons.

wire_enum! {
    /// How a coupon discount is applied.
    pub enum DiscountType {
        /// A fixed amount off. The API default.
        Abs = "ABS",
        Percent = "PERCENT",
        /// Free shipping.
        Shipping = "SHIPPING",
        AbsAndShipping = "ABS_AND_SHIPPING",
        PercentAndShipping = "PERCENT_AND_SHIPPING",
    }
}

wire_enum! {
    /// Coupon state.
    pub enum CouponStatus {
        Active = "ACTIVE",
        Paused = "PAUSED",
        Expired = "EXPIRED",
        UsedUp = "USEDUP",
    }
}

wire_enum! {
    /// How many times a coupon can be redeemed.
    pub enum UsesLimit {
        Unlimited = "UNLIMITED",
        OncePerCustomer = "ONCEPERCUSTOMER",
        Single = "SINGLE",
    }
}

dto! {
    pub struct DiscountCoupon {
        /// Coupon title.
        name: String,
        /// Unique coupon code.
        code: String,
        discount_type: DiscountType,
        status: CouponStatus,
        /// Discount amount, in store currency or percent depending on `discount_type`.
        discount: f64,
        launch_date: String,
        /// Expiration date, e.g. `2014-06-06 08:00:00 +0400`.
        expiration_date: String,
        /// Minimum order subtotal the coupon applies to.
        total_limit: f64,
        uses_limit: UsesLimit,
        repeat_customer_only: bool,
        creation_date: String,
        /// Number of uses so far.
        order_count: i64,
        catalog_limit: CouponCatalogLimit,
    }
}

dto! {
    /// Products and categories a coupon is restricted to.
    pub struct CouponCatalogLimit {
        products: Vec<i64>,
        categories: Vec<i64>,
    }
}
