//! Orders and their line items.

use super::DiscountCoupon;

dto! {
    pub struct Order {
        /// Store-specific order number shown to customers.
        vendor_order_number: String,
        /// Item cost without taxes, discounts and shipping.
        subtotal: f64,
        /// Final cost including taxes, discounts and shipping.
        total: f64,
        email: String,
        /// Transaction ID in the external payment system.
        external_transaction_id: String,
        payment_module: String,
        payment_method: String,
        tax: f64,
        ip_address: String,
        coupon_discount: f64,
        tracking_number: String,
        payment_status: String,
        /// Error or warning returned by the payment gateway.
        payment_message: String,
        fulfillment_status: String,
        order_number: i64,
        referer_url: String,
        /// Notes the customer left at checkout.
        notes: String,
        /// Merchant's comment on the order.
        order_comments: String,
        affiliate_id: String,
        volume_discount: f64,
        customer_id: i64,
        membership_based_discount: f64,
        total_and_membership_based_discount: f64,
        discount: f64,
        usd_total: f64,
        global_referer: String,
        create_date: String,
        update_date: String,
        customer_group: String,
        discount_coupon: DiscountCoupon,
        items: Vec<OrderItem>,
        billing_person: Person,
        shipping_person: Person,
        shipping_option: ShippingOption,
        additional_info: serde_json::Value,
        /// Values forwarded to the payment gateway.
        payment_params: serde_json::Value,
        discount_info: Vec<Discount>,
        credit_card_status: CreditCardStatus,
        ebay_id: String,
    }
}

dto! {
    pub struct ShippingOption {
        shipping_carrier_name: String,
        shipping_method_name: String,
        shipping_rate: f64,
        estimated_transit_time: String,
    }
}

dto! {
    /// A billing or shipping contact.
    pub struct Person {
        name: String,
        company_name: String,
        street: String,
        city: String,
        country_code: String,
        country_name: String,
        postal_code: String,
        state_or_province_code: String,
        state_or_province_name: String,
        phone: String,
    }
}

dto! {
    pub struct Discount {
        value: f64,
        /// ABS or PERCENT.
        #[serde(rename = "type")]
        kind: String,
        /// What the discount is based on: ON_TOTAL, ON_MEMBERSHIP, ...
        base: String,
        /// Order total the discount starts applying at.
        order_total: f64,
    }
}

dto! {
    /// An option selected for an order item.
    pub struct OrderItemProductOption {
        name: String,
        /// Empty for FILES options.
        value: String,
        #[serde(rename = "type")]
        kind: String,
        /// Files attached to a FILES option.
        files: Vec<OrderItemOptionFile>,
    }
}

dto! {
    pub struct OrderItemOptionFile {
        id: i64,
        name: String,
        size: i64,
        url: String,
    }
}

dto! {
    /// An e-good delivered with an order item.
    pub struct OrderItemProductFile {
        product_file_id: i64,
        max_downloads: i64,
        remaining_downloads: i64,
        /// Download link expiration date.
        expire: String,
        name: String,
        description: String,
        size: i64,
        admin_url: String,
        customer_url: String,
    }
}

dto! {
    pub struct OrderItemTax {
        name: String,
        /// Tax rate in percent.
        value: f64,
        /// Tax amount for the item.
        total: f64,
    }
}

dto! {
    pub struct OrderItem {
        id: i64,
        product_id: i64,
        category_id: i64,
        /// Price paid per unit, including option modifiers.
        price: f64,
        /// Base product price at the time of the order.
        product_price: f64,
        sku: String,
        quantity: i64,
        short_description: String,
        tax: f64,
        shipping: f64,
        quantity_in_stock: i64,
        name: String,
        is_shipping_required: bool,
        weight: f64,
        track_quantity: bool,
        fixed_shipping_rate_only: bool,
        image_url: String,
        fixed_shipping_rate: f64,
        digital: bool,
        product_available: bool,
        coupon_applied: bool,
        selected_options: Vec<OrderItemProductOption>,
        files: Vec<OrderItemProductFile>,
        taxes: Vec<OrderItemTax>,
        ebay_id: String,
    }
}

dto! {
    /// Address and CVV verification results.
    pub struct CreditCardStatus {
        avs_message: String,
        cvv_message: String,
    }
}
