//! Registered customers.

use super::Person;

dto! {
    pub struct Customer {
        id: i64,
        email: String,
        /// Only sent when creating or updating; never returned.
        password: String,
        registered: String,
        billing_person: Person,
        shipping_addresses: Vec<ShippingAddress>,
    }
}

dto! {
    /// A customer as listed by the search endpoint.
    pub struct CustomerSearchEntry {
        id: i64,
        name: String,
        email: String,
        total_order_count: i64,
    }
}

dto! {
    /// One of a customer's saved shipping addresses.
    pub struct ShippingAddress {
        id: i64,
        name: String,
        company_name: String,
        street: String,
        city: String,
        country_code: String,
        postal_code: String,
        state_or_province_code: String,
        phone: String,
    }
}
