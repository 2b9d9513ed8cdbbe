use super::{
    common::{push_list, push_opt, Paging},
    Paginated, Query,
};

/// Filters for the order search endpoint.
///
/// Status filters accept several values, sent comma separated:
/// fulfillment `NEW`, `PROCESSING`, `SHIPPED`, `DELIVERED`,
/// `WILL_NOT_DELIVER`; payment `INCOMPLETE`, `PAID`, `DECLINED`,
/// `CANCELLED`, `AWAITING_PAYMENT`, `CHARGEABLE`.
#[derive(Debug, Clone, Default)]
pub struct OrderQuery {
    pub paging: Paging,
    pub coupon_code: Option<String>,
    pub order_number: Option<i64>,
    pub total_from: Option<f64>,
    pub total_to: Option<f64>,
    /// Customer name or email.
    pub customer: Option<String>,
    pub created_from: Option<String>,
    pub created_to: Option<String>,
    pub payment_method: Option<String>,
    pub vendor_number: Option<String>,
    pub shipping_method: Option<String>,
    pub keywords: Option<String>,
    pub fulfillment_status: Vec<String>,
    pub payment_status: Vec<String>,
    pub updated_from: Option<String>,
    pub updated_to: Option<String>,
}

impl Query for OrderQuery {
    fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        self.paging.push_limit(&mut pairs);
        self.paging.push_offset(&mut pairs);
        push_opt(&mut pairs, "couponCode", &self.coupon_code);
        push_opt(&mut pairs, "orderNumber", &self.order_number);
        push_opt(&mut pairs, "totalFrom", &self.total_from);
        push_opt(&mut pairs, "totalTo", &self.total_to);
        push_opt(&mut pairs, "customer", &self.customer);
        push_opt(&mut pairs, "createdFrom", &self.created_from);
        push_opt(&mut pairs, "createdTo", &self.created_to);
        push_opt(&mut pairs, "paymentMethod", &self.payment_method);
        push_opt(&mut pairs, "vendorNumber", &self.vendor_number);
        push_opt(&mut pairs, "shippingMethod", &self.shipping_method);
        push_opt(&mut pairs, "keywords", &self.keywords);
        push_list(&mut pairs, "fulfillmentStatus", &self.fulfillment_status);
        push_list(&mut pairs, "paymentStatus", &self.payment_status);
        push_opt(&mut pairs, "updatedFrom", &self.updated_from);
        push_opt(&mut pairs, "updatedTo", &self.updated_to);
        pairs
    }
}

impl Paginated for OrderQuery {
    fn paging_mut(&mut self) -> &mut Paging {
        &mut self.paging
    }
}

impl OrderQuery {
    pub fn with_coupon_code(mut self, code: &str) -> Self {
        self.coupon_code = Some(code.to_string());
        self
    }

    pub fn with_order_number(mut self, number: i64) -> Self {
        self.order_number = Some(number);
        self
    }

    pub fn with_total_range(mut self, from: Option<f64>, to: Option<f64>) -> Self {
        self.total_from = from;
        self.total_to = to;
        self
    }

    pub fn with_customer(mut self, customer: &str) -> Self {
        self.customer = Some(customer.to_string());
        self
    }

    pub fn with_created(mut self, from: Option<&str>, to: Option<&str>) -> Self {
        self.created_from = from.map(str::to_string);
        self.created_to = to.map(str::to_string);
        self
    }

    pub fn with_payment_method(mut self, method: &str) -> Self {
        self.payment_method = Some(method.to_string());
        self
    }

    pub fn with_vendor_number(mut self, vendor_number: &str) -> Self {
        self.vendor_number = Some(vendor_number.to_string());
        self
    }

    pub fn with_shipping_method(mut self, method: &str) -> Self {
        self.shipping_method = Some(method.to_string());
        self
    }

    pub fn with_keywords(mut self, keywords: &str) -> Self {
        self.keywords = Some(keywords.to_string());
        self
    }

    pub fn with_fulfillment_status(mut self, status: &str) -> Self {
        self.fulfillment_status.push(status.to_string());
        self
    }

    pub fn with_payment_status(mut self, status: &str) -> Self {
        self.payment_status.push(status.to_string());
        self
    }

    pub fn with_updated(mut self, from: Option<&str>, to: Option<&str>) -> Self {
        self.updated_from = from.map(str::to_string);
        self.updated_to = to.map(str::to_string);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_query() {
        let pairs = OrderQuery::default()
            .with_limit(20)
            .with_keywords("gift")
            .with_payment_status("PAID")
            .with_payment_status("AWAITING_PAYMENT")
            .with_fulfillment_status("SHIPPED")
            .with_total_range(Some(10.0), None)
            .to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("limit", "20".to_string()),
                ("totalFrom", "10".to_string()),
                ("keywords", "gift".to_string()),
                ("fulfillmentStatus", "SHIPPED".to_string()),
                ("paymentStatus", "PAID,AWAITING_PAYMENT".to_string()),
            ]
        );
    }

    #[test]
    fn order_number_zero_is_sent() {
        let pairs = OrderQuery::default().with_order_number(0).to_query_pairs();
        assert_eq!(pairs, vec![("orderNumber", "0".to_string())]);
    }
}
