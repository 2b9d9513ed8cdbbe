use super::{
    common::{push_list, push_opt, Paging},
    Paginated, Query,
};
use crate::types::{CouponStatus, DiscountType};

/// Selects coupons by code, discount type and availability.
///
/// Used as-is for bulk deletion and embedded in [`CouponQuery`] for search.
#[derive(Debug, Clone, Default)]
pub struct CouponFilter {
    pub code: Option<String>,
    pub discount_types: Vec<DiscountType>,
    pub availability: Vec<CouponStatus>,
}

impl Query for CouponFilter {
    fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_opt(&mut pairs, "code", &self.code);
        push_list(&mut pairs, "discount_type", &self.discount_types);
        push_list(&mut pairs, "availability", &self.availability);
        pairs
    }
}

impl CouponFilter {
    pub fn with_code(mut self, code: &str) -> Self {
        self.code = Some(code.to_string());
        self
    }

    pub fn with_discount_type(mut self, discount_type: DiscountType) -> Self {
        self.discount_types.push(discount_type);
        self
    }

    pub fn with_availability(mut self, status: CouponStatus) -> Self {
        self.availability.push(status);
        self
    }
}

/// Coupon search: a [`CouponFilter`] plus paging.
#[derive(Debug, Clone, Default)]
pub struct CouponQuery {
    pub filter: CouponFilter,
    pub paging: Paging,
}

impl Query for CouponQuery {
    fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.filter.to_query_pairs();
        self.paging.push_limit(&mut pairs);
        self.paging.push_offset(&mut pairs);
        pairs
    }
}

impl Paginated for CouponQuery {
    fn paging_mut(&mut self) -> &mut Paging {
        &mut self.paging
    }
}

impl CouponQuery {
    pub fn with_code(mut self, code: &str) -> Self {
        self.filter = self.filter.with_code(code);
        self
    }

    pub fn with_discount_type(mut self, discount_type: DiscountType) -> Self {
        self.filter = self.filter.with_discount_type(discount_type);
        self
    }

    pub fn with_availability(mut self, status: CouponStatus) -> Self {
        self.filter = self.filter.with_availability(status);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coupon_query() {
        let pairs = CouponQuery::default()
            .with_discount_type(DiscountType::Abs)
            .with_discount_type(DiscountType::Percent)
            .with_availability(CouponStatus::Active)
            .with_availability(CouponStatus::UsedUp)
            .with_limit(10)
            .with_offset(30)
            .to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("discount_type", "ABS,PERCENT".to_string()),
                ("availability", "ACTIVE,USEDUP".to_string()),
                ("limit", "10".to_string()),
                ("offset", "30".to_string()),
            ]
        );
    }

    #[test]
    fn empty_filter_renders_nothing() {
        assert!(CouponFilter::default().to_query_pairs().is_empty());
    }

    #[test]
    fn empty_code_is_still_sent() {
        let pairs = CouponFilter::default().with_code("").to_query_pairs();
        assert_eq!(pairs, vec![("code", String::new())]);
    }
}
