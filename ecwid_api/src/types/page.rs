//! Paged list responses.

use serde::{de, Deserialize, Deserializer, Serialize};

use super::{Category, CustomerSearchEntry, DiscountCoupon, Order, ProductEntry};

/// One page of a list endpoint.
///
/// `count` is the number of entries in `items` and never exceeds `limit`;
/// payloads violating either rule are rejected while decoding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    /// Matching records across all pages.
    pub total: i64,
    /// Records in this page.
    pub count: i64,
    pub offset: i64,
    pub limit: i64,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// True if more records exist past this page.
    pub fn has_more(&self) -> bool {
        self.offset + self.count < self.total
    }

    /// Offset to request the page after this one.
    pub fn next_offset(&self) -> i64 {
        self.offset + self.count
    }
}

#[derive(Deserialize)]
struct RawPage<T> {
    total: i64,
    count: i64,
    offset: i64,
    limit: i64,
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Page<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawPage::<T>::deserialize(deserializer)?;
        if raw.count != raw.items.len() as i64 {
            return Err(de::Error::custom(format!(
                "page count {} does not match {} items",
                raw.count,
                raw.items.len()
            )));
        }
        if raw.count > raw.limit {
            return Err(de::Error::custom(format!(
                "page count {} exceeds limit {}",
                raw.count, raw.limit
            )));
        }
        Ok(Page {
            total: raw.total,
            count: raw.count,
            offset: raw.offset,
            limit: raw.limit,
            items: raw.items,
        })
    }
}

dto! {
    /// A product, order or customer removed from the store.
    pub struct DeletedEntity {
        id: i64,
        /// Deletion date.
        date: String,
    }
}

dto! {
    /// A discount coupon removed from the store.
    pub struct DeletedCoupon {
        code: String,
        date: String,
    }
}

pub type ProductSearchResult = Page<ProductEntry>;
pub type CategorySearchResult = Page<Category>;
pub type OrderSearchResult = Page<Order>;
pub type CustomerSearchResult = Page<CustomerSearchEntry>;
pub type CouponSearchResult = Page<DiscountCoupon>;
pub type DeletedProductsResponse = Page<DeletedEntity>;
pub type DeletedCustomersResponse = Page<DeletedEntity>;
pub type DeletedOrdersResponse = Page<DeletedEntity>;
pub type DeletedCouponsResponse = Page<DeletedCoupon>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consistent_page_decodes() {
        let page: Page<DeletedEntity> = serde_json::from_str(
            r#"{"total":3,"count":2,"offset":0,"limit":2,
                "items":[{"id":1,"date":"2024-01-01"},{"id":2}]}"#,
        )
        .unwrap();
        assert_eq!(page.items.len(), 2);
        assert!(page.items[1].date.is_absent());
        assert!(page.has_more());
        assert_eq!(page.next_offset(), 2);
    }

    #[test]
    fn count_mismatch_is_rejected() {
        let err = serde_json::from_str::<Page<DeletedEntity>>(
            r#"{"total":3,"count":3,"offset":0,"limit":10,"items":[{"id":1}]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("does not match"));
    }

    #[test]
    fn count_above_limit_is_rejected() {
        let err = serde_json::from_str::<Page<DeletedEntity>>(
            r#"{"total":2,"count":2,"offset":0,"limit":1,"items":[{"id":1},{"id":2}]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("exceeds limit"));
    }

    #[test]
    fn empty_page_without_items_key() {
        let page: Page<DeletedCoupon> =
            serde_json::from_str(r#"{"total":0,"count":0,"offset":0,"limit":100}"#).unwrap();
        assert!(page.items.is_empty());
        assert!(!page.has_more());
    }
}
