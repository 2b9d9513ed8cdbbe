use crate::{
    endpoint::{CREATE_COUPON, DELETE_COUPONS, GET_COUPON, SEARCH_COUPONS, UPDATE_COUPON},
    query::{CouponFilter, CouponQuery},
    request::{Object, PendingRequest},
    types::{CouponSearchResult, CreateCouponStatus, DeleteStatus, DiscountCoupon, UpdateStatus},
    Error, Store,
};

impl Store<'_> {
    pub fn search_coupons(
        &self,
        query: &CouponQuery,
    ) -> Result<PendingRequest<Object<CouponSearchResult>>, Error> {
        self.call(&SEARCH_COUPONS).query(query).build()
    }

    /// Looks up a coupon by its code.
    pub fn get_coupon(&self, code: &str) -> Result<PendingRequest<Object<DiscountCoupon>>, Error> {
        self.call(&GET_COUPON).path("code", code).build()
    }

    /// Deletes every coupon matching `filter`. An empty filter matches all
    /// coupons.
    pub fn delete_coupons(
        &self,
        filter: &CouponFilter,
    ) -> Result<PendingRequest<Object<DeleteStatus>>, Error> {
        self.call(&DELETE_COUPONS).query(filter).build()
    }

    pub fn update_coupon(
        &self,
        code: &str,
        coupon: &DiscountCoupon,
    ) -> Result<PendingRequest<Object<UpdateStatus>>, Error> {
        self.call(&UPDATE_COUPON)
            .path("code", code)
            .json(coupon)
            .build()
    }

    pub fn create_coupon(
        &self,
        coupon: &DiscountCoupon,
    ) -> Result<PendingRequest<Object<CreateCouponStatus>>, Error> {
        self.call(&CREATE_COUPON).json(coupon).build()
    }
}
