use crate::{
    endpoint::{DELETED_COUPONS, DELETED_CUSTOMERS, DELETED_ORDERS, DELETED_PRODUCTS},
    query::DeletedQuery,
    request::{Object, PendingRequest},
    types::{
        DeletedCouponsResponse, DeletedCustomersResponse, DeletedOrdersResponse,
        DeletedProductsResponse,
    },
    Error, Store,
};

impl Store<'_> {
    /// Products deleted within the query's date window.
    pub fn deleted_products(
        &self,
        query: &DeletedQuery,
    ) -> Result<PendingRequest<Object<DeletedProductsResponse>>, Error> {
        self.call(&DELETED_PRODUCTS).query(query).build()
    }

    pub fn deleted_customers(
        &self,
        query: &DeletedQuery,
    ) -> Result<PendingRequest<Object<DeletedCustomersResponse>>, Error> {
        self.call(&DELETED_CUSTOMERS).query(query).build()
    }

    pub fn deleted_coupons(
        &self,
        query: &DeletedQuery,
    ) -> Result<PendingRequest<Object<DeletedCouponsResponse>>, Error> {
        self.call(&DELETED_COUPONS).query(query).build()
    }

    pub fn deleted_orders(
        &self,
        query: &DeletedQuery,
    ) -> Result<PendingRequest<Object<DeletedOrdersResponse>>, Error> {
        self.call(&DELETED_ORDERS).query(query).build()
    }
}
