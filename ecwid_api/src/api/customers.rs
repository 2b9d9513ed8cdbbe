use crate::{
    endpoint::{CREATE_CUSTOMER, DELETE_CUSTOMER, GET_CUSTOMER, SEARCH_CUSTOMERS, UPDATE_CUSTOMER},
    query::CustomerQuery,
    request::{Object, PendingRequest},
    types::{CreateStatus, Customer, CustomerSearchResult, DeleteStatus, UpdateStatus},
    Error, Store,
};

impl Store<'_> {
    pub fn get_customer(
        &self,
        customer_id: i64,
    ) -> Result<PendingRequest<Object<Customer>>, Error> {
        self.call(&GET_CUSTOMER)
            .path("customerId", customer_id)
            .build()
    }

    pub fn search_customers(
        &self,
        query: &CustomerQuery,
    ) -> Result<PendingRequest<Object<CustomerSearchResult>>, Error> {
        self.call(&SEARCH_CUSTOMERS).query(query).build()
    }

    pub fn create_customer(
        &self,
        customer: &Customer,
    ) -> Result<PendingRequest<Object<CreateStatus>>, Error> {
        self.call(&CREATE_CUSTOMER).json(customer).build()
    }

    pub fn update_customer(
        &self,
        customer_id: i64,
        customer: &Customer,
    ) -> Result<PendingRequest<Object<UpdateStatus>>, Error> {
        self.call(&UPDATE_CUSTOMER)
            .path("customerId", customer_id)
            .json(customer)
            .build()
    }

    pub fn delete_customer(
        &self,
        customer_id: i64,
    ) -> Result<PendingRequest<Object<DeleteStatus>>, Error> {
        self.call(&DELETE_CUSTOMER)
            .path("customerId", customer_id)
            .build()
    }
}
