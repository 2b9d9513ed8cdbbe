use crate::{
    endpoint::{
        CLEAR_ORDER_ITEM_OPTION_FILES, CREATE_ORDER, DELETE_ORDER, DELETE_ORDER_ITEM_OPTION_FILE,
        GET_ORDER, SEARCH_ORDERS, UPDATE_ORDER, UPLOAD_ORDER_ITEM_OPTION_FILE,
    },
    query::OrderQuery,
    request::{Object, PendingRequest},
    types::{CreateStatus, DeleteStatus, Order, OrderSearchResult, UpdateStatus, UploadStatus},
    Error, Store,
};

impl Store<'_> {
    pub fn search_orders(
        &self,
        query: &OrderQuery,
    ) -> Result<PendingRequest<Object<OrderSearchResult>>, Error> {
        self.call(&SEARCH_ORDERS).query(query).build()
    }

    pub fn get_order(&self, order_number: i64) -> Result<PendingRequest<Object<Order>>, Error> {
        self.call(&GET_ORDER)
            .path("orderNumber", order_number)
            .build()
    }

    pub fn create_order(
        &self,
        order: &Order,
    ) -> Result<PendingRequest<Object<CreateStatus>>, Error> {
        self.call(&CREATE_ORDER).json(order).build()
    }

    pub fn update_order(
        &self,
        order_number: i64,
        order: &Order,
    ) -> Result<PendingRequest<Object<UpdateStatus>>, Error> {
        self.call(&UPDATE_ORDER)
            .path("orderNumber", order_number)
            .json(order)
            .build()
    }

    pub fn delete_order(
        &self,
        order_number: i64,
    ) -> Result<PendingRequest<Object<DeleteStatus>>, Error> {
        self.call(&DELETE_ORDER)
            .path("orderNumber", order_number)
            .build()
    }

    /// Attaches a file to a file-upload option of an order item.
    pub fn upload_order_item_option_file(
        &self,
        order_number: i64,
        item_id: i64,
        option_name: &str,
        file_name: &str,
        data: impl Into<Vec<u8>>,
    ) -> Result<PendingRequest<Object<UploadStatus>>, Error> {
        self.call(&UPLOAD_ORDER_ITEM_OPTION_FILE)
            .path("orderNumber", order_number)
            .path("itemId", item_id)
            .path("optionName", option_name)
            .required("fileName", file_name)
            .upload(data.into())
            .build()
    }

    pub fn delete_order_item_option_file(
        &self,
        order_number: i64,
        item_id: i64,
        option_name: &str,
        file_id: i64,
    ) -> Result<PendingRequest<Object<DeleteStatus>>, Error> {
        self.call(&DELETE_ORDER_ITEM_OPTION_FILE)
            .path("orderNumber", order_number)
            .path("itemId", item_id)
            .path("optionName", option_name)
            .path("fileId", file_id)
            .build()
    }

    pub fn clear_order_item_option_files(
        &self,
        order_number: i64,
        item_id: i64,
        option_name: &str,
    ) -> Result<PendingRequest<Object<DeleteStatus>>, Error> {
        self.call(&CLEAR_ORDER_ITEM_OPTION_FILES)
            .path("orderNumber", order_number)
            .path("itemId", item_id)
            .path("optionName", option_name)
            .build()
    }
}
