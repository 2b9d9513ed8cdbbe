use crate::{
    endpoint::{
        CLEAR_COMBINATIONS, CREATE_COMBINATION, DELETE_COMBINATION, DELETE_COMBINATION_IMAGE,
        GET_COMBINATION, GET_COMBINATIONS, UPDATE_COMBINATION, UPLOAD_COMBINATION_IMAGE,
    },
    request::{List, Object, PendingRequest},
    types::{Combination, CreateStatus, DeleteStatus, UpdateStatus, UploadStatus},
    Error, Store,
};

impl Store<'_> {
    /// All option combinations (variations) of a product.
    pub fn get_combinations(
        &self,
        product_id: i64,
    ) -> Result<PendingRequest<List<Combination>>, Error> {
        self.call(&GET_COMBINATIONS)
            .path("productId", product_id)
            .build()
    }

    pub fn get_combination(
        &self,
        product_id: i64,
        combination_id: i64,
    ) -> Result<PendingRequest<Object<Combination>>, Error> {
        self.call(&GET_COMBINATION)
            .path("productId", product_id)
            .path("combinationId", combination_id)
            .build()
    }

    pub fn create_combination(
        &self,
        product_id: i64,
        combination: &Combination,
    ) -> Result<PendingRequest<Object<CreateStatus>>, Error> {
        self.call(&CREATE_COMBINATION)
            .path("productId", product_id)
            .json(combination)
            .build()
    }

    pub fn update_combination(
        &self,
        product_id: i64,
        combination_id: i64,
        combination: &Combination,
    ) -> Result<PendingRequest<Object<UpdateStatus>>, Error> {
        self.call(&UPDATE_COMBINATION)
            .path("productId", product_id)
            .path("combinationId", combination_id)
            .json(combination)
            .build()
    }

    pub fn delete_combination(
        &self,
        product_id: i64,
        combination_id: i64,
    ) -> Result<PendingRequest<Object<DeleteStatus>>, Error> {
        self.call(&DELETE_COMBINATION)
            .path("productId", product_id)
            .path("combinationId", combination_id)
            .build()
    }

    pub fn clear_combinations(
        &self,
        product_id: i64,
    ) -> Result<PendingRequest<Object<DeleteStatus>>, Error> {
        self.call(&CLEAR_COMBINATIONS)
            .path("productId", product_id)
            .build()
    }

    pub fn upload_combination_image(
        &self,
        product_id: i64,
        combination_id: i64,
        image: impl Into<Vec<u8>>,
    ) -> Result<PendingRequest<Object<UploadStatus>>, Error> {
        self.call(&UPLOAD_COMBINATION_IMAGE)
            .path("productId", product_id)
            .path("combinationId", combination_id)
            .upload(image.into())
            .build()
    }

    pub fn delete_combination_image(
        &self,
        product_id: i64,
        combination_id: i64,
    ) -> Result<PendingRequest<Object<DeleteStatus>>, Error> {
        self.call(&DELETE_COMBINATION_IMAGE)
            .path("productId", product_id)
            .path("combinationId", combination_id)
            .build()
    }
}
