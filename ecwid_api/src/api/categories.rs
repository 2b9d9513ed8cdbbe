use crate::{
    endpoint::{
        CREATE_CATEGORY, DELETE_CATEGORY, DELETE_CATEGORY_IMAGE, GET_CATEGORY, SEARCH_CATEGORIES,
        UPDATE_CATEGORY, UPLOAD_CATEGORY_IMAGE,
    },
    query::CategoryQuery,
    request::{Object, PendingRequest},
    types::{Category, CategorySearchResult, CreateStatus, DeleteStatus, UpdateStatus, UploadStatus},
    Error, Store,
};

impl Store<'_> {
    pub fn get_category(
        &self,
        category_id: i64,
    ) -> Result<PendingRequest<Object<Category>>, Error> {
        self.call(&GET_CATEGORY)
            .path("categoryId", category_id)
            .build()
    }

    pub fn search_categories(
        &self,
        query: &CategoryQuery,
    ) -> Result<PendingRequest<Object<CategorySearchResult>>, Error> {
        self.call(&SEARCH_CATEGORIES).query(query).build()
    }

    pub fn create_category(
        &self,
        category: &Category,
    ) -> Result<PendingRequest<Object<CreateStatus>>, Error> {
        self.call(&CREATE_CATEGORY).json(category).build()
    }

    pub fn update_category(
        &self,
        category_id: i64,
        category: &Category,
    ) -> Result<PendingRequest<Object<UpdateStatus>>, Error> {
        self.call(&UPDATE_CATEGORY)
            .path("categoryId", category_id)
            .json(category)
            .build()
    }

    pub fn delete_category(
        &self,
        category_id: i64,
    ) -> Result<PendingRequest<Object<DeleteStatus>>, Error> {
        self.call(&DELETE_CATEGORY)
            .path("categoryId", category_id)
            .build()
    }

    pub fn upload_category_image(
        &self,
        category_id: i64,
        image: impl Into<Vec<u8>>,
    ) -> Result<PendingRequest<Object<UploadStatus>>, Error> {
        self.call(&UPLOAD_CATEGORY_IMAGE)
            .path("categoryId", category_id)
            .upload(image.into())
            .build()
    }

    pub fn delete_category_image(
        &self,
        category_id: i64,
    ) -> Result<PendingRequest<Object<DeleteStatus>>, Error> {
        self.call(&DELETE_CATEGORY_IMAGE)
            .path("categoryId", category_id)
            .build()
    }
}
