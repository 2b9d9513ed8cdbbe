use crate::{
    endpoint::{
        CLEAR_GALLERY, CLEAR_PRODUCT_FILES, CREATE_PRODUCT, DELETE_GALLERY_IMAGE, DELETE_PRODUCT,
        DELETE_PRODUCT_FILE, DELETE_PRODUCT_IMAGE, DOWNLOAD_PRODUCT_FILE, GET_PRODUCT,
        SEARCH_PRODUCTS, UPDATE_PRODUCT, UPLOAD_GALLERY_IMAGE, UPLOAD_PRODUCT_FILE,
        UPLOAD_PRODUCT_IMAGE,
    },
    query::ProductQuery,
    request::{Binary, Object, PendingRequest},
    types::{
        CreateStatus, DeleteStatus, Product, ProductSearchResult, UpdateStatus, UploadStatus,
    },
    Error, Store,
};

impl Store<'_> {
    pub fn get_product(&self, product_id: i64) -> Result<PendingRequest<Object<Product>>, Error> {
        self.call(&GET_PRODUCT).path("productId", product_id).build()
    }

    pub fn search_products(
        &self,
        query: &ProductQuery,
    ) -> Result<PendingRequest<Object<ProductSearchResult>>, Error> {
        self.call(&SEARCH_PRODUCTS).query(query).build()
    }

    pub fn create_product(
        &self,
        product: &Product,
    ) -> Result<PendingRequest<Object<CreateStatus>>, Error> {
        self.call(&CREATE_PRODUCT).json(product).build()
    }

    /// Updates only the fields present in `product`.
    pub fn update_product(
        &self,
        product_id: i64,
        product: &Product,
    ) -> Result<PendingRequest<Object<UpdateStatus>>, Error> {
        self.call(&UPDATE_PRODUCT)
            .path("productId", product_id)
            .json(product)
            .build()
    }

    pub fn delete_product(
        &self,
        product_id: i64,
    ) -> Result<PendingRequest<Object<DeleteStatus>>, Error> {
        self.call(&DELETE_PRODUCT).path("productId", product_id).build()
    }

    /// Replaces the main product image.
    pub fn upload_product_image(
        &self,
        product_id: i64,
        image: impl Into<Vec<u8>>,
    ) -> Result<PendingRequest<Object<UploadStatus>>, Error> {
        self.call(&UPLOAD_PRODUCT_IMAGE)
            .path("productId", product_id)
            .upload(image.into())
            .build()
    }

    pub fn delete_product_image(
        &self,
        product_id: i64,
    ) -> Result<PendingRequest<Object<DeleteStatus>>, Error> {
        self.call(&DELETE_PRODUCT_IMAGE)
            .path("productId", product_id)
            .build()
    }

    /// Attaches a downloadable file (e-good) to a product.
    pub fn upload_product_file(
        &self,
        product_id: i64,
        file_name: &str,
        description: Option<&str>,
        data: impl Into<Vec<u8>>,
    ) -> Result<PendingRequest<Object<UploadStatus>>, Error> {
        self.call(&UPLOAD_PRODUCT_FILE)
            .path("productId", product_id)
            .optional("description", description)
            .required("fileName", file_name)
            .upload(data.into())
            .build()
    }

    /// Downloads a product file as raw bytes.
    pub fn download_product_file(
        &self,
        product_id: i64,
        file_id: i64,
    ) -> Result<PendingRequest<Binary>, Error> {
        self.call(&DOWNLOAD_PRODUCT_FILE)
            .path("productId", product_id)
            .path("fileId", file_id)
            .build()
    }

    pub fn delete_product_file(
        &self,
        product_id: i64,
        file_id: i64,
    ) -> Result<PendingRequest<Object<DeleteStatus>>, Error> {
        self.call(&DELETE_PRODUCT_FILE)
            .path("productId", product_id)
            .path("fileId", file_id)
            .build()
    }

    /// Removes every file attached to a product.
    pub fn clear_product_files(
        &self,
        product_id: i64,
    ) -> Result<PendingRequest<Object<DeleteStatus>>, Error> {
        self.call(&CLEAR_PRODUCT_FILES)
            .path("productId", product_id)
            .build()
    }

    pub fn upload_gallery_image(
        &self,
        product_id: i64,
        file_name: Option<&str>,
        image: impl Into<Vec<u8>>,
    ) -> Result<PendingRequest<Object<UploadStatus>>, Error> {
        self.call(&UPLOAD_GALLERY_IMAGE)
            .path("productId", product_id)
            .optional("fileName", file_name)
            .upload(image.into())
            .build()
    }

    pub fn delete_gallery_image(
        &self,
        product_id: i64,
        file_id: i64,
    ) -> Result<PendingRequest<Object<DeleteStatus>>, Error> {
        self.call(&DELETE_GALLERY_IMAGE)
            .path("productId", product_id)
            .path("fileId", file_id)
            .build()
    }

    pub fn clear_gallery(
        &self,
        product_id: i64,
    ) -> Result<PendingRequest<Object<DeleteStatus>>, Error> {
        self.call(&CLEAR_GALLERY).path("productId", product_id).build()
    }
}
