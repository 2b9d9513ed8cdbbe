use crate::{
    endpoint::{CREATE_CLASS, DELETE_CLASS, GET_CLASS, GET_CLASSES, UPDATE_CLASS},
    request::{List, Object, PendingRequest},
    types::{CreateStatus, DeleteStatus, ProductClass, UpdateStatus},
    Error, Store,
};

impl Store<'_> {
    /// Every product class (product type) defined in the store.
    pub fn get_classes(&self) -> Result<PendingRequest<List<ProductClass>>, Error> {
        self.call(&GET_CLASSES).build()
    }

    pub fn get_class(&self, class_id: i64) -> Result<PendingRequest<Object<ProductClass>>, Error> {
        self.call(&GET_CLASS).path("classId", class_id).build()
    }

    pub fn create_class(
        &self,
        class: &ProductClass,
    ) -> Result<PendingRequest<Object<CreateStatus>>, Error> {
        self.call(&CREATE_CLASS).json(class).build()
    }

    pub fn update_class(
        &self,
        class_id: i64,
        class: &ProductClass,
    ) -> Result<PendingRequest<Object<UpdateStatus>>, Error> {
        self.call(&UPDATE_CLASS)
            .path("classId", class_id)
            .json(class)
            .build()
    }

    pub fn delete_class(
        &self,
        class_id: i64,
    ) -> Result<PendingRequest<Object<DeleteStatus>>, Error> {
        self.call(&DELETE_CLASS).path("classId", class_id).build()
    }
}
