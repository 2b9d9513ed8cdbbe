use crate::{
    endpoint::{
        DELETE_EMAIL_LOGO, DELETE_INVOICE_LOGO, DELETE_STORE_LOGO, GET_LATEST_STATS, GET_PROFILE,
        UPDATE_PROFILE, UPLOAD_EMAIL_LOGO, UPLOAD_INVOICE_LOGO, UPLOAD_STORE_LOGO,
    },
    request::{Object, PendingRequest},
    types::{DeleteStatus, LatestStats, Profile, UpdateStatus, UploadStatus},
    Error, Store,
};

impl Store<'_> {
    pub fn get_profile(&self) -> Result<PendingRequest<Object<Profile>>, Error> {
        self.call(&GET_PROFILE).build()
    }

    pub fn update_profile(
        &self,
        profile: &Profile,
    ) -> Result<PendingRequest<Object<UpdateStatus>>, Error> {
        self.call(&UPDATE_PROFILE).json(profile).build()
    }

    pub fn upload_store_logo(
        &self,
        image: impl Into<Vec<u8>>,
    ) -> Result<PendingRequest<Object<UploadStatus>>, Error> {
        self.call(&UPLOAD_STORE_LOGO).upload(image.into()).build()
    }

    pub fn delete_store_logo(&self) -> Result<PendingRequest<Object<DeleteStatus>>, Error> {
        self.call(&DELETE_STORE_LOGO).build()
    }

    pub fn upload_invoice_logo(
        &self,
        image: impl Into<Vec<u8>>,
    ) -> Result<PendingRequest<Object<UploadStatus>>, Error> {
        self.call(&UPLOAD_INVOICE_LOGO).upload(image.into()).build()
    }

    pub fn delete_invoice_logo(&self) -> Result<PendingRequest<Object<DeleteStatus>>, Error> {
        self.call(&DELETE_INVOICE_LOGO).build()
    }

    pub fn upload_email_logo(
        &self,
        image: impl Into<Vec<u8>>,
    ) -> Result<PendingRequest<Object<UploadStatus>>, Error> {
        self.call(&UPLOAD_EMAIL_LOGO).upload(image.into()).build()
    }

    pub fn delete_email_logo(&self) -> Result<PendingRequest<Object<DeleteStatus>>, Error> {
        self.call(&DELETE_EMAIL_LOGO).build()
    }

    /// Last update times of the catalog, orders and profile.
    pub fn get_latest_stats(&self) -> Result<PendingRequest<Object<LatestStats>>, Error> {
        self.call(&GET_LATEST_STATS).build()
    }
}
