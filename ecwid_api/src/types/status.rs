//! Results of mutating calls and the API's error payload.

dto! {
    /// Returned after creating an entity.
    pub struct CreateStatus {
        /// ID of the new entity.
        id: i64,
    }
}

dto! {
    /// Returned after creating a discount coupon.
    pub struct CreateCouponStatus {
        /// Code of the new coupon.
        code: String,
    }
}

dto! {
    pub struct UpdateStatus {
        /// Number of entities updated; `1` on success, `0` otherwise.
        update_count: i64,
    }
}

dto! {
    pub struct DeleteStatus {
        /// Number of entities deleted.
        delete_count: i64,
    }
}

dto! {
    /// Returned after an image or file upload.
    pub struct UploadStatus {
        /// ID of the uploaded file, or of the entity the image was attached to.
        id: i64,
    }
}

dto! {
    /// Error payload sent with 4xx and 5xx responses ("not found",
    /// "non-unique", "limit exceeded", "retry later" and so on all share
    /// this shape).
    pub struct ErrorMessage {
        error_message: String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_payloads() {
        let status: DeleteStatus = serde_json::from_str(r#"{"deleteCount":3}"#).unwrap();
        assert_eq!(status.delete_count.value(), Some(&3));

        let status: UpdateStatus = serde_json::from_str(r#"{"updateCount":1}"#).unwrap();
        assert_eq!(status.update_count.value(), Some(&1));

        let status: CreateCouponStatus = serde_json::from_str(r#"{"code":"SPRING"}"#).unwrap();
        assert_eq!(status.code.value().map(String::as_str), Some("SPRING"));
    }
}
