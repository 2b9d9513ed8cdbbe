//! Store categories.

dto! {
    pub struct Category {
        id: i64,
        /// Absent for root categories.
        parent_id: i64,
        /// Sort position among siblings.
        order_by: i64,
        thumbnail_url: String,
        original_image_url: String,
        name: String,
        url: String,
        product_count: i64,
        /// HTML description. Null in category lists.
        description: String,
        enabled: bool,
        product_ids: Vec<i64>,
    }
}
