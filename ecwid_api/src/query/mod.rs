mod common;
pub use self::common::{Paginated, Paging, Query};

mod category;
pub use self::category::CategoryQuery;

mod coupon;
pub use self::coupon::{CouponFilter, CouponQuery};

mod customer;
pub use self::customer::{CustomerQuery, CustomerSortBy};

mod deleted;
pub use self::deleted::DeletedQuery;

mod order;
pub use self::order::OrderQuery;

mod product;
pub use self::product::{ProductQuery, ProductSortBy};
