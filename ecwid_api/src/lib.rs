//! Typed client for the Ecwid REST API v3.
//!
//! ```no_run
//! use ecwid_api::{Client, Paginated, ProductQuery};
//!
//! # fn main() -> Result<(), ecwid_api::Error> {
//! let client = Client::new()?;
//! let store = client.store(1003, "secret_token");
//! let page = store
//!     .search_products(&ProductQuery::default().with_keyword("shirt").with_limit(10))?
//!     .execute()?;
//! for product in &page.items {
//!     println!("{:?}", product.name);
//! }
//! # Ok(())
//! # }
//! ```

mod api;
mod client;
pub mod endpoint;
mod errors;
mod query;
mod request;
pub mod transport;
pub mod types;
mod uri;
pub use self::client::{Client, ClientBuilder, Store, DEFAULT_BASE_URL};
pub use self::errors::Error;
pub use self::query::{
    CategoryQuery, CouponFilter, CouponQuery, CustomerQuery, CustomerSortBy, DeletedQuery,
    OrderQuery, Paginated, Paging, ProductQuery, ProductSortBy, Query,
};
pub use self::request::{Binary, Decode, List, Object, PendingRequest, Shape};
pub use self::uri::UriBuilder;
