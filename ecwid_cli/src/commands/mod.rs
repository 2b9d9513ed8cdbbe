pub mod categories;
pub mod coupons;
pub mod customers;
pub mod deleted;
pub mod download;
pub mod orders;
pub mod products;
pub mod profile;
