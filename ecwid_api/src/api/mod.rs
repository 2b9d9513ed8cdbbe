//! Typed endpoint methods, grouped by resource. Each method binds to one
//! entry of [`crate::endpoint::ALL`].

mod categories;
mod classes;
mod combinations;
mod coupons;
mod customers;
mod deleted;
mod orders;
mod products;
mod profile;
