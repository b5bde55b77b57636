pub mod auth;
pub mod cart;
pub mod customer;
pub mod product;
