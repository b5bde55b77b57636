pub mod cart_item;
pub mod customer;
pub mod product;
