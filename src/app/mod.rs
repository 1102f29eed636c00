pub mod product;
pub mod shop;
