pub mod a001_category;
pub mod a002_product;
pub mod a003_kitchen_design;
pub mod common;
