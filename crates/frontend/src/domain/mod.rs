pub mod a001_item;
pub mod a002_customer;
pub mod a003_order;
