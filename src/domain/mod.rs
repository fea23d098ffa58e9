pub mod errors;
pub mod menu_item;
pub mod order;
pub mod ports;
pub mod pricing;
pub mod restaurant;
