pub mod food_service;

pub use food_service::{Diagnostics, FoodService, Stored};
