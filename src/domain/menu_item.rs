use serde::{Deserialize, Serialize};

use super::errors::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub restaurant_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image: Option<String>,
    pub vegetarian: Option<bool>,
    pub spicy: Option<bool>,
}

impl MenuItem {
    pub fn validated(self) -> Result<Self, DomainError> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DomainError::InvalidInput(format!(
                "price must be a non-negative number, got {}",
                self.price
            )));
        }
        Ok(self)
    }
}
