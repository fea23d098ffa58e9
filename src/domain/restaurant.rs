use serde::{Deserialize, Serialize};

use super::errors::DomainError;

pub const DEFAULT_RATING: f64 = 4.5;
pub const DEFAULT_DELIVERY_TIME: &str = "25-35 min";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub cuisine: Option<String>,
    pub rating: Option<f64>,
    pub delivery_time: Option<String>,
}

impl Restaurant {
    /// Checks field constraints, returning the record unchanged when they hold.
    pub fn validated(self) -> Result<Self, DomainError> {
        if let Some(rating) = self.rating {
            if !(0.0..=5.0).contains(&rating) {
                return Err(DomainError::InvalidInput(format!(
                    "rating must be between 0 and 5, got {rating}"
                )));
            }
        }
        Ok(self)
    }
}
