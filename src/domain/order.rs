use serde::{Deserialize, Serialize};

use super::errors::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub menu_item_id: String,
    pub quantity: i32,
}

/// An order as received from a caller. `total` is `None` when it still has
/// to be computed from menu prices.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub customer_name: String,
    pub address: String,
    pub phone: String,
    pub restaurant_id: String,
    pub items: Vec<OrderItem>,
    pub notes: Option<String>,
    pub total: Option<f64>,
}

/// An order whose total is known. This is the record that gets persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedOrder {
    pub customer_name: String,
    pub address: String,
    pub phone: String,
    pub restaurant_id: String,
    pub items: Vec<OrderItem>,
    pub notes: Option<String>,
    pub total: f64,
}

impl Order {
    pub fn validated(self) -> Result<Self, DomainError> {
        if let Some(item) = self.items.iter().find(|i| i.quantity < 1) {
            return Err(DomainError::InvalidInput(format!(
                "quantity for menu item {} must be at least 1, got {}",
                item.menu_item_id, item.quantity
            )));
        }
        if let Some(total) = self.total {
            if !total.is_finite() || total < 0.0 {
                return Err(DomainError::InvalidInput(format!(
                    "total must be a non-negative number, got {total}"
                )));
            }
        }
        Ok(self)
    }

    pub fn with_total(self, total: f64) -> PricedOrder {
        PricedOrder {
            customer_name: self.customer_name,
            address: self.address,
            phone: self.phone,
            restaurant_id: self.restaurant_id,
            items: self.items,
            notes: self.notes,
            total,
        }
    }
}
