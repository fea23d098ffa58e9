use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::menu_item::MenuItem;
use crate::domain::order::Order;
use crate::domain::ports::{Collection, Document, DocumentStore, Filter};
use crate::domain::pricing::price_order;
use crate::domain::restaurant::Restaurant;

/// A decoded record together with its store-assigned id.
#[derive(Debug, Clone, PartialEq)]
pub struct Stored<T> {
    pub id: Uuid,
    pub record: T,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics {
    pub store: &'static str,
    pub connected: bool,
    pub collections: Vec<String>,
    pub error: Option<String>,
}

#[derive(Clone)]
pub struct FoodService<S> {
    store: S,
}

impl<S: DocumentStore> FoodService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list_restaurants(
        &self,
        limit: Option<i64>,
    ) -> Result<Vec<Stored<Restaurant>>, DomainError> {
        self.store
            .find_many(Collection::Restaurant, &Filter::All, limit)?
            .into_iter()
            .map(decode)
            .collect()
    }

    pub fn create_restaurant(&self, restaurant: Restaurant) -> Result<Uuid, DomainError> {
        let id = self.store.insert_one(Collection::Restaurant, encode(&restaurant)?)?;
        log::info!("Created restaurant {} ({})", id, restaurant.name);
        Ok(id)
    }

    pub fn list_menu(
        &self,
        restaurant_id: Option<String>,
        limit: Option<i64>,
    ) -> Result<Vec<Stored<MenuItem>>, DomainError> {
        let filter = match restaurant_id {
            Some(value) if !value.is_empty() => Filter::FieldEquals {
                field: "restaurant_id",
                value,
            },
            _ => Filter::All,
        };

        self.store
            .find_many(Collection::MenuItem, &filter, limit)?
            .into_iter()
            .map(decode)
            .collect()
    }

    pub fn create_menu_item(&self, item: MenuItem) -> Result<Uuid, DomainError> {
        let id = self.store.insert_one(Collection::MenuItem, encode(&item)?)?;
        log::info!("Created menu item {} for restaurant {}", id, item.restaurant_id);
        Ok(id)
    }

    /// Prices the order and persists it. Nothing is written when pricing fails.
    pub fn create_order(&self, order: Order) -> Result<Uuid, DomainError> {
        let priced = price_order(&self.store, order).inspect_err(|e| {
            log::warn!("Rejected order: {}", e);
        })?;
        let id = self.store.insert_one(Collection::Order, encode(&priced)?)?;
        log::info!(
            "Created order {} with {} item(s), total {:.2}",
            id,
            priced.items.len(),
            priced.total
        );
        Ok(id)
    }

    /// Probes the store. Failures are reported in the result, not returned.
    pub fn diagnostics(&self) -> Diagnostics {
        match self.store.list_collections() {
            Ok(collections) => Diagnostics {
                store: self.store.kind(),
                connected: true,
                collections,
                error: None,
            },
            Err(e) => {
                log::error!("Store diagnostics failed: {}", e);
                Diagnostics {
                    store: self.store.kind(),
                    connected: false,
                    collections: Vec::new(),
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

fn encode<T: Serialize>(record: &T) -> Result<serde_json::Value, DomainError> {
    serde_json::to_value(record).map_err(|e| DomainError::Internal(e.to_string()))
}

fn decode<T: DeserializeOwned>(doc: Document) -> Result<Stored<T>, DomainError> {
    let record = serde_json::from_value(doc.body).map_err(|e| {
        DomainError::Internal(format!("document {} is not decodable: {}", doc.id, e))
    })?;
    Ok(Stored { id: doc.id, record })
}
