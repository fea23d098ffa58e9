use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use uuid::Uuid;

use super::errors::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Restaurant,
    MenuItem,
    Order,
}

impl Collection {
    pub fn name(self) -> &'static str {
        match self {
            Collection::Restaurant => "restaurant",
            Collection::MenuItem => "menuitem",
            Collection::Order => "order",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    All,
    /// Records whose id is one of the given ids.
    IdIn(Vec<Uuid>),
    /// Records whose top-level string field equals `value`.
    FieldEquals { field: &'static str, value: String },
}

/// A stored record: the store-assigned id plus the JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: Uuid,
    pub body: Value,
}

pub trait DocumentStore: Send + Sync + 'static {
    /// Short name of the backing implementation, reported by diagnostics.
    fn kind(&self) -> &'static str;

    /// Records of `collection` matching `filter`, in insertion order.
    /// `limit` of `None` returns every match.
    fn find_many(
        &self,
        collection: Collection,
        filter: &Filter,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, DomainError>;

    fn insert_one(&self, collection: Collection, body: Value) -> Result<Uuid, DomainError>;

    /// Names of the collections that currently hold at least one record.
    fn list_collections(&self) -> Result<Vec<String>, DomainError>;
}

impl<S: DocumentStore + ?Sized> DocumentStore for Arc<S> {
    fn kind(&self) -> &'static str {
        (**self).kind()
    }

    fn find_many(
        &self,
        collection: Collection,
        filter: &Filter,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, DomainError> {
        (**self).find_many(collection, filter, limit)
    }

    fn insert_one(&self, collection: Collection, body: Value) -> Result<Uuid, DomainError> {
        (**self).insert_one(collection, body)
    }

    fn list_collections(&self) -> Result<Vec<String>, DomainError> {
        (**self).list_collections()
    }
}

/// Parses a caller-supplied identifier in the store's id format.
pub fn parse_id(raw: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw).map_err(|_| DomainError::MalformedReference(raw.to_string()))
}
