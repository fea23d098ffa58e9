use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use serde_json::Value;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::ports::{Collection, Document, DocumentStore, Filter};

/// Process-local document store. Records live as long as the process.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    collections: Mutex<HashMap<Collection, Vec<Document>>>,
    find_calls: AtomicUsize,
    insert_calls: AtomicUsize,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `find_many` calls served so far.
    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    /// Number of `insert_one` calls served so far.
    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<Collection, Vec<Document>>>, DomainError> {
        self.collections
            .lock()
            .map_err(|_| DomainError::StoreUnavailable("in-memory store lock poisoned".into()))
    }
}

fn accepts(doc: &Document, filter: &Filter) -> bool {
    match filter {
        Filter::All => true,
        Filter::IdIn(ids) => ids.contains(&doc.id),
        Filter::FieldEquals { field, value } => {
            doc.body.get(*field).and_then(Value::as_str) == Some(value.as_str())
        }
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn kind(&self) -> &'static str {
        "memory"
    }

    fn find_many(
        &self,
        collection: Collection,
        filter: &Filter,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, DomainError> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        let collections = self.lock()?;
        let limit = limit.map_or(usize::MAX, |l| usize::try_from(l).unwrap_or(0));

        Ok(collections
            .get(&collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| accepts(doc, filter))
                    .take(limit)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    fn insert_one(&self, collection: Collection, body: Value) -> Result<Uuid, DomainError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        let id = Uuid::new_v4();
        self.lock()?
            .entry(collection)
            .or_default()
            .push(Document { id, body });
        Ok(id)
    }

    fn list_collections(&self) -> Result<Vec<String>, DomainError> {
        let mut names: Vec<String> = self
            .lock()?
            .iter()
            .filter(|(_, docs)| !docs.is_empty())
            .map(|(collection, _)| collection.name().to_string())
            .collect();
        names.sort();
        Ok(names)
    }
}
