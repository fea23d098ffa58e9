pub mod document_store;
pub mod memory;
pub mod models;

pub use document_store::DieselDocumentStore;
pub use memory::InMemoryDocumentStore;
