//! Persistence of generated graphs.

pub mod json_store;

pub use json_store::{DocumentStore, JsonDocumentStore, StorageLayout};
