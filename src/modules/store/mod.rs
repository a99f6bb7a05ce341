//! Document store access layer.
//!
//! All interaction with the document store goes through [`DocumentStore`],
//! the gateway that owns connectivity checks and bounded retry. Concrete
//! storage lives behind the [`StoreBackend`] trait so the store can be
//! swapped without touching the entity services.

pub mod gateway;
pub mod memory;

pub use gateway::{from_document, to_document, Document, DocumentStore, StoreBackend, StoreError};
pub use memory::MemoryBackend;
