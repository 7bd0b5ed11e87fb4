//! Key-value persistence port for Cartwheel.
//!
//! Provides a simple, ergonomic API for persisting client state as JSON
//! behind an injectable backend. Stores in `cartwheel-commerce` hold a
//! [`Storage`] handle and never touch the backend directly, so the same
//! store code runs against a browser storage partition, a file, or the
//! in-memory backend used in tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use cartwheel_store::Storage;
//!
//! let storage = Storage::in_memory();
//!
//! // Store a value
//! storage.set("cart", &cart)?;
//!
//! // Retrieve a value
//! let cart: Option<Vec<CartLineItem>> = storage.get("cart")?;
//!
//! // Delete a value
//! storage.delete("cart")?;
//! ```

mod error;
mod kv;

pub use error::StorageError;
pub use kv::{MemoryBackend, Storage, StorageBackend};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{MemoryBackend, Storage, StorageBackend, StorageError};
}
