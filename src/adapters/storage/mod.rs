//! Storage Adapters
//!
//! Implementations of the SessionStore port.
//!
//! ## Available Adapters
//!
//! - **InMemorySessionStore** - Process-local map; sessions vanish on restart
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::InMemorySessionStore;
//!
//! let store = InMemorySessionStore::new();
//! let session = store.get_or_create(None).await;
//! ```

mod in_memory_session_store;

pub use in_memory_session_store::InMemorySessionStore;
