//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - OpenAI chat completions and a scriptable mock
//! - `http` - axum REST API and the browser page
//! - `storage` - In-memory session store

pub mod ai;
pub mod http;
pub mod storage;
