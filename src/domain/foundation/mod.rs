//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that the scenario,
//! session, and debate modules build on.

mod errors;
mod ids;
mod timestamp;

pub use errors::ValidationError;
pub use ids::SessionId;
pub use timestamp::Timestamp;
