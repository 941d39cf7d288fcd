//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, timestamps, errors)
//! - `scenario` - The fixed dilemma catalog
//! - `session` - Per-browser conversation history
//! - `debate` - Facilitator prompt composition

pub mod debate;
pub mod foundation;
pub mod scenario;
pub mod session;
