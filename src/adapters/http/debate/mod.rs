//! Debate HTTP adapter - REST API for scenarios, sessions, and opinions.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::DebateAppState;
pub use routes::debate_router;
