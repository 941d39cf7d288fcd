//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands (start, submit, end) are kept apart from queries (get).

pub mod handlers;

pub use handlers::debate::{
    DebateError, SubmitOpinionCommand, SubmitOpinionHandler, SubmitOpinionResult,
};
pub use handlers::session::{
    EndSessionCommand, EndSessionHandler, GetSessionHandler, GetSessionQuery,
    StartSessionCommand, StartSessionHandler,
};
