//! Debate command handlers.

mod errors;
mod submit_opinion;

pub use errors::DebateError;
pub use submit_opinion::{SubmitOpinionCommand, SubmitOpinionHandler, SubmitOpinionResult};
