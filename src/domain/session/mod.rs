//! Session domain module.
//!
//! A session is the ephemeral, per-browser container for one user's debate
//! history. It is created on first access, grows by one entry per successful
//! submission, and disappears when the session ends.

mod aggregate;
mod errors;

pub use aggregate::{ConversationEntry, Session};
pub use errors::SessionError;
