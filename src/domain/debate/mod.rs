//! Debate module - prompt composition for facilitator feedback.

mod prompt;

pub use prompt::{
    compose_user_message, FacilitatorPrompt, MAX_OUTPUT_TOKENS, SYSTEM_INSTRUCTION, TEMPERATURE,
};
