//! Dilemma Debate - Ethical dilemma discussion practice
//!
//! Learners pick one of a fixed set of moral dilemmas, state an opinion with
//! reasons, and receive structured Socratic feedback from a chat-completion
//! model. Each browser session keeps its own ordered discussion history.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
