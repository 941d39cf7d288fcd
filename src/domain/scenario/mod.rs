//! Scenario module - the fixed ethical dilemmas offered for discussion.
//!
//! Scenarios are static reference data. The catalog is built once on first
//! access and never mutated afterwards.

mod catalog;
mod scenario_id;

pub use catalog::{all_scenarios, scenario, Scenario};
pub use scenario_id::ScenarioId;
