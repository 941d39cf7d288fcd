//! ScenarioId enum naming the four predefined dilemmas.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Identifier for one of the predefined dilemma scenarios.
///
/// Serialized as a URL-safe slug so it can appear in request paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioId {
    MuseumDay,
    FitForPurpose,
    RugbyMatch,
    SecretsAndLives,
}

impl ScenarioId {
    /// Returns all scenario ids in selector order.
    pub fn all() -> &'static [ScenarioId] {
        &[
            ScenarioId::MuseumDay,
            ScenarioId::FitForPurpose,
            ScenarioId::RugbyMatch,
            ScenarioId::SecretsAndLives,
        ]
    }

    /// Returns the URL slug.
    pub fn slug(&self) -> &'static str {
        match self {
            ScenarioId::MuseumDay => "museum-day",
            ScenarioId::FitForPurpose => "fit-for-purpose",
            ScenarioId::RugbyMatch => "rugby-match",
            ScenarioId::SecretsAndLives => "secrets-and-lives",
        }
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for ScenarioId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|id| id.slug() == s)
            .ok_or_else(|| ValidationError::invalid_format("scenario_id", format!("unknown scenario '{}'", s)))
    }
}
