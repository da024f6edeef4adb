use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use validator::Validate;

/// Body of `POST /api/coach`.
///
/// Both fields are optional at the serde level so that a missing field and an
/// empty one are rejected the same way, by validation.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CoachRequest {
    #[validate(required, length(min = 1))]
    pub prompt: Option<String>,

    #[serde(rename = "type")]
    #[validate(required, length(min = 1))]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachResponse {
    pub text: String,
}

/// Which coaching tool the page is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoachKind {
    /// Analyse a described situation.
    Scenario,
    /// Refine a draft message.
    Message,
}

impl CoachKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoachKind::Scenario => "scenario",
            CoachKind::Message => "message",
        }
    }
}

impl fmt::Display for CoachKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown coach type '{0}'")]
pub struct UnknownCoachKind(pub String);

impl FromStr for CoachKind {
    type Err = UnknownCoachKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scenario" => Ok(CoachKind::Scenario),
            "message" => Ok(CoachKind::Message),
            other => Err(UnknownCoachKind(other.to_string())),
        }
    }
}
