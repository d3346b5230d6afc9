//! Role journey: the ordered steps a user walks through on the platform
//! (profile, screening, KYC, matching, contract, ...).

use serde::{Deserialize, Serialize};

use super::auth::Role;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JourneyStep {
    pub key: String,
    pub title: String,
    pub status: StepStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Response of `GET /journey?role=<role>`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Journey {
    pub role: Role,
    #[serde(default)]
    pub steps: Vec<JourneyStep>,
}

impl Journey {
    /// The step marked current, or else the first step not yet completed.
    pub fn current_step(&self) -> Option<&JourneyStep> {
        self.steps
            .iter()
            .find(|step| step.status == StepStatus::Current)
            .or_else(|| {
                self.steps
                    .iter()
                    .find(|step| step.status != StepStatus::Completed)
            })
    }

    pub fn completed_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| step.status == StepStatus::Completed)
            .count()
    }

    /// Whole percent of steps completed; an empty journey counts as 0.
    pub fn progress_percent(&self) -> u8 {
        if self.steps.is_empty() {
            return 0;
        }
        let percent = self.completed_count() * 100 / self.steps.len();
        u8::try_from(percent).unwrap_or(100)
    }
}
