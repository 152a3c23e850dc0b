use crate::error::OnboardingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One step of patient registration, ordered as the flow runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OnboardingStep {
    /// Choose a subscription plan
    Plan,
    /// Personal details
    BioData,
    MedicalHistory,
    /// Book the first appointment
    Appointment,
}

impl OnboardingStep {
    /// All steps in flow order.
    pub const ALL: [OnboardingStep; 4] = [
        OnboardingStep::Plan,
        OnboardingStep::BioData,
        OnboardingStep::MedicalHistory,
        OnboardingStep::Appointment,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            OnboardingStep::Plan => "plan",
            OnboardingStep::BioData => "bio-data",
            OnboardingStep::MedicalHistory => "medical-history",
            OnboardingStep::Appointment => "appointment",
        }
    }

    /// Zero-based position in the flow.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn is_first(&self) -> bool {
        self.index() == 0
    }

    /// Steps that must be completed before this one.
    pub fn prerequisites(&self) -> &'static [OnboardingStep] {
        let all: &'static [OnboardingStep] = &Self::ALL;
        &all[..self.index()]
    }

    pub fn next(&self) -> Option<OnboardingStep> {
        Self::ALL.get(self.index() + 1).copied()
    }
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for OnboardingStep {
    type Err = OnboardingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|step| step.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| OnboardingError::UnknownStep(s.to_string()))
    }
}
