//! Registration progress and the rules for moving through it.

use super::step::OnboardingStep;
use crate::error::{OnboardingError, OnboardingResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Steps a patient has completed.
///
/// The set only grows through [`OnboardingState::complete`]; the only way to
/// lose progress is an explicit [`OnboardingState::reset`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingState {
    #[serde(default)]
    completed: BTreeSet<OnboardingStep>,
}

impl OnboardingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_completed(&self, step: OnboardingStep) -> bool {
        self.completed.contains(&step)
    }

    /// Whether `target` can be worked on.
    ///
    /// The first step is always accessible; any other step is accessible
    /// only when every earlier step is completed.
    pub fn is_step_accessible(&self, target: OnboardingStep) -> bool {
        self.first_missing_prerequisite(target).is_none()
    }

    /// Mark `step` as completed.
    ///
    /// Completing an already completed step is a no-op. Returns
    /// [`OnboardingError::StepLocked`] naming the first missing step when
    /// `step` is not yet accessible.
    pub fn complete(&mut self, step: OnboardingStep) -> OnboardingResult<()> {
        if let Some(missing) = self.first_missing_prerequisite(step) {
            return Err(OnboardingError::StepLocked {
                step: step.to_string(),
                missing: missing.to_string(),
            });
        }

        self.completed.insert(step);
        Ok(())
    }

    /// First step not yet completed, or `None` once registration is done.
    pub fn current_step(&self) -> Option<OnboardingStep> {
        OnboardingStep::ALL
            .into_iter()
            .find(|step| !self.is_completed(*step))
    }

    pub fn is_finished(&self) -> bool {
        self.current_step().is_none()
    }

    /// Completed steps in flow order.
    pub fn completed_steps(&self) -> Vec<OnboardingStep> {
        self.completed.iter().copied().collect()
    }

    /// Steps the patient may currently open, in flow order.
    pub fn accessible_steps(&self) -> Vec<OnboardingStep> {
        OnboardingStep::ALL
            .into_iter()
            .filter(|step| self.is_step_accessible(*step))
            .collect()
    }

    pub fn reset(&mut self) {
        self.completed.clear();
    }

    pub fn status(&self) -> OnboardingStatus {
        OnboardingStatus {
            current_step: self.current_step(),
            completed_steps: self.completed_steps(),
            accessible_steps: self.accessible_steps(),
            finished: self.is_finished(),
        }
    }

    fn first_missing_prerequisite(&self, target: OnboardingStep) -> Option<OnboardingStep> {
        target
            .prerequisites()
            .iter()
            .copied()
            .find(|step| !self.is_completed(*step))
    }
}

/// Read-only view of registration progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingStatus {
    pub current_step: Option<OnboardingStep>,
    pub completed_steps: Vec<OnboardingStep>,
    pub accessible_steps: Vec<OnboardingStep>,
    pub finished: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use OnboardingStep::*;

    #[test]
    fn test_fresh_state() {
        let state = OnboardingState::new();

        assert!(state.is_step_accessible(Plan));
        assert!(!state.is_step_accessible(BioData));
        assert!(!state.is_step_accessible(Appointment));
        assert_eq!(state.current_step(), Some(Plan));
        assert_eq!(state.accessible_steps(), vec![Plan]);
    }

    #[test]
    fn test_complete_in_order() {
        let mut state = OnboardingState::new();
        state.complete(Plan).unwrap();
        assert!(state.is_step_accessible(BioData));
        assert!(!state.is_step_accessible(MedicalHistory));

        state.complete(BioData).unwrap();
        state.complete(MedicalHistory).unwrap();
        state.complete(Appointment).unwrap();

        assert!(state.is_finished());
        assert_eq!(state.current_step(), None);
        assert_eq!(state.completed_steps(), OnboardingStep::ALL.to_vec());
    }

    #[test]
    fn test_locked_step_is_rejected() {
        let mut state = OnboardingState::new();
        state.complete(Plan).unwrap();

        match state.complete(MedicalHistory) {
            Err(OnboardingError::StepLocked { step, missing }) => {
                assert_eq!(step, "medical-history");
                assert_eq!(missing, "bio-data");
            }
            other => panic!("expected StepLocked, got {:?}", other),
        }
        assert!(!state.is_completed(MedicalHistory));
    }

    #[test]
    fn test_complete_is_idempotent() {
        let mut state = OnboardingState::new();
        state.complete(Plan).unwrap();
        let before = state.clone();

        state.complete(Plan).unwrap();
        assert_eq!(state, before);
    }

    #[test]
    fn test_earlier_steps_stay_accessible() {
        let mut state = OnboardingState::new();
        state.complete(Plan).unwrap();
        state.complete(BioData).unwrap();

        assert_eq!(state.accessible_steps(), vec![Plan, BioData, MedicalHistory]);
    }

    #[test]
    fn test_reset() {
        let mut state = OnboardingState::new();
        state.complete(Plan).unwrap();
        state.reset();

        assert_eq!(state, OnboardingState::new());
    }

    #[test]
    fn test_state_round_trips_as_json() {
        let mut state = OnboardingState::new();
        state.complete(Plan).unwrap();
        state.complete(BioData).unwrap();

        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"completed":["plan","bio-data"]}"#);
        let parsed: OnboardingState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, state);
    }

    #[test]
    fn test_status_view() {
        let mut state = OnboardingState::new();
        state.complete(Plan).unwrap();

        let status = state.status();
        assert_eq!(status.current_step, Some(BioData));
        assert_eq!(status.completed_steps, vec![Plan]);
        assert!(!status.finished);
    }
}
