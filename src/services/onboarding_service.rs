//! Onboarding service layer.
//!
//! Persists each patient's registration progress in the key-value store.

use crate::domain::PatientId;
use crate::error::{OnboardingError, OnboardingResult, StoreError};
use crate::onboarding::{OnboardingState, OnboardingStatus, OnboardingStep};
use crate::storage::KeyValueStore;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Onboarding service trait for business operations.
#[async_trait]
pub trait OnboardingService: Send + Sync {
    /// Current registration progress for `patient_id`.
    async fn status(&self, patient_id: &str) -> OnboardingResult<OnboardingStatus>;

    /// Whether the step named `step` may be opened.
    async fn is_step_accessible(&self, patient_id: &str, step: &str) -> OnboardingResult<bool>;

    /// Mark the step named `step` as completed and return the new progress.
    ///
    /// Fails with `StepLocked` when an earlier step is still open.
    async fn complete_step(&self, patient_id: &str, step: &str)
        -> OnboardingResult<OnboardingStatus>;

    /// Forget all progress for `patient_id`.
    async fn reset(&self, patient_id: &str) -> OnboardingResult<()>;
}

/// Default implementation of OnboardingService.
pub struct OnboardingServiceImpl {
    store: Arc<dyn KeyValueStore>,
    // Serializes read-modify-write of stored progress
    lock: Mutex<()>,
}

impl OnboardingServiceImpl {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            lock: Mutex::new(()),
        }
    }

    fn validate_patient(patient_id: &str) -> OnboardingResult<PatientId> {
        PatientId::new(patient_id).map_err(|e| OnboardingError::InvalidRequest(e.to_string()))
    }

    fn state_key(patient: &PatientId) -> String {
        format!("onboarding:{}", patient)
    }

    async fn load(&self, patient: &PatientId) -> OnboardingResult<OnboardingState> {
        match self.store.get(&Self::state_key(patient)).await? {
            Some(json) => Ok(serde_json::from_str(&json).map_err(StoreError::from)?),
            None => Ok(OnboardingState::new()),
        }
    }

    async fn save(&self, patient: &PatientId, state: &OnboardingState) -> OnboardingResult<()> {
        let json = serde_json::to_string(state).map_err(StoreError::from)?;
        self.store.set(&Self::state_key(patient), json).await?;
        Ok(())
    }
}

#[async_trait]
impl OnboardingService for OnboardingServiceImpl {
    async fn status(&self, patient_id: &str) -> OnboardingResult<OnboardingStatus> {
        let patient = Self::validate_patient(patient_id)?;
        Ok(self.load(&patient).await?.status())
    }

    async fn is_step_accessible(&self, patient_id: &str, step: &str) -> OnboardingResult<bool> {
        let patient = Self::validate_patient(patient_id)?;
        let step: OnboardingStep = step.parse()?;
        Ok(self.load(&patient).await?.is_step_accessible(step))
    }

    async fn complete_step(
        &self,
        patient_id: &str,
        step: &str,
    ) -> OnboardingResult<OnboardingStatus> {
        let patient = Self::validate_patient(patient_id)?;
        let step: OnboardingStep = step.parse()?;

        let _guard = self.lock.lock().await;
        let mut state = self.load(&patient).await?;
        if state.is_completed(step) {
            return Ok(state.status());
        }

        state.complete(step)?;
        self.save(&patient, &state).await?;

        tracing::info!(patient_id = %patient, step = %step, "Onboarding step completed");
        Ok(state.status())
    }

    async fn reset(&self, patient_id: &str) -> OnboardingResult<()> {
        let patient = Self::validate_patient(patient_id)?;
        let _guard = self.lock.lock().await;
        self.store.remove(&Self::state_key(&patient)).await?;
        Ok(())
    }
}
