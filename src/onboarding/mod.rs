//! Patient registration flow.
//!
//! Registration is a fixed sequence of steps. A step unlocks only once every
//! step before it is complete, and completed steps stay completed.

pub mod flow;
pub mod step;

pub use flow::{OnboardingState, OnboardingStatus};
pub use step::OnboardingStep;
