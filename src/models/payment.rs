//! Payment notification model for subscription billing.

use super::fields::{deserialize_id, deserialize_optional_text};
use serde::{Deserialize, Serialize};

/// A billing event pushed to the portal (charge, renewal, failure).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentNotification {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    /// Payment processor reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(
        deserialize_with = "deserialize_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<String>,

    /// Processor status (e.g. "success", "failed")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Human-readable notification text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Subscription plan the payment applies to
    #[serde(alias = "plan", skip_serializing_if = "Option::is_none")]
    pub plan_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl PaymentNotification {
    pub fn new(id: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            reference: Some(reference.into()),
            ..Default::default()
        }
    }
}
