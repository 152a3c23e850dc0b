//! Health record models: tracker readings, reports and notes.

use super::fields::{deserialize_id, deserialize_null_default, deserialize_optional_text, PersonRef};
use serde::{Deserialize, Serialize};

/// A named reading inside a tracker entry (e.g. "temperature" = "36.8").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackerMetric {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(
        deserialize_with = "deserialize_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<String>,
}

impl TrackerMetric {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
        }
    }
}

/// One health-tracker entry with vitals recorded by a patient or caregiver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthTracker {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    /// Free-form readings
    #[serde(deserialize_with = "deserialize_null_default", skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<TrackerMetric>,

    /// Blood glucose
    #[serde(
        deserialize_with = "deserialize_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub glucose: Option<String>,

    /// Blood pressure (e.g. "120/80")
    #[serde(
        alias = "pressure",
        deserialize_with = "deserialize_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub blood_pressure: Option<String>,

    #[serde(
        deserialize_with = "deserialize_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub weight: Option<String>,

    #[serde(
        deserialize_with = "deserialize_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub pulse: Option<String>,

    /// When the readings were taken
    #[serde(alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<String>,
}

/// A clinical report attached to the patient's health record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthReport {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    /// Report name (e.g. "Blood Test Results")
    #[serde(alias = "title", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Report category (e.g. "lab", "radiology")
    #[serde(alias = "type", skip_serializing_if = "Option::is_none")]
    pub report_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<PersonRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl HealthReport {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn author_name(&self) -> String {
        self.author.as_ref().map(PersonRef::full_name).unwrap_or_default()
    }
}

/// A note written into the patient's health record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthNote {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Note text (may contain HTML from the rich-text editor)
    #[serde(alias = "content", skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<PersonRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl HealthNote {
    pub fn new(id: impl Into<String>, title: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: Some(title.into()),
            note: Some(note.into()),
            ..Default::default()
        }
    }

    pub fn author_name(&self) -> String {
        self.author.as_ref().map(PersonRef::full_name).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_with_numeric_vitals() {
        let tracker: HealthTracker = serde_json::from_str(
            r#"{
                "id": 9,
                "metrics": [{"name": "temperature", "value": 36.8}],
                "glucose": 110,
                "pressure": "120/80",
                "weight": null,
                "createdAt": "2025-01-02T08:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(tracker.id, "9");
        assert_eq!(tracker.metrics, vec![TrackerMetric::new("temperature", "36.8")]);
        assert_eq!(tracker.glucose.as_deref(), Some("110"));
        assert_eq!(tracker.blood_pressure.as_deref(), Some("120/80"));
        assert_eq!(tracker.weight, None);
        assert_eq!(tracker.recorded_at.as_deref(), Some("2025-01-02T08:00:00Z"));
    }

    #[test]
    fn test_tracker_null_metrics() {
        let tracker: HealthTracker = serde_json::from_str(r#"{"id": "t1", "metrics": null}"#).unwrap();
        assert!(tracker.metrics.is_empty());
    }

    #[test]
    fn test_report_aliases() {
        let report: HealthReport = serde_json::from_str(
            r#"{"id": "r1", "title": "Blood Test Results", "type": "lab",
                "author": {"firstName": "Tunde", "lastName": "Ade"}}"#,
        )
        .unwrap();

        assert_eq!(report.name.as_deref(), Some("Blood Test Results"));
        assert_eq!(report.report_type.as_deref(), Some("lab"));
        assert_eq!(report.author_name(), "Tunde Ade");
    }

    #[test]
    fn test_note_without_author() {
        let note = HealthNote::new("n1", "Allergies", "Penicillin");
        assert_eq!(note.author_name(), "");
    }
}
