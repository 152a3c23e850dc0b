//! Search result types returned by the engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of record a search result points at.
///
/// Variants are declared in discovery order, which is also the tie-break
/// order for equal scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchResultType {
    Appointment,
    Message,
    Caregiver,
    HealthTracker,
    HealthReport,
    HealthNote,
    Payment,
    Page,
}

impl SearchResultType {
    /// All kinds in discovery order.
    pub const ALL: [SearchResultType; 8] = [
        Self::Appointment,
        Self::Message,
        Self::Caregiver,
        Self::HealthTracker,
        Self::HealthReport,
        Self::HealthNote,
        Self::Payment,
        Self::Page,
    ];

    /// Tag used in result ids and serialized output.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Appointment => "appointment",
            Self::Message => "message",
            Self::Caregiver => "caregiver",
            Self::HealthTracker => "health-tracker",
            Self::HealthReport => "health-report",
            Self::HealthNote => "health-note",
            Self::Payment => "payment",
            Self::Page => "page",
        }
    }
}

impl fmt::Display for SearchResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Optional display details attached to a result.
///
/// Keys populated per kind:
/// - appointment: `status`, `date`, `category` (appointment type)
/// - message: `status` ("read"/"unread"), `date`, `author` (sender)
/// - caregiver: `category` (specialty)
/// - health-tracker: `date`
/// - health-report: `category` (report type), `author`, `date`
/// - health-note: `author`, `date`
/// - payment: `status`, `amount`, `category` (plan code), `date`
/// - page: no metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResultMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
}

impl ResultMetadata {
    /// Whether no key is populated.
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.date.is_none()
            && self.category.is_none()
            && self.author.is_none()
            && self.amount.is_none()
    }

    /// `Some(self)` unless every key is empty.
    pub fn non_empty(self) -> Option<Self> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

/// One ranked match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Kind-prefixed id, unique within one result set (e.g. `appointment-42`)
    pub id: String,

    #[serde(rename = "type")]
    pub result_type: SearchResultType,

    pub title: String,

    pub description: String,

    /// Portal route to open on selection
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ResultMetadata>,

    /// Relevance score, always positive in returned results
    pub match_score: u32,
}
