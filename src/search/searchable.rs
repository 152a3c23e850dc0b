//! Per-kind projections: searchable text for scoring, display fields for results.

use super::pages::StaticPage;
use super::result::{ResultMetadata, SearchResult, SearchResultType};
use super::text::{format_date, join_fields, strip_html, truncate_chars};
use crate::models::{
    Appointment, Caregiver, HealthNote, HealthReport, HealthTracker, Message, PaymentNotification,
};

/// Maximum characters of free text shown in a result description.
const DESCRIPTION_MAX_CHARS: usize = 100;

/// A record the engine can score and turn into a [`SearchResult`].
///
/// `searchable_text` feeds the scorer only; the display methods are called
/// only for records that matched.
pub trait Searchable {
    /// Kind tag for results built from this record type.
    const KIND: SearchResultType;

    /// Record id without the kind prefix.
    fn record_id(&self) -> &str;

    /// Space-joined fields used for scoring.
    fn searchable_text(&self) -> String;

    fn title(&self) -> String;

    fn description(&self) -> String;

    fn url(&self) -> String;

    fn metadata(&self) -> Option<ResultMetadata> {
        None
    }

    /// Build a result carrying `score`.
    fn to_result(&self, score: u32) -> SearchResult {
        SearchResult {
            id: format!("{}-{}", Self::KIND.tag(), self.record_id()),
            result_type: Self::KIND,
            title: self.title(),
            description: self.description(),
            url: self.url(),
            metadata: self.metadata(),
            match_score: score,
        }
    }
}

/// Join the non-empty parts with ` - `.
fn join_present(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .flatten()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" - ")
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl Searchable for Appointment {
    const KIND: SearchResultType = SearchResultType::Appointment;

    fn record_id(&self) -> &str {
        &self.id
    }

    fn searchable_text(&self) -> String {
        let name = self.display_name();
        let date = self.date.as_deref().map(format_date);
        join_fields([
            name.as_deref(),
            self.appointment_type.as_deref(),
            date.as_deref(),
            self.status.as_deref(),
            self.location.as_deref(),
            self.note.as_deref(),
        ])
    }

    fn title(&self) -> String {
        match self.display_name() {
            Some(name) => format!("Appointment with {}", name),
            None => "Appointment".to_string(),
        }
    }

    fn description(&self) -> String {
        let date = self.date.as_deref().map(format_date);
        let description = join_present(&[
            self.appointment_type.as_deref(),
            date.as_deref(),
            self.time.as_deref(),
        ]);
        if description.is_empty() {
            "Scheduled appointment".to_string()
        } else {
            description
        }
    }

    fn url(&self) -> String {
        format!("/appointments/{}", self.id)
    }

    fn metadata(&self) -> Option<ResultMetadata> {
        ResultMetadata {
            status: non_blank(self.status.as_deref()),
            date: non_blank(self.date.as_deref().map(format_date).as_deref()),
            category: non_blank(self.appointment_type.as_deref()),
            ..Default::default()
        }
        .non_empty()
    }
}

impl Searchable for Message {
    const KIND: SearchResultType = SearchResultType::Message;

    fn record_id(&self) -> &str {
        &self.id
    }

    fn searchable_text(&self) -> String {
        let sender = self.sender_display_name();
        let body = self.body.as_deref().map(strip_html);
        join_fields([Some(sender.as_str()), body.as_deref()])
    }

    fn title(&self) -> String {
        let sender = self.sender_display_name();
        if sender.is_empty() {
            "Message".to_string()
        } else {
            sender
        }
    }

    fn description(&self) -> String {
        self.body
            .as_deref()
            .map(|body| truncate_chars(&strip_html(body), DESCRIPTION_MAX_CHARS))
            .unwrap_or_default()
    }

    fn url(&self) -> String {
        format!("/messages/{}", self.id)
    }

    fn metadata(&self) -> Option<ResultMetadata> {
        let sender = self.sender_display_name();
        ResultMetadata {
            status: self
                .is_read
                .map(|read| (if read { "read" } else { "unread" }).to_string()),
            date: non_blank(self.created_at.as_deref().map(format_date).as_deref()),
            author: non_blank(Some(sender.as_str())),
            ..Default::default()
        }
        .non_empty()
    }
}

impl Searchable for Caregiver {
    const KIND: SearchResultType = SearchResultType::Caregiver;

    fn record_id(&self) -> &str {
        &self.id
    }

    fn searchable_text(&self) -> String {
        join_fields([self.first_name.as_deref(), self.last_name.as_deref()])
    }

    fn title(&self) -> String {
        let name = self.full_name();
        if name.is_empty() {
            "Caregiver".to_string()
        } else {
            name
        }
    }

    fn description(&self) -> String {
        let description = join_present(&[self.specialty.as_deref(), self.location.as_deref()]);
        if description.is_empty() {
            "Caregiver".to_string()
        } else {
            description
        }
    }

    fn url(&self) -> String {
        format!("/caregivers/{}", self.id)
    }

    fn metadata(&self) -> Option<ResultMetadata> {
        ResultMetadata {
            category: non_blank(self.specialty.as_deref()),
            ..Default::default()
        }
        .non_empty()
    }
}

impl Searchable for HealthTracker {
    const KIND: SearchResultType = SearchResultType::HealthTracker;

    fn record_id(&self) -> &str {
        &self.id
    }

    fn searchable_text(&self) -> String {
        let mut fields: Vec<Option<&str>> = Vec::with_capacity(self.metrics.len() * 2 + 4);
        for metric in &self.metrics {
            fields.push(metric.name.as_deref());
            fields.push(metric.value.as_deref());
        }
        fields.extend([
            self.glucose.as_deref(),
            self.blood_pressure.as_deref(),
            self.weight.as_deref(),
            self.pulse.as_deref(),
        ]);
        join_fields(fields)
    }

    fn title(&self) -> String {
        match non_blank(self.recorded_at.as_deref()) {
            Some(recorded_at) => format!("Health Tracker - {}", format_date(&recorded_at)),
            None => "Health Tracker Entry".to_string(),
        }
    }

    fn description(&self) -> String {
        let vitals: Vec<String> = [
            ("Glucose", self.glucose.as_deref()),
            ("Blood pressure", self.blood_pressure.as_deref()),
            ("Weight", self.weight.as_deref()),
            ("Pulse", self.pulse.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, value)| non_blank(value).map(|v| format!("{}: {}", label, v)))
        .collect();

        if vitals.is_empty() {
            format!("{} readings", self.metrics.len())
        } else {
            vitals.join(", ")
        }
    }

    fn url(&self) -> String {
        "/health-tracker".to_string()
    }

    fn metadata(&self) -> Option<ResultMetadata> {
        ResultMetadata {
            date: non_blank(self.recorded_at.as_deref().map(format_date).as_deref()),
            ..Default::default()
        }
        .non_empty()
    }
}

impl Searchable for HealthReport {
    const KIND: SearchResultType = SearchResultType::HealthReport;

    fn record_id(&self) -> &str {
        &self.id
    }

    fn searchable_text(&self) -> String {
        let author = self.author_name();
        join_fields([
            self.name.as_deref(),
            self.report_type.as_deref(),
            self.summary.as_deref(),
            Some(author.as_str()),
        ])
    }

    fn title(&self) -> String {
        non_blank(self.name.as_deref()).unwrap_or_else(|| "Health Report".to_string())
    }

    fn description(&self) -> String {
        match non_blank(self.summary.as_deref()) {
            Some(summary) => truncate_chars(&summary, DESCRIPTION_MAX_CHARS),
            None => self.report_type.clone().unwrap_or_default(),
        }
    }

    fn url(&self) -> String {
        format!("/health-records/reports/{}", self.id)
    }

    fn metadata(&self) -> Option<ResultMetadata> {
        let author = self.author_name();
        ResultMetadata {
            category: non_blank(self.report_type.as_deref()),
            author: non_blank(Some(author.as_str())),
            date: non_blank(self.created_at.as_deref().map(format_date).as_deref()),
            ..Default::default()
        }
        .non_empty()
    }
}

impl Searchable for HealthNote {
    const KIND: SearchResultType = SearchResultType::HealthNote;

    fn record_id(&self) -> &str {
        &self.id
    }

    fn searchable_text(&self) -> String {
        let author = self.author_name();
        let note = self.note.as_deref().map(strip_html);
        join_fields([self.title.as_deref(), note.as_deref(), Some(author.as_str())])
    }

    fn title(&self) -> String {
        non_blank(self.title.as_deref()).unwrap_or_else(|| "Health Note".to_string())
    }

    fn description(&self) -> String {
        self.note
            .as_deref()
            .map(|note| truncate_chars(&strip_html(note), DESCRIPTION_MAX_CHARS))
            .unwrap_or_default()
    }

    fn url(&self) -> String {
        format!("/health-records/notes/{}", self.id)
    }

    fn metadata(&self) -> Option<ResultMetadata> {
        let author = self.author_name();
        ResultMetadata {
            author: non_blank(Some(author.as_str())),
            date: non_blank(self.created_at.as_deref().map(format_date).as_deref()),
            ..Default::default()
        }
        .non_empty()
    }
}

impl Searchable for PaymentNotification {
    const KIND: SearchResultType = SearchResultType::Payment;

    fn record_id(&self) -> &str {
        &self.id
    }

    fn searchable_text(&self) -> String {
        join_fields([
            self.reference.as_deref(),
            self.amount.as_deref(),
            self.status.as_deref(),
            self.message.as_deref(),
            self.plan_code.as_deref(),
        ])
    }

    fn title(&self) -> String {
        match non_blank(self.reference.as_deref()) {
            Some(reference) => format!("Payment {}", reference),
            None => "Payment".to_string(),
        }
    }

    fn description(&self) -> String {
        non_blank(self.message.as_deref())
            .unwrap_or_else(|| join_present(&[self.amount.as_deref(), self.status.as_deref()]))
    }

    fn url(&self) -> String {
        "/billing".to_string()
    }

    fn metadata(&self) -> Option<ResultMetadata> {
        ResultMetadata {
            status: non_blank(self.status.as_deref()),
            amount: non_blank(self.amount.as_deref()),
            category: non_blank(self.plan_code.as_deref()),
            date: non_blank(self.created_at.as_deref().map(format_date).as_deref()),
            ..Default::default()
        }
        .non_empty()
    }
}

impl Searchable for StaticPage {
    const KIND: SearchResultType = SearchResultType::Page;

    fn record_id(&self) -> &str {
        self.slug
    }

    fn searchable_text(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.keywords.join(" "))
    }

    fn title(&self) -> String {
        self.title.to_string()
    }

    fn description(&self) -> String {
        self.description.to_string()
    }

    fn url(&self) -> String {
        self.url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PersonRef, TrackerMetric};

    fn jane_appointment() -> Appointment {
        Appointment {
            id: "42".to_string(),
            caregiver: Some(PersonRef::new("Jane", "Doe")),
            appointment_type: Some("virtual".to_string()),
            date: Some("2025-03-05".to_string()),
            status: Some("pending".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_appointment_text_and_projection() {
        let appointment = jane_appointment();
        assert_eq!(
            appointment.searchable_text(),
            "Jane Doe virtual Mar 5, 2025 pending  "
        );

        let result = appointment.to_result(90);
        assert_eq!(result.id, "appointment-42");
        assert_eq!(result.title, "Appointment with Jane Doe");
        assert_eq!(result.description, "virtual - Mar 5, 2025");
        assert_eq!(result.url, "/appointments/42");

        let metadata = result.metadata.unwrap();
        assert_eq!(metadata.status.as_deref(), Some("pending"));
        assert_eq!(metadata.date.as_deref(), Some("Mar 5, 2025"));
    }

    #[test]
    fn test_bare_appointment_has_fallbacks() {
        let appointment = Appointment::new("7");
        assert_eq!(appointment.searchable_text().trim(), "");
        assert_eq!(appointment.title(), "Appointment");
        assert_eq!(appointment.description(), "Scheduled appointment");
        assert_eq!(appointment.metadata(), None);
    }

    #[test]
    fn test_message_strips_html() {
        let message = Message::new("m1", "Dr. Bello", "<p>Your <b>lab results</b> are ready</p>");
        assert_eq!(
            message.searchable_text(),
            "Dr. Bello Your lab results are ready"
        );
        assert_eq!(message.description(), "Your lab results are ready");
        assert_eq!(message.title(), "Dr. Bello");
    }

    #[test]
    fn test_message_read_status() {
        let mut message = Message::new("m1", "Ada", "Hi");
        message.is_read = Some(false);
        let metadata = message.metadata().unwrap();
        assert_eq!(metadata.status.as_deref(), Some("unread"));
        assert_eq!(metadata.author.as_deref(), Some("Ada"));
    }

    #[test]
    fn test_caregiver_text_is_name_only() {
        let mut caregiver = Caregiver::new("c1", "Grace", "Eze");
        caregiver.specialty = Some("Nurse".to_string());
        assert_eq!(caregiver.searchable_text(), "Grace Eze");
        assert_eq!(caregiver.description(), "Nurse");
    }

    #[test]
    fn test_tracker_text_includes_metric_pairs_and_vitals() {
        let tracker = HealthTracker {
            id: "t1".to_string(),
            metrics: vec![TrackerMetric::new("temperature", "36.8")],
            glucose: Some("110".to_string()),
            blood_pressure: Some("120/80".to_string()),
            pulse: Some("72".to_string()),
            ..Default::default()
        };

        assert_eq!(tracker.searchable_text(), "temperature 36.8 110 120/80  72");
        assert_eq!(
            tracker.description(),
            "Glucose: 110, Blood pressure: 120/80, Pulse: 72"
        );
        assert_eq!(tracker.title(), "Health Tracker Entry");
    }

    #[test]
    fn test_report_projection() {
        let mut report = HealthReport::new("r1", "Blood Test Results");
        report.report_type = Some("lab".to_string());
        report.author = Some(PersonRef::new("Tunde", "Ade"));

        assert_eq!(report.searchable_text(), "Blood Test Results lab  Tunde Ade");
        assert_eq!(report.description(), "lab");
        assert_eq!(report.to_result(1).id, "health-report-r1");
    }

    #[test]
    fn test_payment_description_fallback() {
        let mut payment = PaymentNotification::new("p1", "Blood123");
        payment.amount = Some("5000".to_string());
        payment.status = Some("success".to_string());

        assert_eq!(payment.title(), "Payment Blood123");
        assert_eq!(payment.description(), "5000 - success");
        assert_eq!(payment.searchable_text(), "Blood123 5000 success  ");
    }

    #[test]
    fn test_page_has_no_metadata() {
        let page = crate::search::STATIC_PAGES[0];
        let result = page.to_result(10);
        assert_eq!(result.id, "page-dashboard");
        assert_eq!(result.metadata, None);
    }
}
