//! Sample portal records shared by the integration tests.

#![allow(dead_code)]

use care_portal_search::models::*;

/// Appointment with caregiver Jane Doe, virtual, pending.
pub fn jane_appointment() -> Appointment {
    let mut appointment = Appointment::new("1");
    appointment.caregiver = Some(PersonRef::new("Jane", "Doe"));
    appointment.appointment_type = Some("virtual".to_string());
    appointment.status = Some("pending".to_string());
    appointment
}

/// A bundle touching every collection.
pub fn portal_bundle() -> SearchableRecordBundle {
    let mut bundle = SearchableRecordBundle::new();

    let mut first = jane_appointment();
    first.date = Some("2025-03-05".to_string());
    bundle.appointments.push(first);

    let mut second = Appointment::new("2");
    second.caregiver = Some(PersonRef::new("Grace", "Eze"));
    second.appointment_type = Some("physical".to_string());
    second.status = Some("completed".to_string());
    second.location = Some("Lagos".to_string());
    bundle.appointments.push(second);

    let mut message = Message::new("10", "Dr. Okafor", "<p>Your <b>lab results</b> are ready</p>");
    message.is_read = Some(false);
    bundle.messages.push(message);

    let mut jane = Caregiver::new("20", "Jane", "Doe");
    jane.specialty = Some("Cardiology".to_string());
    bundle.caregivers.push(jane);
    bundle.caregivers.push(Caregiver::new("21", "Grace", "Eze"));

    bundle.health_trackers.push(HealthTracker {
        id: "30".to_string(),
        glucose: Some("110".to_string()),
        blood_pressure: Some("120/80".to_string()),
        ..Default::default()
    });

    let mut report = HealthReport::new("40", "Blood Test Results");
    report.report_type = Some("lab".to_string());
    bundle.health_reports.push(report);

    bundle
        .health_notes
        .push(HealthNote::new("50", "Follow-up", "<p>Drink more water</p>"));

    let mut payment = PaymentNotification::new("60", "Blood123");
    payment.amount = Some("5000".to_string());
    payment.status = Some("success".to_string());
    bundle.payment_notifications.push(payment);

    bundle
}
