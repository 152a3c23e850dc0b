//! Static directory of portal pages that are always searchable.

/// A navigable portal page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticPage {
    /// Stable identifier used in result ids (`page-<slug>`)
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub keywords: &'static [&'static str],
}

/// Pages searched on every query, in the order the portal lists them.
pub const STATIC_PAGES: &[StaticPage] = &[
    StaticPage {
        slug: "dashboard",
        title: "Dashboard",
        description: "Overview of your health, appointments and activity",
        url: "/dashboard",
        keywords: &["home", "overview", "summary"],
    },
    StaticPage {
        slug: "appointments",
        title: "Appointments",
        description: "View, book and manage your appointments",
        url: "/appointments",
        keywords: &["schedule", "booking", "visit", "calendar", "consultation"],
    },
    StaticPage {
        slug: "messages",
        title: "Messages",
        description: "Chat with your caregivers",
        url: "/messages",
        keywords: &["inbox", "chat", "conversation"],
    },
    StaticPage {
        slug: "caregivers",
        title: "Caregivers",
        description: "Find and connect with caregivers",
        url: "/caregivers",
        keywords: &["doctor", "nurse", "provider", "specialist"],
    },
    StaticPage {
        slug: "health-tracker",
        title: "Health Tracker",
        description: "Record and review your vitals",
        url: "/health-tracker",
        keywords: &["vitals", "glucose", "blood pressure", "weight", "pulse"],
    },
    StaticPage {
        slug: "health-records",
        title: "Health Records",
        description: "Reports and notes from your care team",
        url: "/health-records",
        keywords: &["reports", "notes", "medical history", "results"],
    },
    StaticPage {
        slug: "billing",
        title: "Billing",
        description: "Subscription plans, invoices and payments",
        url: "/billing",
        keywords: &["payment", "subscription", "plan", "invoice"],
    },
    StaticPage {
        slug: "profile",
        title: "Profile",
        description: "Your personal and medical information",
        url: "/profile",
        keywords: &["account", "bio data", "personal details"],
    },
    StaticPage {
        slug: "settings",
        title: "Settings",
        description: "Notification, privacy and security preferences",
        url: "/settings",
        keywords: &["preferences", "password", "notifications", "privacy"],
    },
];
