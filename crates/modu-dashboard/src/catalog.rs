//! Dashboard data: the application catalog and the recent-activity feed
//!
//! Rendering code only sees the [`DashboardData`] trait, so the seeded mock data
//! can later be replaced by a backend-backed provider.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Status tag of a catalog entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Badge {
    Live,
    Offline,
}

impl Badge {
    pub fn label(self) -> &'static str {
        match self {
            Self::Live => "LIVE",
            Self::Offline => "OFFLINE",
        }
    }

    /// Only live applications can be started
    pub fn allows_launch(self) -> bool {
        matches!(self, Self::Live)
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An application card shown in the tool scroller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Application {
    pub id: String,
    pub name: String,
    /// Path of the logo asset
    pub logo: String,
    pub badge: Badge,
    pub tagline: String,
    pub version: String,
    pub description: String,
}

impl Application {
    pub fn is_launchable(&self) -> bool {
        self.badge.allows_launch()
    }
}

/// One line in the "Recents" widget
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityEntry {
    pub id: u32,
    pub text: String,
    /// Name of the application that produced the entry
    pub source_app: String,
    /// Pre-rendered relative time, e.g. "10m ago"
    pub relative_time: String,
}

/// Source of the data the dashboard widgets render
pub trait DashboardData: Send + Sync {
    /// Recent activity, newest first
    fn list_recent_activity(&self) -> Vec<ActivityEntry>;

    /// Application catalog in display order
    fn list_applications(&self) -> Vec<Application>;
}

/// Shared handle to a [`DashboardData`] implementation, provided as Leptos context
#[derive(Clone)]
pub struct DataSource(Arc<dyn DashboardData>);

impl DataSource {
    pub fn new(provider: impl DashboardData + 'static) -> Self {
        Self(Arc::new(provider))
    }

    pub fn mock() -> Self {
        Self::new(MockDashboardData::seeded())
    }

    pub fn recent_activity(&self) -> Vec<ActivityEntry> {
        self.0.list_recent_activity()
    }

    pub fn applications(&self) -> Vec<Application> {
        self.0.list_applications()
    }
}

impl Default for DataSource {
    fn default() -> Self {
        Self::mock()
    }
}

impl fmt::Debug for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataSource").finish_non_exhaustive()
    }
}

/// In-memory provider with fixed contents
#[derive(Debug, Clone, Default)]
pub struct MockDashboardData {
    activity: Vec<ActivityEntry>,
    applications: Vec<Application>,
}

impl MockDashboardData {
    pub fn new(activity: Vec<ActivityEntry>, applications: Vec<Application>) -> Self {
        Self {
            activity,
            applications,
        }
    }

    /// The data shipped with the dashboard until a real feed exists
    pub fn seeded() -> Self {
        Self::new(seed_activity(), seed_applications())
    }
}

impl DashboardData for MockDashboardData {
    fn list_recent_activity(&self) -> Vec<ActivityEntry> {
        self.activity.clone()
    }

    fn list_applications(&self) -> Vec<Application> {
        self.applications.clone()
    }
}

fn activity(id: u32, text: &str, source_app: &str, relative_time: &str) -> ActivityEntry {
    ActivityEntry {
        id,
        text: text.to_string(),
        source_app: source_app.to_string(),
        relative_time: relative_time.to_string(),
    }
}

fn seed_activity() -> Vec<ActivityEntry> {
    vec![
        activity(1, "Created new customer data", "BARK", "10m ago"),
        activity(2, "Updated Montero Status: Waiting for Parts", "BARK", "25m ago"),
        activity(3, "System Config Update", "ADMIN", "1h ago"),
    ]
}

fn seed_applications() -> Vec<Application> {
    vec![
        Application {
            id: "bark".to_string(),
            name: "BARK".to_string(),
            logo: "/assets/Icons/Bark Favicon.png".to_string(),
            badge: Badge::Live,
            tagline: "Your Personal Repair Intelligence System".to_string(),
            version: "Version 1.0".to_string(),
            description: "A centralized kernel transitioning automotive shops from static sheets \
                          to real-time data. Manage repair lifecycles, technician assignments, \
                          and turn manual logs into actionable analytics."
                .to_string(),
        },
        Application {
            id: "covy".to_string(),
            name: "COVYScope".to_string(),
            logo: "/assets/Icons/COVYScope App Logo.png".to_string(),
            badge: Badge::Offline,
            tagline: "TBD".to_string(),
            version: "Prototyping Phase".to_string(),
            description: "Your Future AI Assisted Warehouse Tracking System with OPEN CV \
                          Coming soon."
                .to_string(),
        },
        Application {
            id: "admin".to_string(),
            name: "ADMIN".to_string(),
            logo: "/assets/Icons/Admin Favicon.png".to_string(),
            badge: Badge::Live,
            tagline: "System Configuration".to_string(),
            version: "v1.0".to_string(),
            description: "Manage your MODU Settings through here".to_string(),
        },
    ]
}
