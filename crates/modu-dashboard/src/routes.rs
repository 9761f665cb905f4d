//! Canonical route table
//!
//! Three named pages. The root path and anything unrecognised redirect to the
//! primary dashboard.

use std::fmt;

/// Path every unmatched navigation lands on
pub const DEFAULT_PATH: &str = "/dashboard";

/// A routable page composition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Primary MODU dashboard
    Dashboard,
    /// BARK tracker dashboard
    Bark,
    /// Backend health check
    Status,
}

impl Page {
    /// All pages, in navigation order
    pub const ALL: [Page; 3] = [Page::Dashboard, Page::Bark, Page::Status];

    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::Bark => "/bark",
            Self::Status => "/status",
        }
    }

    /// Path without the leading slash, as a router segment
    pub fn segment(self) -> &'static str {
        &self.path()[1..]
    }

    /// Label used in the navigation bar
    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Bark => "BARK",
            Self::Status => "API Status",
        }
    }

    /// Page for an exact path, ignoring a single trailing slash
    pub fn from_path(path: &str) -> Option<Self> {
        let normalized = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => path,
        };
        Self::ALL.into_iter().find(|page| page.path() == normalized)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Outcome of navigating to a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Render(Page),
    Redirect(&'static str),
}

/// Resolve a navigation target against the route table
pub fn resolve(path: &str) -> Resolution {
    let path = path.split(&['?', '#'][..]).next().unwrap_or_default();
    match Page::from_path(path) {
        Some(page) => Resolution::Render(page),
        None => Resolution::Redirect(DEFAULT_PATH),
    }
}

/// Where a navigation to `path` should end up: the canonical path of the
/// matching page, or [`DEFAULT_PATH`]
pub fn redirect_target(path: &str) -> &'static str {
    match resolve(path) {
        Resolution::Render(page) => page.path(),
        Resolution::Redirect(to) => to,
    }
}
