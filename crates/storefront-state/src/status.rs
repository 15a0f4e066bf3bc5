//! Fetch lifecycle status.

use std::fmt;

/// Classification of a failed fetch.
///
/// The page distinguishes a server-reported missing product from every
/// other failure class, so the view layer never leaves the page stuck in a
/// loading state when the upstream answers with an unexpected status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Server reported the product does not exist.
    NotFound,
    /// Server answered with a non-success, non-404 status.
    Upstream(u16),
    /// The request never completed.
    Network,
    /// The response body did not decode.
    Malformed,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::NotFound => write!(f, "not found"),
            FailureKind::Upstream(status) => write!(f, "upstream status {}", status),
            FailureKind::Network => write!(f, "network failure"),
            FailureKind::Malformed => write!(f, "malformed response"),
        }
    }
}

/// Fetch lifecycle status for one page view.
///
/// Exactly one status holds at any time. The lifecycle runs
/// `Initial -> InProgress -> {Success | Failure}`; a renewed fetch restarts
/// it from `InProgress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiStatus {
    /// View created, no fetch issued yet.
    #[default]
    Initial,
    /// Fetch in flight.
    InProgress,
    /// Fetch resolved with normalized product data.
    Success,
    /// Fetch resolved without product data.
    Failure(FailureKind),
}

impl ApiStatus {
    /// Stable name for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiStatus::Initial => "initial",
            ApiStatus::InProgress => "in_progress",
            ApiStatus::Success => "success",
            ApiStatus::Failure(_) => "failure",
        }
    }

    /// Whether this status ends the current fetch lifecycle.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ApiStatus::Success | ApiStatus::Failure(_))
    }
}
