//! Coordinator panel: dashboard and the request queue.

pub mod dashboard;
pub mod requests;

/// Sidebar navigation shared by the coordinator pages.
pub(crate) const NAV: [(&str, &str); 2] =
    [("/coordinator", "Dashboard"), ("/coordinator/requests", "Request Queue")];
