//! The dashboard's single load operation, independent of any UI toolkit.
//!
//! The browser crate supplies an HTTP [`SummarySource`] and a toast-backed
//! [`Notifier`]; tests supply in-memory ones.

use std::fmt::Display;

use crate::fetch::FetchState;
use crate::normalize::{DashboardView, normalize};
use crate::summary::DashboardSummary;

/// Shown to the user when the summary cannot be retrieved.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch dashboard data. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// Fire-and-forget user notification channel.
pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);
}

/// Where the dashboard summary comes from.
#[allow(async_fn_in_trait)]
pub trait SummarySource {
    type Error: Display;

    async fn admin_dashboard_summary(&self) -> Result<DashboardSummary, Self::Error>;
}

/// Fetch the summary once and normalize it.
///
/// A failed fetch is reported exactly once through `notifier` and ends in
/// [`FetchState::Error`]; the returned state is never [`FetchState::Loading`].
pub async fn load_dashboard<S, N>(source: &S, notifier: &N) -> FetchState<DashboardView>
where
    S: SummarySource,
    N: Notifier,
{
    tracing::debug!("requesting admin dashboard summary");
    match source.admin_dashboard_summary().await {
        Ok(summary) => {
            tracing::info!("admin dashboard summary loaded");
            FetchState::Success(normalize(&summary))
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to fetch admin dashboard summary");
            notifier.notify(FETCH_FAILED_MESSAGE, Severity::Error);
            FetchState::Error(err.to_string())
        }
    }
}
