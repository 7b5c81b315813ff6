use crate::api_client::{self, ApiError};
use crm_common::{DashboardSummary, SummarySource};

pub const ADMIN_DASHBOARD_ENDPOINT: &str = "/dashboard/admin";

pub async fn get_admin_dashboard_summary() -> Result<DashboardSummary, ApiError> {
    log::trace!("Fetching admin dashboard summary");
    let result = api_client::get::<DashboardSummary>(ADMIN_DASHBOARD_ENDPOINT).await;

    if let Err(ref e) = result {
        log::error!("Failed to fetch admin dashboard summary: {}", e);
    } else {
        log::info!("Successfully fetched admin dashboard summary");
    }

    result
}

/// The backend's summary endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpSummarySource;

impl SummarySource for HttpSummarySource {
    type Error = ApiError;

    async fn admin_dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        get_admin_dashboard_summary().await
    }
}
