//! Turns a partial [`DashboardSummary`] into fully-populated chart series.
//!
//! Every function here is total: absent sections, fields and collections are
//! treated as zero or empty, so the view structs never carry an `Option`.

use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::palette::{
    ClientOrigin, PROJECT_STATUSES, QUERY_STATUSES, SplitCategory, StatusLabel, UserStatus,
};
use crate::summary::{
    ClientSection, ConnectionRecord, ConnectionSection, DashboardSummary, IdCount, LeadSection,
    MonthlyCount, ProjectSection, QuerySection, TeamSection, UserSection,
};

/// Label used for a category bucket whose identifier is null.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// One bar, line point or pie slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeriesPoint {
    pub name: String,
    pub value: u64,
}

impl ChartSeriesPoint {
    pub fn new(name: impl Into<String>, value: u64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Counts for a fixed, ordered set of statuses. Unknown identifiers in `source`
/// are ignored and statuses missing from it count as zero.
pub fn status_breakdown(source: &[IdCount], labels: &[StatusLabel]) -> Vec<ChartSeriesPoint> {
    labels
        .iter()
        .map(|label| {
            let value = source
                .iter()
                .find(|bucket| bucket.id.as_deref() == Some(label.id))
                .and_then(|bucket| bucket.count)
                .unwrap_or(0);
            ChartSeriesPoint::new(label.display, value)
        })
        .collect()
}

/// Three-letter month abbreviation for a 1-based month number.
pub fn month_abbrev(month: u32) -> Option<&'static str> {
    let month = u8::try_from(month).ok()?;
    Month::try_from(month).ok().map(|m| &m.name()[..3])
}

/// Twelve points, Jan..Dec, whatever `source` contains.
pub fn monthly_series(source: &[MonthlyCount]) -> Vec<ChartSeriesPoint> {
    (1..=12)
        .filter_map(|month| {
            let name = month_abbrev(month)?;
            let value = source
                .iter()
                .find(|entry| entry.month() == Some(month))
                .and_then(|entry| entry.count)
                .unwrap_or(0);
            Some(ChartSeriesPoint::new(name, value))
        })
        .collect()
}

/// One point per source bucket, in source order.
pub fn category_series(source: &[IdCount]) -> Vec<ChartSeriesPoint> {
    source
        .iter()
        .map(|bucket| {
            ChartSeriesPoint::new(
                bucket.id.as_deref().unwrap_or(UNKNOWN_CATEGORY),
                bucket.count.unwrap_or(0),
            )
        })
        .collect()
}

/// One point per category of `C`, valued by `value_of`.
pub fn split_series<C, F>(value_of: F) -> Vec<ChartSeriesPoint>
where
    C: SplitCategory,
    F: Fn(C) -> Option<u64>,
{
    C::ALL
        .iter()
        .map(|&category| ChartSeriesPoint::new(category.label(), value_of(category).unwrap_or(0)))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectsView {
    pub total: u64,
    pub by_status: Vec<ChartSeriesPoint>,
}

impl From<&ProjectSection> for ProjectsView {
    fn from(section: &ProjectSection) -> Self {
        Self {
            total: section.total.unwrap_or(0),
            by_status: status_breakdown(section.status.as_deref().unwrap_or_default(), &PROJECT_STATUSES),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueriesView {
    pub total: u64,
    pub by_status: Vec<ChartSeriesPoint>,
}

impl From<&QuerySection> for QueriesView {
    fn from(section: &QuerySection) -> Self {
        Self {
            total: section.total.unwrap_or(0),
            by_status: status_breakdown(section.status.as_deref().unwrap_or_default(), &QUERY_STATUSES),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadsView {
    pub total: u64,
    pub by_month: Vec<ChartSeriesPoint>,
    pub by_stage: Vec<ChartSeriesPoint>,
}

impl From<&LeadSection> for LeadsView {
    fn from(section: &LeadSection) -> Self {
        Self {
            total: section.total.unwrap_or(0),
            by_month: monthly_series(section.monthly_counts.as_deref().unwrap_or_default()),
            by_stage: category_series(section.stages.as_deref().unwrap_or_default()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientsView {
    pub total: u64,
    pub indian: u64,
    pub foreigner: u64,
    pub by_origin: Vec<ChartSeriesPoint>,
    pub by_month: Vec<ChartSeriesPoint>,
}

impl From<&ClientSection> for ClientsView {
    fn from(section: &ClientSection) -> Self {
        Self {
            total: section.total.unwrap_or(0),
            indian: section.indian.unwrap_or(0),
            foreigner: section.foreigner.unwrap_or(0),
            by_origin: split_series::<ClientOrigin, _>(|origin| match origin {
                ClientOrigin::Indian => section.indian,
                ClientOrigin::Foreigner => section.foreigner,
            }),
            by_month: monthly_series(section.monthly_counts.as_deref().unwrap_or_default()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsersView {
    pub total: u64,
    pub by_status: Vec<ChartSeriesPoint>,
}

impl From<&UserSection> for UsersView {
    fn from(section: &UserSection) -> Self {
        Self {
            total: section.total.unwrap_or(0),
            by_status: split_series::<UserStatus, _>(|status| match status {
                UserStatus::Active => section.active,
                UserStatus::Verify => section.verify,
                UserStatus::Unverify => section.un_verify,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionsView {
    pub total: u64,
    pub recent: Vec<ConnectionRecord>,
}

impl From<&ConnectionSection> for ConnectionsView {
    fn from(section: &ConnectionSection) -> Self {
        Self {
            total: section.total.unwrap_or(0),
            recent: section.data.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamsView {
    pub total: u64,
    pub by_department: Vec<ChartSeriesPoint>,
}

impl From<&TeamSection> for TeamsView {
    fn from(section: &TeamSection) -> Self {
        Self {
            total: section.total.unwrap_or(0),
            by_department: category_series(section.department.as_deref().unwrap_or_default()),
        }
    }
}

/// Everything the dashboard renders, with all defaults applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub projects: ProjectsView,
    pub queries: QueriesView,
    pub leads: LeadsView,
    pub clients: ClientsView,
    pub users: UsersView,
    pub connections: ConnectionsView,
    pub teams: TeamsView,
}

impl From<&DashboardSummary> for DashboardView {
    fn from(summary: &DashboardSummary) -> Self {
        Self {
            projects: view_of(&summary.project_data),
            queries: view_of(&summary.query_data),
            leads: view_of(&summary.lead_data),
            clients: view_of(&summary.client_data),
            users: view_of(&summary.user_data),
            connections: view_of(&summary.connection_data),
            teams: view_of(&summary.team_data),
        }
    }
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::from(&DashboardSummary::default())
    }
}

/// Absent sections are viewed as their all-default counterpart.
fn view_of<S, V>(section: &Option<S>) -> V
where
    S: Default,
    V: for<'a> From<&'a S>,
{
    match section {
        Some(section) => V::from(section),
        None => V::from(&S::default()),
    }
}

/// Normalize a summary payload.
pub fn normalize(summary: &DashboardSummary) -> DashboardView {
    let view = DashboardView::from(summary);
    tracing::debug!(
        projects = view.projects.total,
        leads = view.leads.total,
        clients = view.clients.total,
        "normalized dashboard summary"
    );
    view
}
