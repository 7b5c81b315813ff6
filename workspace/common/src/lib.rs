//! Transport types and view shaping for the CRM admin dashboard.
//!
//! The backend's summary payload is deserialized into [`DashboardSummary`],
//! normalized once into a fully-populated [`DashboardView`], and handed to the
//! frontend widgets. Nothing in this crate touches the browser, so all of it is
//! tested natively.

pub mod container;
pub mod fetch;
pub mod normalize;
pub mod palette;
pub mod summary;

pub use container::{FETCH_FAILED_MESSAGE, Notifier, Severity, SummarySource, load_dashboard};
pub use fetch::{FetchState, MountGuard};
pub use normalize::{
    ChartSeriesPoint, ClientsView, ConnectionsView, DashboardView, LeadsView, ProjectsView,
    QueriesView, TeamsView, UsersView, normalize,
};
pub use palette::{ClientOrigin, Palette, SplitCategory, StatusLabel, UserStatus};
pub use summary::{ConnectionRecord, DashboardSummary};
