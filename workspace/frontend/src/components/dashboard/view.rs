use crm_common::{load_dashboard, DashboardView};
use yew::prelude::*;

use super::sections::{
    ClientsPanel, ConnectionsPanel, LeadsPanel, ProjectsPanel, QueriesPanel, TeamsPanel, UsersPanel,
};
use crate::api_client::dashboard::HttpSummarySource;
use crate::common::fetch_hook::use_fetch_once;
use crate::common::fetch_render::FetchRender;
use crate::common::toast::ToastContext;

#[derive(Properties, PartialEq)]
struct DashboardGridProps {
    view: DashboardView,
}

#[function_component(DashboardGrid)]
fn dashboard_grid(props: &DashboardGridProps) -> Html {
    let view = &props.view;

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
            <ProjectsPanel view={view.projects.clone()} />
            <QueriesPanel view={view.queries.clone()} />
            <LeadsPanel view={view.leads.clone()} />
            <ClientsPanel view={view.clients.clone()} />
            <TeamsPanel view={view.teams.clone()} />
            <ConnectionsPanel view={view.connections.clone()} />
            <UsersPanel view={view.users.clone()} />
        </div>
    }
}

/// Admin dashboard page: one summary request per mount, then a grid of
/// independent panels.
#[function_component(AdminDashboard)]
pub fn admin_dashboard() -> Html {
    let fetch_state = use_fetch_once(|toast_ctx: Option<ToastContext>| async move {
        match toast_ctx {
            Some(toast_ctx) => load_dashboard(&HttpSummarySource, &toast_ctx).await,
            None => {
                log::warn!("No toast provider mounted, fetch failures will only be logged");
                load_dashboard(&HttpSummarySource, &LogNotifier).await
            }
        }
    });

    let render = Callback::from(|view: DashboardView| html! { <DashboardGrid {view} /> });

    html! {
        <div class="p-6 max-w-7xl mx-auto">
            <h1 class="text-4xl font-bold mb-8">{"Admin Dashboard"}</h1>
            <FetchRender<DashboardView>
                state={(*fetch_state).clone()}
                {render}
                loading_text={Some("Loading dashboard...".to_string())}
                error_title={Some("Unable to load dashboard".to_string())}
            />
        </div>
    }
}

/// Fallback notifier used outside a toast provider.
struct LogNotifier;

impl crm_common::Notifier for LogNotifier {
    fn notify(&self, message: &str, severity: crm_common::Severity) {
        log::error!("{:?}: {}", severity, message);
    }
}
