use crm_common::palette::{status_palette, LEAD_STAGE_COLOR, PROJECT_STATUSES, QUERY_STATUSES, TREND_LINE_COLOR};
use crm_common::{
    ClientOrigin, ClientsView, ConnectionRecord, ConnectionsView, LeadsView, Palette,
    ProjectsView, QueriesView, SplitCategory, TeamsView, UserStatus, UsersView,
};
use yew::prelude::*;

use super::charts::{BarChart, ChartLayout, LineChart, PieChart};
use super::panel::TitledPanel;

const PLACEHOLDER: &str = "-";
const SHOWN_CONNECTIONS: usize = 2;

pub(crate) fn team_count_label(count: u64) -> String {
    if count == 1 {
        "1 team".to_string()
    } else {
        format!("{} teams", count)
    }
}

pub(crate) fn or_placeholder(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => PLACEHOLDER,
    }
}

/// The newest records come first; only the first two are listed.
pub(crate) fn shown_connections(recent: &[ConnectionRecord]) -> &[ConnectionRecord] {
    &recent[..recent.len().min(SHOWN_CONNECTIONS)]
}

#[derive(Properties, PartialEq)]
pub struct ProjectsPanelProps {
    pub view: ProjectsView,
}

#[function_component(ProjectsPanel)]
pub fn projects_panel(props: &ProjectsPanelProps) -> Html {
    html! {
        <TitledPanel title="Projects" total={format!("Total Projects: {}", props.view.total)}>
            <BarChart
                series={props.view.by_status.clone()}
                palette={status_palette(&PROJECT_STATUSES)}
                layout={ChartLayout::default().integer_ticks()}
            />
        </TitledPanel>
    }
}

#[derive(Properties, PartialEq)]
pub struct QueriesPanelProps {
    pub view: QueriesView,
}

#[function_component(QueriesPanel)]
pub fn queries_panel(props: &QueriesPanelProps) -> Html {
    html! {
        <TitledPanel title="User Queries" total={format!("Total Queries: {}", props.view.total)}>
            <PieChart series={props.view.by_status.clone()} palette={status_palette(&QUERY_STATUSES)} />
        </TitledPanel>
    }
}

#[derive(Properties, PartialEq)]
pub struct LeadsPanelProps {
    pub view: LeadsView,
}

#[function_component(LeadsPanel)]
pub fn leads_panel(props: &LeadsPanelProps) -> Html {
    html! {
        <TitledPanel title="Leads" wide={true} total={format!("Total Leads: {}", props.view.total)}>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <LineChart
                    series={props.view.by_month.clone()}
                    palette={Palette::single(TREND_LINE_COLOR)}
                    layout={ChartLayout::default().integer_ticks()}
                />
                <BarChart
                    series={props.view.by_stage.clone()}
                    palette={Palette::single(LEAD_STAGE_COLOR)}
                    layout={ChartLayout::default().integer_ticks()}
                />
            </div>
        </TitledPanel>
    }
}

#[derive(Properties, PartialEq)]
pub struct ClientsPanelProps {
    pub view: ClientsView,
}

#[function_component(ClientsPanel)]
pub fn clients_panel(props: &ClientsPanelProps) -> Html {
    let view = &props.view;

    html! {
        <TitledPanel title="Clients" wide={true} total={format!("Total Clients: {}", view.total)}>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                <PieChart series={view.by_origin.clone()} palette={ClientOrigin::palette()} />
                <LineChart
                    series={view.by_month.clone()}
                    palette={Palette::single(TREND_LINE_COLOR)}
                    layout={ChartLayout::default().integer_ticks()}
                />
            </div>
            <div>
                <p class="text-gray-600">{format!("Total Indian Clients: {}", view.indian)}</p>
                <p class="text-gray-600">{format!("Total Foreign Clients: {}", view.foreigner)}</p>
            </div>
        </TitledPanel>
    }
}

#[derive(Properties, PartialEq)]
pub struct TeamsPanelProps {
    pub view: TeamsView,
}

#[function_component(TeamsPanel)]
pub fn teams_panel(props: &TeamsPanelProps) -> Html {
    let departments = &props.view.by_department;

    html! {
        <TitledPanel title="Department Teams" total={format!("Total Teams: {}", props.view.total)}>
            if departments.is_empty() {
                <div class="text-center py-4 text-gray-500">{"No departments yet"}</div>
            } else {
                <div class="space-y-4 max-h-64 overflow-y-auto">
                    { for departments.iter().enumerate().map(|(index, dept)| html! {
                        <div key={index} class="p-3 bg-base-200 rounded-lg shadow-sm">
                            <div class="flex justify-between items-center">
                                <span class="font-medium capitalize">{&dept.name}</span>
                                <span class="badge badge-info">{team_count_label(dept.value)}</span>
                            </div>
                        </div>
                    })}
                </div>
            }
        </TitledPanel>
    }
}

#[derive(Properties, PartialEq)]
struct ConnectionItemProps {
    connection: ConnectionRecord,
}

#[function_component(ConnectionItem)]
fn connection_item(props: &ConnectionItemProps) -> Html {
    let c = &props.connection;

    html! {
        <div class="mt-2 p-3 border rounded shadow-sm">
            <p class="font-medium">{format!("Name: {}", or_placeholder(c.contact_name.as_deref()))}</p>
            <p class="text-gray-600">{format!("Phone: {}", or_placeholder(c.phone_no.as_deref()))}</p>
            <p class="text-gray-600">{format!("Company: {}", or_placeholder(c.company_name.as_deref()))}</p>
            <p class="text-gray-600">{format!("Email: {}", or_placeholder(c.email.as_deref()))}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ConnectionsPanelProps {
    pub view: ConnectionsView,
}

#[function_component(ConnectionsPanel)]
pub fn connections_panel(props: &ConnectionsPanelProps) -> Html {
    let view = &props.view;

    html! {
        <TitledPanel title="Recent Connections">
            <p class="text-gray-600">{format!("Total Connections: {}", view.total)}</p>
            <div class="mt-2">
                <h3 class="font-semibold">{"Last Two Connections:"}</h3>
                if view.recent.is_empty() {
                    <p class="text-sm text-gray-500 mt-2">{"No connections yet"}</p>
                }
                { for shown_connections(&view.recent).iter().enumerate().map(|(index, connection)| html! {
                    <ConnectionItem key={index} connection={connection.clone()} />
                })}
            </div>
        </TitledPanel>
    }
}

#[derive(Properties, PartialEq)]
pub struct UsersPanelProps {
    pub view: UsersView,
}

#[function_component(UsersPanel)]
pub fn users_panel(props: &UsersPanelProps) -> Html {
    html! {
        <TitledPanel title="Users" wide={true}>
            <BarChart
                series={props.view.by_status.clone()}
                palette={UserStatus::palette()}
                layout={ChartLayout::default().horizontal().integer_ticks()}
            />
        </TitledPanel>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_count_label_pluralizes() {
        assert_eq!(team_count_label(0), "0 teams");
        assert_eq!(team_count_label(1), "1 team");
        assert_eq!(team_count_label(4), "4 teams");
    }

    #[test]
    fn test_or_placeholder() {
        assert_eq!(or_placeholder(Some("Acme")), "Acme");
        assert_eq!(or_placeholder(Some("  ")), PLACEHOLDER);
        assert_eq!(or_placeholder(None), PLACEHOLDER);
    }

    #[test]
    fn test_shown_connections_keeps_first_two() {
        let record = |name: &str| ConnectionRecord {
            contact_name: Some(name.to_string()),
            ..ConnectionRecord::default()
        };
        let recent = vec![record("Asha"), record("Ben"), record("Chitra")];

        let shown = shown_connections(&recent);
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[0].contact_name.as_deref(), Some("Asha"));
        assert_eq!(shown[1].contact_name.as_deref(), Some("Ben"));

        assert_eq!(shown_connections(&recent[..1]).len(), 1);
        assert!(shown_connections(&[]).is_empty());
    }
}
