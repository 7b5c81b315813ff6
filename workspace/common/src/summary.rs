//! Wire shapes of the admin dashboard summary payload.
//!
//! Every field is optional: the backend aggregates each domain independently and
//! omits (or nulls) whatever it could not compute. Nothing here applies defaults;
//! that happens once, in [`crate::normalize`].

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// A display-only scalar as the backend may send it.
#[derive(Deserialize)]
#[serde(untagged)]
enum LabelValue {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Flag(bool),
    Other(IgnoredAny),
}

/// Accept a string, number or boolean as text; `null` and nested values are absent.
fn lenient_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let label = Option::<LabelValue>::deserialize(deserializer)?;
    Ok(label.and_then(|value| match value {
        LabelValue::Text(text) => Some(text),
        LabelValue::Unsigned(n) => Some(n.to_string()),
        LabelValue::Signed(n) => Some(n.to_string()),
        LabelValue::Float(n) => Some(n.to_string()),
        LabelValue::Flag(b) => Some(b.to_string()),
        LabelValue::Other(_) => None,
    }))
}

/// Aggregate root returned by the dashboard summary endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(default, alias = "projects")]
    pub project_data: Option<ProjectSection>,
    #[serde(default, alias = "queries")]
    pub query_data: Option<QuerySection>,
    #[serde(default, alias = "leads")]
    pub lead_data: Option<LeadSection>,
    #[serde(default, alias = "clients")]
    pub client_data: Option<ClientSection>,
    #[serde(default, alias = "users")]
    pub user_data: Option<UserSection>,
    #[serde(default, alias = "connections")]
    pub connection_data: Option<ConnectionSection>,
    #[serde(default, alias = "teams")]
    pub team_data: Option<TeamSection>,
}

/// One `{_id, count}` bucket of a grouped aggregation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdCount {
    #[serde(rename = "_id", default, deserialize_with = "lenient_label")]
    pub id: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthKey {
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub year: Option<i32>,
}

/// One `{_id: {month}, count}` bucket of a per-month aggregation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyCount {
    #[serde(rename = "_id", default)]
    pub id: Option<MonthKey>,
    #[serde(default)]
    pub count: Option<u64>,
}

impl MonthlyCount {
    pub fn month(&self) -> Option<u32> {
        self.id.as_ref().and_then(|key| key.month)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectSection {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub status: Option<Vec<IdCount>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuerySection {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub status: Option<Vec<IdCount>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSection {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub stages: Option<Vec<IdCount>>,
    #[serde(default)]
    pub monthly_counts: Option<Vec<MonthlyCount>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSection {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub indian: Option<u64>,
    #[serde(default)]
    pub foreigner: Option<u64>,
    #[serde(default)]
    pub monthly_counts: Option<Vec<MonthlyCount>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSection {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub active: Option<u64>,
    #[serde(default)]
    pub verify: Option<u64>,
    #[serde(default)]
    pub un_verify: Option<u64>,
}

/// A connection record as listed in the "recent connections" panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionRecord {
    #[serde(default, deserialize_with = "lenient_label")]
    pub contact_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_label")]
    pub phone_no: Option<String>,
    #[serde(default, deserialize_with = "lenient_label")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_label")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionSection {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub data: Option<Vec<ConnectionRecord>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamSection {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub department: Option<Vec<IdCount>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_deserializes_to_default() {
        let summary: DashboardSummary = serde_json::from_str("{}").unwrap();
        assert_eq!(summary, DashboardSummary::default());
    }

    #[test]
    fn test_null_sections_and_fields_are_absent() {
        let json = r#"{
            "projectData": null,
            "leadData": { "total": null, "monthlyCounts": null, "stages": [{ "_id": null, "count": 2 }] },
            "userData": { "active": 4, "unVerify": 1 }
        }"#;
        let summary: DashboardSummary = serde_json::from_str(json).unwrap();

        assert!(summary.project_data.is_none());
        let leads = summary.lead_data.unwrap();
        assert_eq!(leads.total, None);
        assert_eq!(leads.monthly_counts, None);
        assert_eq!(
            leads.stages,
            Some(vec![IdCount { id: None, count: Some(2) }])
        );
        let users = summary.user_data.unwrap();
        assert_eq!(users.active, Some(4));
        assert_eq!(users.verify, None);
        assert_eq!(users.un_verify, Some(1));
    }

    #[test]
    fn test_domain_name_aliases() {
        let json = r#"{ "projects": { "total": 3 }, "teams": { "total": 2 } }"#;
        let summary: DashboardSummary = serde_json::from_str(json).unwrap();

        assert_eq!(summary.project_data.unwrap().total, Some(3));
        assert_eq!(summary.team_data.unwrap().total, Some(2));
    }

    #[test]
    fn test_monthly_count_month_lookup() {
        let json = r#"[
            { "_id": { "month": 3, "year": 2024 }, "count": 5 },
            { "_id": {}, "count": 1 },
            { "count": 7 }
        ]"#;
        let counts: Vec<MonthlyCount> = serde_json::from_str(json).unwrap();

        assert_eq!(counts[0].month(), Some(3));
        assert_eq!(counts[1].month(), None);
        assert_eq!(counts[2].month(), None);
    }

    #[test]
    fn test_connection_records() {
        let json = r#"{
            "total": 12,
            "data": [
                { "contactName": "Asha", "phoneNo": "555-0101", "companyName": "Acme", "email": "asha@acme.test" },
                { "contactName": "Ben" }
            ]
        }"#;
        let section: ConnectionSection = serde_json::from_str(json).unwrap();
        let data = section.data.unwrap();

        assert_eq!(section.total, Some(12));
        assert_eq!(data[0].company_name.as_deref(), Some("Acme"));
        assert_eq!(data[1].email, None);
    }

    #[test]
    fn test_numeric_labels_are_kept_as_text() {
        let json = r#"{
            "connectionData": { "data": [{ "contactName": "Asha", "phoneNo": 9876543210 }] },
            "leadData": { "stages": [{ "_id": 3, "count": 2 }, { "_id": "Won", "count": 1 }] },
            "teamData": { "department": [{ "_id": -1, "count": 4 }] }
        }"#;
        let summary: DashboardSummary = serde_json::from_str(json).unwrap();

        let connection = &summary.connection_data.unwrap().data.unwrap()[0];
        assert_eq!(connection.phone_no.as_deref(), Some("9876543210"));
        assert_eq!(connection.contact_name.as_deref(), Some("Asha"));

        let stages = summary.lead_data.unwrap().stages.unwrap();
        assert_eq!(stages[0], IdCount { id: Some("3".to_string()), count: Some(2) });
        assert_eq!(stages[1].id.as_deref(), Some("Won"));

        let departments = summary.team_data.unwrap().department.unwrap();
        assert_eq!(departments[0].id.as_deref(), Some("-1"));
    }

    #[test]
    fn test_structured_labels_degrade_to_absent() {
        let json = r#"[
            { "_id": { "stage": "Won" }, "count": 1 },
            { "_id": [1, 2], "count": 2 },
            { "_id": null, "count": 3 }
        ]"#;
        let buckets: Vec<IdCount> = serde_json::from_str(json).unwrap();

        assert!(buckets.iter().all(|bucket| bucket.id.is_none()));
        assert_eq!(buckets[2].count, Some(3));
    }
}
