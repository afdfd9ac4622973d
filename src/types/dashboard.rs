use serde::{Deserialize, Serialize};

/// Public dashboard listing check statuses
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Dashboard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Public identifier, used in dashboard URLs and API paths
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard_id: Option<String>,
    pub custom_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_domain: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_private: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    /// `FULL` or `960PX`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    pub refresh_rate: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks_per_page: Option<u32>,
    pub pagination_rate: u32,
    pub paginate: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub hide_tags: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub use_tags_and_operator: bool,
    pub enable_incidents: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keys: Vec<DashboardKey>,
    #[serde(rename = "created_at", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "updated_at", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Access key of a private dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardKey {
    pub id: String,
    pub masked_key: String,
    /// Only returned once, when the key is created
    pub raw_key: String,
    #[serde(rename = "created_at")]
    pub created_at: String,
    #[serde(rename = "updated_at")]
    pub updated_at: String,
}
