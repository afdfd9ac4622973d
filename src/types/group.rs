use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{
    explicit_list, null_as_default, AlertChannelSubscription, AlertSettings, Assertion,
    BasicAuth, KeyValue, RetryStrategy,
};
use super::environment_variable::EnvironmentVariable;

/// A check group, a named collection of checks sharing default settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Group {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub activated: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub muted: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub run_parallel: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    pub locations: Option<Vec<String>>,
    pub private_locations: Option<Vec<String>>,
    #[serde(deserialize_with = "null_as_default")]
    pub concurrency: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub api_check_defaults: ApiCheckDefaults,
    #[serde(deserialize_with = "null_as_default")]
    pub environment_variables: Vec<EnvironmentVariable>,
    #[serde(deserialize_with = "null_as_default")]
    pub use_global_alert_settings: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_settings: Option<AlertSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_snippet_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tear_down_snippet_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_setup_script: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_tear_down_script: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub alert_channel_subscriptions: Vec<AlertChannelSubscription>,
    pub runtime_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_strategy: Option<RetryStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub(crate) fn normalize_lists(&mut self) {
        explicit_list(&mut self.locations);
        explicit_list(&mut self.private_locations);
    }
}

/// Defaults applied to API checks inside a group
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiCheckDefaults {
    #[serde(rename = "url", deserialize_with = "null_as_default")]
    pub base_url: String,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub headers: Vec<KeyValue>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub query_parameters: Vec<KeyValue>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub assertions: Vec<Assertion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_auth: Option<BasicAuth>,
}
