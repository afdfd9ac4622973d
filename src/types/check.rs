use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{
    explicit_list, null_as_default, AlertChannelSubscription, AlertSettings, Assertion,
    BasicAuth, CheckType, KeyValue, RetryStrategy,
};
use super::environment_variable::EnvironmentVariable;

/// A check as returned by `/v1/checks/{id}`
///
/// `locations` and `private_locations` distinguish "absent" from "empty":
/// the API leaves an absent list untouched on update, while an empty list
/// clears it. The client sends `None` as `[]` on create and update.
///
/// # Example
///
/// ```rust
/// use checkly_api::{Check, CheckType, Request};
///
/// let check = Check {
///     frequency: 10,
///     activated: true,
///     locations: Some(vec!["eu-west-1".to_string()]),
///     request: Some(Request::get("https://example.com")),
///     ..Check::new("My API Check", CheckType::Api)
/// };
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Check {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub check_type: CheckType,
    #[serde(deserialize_with = "null_as_default")]
    pub frequency: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_offset: Option<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub activated: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub muted: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub should_fail: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub run_parallel: bool,
    pub locations: Option<Vec<String>>,
    pub private_locations: Option<Vec<String>>,
    #[serde(deserialize_with = "null_as_default")]
    pub degraded_response_time: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub max_response_time: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub environment_variables: Vec<EnvironmentVariable>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub ssl_check_domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_snippet_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tear_down_snippet_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_setup_script: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_tear_down_script: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_settings: Option<AlertSettings>,
    #[serde(deserialize_with = "null_as_default")]
    pub use_global_alert_settings: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<Request>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heartbeat: Option<Heartbeat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_order: Option<i32>,
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

impl Check {
    pub fn new(name: impl Into<String>, check_type: CheckType) -> Self {
        Self {
            name: name.into(),
            check_type,
            ..Self::default()
        }
    }

    pub(crate) fn normalize_lists(&mut self) {
        explicit_list(&mut self.locations);
        explicit_list(&mut self.private_locations);
    }
}

/// Request made by an API check
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Request {
    #[serde(deserialize_with = "null_as_default")]
    pub method: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub follow_redirects: bool,
    #[serde(rename = "skipSSL", deserialize_with = "null_as_default")]
    pub skip_ssl: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_type: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub headers: Vec<KeyValue>,
    #[serde(deserialize_with = "null_as_default")]
    pub query_parameters: Vec<KeyValue>,
    #[serde(deserialize_with = "null_as_default")]
    pub assertions: Vec<Assertion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_auth: Option<BasicAuth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_family: Option<String>,
}

impl Request {
    /// A `GET` request to `url`
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: "GET".to_string(),
            url: url.into(),
            ..Self::default()
        }
    }
}

/// Schedule of a heartbeat check
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Heartbeat {
    #[serde(deserialize_with = "null_as_default")]
    pub period: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub period_unit: String,
    #[serde(deserialize_with = "null_as_default")]
    pub grace: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub grace_unit: String,
    /// Assigned by Checkly
    #[serde(deserialize_with = "null_as_default")]
    pub ping_token: String,
}

/// A heartbeat monitor, pinged by the monitored job instead of probing it
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct HeartbeatMonitor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub activated: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub muted: bool,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_settings: Option<AlertSettings>,
    #[serde(deserialize_with = "null_as_default")]
    pub use_global_alert_settings: bool,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub alert_channel_subscriptions: Vec<AlertChannelSubscription>,
    #[serde(deserialize_with = "null_as_default")]
    pub heartbeat: Heartbeat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A TCP monitor
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct TcpMonitor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_offset: Option<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub activated: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub muted: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub should_fail: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub run_parallel: bool,
    pub locations: Option<Vec<String>>,
    pub private_locations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degraded_response_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_response_time: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_settings: Option<AlertSettings>,
    #[serde(deserialize_with = "null_as_default")]
    pub use_global_alert_settings: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub request: TcpRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_order: Option<i32>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub alert_channel_subscriptions: Vec<AlertChannelSubscription>,
    pub runtime_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_strategy: Option<RetryStrategy>,
    #[serde(rename = "created_at", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updated_at", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl TcpMonitor {
    pub(crate) fn normalize_lists(&mut self) {
        explicit_list(&mut self.locations);
        explicit_list(&mut self.private_locations);
    }
}

/// Connection made by a TCP monitor
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct TcpRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub hostname: String,
    #[serde(deserialize_with = "null_as_default")]
    pub port: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub assertions: Vec<Assertion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_family: Option<String>,
}

/// A URL monitor, a lightweight `GET` probe
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct UrlMonitor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_offset: Option<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub activated: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub muted: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub should_fail: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub run_parallel: bool,
    pub locations: Option<Vec<String>>,
    pub private_locations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degraded_response_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_response_time: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_settings: Option<AlertSettings>,
    #[serde(deserialize_with = "null_as_default")]
    pub use_global_alert_settings: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub request: UrlRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_order: Option<i32>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub alert_channel_subscriptions: Vec<AlertChannelSubscription>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_strategy: Option<RetryStrategy>,
    #[serde(rename = "created_at", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updated_at", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl UrlMonitor {
    pub(crate) fn normalize_lists(&mut self) {
        explicit_list(&mut self.locations);
        explicit_list(&mut self.private_locations);
    }
}

/// Request made by a URL monitor
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct UrlRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub follow_redirects: bool,
    #[serde(rename = "skipSSL", deserialize_with = "null_as_default")]
    pub skip_ssl: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub assertions: Vec<Assertion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_family: Option<String>,
}

/// A multi-step check driven by a Playwright script
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct MultiStepCheck {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub check_type: CheckType,
    #[serde(deserialize_with = "null_as_default")]
    pub frequency: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_offset: Option<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub activated: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub muted: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub should_fail: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub run_parallel: bool,
    pub locations: Option<Vec<String>>,
    pub private_locations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub environment_variables: Vec<EnvironmentVariable>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_settings: Option<AlertSettings>,
    #[serde(deserialize_with = "null_as_default")]
    pub use_global_alert_settings: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_order: Option<i32>,
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

impl Default for MultiStepCheck {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            check_type: CheckType::MultiStep,
            frequency: 0,
            frequency_offset: None,
            activated: false,
            muted: false,
            should_fail: false,
            run_parallel: false,
            locations: None,
            private_locations: None,
            script: None,
            environment_variables: Vec::new(),
            tags: Vec::new(),
            alert_settings: None,
            use_global_alert_settings: false,
            group_id: None,
            group_order: None,
            alert_channel_subscriptions: Vec::new(),
            runtime_id: None,
            retry_strategy: None,
            created_at: None,
            updated_at: None,
        }
    }
}

impl MultiStepCheck {
    pub(crate) fn normalize_lists(&mut self) {
        explicit_list(&mut self.locations);
        explicit_list(&mut self.private_locations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AssertionComparison;

    #[test]
    fn test_check_deserialize_fixture() {
        let raw = r#"{
            "id": "73d29e72-6540-4bb5-967e-e07fa2c9465e",
            "name": "test",
            "checkType": "API",
            "frequency": 10,
            "activated": true,
            "muted": false,
            "locations": ["eu-west-1"],
            "privateLocations": null,
            "tags": ["auto"],
            "request": {
                "method": "GET",
                "url": "http://example.com",
                "followRedirects": true,
                "skipSSL": false,
                "body": "",
                "headers": [],
                "queryParameters": [],
                "assertions": [
                    {"source": "STATUS_CODE", "comparison": "EQUALS", "target": "200", "property": ""}
                ]
            },
            "retryStrategy": "FALLBACK",
            "createdAt": "2020-09-02T11:19:06.681Z",
            "someFutureField": 1
        }"#;

        let check: Check = serde_json::from_str(raw).unwrap();
        assert_eq!(check.id.as_deref(), Some("73d29e72-6540-4bb5-967e-e07fa2c9465e"));
        assert_eq!(check.check_type, CheckType::Api);
        assert_eq!(check.private_locations, None);
        assert_eq!(check.request.as_ref().unwrap().url, "http://example.com");
        assert!(check.retry_strategy.unwrap().is_fallback());
        assert!(check.created_at.is_some());
    }

    #[test]
    fn test_check_null_fields_decode_as_defaults() {
        let raw = r#"{
            "id": "x",
            "name": "t",
            "checkType": "API",
            "sslCheckDomain": null,
            "environmentVariables": null,
            "tags": null,
            "frequency": null,
            "request": {
                "method": "GET",
                "url": "http://example.com",
                "body": null,
                "headers": null,
                "queryParameters": null,
                "assertions": [
                    {"source": "JSON_BODY", "comparison": "HAS_KEY", "target": null, "property": "$.id"}
                ]
            }
        }"#;

        let check: Check = serde_json::from_str(raw).unwrap();
        assert_eq!(check.ssl_check_domain, "");
        assert!(check.environment_variables.is_empty());
        assert!(check.tags.is_empty());
        assert_eq!(check.frequency, 0);

        let request = check.request.unwrap();
        assert_eq!(request.body, "");
        assert!(request.headers.is_empty());
        assert_eq!(
            request.assertions[0].comparison,
            AssertionComparison::HasKey
        );
    }

    #[test]
    fn test_check_serializes_unset_lists_as_null_until_normalized() {
        let mut check = Check::new("test", CheckType::Api);
        let json = serde_json::to_value(&check).unwrap();
        assert!(json["locations"].is_null());

        check.normalize_lists();
        let json = serde_json::to_value(&check).unwrap();
        assert_eq!(json["locations"], serde_json::json!([]));
        assert_eq!(json["privateLocations"], serde_json::json!([]));
        assert!(json.get("id").is_none());
        assert!(json.get("createdAt").is_none());
    }

    #[test]
    fn test_multi_step_default_type() {
        let check = MultiStepCheck::default();
        let json = serde_json::to_value(&check).unwrap();
        assert_eq!(json["checkType"], "MULTI_STEP");
    }

    #[test]
    fn test_tcp_monitor_wire_names() {
        let monitor = TcpMonitor {
            name: "db".to_string(),
            request: TcpRequest {
                hostname: "db.example.com".to_string(),
                port: 5432,
                ..TcpRequest::default()
            },
            ..TcpMonitor::default()
        };
        let json = serde_json::to_value(&monitor).unwrap();
        assert_eq!(json["request"]["port"], 5432);
        assert!(json.get("frequency").is_none());
        assert!(json["request"].get("assertions").is_none());
    }
}
