use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{null_as_default, CheckType};

/// Outcome of a single check run
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckResult {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub check_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub has_failures: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub has_errors: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_degraded: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub over_max_response_time: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub run_location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub response_time: i64,
    /// Raw API check details; their shape depends on the check definition
    pub api_check_result: Option<Map<String, Value>>,
    /// Raw browser check details
    pub browser_check_result: Option<Map<String, Value>>,
    #[serde(deserialize_with = "null_as_default")]
    pub check_run_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub attempts: i64,
    pub started_at: Option<DateTime<Utc>>,
    pub stopped_at: Option<DateTime<Utc>>,
    #[serde(rename = "created_at")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Filters for listing the results of a check
///
/// Zero values mean "not set": `page`, `limit`, `from` and `to` equal to 0
/// are omitted from the query and cannot be requested explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckResultsFilter {
    pub limit: i64,
    pub page: i64,
    pub location: String,
    /// Unix timestamp, in seconds
    pub to: i64,
    /// Unix timestamp, in seconds
    pub from: i64,
    /// Only `API` and `BROWSER` are sent; other types are ignored
    pub check_type: Option<CheckType>,
    pub has_failures: bool,
}

impl CheckResultsFilter {
    /// Query parameters for the filter, in alphabetical order
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(check_type @ (CheckType::Api | CheckType::Browser)) = self.check_type {
            pairs.push(("checkType", check_type.to_string()));
        }
        if self.from > 0 {
            pairs.push(("from", self.from.to_string()));
        }
        if self.has_failures {
            pairs.push(("hasFailures", "1".to_string()));
        }
        if self.limit > 0 {
            pairs.push(("limit", self.limit.to_string()));
        }
        if !self.location.is_empty() {
            pairs.push(("location", self.location.clone()));
        }
        if self.page > 0 {
            pairs.push(("page", self.page.to_string()));
        }
        if self.to > 0 {
            pairs.push(("to", self.to.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_is_empty() {
        assert!(CheckResultsFilter::default().query_pairs().is_empty());
    }

    #[test]
    fn test_has_failures_flag() {
        let filter = CheckResultsFilter {
            has_failures: true,
            ..CheckResultsFilter::default()
        };
        assert_eq!(filter.query_pairs(), vec![("hasFailures", "1".to_string())]);
    }

    #[test]
    fn test_full_filter_order() {
        let filter = CheckResultsFilter {
            limit: 100,
            page: 2,
            location: "eu-west-1".to_string(),
            to: 1000,
            from: 1,
            check_type: Some(CheckType::Api),
            has_failures: true,
        };
        let keys: Vec<&str> = filter.query_pairs().into_iter().map(|(key, _)| key).collect();
        assert_eq!(
            keys,
            vec!["checkType", "from", "hasFailures", "limit", "location", "page", "to"]
        );
    }

    #[test]
    fn test_unsupported_check_type_is_omitted() {
        let filter = CheckResultsFilter {
            check_type: Some(CheckType::Heartbeat),
            ..CheckResultsFilter::default()
        };
        assert!(filter.query_pairs().is_empty());
    }

    #[test]
    fn test_check_result_deserialize() {
        let raw = r#"{
            "id": "580c4e71-0109-45ba-9130-887ff01e1a7f",
            "name": "API check 1",
            "checkId": "73d29e72-6540-4bb5-967e-e07fa2c9465e",
            "hasFailures": false,
            "hasErrors": false,
            "isDegraded": false,
            "overMaxResponseTime": false,
            "runLocation": "eu-central-1",
            "startedAt": "2020-09-02T11:19:06.283Z",
            "stoppedAt": "2020-09-02T11:19:06.413Z",
            "created_at": "2020-09-02T11:19:06.681Z",
            "responseTime": 129,
            "apiCheckResult": {},
            "browserCheckResult": null,
            "checkRunId": 1599045546009,
            "attempts": 1
        }"#;
        let result: CheckResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.check_run_id, 1599045546009);
        assert_eq!(result.response_time, 129);
        assert_eq!(result.api_check_result, Some(Map::new()));
        assert_eq!(result.browser_check_result, None);
        assert_eq!(
            result.started_at.unwrap().to_rfc3339(),
            "2020-09-02T11:19:06.283+00:00"
        );
    }
}
