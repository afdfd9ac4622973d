//! Alert channels and their type-dependent configuration.
//!
//! On the wire an alert channel is a flat object whose `config` member changes
//! shape with the `type` member. Here the configuration is an enum and the
//! `type` is derived from the variant, so the two can never disagree.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use super::common::KeyValue;
use crate::errors::{ChecklyError, Result};

/// Discriminator carried in the `type` member of an alert channel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertChannelType {
    Email,
    Slack,
    Sms,
    Call,
    Webhook,
    Opsgenie,
    Pagerduty,
}

impl AlertChannelType {
    pub const ALL: [AlertChannelType; 7] = [
        AlertChannelType::Email,
        AlertChannelType::Slack,
        AlertChannelType::Sms,
        AlertChannelType::Call,
        AlertChannelType::Webhook,
        AlertChannelType::Opsgenie,
        AlertChannelType::Pagerduty,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertChannelType::Email => "EMAIL",
            AlertChannelType::Slack => "SLACK",
            AlertChannelType::Sms => "SMS",
            AlertChannelType::Call => "CALL",
            AlertChannelType::Webhook => "WEBHOOK",
            AlertChannelType::Opsgenie => "OPSGENIE",
            AlertChannelType::Pagerduty => "PAGERDUTY",
        }
    }
}

impl Display for AlertChannelType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AlertChannelType {
    type Err = ChecklyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|channel_type| channel_type.as_str() == s)
            .ok_or_else(|| ChecklyError::UnknownAlertChannelType(s.to_string()))
    }
}

/// Email alert channel
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AlertChannelEmail {
    pub address: String,
}

/// Slack alert channel
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AlertChannelSlack {
    #[serde(rename = "url")]
    pub webhook_url: String,
    pub channel: String,
}

/// SMS alert channel
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AlertChannelSms {
    pub name: String,
    pub number: String,
}

/// Phone call alert channel
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AlertChannelCall {
    pub name: String,
    pub number: String,
}

/// Opsgenie alert channel
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct AlertChannelOpsgenie {
    pub name: String,
    pub api_key: String,
    pub region: String,
    pub priority: String,
}

/// PagerDuty alert channel
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct AlertChannelPagerduty {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    pub service_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
}

/// Webhook alert channel
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct AlertChannelWebhook {
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_secret: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<KeyValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub query_parameters: Vec<KeyValue>,
}

/// Type-specific configuration of an alert channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertChannelConfig {
    Email(AlertChannelEmail),
    Slack(AlertChannelSlack),
    Sms(AlertChannelSms),
    Call(AlertChannelCall),
    Webhook(AlertChannelWebhook),
    Opsgenie(AlertChannelOpsgenie),
    Pagerduty(AlertChannelPagerduty),
}

impl AlertChannelConfig {
    pub fn channel_type(&self) -> AlertChannelType {
        match self {
            AlertChannelConfig::Email(_) => AlertChannelType::Email,
            AlertChannelConfig::Slack(_) => AlertChannelType::Slack,
            AlertChannelConfig::Sms(_) => AlertChannelType::Sms,
            AlertChannelConfig::Call(_) => AlertChannelType::Call,
            AlertChannelConfig::Webhook(_) => AlertChannelType::Webhook,
            AlertChannelConfig::Opsgenie(_) => AlertChannelType::Opsgenie,
            AlertChannelConfig::Pagerduty(_) => AlertChannelType::Pagerduty,
        }
    }

    /// Decode a raw `config` object according to the `type` discriminator
    ///
    /// # Errors
    ///
    /// Returns [`ChecklyError::UnknownAlertChannelType`] for a `type` outside
    /// the supported set, and [`ChecklyError::Decode`] when `config` does not
    /// fit the selected variant.
    pub fn from_json(channel_type: &str, config: Value) -> Result<Self> {
        let channel_type = channel_type.parse::<AlertChannelType>()?;
        let body = config.to_string();
        let decoded = match channel_type {
            AlertChannelType::Email => serde_json::from_value(config).map(Self::Email),
            AlertChannelType::Slack => serde_json::from_value(config).map(Self::Slack),
            AlertChannelType::Sms => serde_json::from_value(config).map(Self::Sms),
            AlertChannelType::Call => serde_json::from_value(config).map(Self::Call),
            AlertChannelType::Webhook => serde_json::from_value(config).map(Self::Webhook),
            AlertChannelType::Opsgenie => serde_json::from_value(config).map(Self::Opsgenie),
            AlertChannelType::Pagerduty => serde_json::from_value(config).map(Self::Pagerduty),
        };
        decoded.map_err(|source| ChecklyError::Decode { body, source })
    }
}

impl Serialize for AlertChannelConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            AlertChannelConfig::Email(config) => config.serialize(serializer),
            AlertChannelConfig::Slack(config) => config.serialize(serializer),
            AlertChannelConfig::Sms(config) => config.serialize(serializer),
            AlertChannelConfig::Call(config) => config.serialize(serializer),
            AlertChannelConfig::Webhook(config) => config.serialize(serializer),
            AlertChannelConfig::Opsgenie(config) => config.serialize(serializer),
            AlertChannelConfig::Pagerduty(config) => config.serialize(serializer),
        }
    }
}

macro_rules! impl_from_config {
    ($($variant:ident => $config:ty),* $(,)?) => {
        $(
            impl From<$config> for AlertChannelConfig {
                fn from(config: $config) -> Self {
                    AlertChannelConfig::$variant(config)
                }
            }
        )*
    };
}

impl_from_config!(
    Email => AlertChannelEmail,
    Slack => AlertChannelSlack,
    Sms => AlertChannelSms,
    Call => AlertChannelCall,
    Webhook => AlertChannelWebhook,
    Opsgenie => AlertChannelOpsgenie,
    Pagerduty => AlertChannelPagerduty,
);

/// A notification destination and the events it is notified about
///
/// # Example
///
/// ```rust
/// use checkly_api::{AlertChannel, AlertChannelSlack, AlertChannelType};
///
/// let channel = AlertChannel::new(AlertChannelSlack {
///     webhook_url: "https://hooks.slack.com/services/T000/B000/XXXX".to_string(),
///     channel: "#alerts".to_string(),
/// })
/// .with_send_failure(true)
/// .with_send_recovery(true);
///
/// assert_eq!(channel.channel_type(), AlertChannelType::Slack);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertChannel {
    /// Assigned by Checkly
    pub id: Option<i64>,
    pub config: AlertChannelConfig,
    pub send_recovery: Option<bool>,
    pub send_failure: Option<bool>,
    pub send_degraded: Option<bool>,
    pub ssl_expiry: Option<bool>,
    pub ssl_expiry_threshold: Option<u32>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl AlertChannel {
    pub fn new(config: impl Into<AlertChannelConfig>) -> Self {
        Self {
            id: None,
            config: config.into(),
            send_recovery: None,
            send_failure: None,
            send_degraded: None,
            ssl_expiry: None,
            ssl_expiry_threshold: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn channel_type(&self) -> AlertChannelType {
        self.config.channel_type()
    }

    /// Replace the configuration; the channel type follows the new variant
    pub fn set_config(&mut self, config: impl Into<AlertChannelConfig>) {
        self.config = config.into();
    }

    pub fn with_send_recovery(mut self, enabled: bool) -> Self {
        self.send_recovery = Some(enabled);
        self
    }

    pub fn with_send_failure(mut self, enabled: bool) -> Self {
        self.send_failure = Some(enabled);
        self
    }

    pub fn with_send_degraded(mut self, enabled: bool) -> Self {
        self.send_degraded = Some(enabled);
        self
    }

    /// Notify when an SSL certificate expires within `threshold_days`
    pub fn with_ssl_expiry(mut self, threshold_days: u32) -> Self {
        self.ssl_expiry = Some(true);
        self.ssl_expiry_threshold = Some(threshold_days);
        self
    }

    /// Decode an alert channel from a raw API response body
    pub fn from_json(body: &str) -> Result<Self> {
        let wire: AlertChannelWire =
            serde_json::from_str(body).map_err(|source| ChecklyError::Decode {
                body: body.to_string(),
                source,
            })?;
        wire.into_channel()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AlertChannelPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
    #[serde(rename = "type")]
    channel_type: AlertChannelType,
    config: &'a AlertChannelConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    send_recovery: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    send_failure: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    send_degraded: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ssl_expiry: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ssl_expiry_threshold: Option<u32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AlertChannelWire {
    #[serde(default)]
    id: Option<i64>,
    #[serde(rename = "type", default)]
    channel_type: String,
    #[serde(default)]
    config: Option<Value>,
    #[serde(default)]
    send_recovery: Option<bool>,
    #[serde(default)]
    send_failure: Option<bool>,
    #[serde(default)]
    send_degraded: Option<bool>,
    #[serde(default)]
    ssl_expiry: Option<bool>,
    #[serde(default)]
    ssl_expiry_threshold: Option<u32>,
    #[serde(rename = "created_at", default)]
    created_at: Option<String>,
    #[serde(rename = "updated_at", default)]
    updated_at: Option<String>,
}

impl AlertChannelWire {
    fn into_channel(self) -> Result<AlertChannel> {
        // A missing or null config decodes as the variant's defaults.
        let config = match self.config {
            Some(Value::Null) | None => Value::Object(serde_json::Map::new()),
            Some(config) => config,
        };
        Ok(AlertChannel {
            id: self.id,
            config: AlertChannelConfig::from_json(&self.channel_type, config)?,
            send_recovery: self.send_recovery,
            send_failure: self.send_failure,
            send_degraded: self.send_degraded,
            ssl_expiry: self.ssl_expiry,
            ssl_expiry_threshold: self.ssl_expiry_threshold,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl Serialize for AlertChannel {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        AlertChannelPayload {
            id: self.id,
            channel_type: self.channel_type(),
            config: &self.config,
            send_recovery: self.send_recovery,
            send_failure: self.send_failure,
            send_degraded: self.send_degraded,
            ssl_expiry: self.ssl_expiry,
            ssl_expiry_threshold: self.ssl_expiry_threshold,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AlertChannel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        AlertChannelWire::deserialize(deserializer)?
            .into_channel()
            .map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn all_variants() -> Vec<AlertChannelConfig> {
        vec![
            AlertChannelEmail {
                address: "foo@test.com".to_string(),
            }
            .into(),
            AlertChannelSlack {
                webhook_url: "http://example.com/".to_string(),
                channel: "foochan".to_string(),
            }
            .into(),
            AlertChannelSms {
                name: "foo".to_string(),
                number: "0123456789".to_string(),
            }
            .into(),
            AlertChannelCall {
                name: "foo".to_string(),
                number: "0123456789".to_string(),
            }
            .into(),
            AlertChannelWebhook {
                name: "foo".to_string(),
                url: "http://foo.com".to_string(),
                method: Some("GET".to_string()),
                template: Some("bar".to_string()),
                webhook_secret: Some("scrt".to_string()),
                headers: vec![KeyValue::new("fookey", "fooval")],
                query_parameters: vec![KeyValue::new("barkey", "barval")],
                ..AlertChannelWebhook::default()
            }
            .into(),
            AlertChannelOpsgenie {
                name: "foo".to_string(),
                api_key: "fookey".to_string(),
                region: "EU".to_string(),
                priority: "P1".to_string(),
            }
            .into(),
            AlertChannelPagerduty {
                account: Some("checkly".to_string()),
                service_key: "key123".to_string(),
                service_name: Some("backend".to_string()),
            }
            .into(),
        ]
    }

    #[test]
    fn test_round_trip_every_variant() {
        for (index, config) in all_variants().into_iter().enumerate() {
            let channel = AlertChannel {
                id: Some(index as i64 + 1),
                ..AlertChannel::new(config)
            }
            .with_send_failure(true)
            .with_send_recovery(false)
            .with_ssl_expiry(30);

            let encoded = serde_json::to_string(&channel).unwrap();
            let decoded = AlertChannel::from_json(&encoded).unwrap();
            assert_eq!(decoded, channel, "round trip of {}", channel.channel_type());

            let via_serde: AlertChannel = serde_json::from_str(&encoded).unwrap();
            assert_eq!(via_serde, channel);
        }
    }

    #[test]
    fn test_encode_payload_shape() {
        let channel = AlertChannel::new(AlertChannelSlack {
            webhook_url: "https://hooks.slack.com/x".to_string(),
            channel: "#ops".to_string(),
        })
        .with_send_degraded(true);

        let payload = serde_json::to_value(&channel).unwrap();
        assert_eq!(
            payload,
            json!({
                "type": "SLACK",
                "config": {"url": "https://hooks.slack.com/x", "channel": "#ops"},
                "sendDegraded": true
            })
        );
    }

    #[test]
    fn test_decode_unknown_type() {
        let raw = r#"{"id": 1, "type": "CARRIER_PIGEON", "config": {}}"#;
        match AlertChannel::from_json(raw) {
            Err(ChecklyError::UnknownAlertChannelType(found)) => assert_eq!(found, "CARRIER_PIGEON"),
            other => panic!("Expected UnknownAlertChannelType, got {other:?}"),
        }

        let err = serde_json::from_str::<AlertChannel>(raw).unwrap_err();
        assert!(err.to_string().contains("unknown alert-channel config type"));
    }

    #[test]
    fn test_decode_missing_type_is_unknown() {
        let raw = r#"{"id": 1, "config": {"address": "a@b.c"}}"#;
        assert!(matches!(
            AlertChannel::from_json(raw),
            Err(ChecklyError::UnknownAlertChannelType(found)) if found.is_empty()
        ));
    }

    #[test]
    fn test_decode_server_response() {
        let raw = r#"{
            "id": 42,
            "type": "EMAIL",
            "config": {"address": "ops@example.com"},
            "sendRecovery": true,
            "sendFailure": true,
            "sendDegraded": false,
            "sslExpiry": false,
            "sslExpiryThreshold": 30,
            "created_at": "2021-01-01T00:00:00.000Z",
            "updated_at": null
        }"#;
        let channel = AlertChannel::from_json(raw).unwrap();
        assert_eq!(channel.id, Some(42));
        assert_eq!(
            channel.config,
            AlertChannelConfig::Email(AlertChannelEmail {
                address: "ops@example.com".to_string()
            })
        );
        assert_eq!(channel.ssl_expiry_threshold, Some(30));
        assert_eq!(channel.created_at.as_deref(), Some("2021-01-01T00:00:00.000Z"));
        assert_eq!(channel.updated_at, None);
    }

    #[test]
    fn test_decode_config_shape_mismatch() {
        let raw = r#"{"type": "SMS", "config": {"name": 5}}"#;
        assert!(matches!(
            AlertChannel::from_json(raw),
            Err(ChecklyError::Decode { .. })
        ));
    }

    #[test]
    fn test_set_config_switches_type() {
        let mut channel = AlertChannel::new(AlertChannelEmail::default());
        channel.set_config(AlertChannelCall {
            name: "on-call".to_string(),
            number: "+3100000000".to_string(),
        });
        assert_eq!(channel.channel_type(), AlertChannelType::Call);
        let payload = serde_json::to_value(&channel).unwrap();
        assert_eq!(payload["type"], "CALL");
        assert_eq!(payload["config"]["number"], "+3100000000");
    }

    #[test]
    fn test_channel_type_from_str() {
        for channel_type in AlertChannelType::ALL {
            assert_eq!(channel_type.as_str().parse::<AlertChannelType>().unwrap(), channel_type);
            assert_eq!(
                serde_json::to_value(channel_type).unwrap(),
                json!(channel_type.as_str())
            );
        }
        assert!("email".parse::<AlertChannelType>().is_err());
    }
}
