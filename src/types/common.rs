use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};

/// Kind of check, as carried by the `checkType` field
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckType {
    #[default]
    Api,
    Browser,
    Heartbeat,
    MultiStep,
    Tcp,
    Url,
}

impl Display for CheckType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckType::Api => write!(f, "API"),
            CheckType::Browser => write!(f, "BROWSER"),
            CheckType::Heartbeat => write!(f, "HEARTBEAT"),
            CheckType::MultiStep => write!(f, "MULTI_STEP"),
            CheckType::Tcp => write!(f, "TCP"),
            CheckType::Url => write!(f, "URL"),
        }
    }
}

/// Escalation strategy of an [`AlertSettings`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EscalationType {
    RunBased,
    TimeBased,
}

/// Closed set of wire strings plus a catch-all that keeps unknown values
/// verbatim, so values added by the API later still round-trip.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident => $wire:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$variant_meta])* $variant,)*
            /// Value not known to this client, kept as sent by the API
            Unknown(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)*
                    Self::Unknown(value) => value.as_str(),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($wire => Self::$variant,)*
                    other => Self::Unknown(other.to_string()),
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = String::deserialize(deserializer)?;
                Ok(Self::from(value.as_str()))
            }
        }
    };
}

wire_enum! {
    /// Part of a check response an [`Assertion`] inspects
    AssertionSource {
        StatusCode => "STATUS_CODE",
        JsonBody => "JSON_BODY",
        TextBody => "TEXT_BODY",
        Headers => "HEADERS",
        ResponseTime => "RESPONSE_TIME",
        /// Response data of a TCP check
        ResponseData => "RESPONSE_DATA",
    }
}

wire_enum! {
    /// Comparison applied by an [`Assertion`]
    AssertionComparison {
        Equals => "EQUALS",
        NotEquals => "NOT_EQUALS",
        HasKey => "HAS_KEY",
        NotHasKey => "NOT_HAS_KEY",
        HasValue => "HAS_VALUE",
        NotHasValue => "NOT_HAS_VALUE",
        IsEmpty => "IS_EMPTY",
        NotEmpty => "NOT_EMPTY",
        GreaterThan => "GREATER_THAN",
        LessThan => "LESS_THAN",
        Contains => "CONTAINS",
        NotContains => "NOT_CONTAINS",
        IsNull => "IS_NULL",
        NotNull => "NOT_NULL",
    }
}

/// Assertion about a check response, verified on every run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Assertion {
    pub source: AssertionSource,
    pub comparison: AssertionComparison,
    #[serde(default, deserialize_with = "null_as_default")]
    pub target: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub property: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub edit: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub array_index: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub array_selector: i32,
}

impl Assertion {
    pub fn new(
        source: AssertionSource,
        comparison: AssertionComparison,
        target: impl Into<String>,
    ) -> Self {
        Self {
            source,
            comparison,
            target: target.into(),
            property: String::new(),
            edit: false,
            order: 0,
            array_index: 0,
            array_selector: 0,
        }
    }
}

/// HTTP basic authentication credentials
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

/// Key/value pair such as a request header or query parameter
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyValue {
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub locked: bool,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            locked: false,
        }
    }
}

/// Subscription of a check or group to an alert channel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlertChannelSubscription {
    #[serde(rename = "alertChannelId")]
    pub channel_id: i64,
    pub activated: bool,
}

/// Alert configuration of a check or group
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct AlertSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escalation_type: Option<EscalationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_based_escalation: Option<RunBasedEscalation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_based_escalation: Option<TimeBasedEscalation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminders: Option<Reminders>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel_run_failure_threshold: Option<ParallelRunFailureThreshold>,
}

/// Escalate after a number of failed runs
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct RunBasedEscalation {
    pub failed_run_threshold: u32,
}

/// Escalate after a check has been failing for some minutes
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct TimeBasedEscalation {
    pub minutes_failing_threshold: u32,
}

/// Number of reminders sent after an alert, and the interval between them
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Reminders {
    pub amount: u32,
    pub interval: u32,
}

/// Escalation on the share of failing regions, for parallel checks only
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ParallelRunFailureThreshold {
    pub enabled: bool,
    pub percentage: u32,
}

/// Retry strategy of a check or group
///
/// The `FALLBACK` strategy travels as the bare string `"FALLBACK"`,
/// every other strategy as an object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetryStrategy {
    pub strategy_type: String,
    pub base_backoff_seconds: u32,
    pub max_retries: u32,
    pub max_duration_seconds: u32,
    pub same_region: bool,
}

impl RetryStrategy {
    pub const FALLBACK: &'static str = "FALLBACK";

    /// Defer to the retry strategy of the surrounding group
    pub fn fallback() -> Self {
        Self {
            strategy_type: Self::FALLBACK.to_string(),
            ..Self::default()
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.strategy_type == Self::FALLBACK
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RetryStrategyObject {
    #[serde(rename = "type")]
    strategy_type: String,
    #[serde(default)]
    base_backoff_seconds: u32,
    #[serde(default)]
    max_retries: u32,
    #[serde(default)]
    max_duration_seconds: u32,
    #[serde(default)]
    same_region: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RetryStrategyRepr {
    Bare(String),
    Object(RetryStrategyObject),
}

impl Serialize for RetryStrategy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_fallback() {
            return serializer.serialize_str(Self::FALLBACK);
        }
        RetryStrategyObject {
            strategy_type: self.strategy_type.clone(),
            base_backoff_seconds: self.base_backoff_seconds,
            max_retries: self.max_retries,
            max_duration_seconds: self.max_duration_seconds,
            same_region: self.same_region,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RetryStrategy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RetryStrategyRepr::deserialize(deserializer)? {
            RetryStrategyRepr::Bare(strategy_type) => Self {
                strategy_type,
                ..Self::default()
            },
            RetryStrategyRepr::Object(object) => Self {
                strategy_type: object.strategy_type,
                base_backoff_seconds: object.base_backoff_seconds,
                max_retries: object.max_retries,
                max_duration_seconds: object.max_duration_seconds,
                same_region: object.same_region,
            },
        })
    }
}

/// Decode an explicit `null` as the field's default, as a missing field
/// already is under `#[serde(default)]`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Serialization helper for list fields the API treats as "keep as is" when
/// absent: rewrites `None` to an explicit empty list.
pub(crate) fn explicit_list(list: &mut Option<Vec<String>>) {
    if list.is_none() {
        *list = Some(Vec::new());
    }
}
