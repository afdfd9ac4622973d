use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Client certificate presented by checks when calling `host` over mTLS
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientCertificate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Host domain the certificate is used for
    pub host: String,
    /// Certificate in PEM format
    #[serde(rename = "cert")]
    pub certificate: String,
    /// Private key in PEM format
    #[serde(rename = "key")]
    pub private_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passphrase: Option<String>,
    /// PEM bundle of CA certificates to trust
    #[serde(rename = "ca", skip_serializing_if = "Option::is_none")]
    pub trusted_ca: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
