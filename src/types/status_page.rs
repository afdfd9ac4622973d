use serde::{Deserialize, Serialize};

/// Default colour theme of a status page
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatusPageTheme {
    Auto,
    Dark,
    Light,
}

/// Hosted status page made of cards of services
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct StatusPage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    /// Unique subdomain of the status page
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Where a click on the logo leads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_theme: Option<StatusPageTheme>,
    pub cards: Vec<StatusPageCard>,
}

/// Group of services shown together on a status page
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StatusPageCard {
    pub name: String,
    pub services: Vec<StatusPageService>,
}

/// Service whose status is reported on status pages
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StatusPageService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
}

impl StatusPageService {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_page_serialization() {
        let page = StatusPage {
            name: "Acme".to_string(),
            url: "acme".to_string(),
            default_theme: Some(StatusPageTheme::Dark),
            cards: vec![StatusPageCard {
                name: "API".to_string(),
                services: vec![StatusPageService {
                    id: Some("svc-1".to_string()),
                    name: "Public API".to_string(),
                }],
            }],
            ..StatusPage::default()
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["defaultTheme"], "DARK");
        assert_eq!(json["cards"][0]["services"][0]["id"], "svc-1");
        assert!(json.get("id").is_none());
        assert!(json.get("customDomain").is_none());
    }
}
