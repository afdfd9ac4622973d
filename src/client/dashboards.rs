use tracing::instrument;

use super::{ChecklyClient, EXPECT_OK_OR_CREATED};
use crate::errors::Result;
use crate::types::Dashboard;

impl ChecklyClient {
    #[instrument(name = "ChecklyClient::create_dashboard", skip_all, fields(custom_url = %dashboard.custom_url))]
    pub async fn create_dashboard(&self, dashboard: Dashboard) -> Result<Dashboard> {
        self.create_resource(self.endpoint(&["dashboards"])?, &dashboard, EXPECT_OK_OR_CREATED)
            .await
    }

    #[instrument(name = "ChecklyClient::get_dashboard", skip(self))]
    pub async fn get_dashboard(&self, id: &str) -> Result<Dashboard> {
        self.get_resource(self.endpoint(&["dashboards", id])?)
            .await
    }

    #[instrument(name = "ChecklyClient::update_dashboard", skip(self, dashboard))]
    pub async fn update_dashboard(&self, id: &str, dashboard: Dashboard) -> Result<Dashboard> {
        self.update_resource(self.endpoint(&["dashboards", id])?, &dashboard)
            .await
    }

    #[instrument(name = "ChecklyClient::delete_dashboard", skip(self))]
    pub async fn delete_dashboard(&self, id: &str) -> Result<()> {
        self.delete_resource(self.endpoint(&["dashboards", id])?)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_client;
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_dashboard_lifecycle() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/dashboards"))
            .and(body_partial_json(json!({"customUrl": "status-acme", "isPrivate": true})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "dashboardId": "abc123",
                "customUrl": "status-acme",
                "isPrivate": true,
                "keys": [{"id": "k1", "maskedKey": "...xyz", "rawKey": "secret"}]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("PUT"))
            .and(path("/v1/dashboards/abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"dashboardId": "abc123", "header": "Acme"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v1/dashboards/abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"dashboardId": "abc123", "header": "Acme"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/v1/dashboards/abc123"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let dashboard = Dashboard {
            custom_url: "status-acme".to_string(),
            is_private: true,
            ..Dashboard::default()
        };

        let created = client.create_dashboard(dashboard.clone()).await.unwrap();
        let id = created.dashboard_id.clone().unwrap();
        assert_eq!(created.keys[0].raw_key, "secret");

        let updated = client
            .update_dashboard(&id, Dashboard {
                header: Some("Acme".to_string()),
                ..dashboard
            })
            .await
            .unwrap();
        assert_eq!(updated.header.as_deref(), Some("Acme"));

        assert_eq!(client.get_dashboard(&id).await.unwrap().dashboard_id, Some(id.clone()));
        client.delete_dashboard(&id).await.unwrap();
    }
}
