use reqwest::Method;
use tracing::instrument;

use super::{decode, ChecklyClient, EXPECT_OK, EXPECT_OK_OR_CREATED};
use crate::errors::Result;
use crate::types::{TriggerCheck, TriggerGroup};

impl ChecklyClient {
    fn check_trigger_url(&self, check_id: &str, token: &str) -> String {
        format!("{}/checks/{check_id}/trigger/{token}", self.trimmed_base())
    }

    fn group_trigger_url(&self, group_id: i64, token: &str) -> String {
        format!("{}/check-groups/{group_id}/trigger/{token}", self.trimmed_base())
    }

    async fn fetch_check_trigger(&self, method: Method, check_id: &str) -> Result<TriggerCheck> {
        let url = self.endpoint(&["triggers", "checks", check_id])?;
        let expected = if method == Method::POST {
            EXPECT_OK_OR_CREATED
        } else {
            EXPECT_OK
        };
        let text = self.execute(method, url, None, expected).await?;

        let mut trigger: TriggerCheck = decode(&text)?;
        trigger.url = self.check_trigger_url(check_id, &trigger.token);
        Ok(trigger)
    }

    async fn fetch_group_trigger(&self, method: Method, group_id: i64) -> Result<TriggerGroup> {
        let url = self.endpoint(&["triggers", "check-groups", &group_id.to_string()])?;
        let expected = if method == Method::POST {
            EXPECT_OK_OR_CREATED
        } else {
            EXPECT_OK
        };
        let text = self.execute(method, url, None, expected).await?;

        let mut trigger: TriggerGroup = decode(&text)?;
        trigger.url = self.group_trigger_url(group_id, &trigger.token);
        Ok(trigger)
    }

    /// Create a trigger for a check; the returned `url` runs the check when called
    #[instrument(name = "ChecklyClient::create_trigger_check", skip(self))]
    pub async fn create_trigger_check(&self, check_id: &str) -> Result<TriggerCheck> {
        self.fetch_check_trigger(Method::POST, check_id).await
    }

    #[instrument(name = "ChecklyClient::get_trigger_check", skip(self))]
    pub async fn get_trigger_check(&self, check_id: &str) -> Result<TriggerCheck> {
        self.fetch_check_trigger(Method::GET, check_id).await
    }

    #[instrument(name = "ChecklyClient::delete_trigger_check", skip(self))]
    pub async fn delete_trigger_check(&self, check_id: &str) -> Result<()> {
        self.delete_resource(self.endpoint(&["triggers", "checks", check_id])?)
            .await
    }

    /// Create a trigger for a check group
    #[instrument(name = "ChecklyClient::create_trigger_group", skip(self))]
    pub async fn create_trigger_group(&self, group_id: i64) -> Result<TriggerGroup> {
        self.fetch_group_trigger(Method::POST, group_id).await
    }

    #[instrument(name = "ChecklyClient::get_trigger_group", skip(self))]
    pub async fn get_trigger_group(&self, group_id: i64) -> Result<TriggerGroup> {
        self.fetch_group_trigger(Method::GET, group_id).await
    }

    #[instrument(name = "ChecklyClient::delete_trigger_group", skip(self))]
    pub async fn delete_trigger_group(&self, group_id: i64) -> Result<()> {
        self.delete_resource(self.endpoint(&["triggers", "check-groups", &group_id.to_string()])?)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_client;
    use super::*;
    use crate::errors::ChecklyError;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const CHECK_ID: &str = "73d29e72-6540-4bb5-967e-e07fa2c9465e";

    #[tokio::test]
    async fn test_create_trigger_check_fills_url() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(format!("/v1/triggers/checks/{CHECK_ID}")))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 1,
                "checkId": CHECK_ID,
                "token": "abc",
                "called_at": null,
                "created_at": "2021-05-20T10:00:00.000Z"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let trigger = client.create_trigger_check(CHECK_ID).await.unwrap();

        assert_eq!(trigger.token, "abc");
        assert_eq!(
            trigger.url,
            format!("{}/checks/{CHECK_ID}/trigger/abc", mock_server.uri())
        );
        assert_eq!(trigger.called_at, None);
        assert!(trigger.created_at.is_some());

        let requests = mock_server.received_requests().await.unwrap();
        assert!(requests[0].body.is_empty());
    }

    #[tokio::test]
    async fn test_get_and_delete_trigger_check() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/v1/triggers/checks/{CHECK_ID}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "xyz"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("DELETE"))
            .and(path(format!("/v1/triggers/checks/{CHECK_ID}")))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let trigger = client.get_trigger_check(CHECK_ID).await.unwrap();
        assert!(trigger.url.ends_with("/trigger/xyz"));

        client.delete_trigger_check(CHECK_ID).await.unwrap();
    }

    #[tokio::test]
    async fn test_get_trigger_check_rejects_created() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"token": "xyz"})))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        assert!(matches!(
            client.get_trigger_check(CHECK_ID).await,
            Err(ChecklyError::UnexpectedStatus { status: 201, .. })
        ));
    }

    #[tokio::test]
    async fn test_trigger_group_lifecycle() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/triggers/check-groups/135"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"groupId": 135, "token": "grp"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v1/triggers/check-groups/135"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"groupId": 135, "token": "grp"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/v1/triggers/check-groups/135"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&format!("{}/", mock_server.uri()));

        let created = client.create_trigger_group(135).await.unwrap();
        assert_eq!(
            created.url,
            format!("{}/check-groups/135/trigger/grp", mock_server.uri())
        );

        let fetched = client.get_trigger_group(135).await.unwrap();
        assert_eq!(fetched.group_id, Some(135));

        client.delete_trigger_group(135).await.unwrap();
    }
}
