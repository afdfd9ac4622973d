use serde::Serialize;
use tracing::{debug, instrument};

use super::{ChecklyClient, EXPECT_CREATED};
use crate::errors::{ChecklyError, Result};
use crate::types::{Check, CheckType, HeartbeatMonitor, MultiStepCheck, TcpMonitor, UrlMonitor};

/// Update payload for monitors whose endpoint needs the type spelled out
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TypedMonitor<'a, T> {
    check_type: CheckType,
    #[serde(flatten)]
    monitor: &'a T,
}

/// Path segment under `checks/` that creates a check of this type
fn create_segment(check_type: CheckType) -> Result<&'static str> {
    match check_type {
        CheckType::Api => Ok("api"),
        CheckType::Browser => Ok("browser"),
        CheckType::Heartbeat => Ok("heartbeat"),
        CheckType::MultiStep => Ok("multistep"),
        CheckType::Tcp => Err(ChecklyError::UnsupportedCheckType(
            "TCP checks are created with create_tcp_monitor".to_string(),
        )),
        CheckType::Url => Err(ChecklyError::UnsupportedCheckType(
            "URL checks are created with create_url_monitor".to_string(),
        )),
    }
}

impl ChecklyClient {
    /// Create a check, choosing the endpoint from its `check_type`
    ///
    /// # Errors
    ///
    /// `TCP` and `URL` checks fail with [`ChecklyError::UnsupportedCheckType`]
    /// without touching the network.
    #[instrument(name = "ChecklyClient::create_check", skip_all, fields(check_type = %check.check_type))]
    pub async fn create_check(&self, mut check: Check) -> Result<Check> {
        let segment = create_segment(check.check_type)?;
        check.normalize_lists();

        let url = self.endpoint_without_alert_assignment(&["checks", segment])?;
        let created: Check = self.create_resource(url, &check, EXPECT_CREATED).await?;

        debug!(check_id = created.id.as_deref().unwrap_or_default(), "Created check");
        Ok(created)
    }

    #[instrument(name = "ChecklyClient::get_check", skip(self))]
    pub async fn get_check(&self, id: &str) -> Result<Check> {
        self.get_resource(self.endpoint(&["checks", id])?)
            .await
    }

    #[instrument(name = "ChecklyClient::update_check", skip(self, check))]
    pub async fn update_check(&self, id: &str, mut check: Check) -> Result<Check> {
        check.normalize_lists();
        let url = self.endpoint_without_alert_assignment(&["checks", id])?;
        self.update_resource(url, &check).await
    }

    /// Delete a check of any kind, monitors included
    #[instrument(name = "ChecklyClient::delete_check", skip(self))]
    pub async fn delete_check(&self, id: &str) -> Result<()> {
        self.delete_resource(self.endpoint(&["checks", id])?)
            .await
    }

    #[instrument(name = "ChecklyClient::create_heartbeat_monitor", skip_all)]
    pub async fn create_heartbeat_monitor(
        &self,
        monitor: HeartbeatMonitor,
    ) -> Result<HeartbeatMonitor> {
        let url = self.endpoint_without_alert_assignment(&["checks", "heartbeat"])?;
        self.create_resource(url, &monitor, EXPECT_CREATED).await
    }

    #[instrument(name = "ChecklyClient::get_heartbeat_monitor", skip(self))]
    pub async fn get_heartbeat_monitor(&self, id: &str) -> Result<HeartbeatMonitor> {
        self.get_resource(self.endpoint(&["checks", id])?)
            .await
    }

    #[instrument(name = "ChecklyClient::update_heartbeat_monitor", skip(self, monitor))]
    pub async fn update_heartbeat_monitor(
        &self,
        id: &str,
        monitor: HeartbeatMonitor,
    ) -> Result<HeartbeatMonitor> {
        let url = self.endpoint_without_alert_assignment(&["checks", "heartbeat", id])?;
        self.update_resource(url, &monitor).await
    }

    #[instrument(name = "ChecklyClient::create_tcp_monitor", skip_all)]
    pub async fn create_tcp_monitor(&self, mut monitor: TcpMonitor) -> Result<TcpMonitor> {
        monitor.normalize_lists();
        let url = self.endpoint_without_alert_assignment(&["checks", "tcp"])?;
        self.create_resource(url, &monitor, EXPECT_CREATED).await
    }

    #[instrument(name = "ChecklyClient::get_tcp_monitor", skip(self))]
    pub async fn get_tcp_monitor(&self, id: &str) -> Result<TcpMonitor> {
        self.get_resource(self.endpoint(&["checks", id])?)
            .await
    }

    #[instrument(name = "ChecklyClient::update_tcp_monitor", skip(self, monitor))]
    pub async fn update_tcp_monitor(&self, id: &str, mut monitor: TcpMonitor) -> Result<TcpMonitor> {
        monitor.normalize_lists();
        let url = self.endpoint_without_alert_assignment(&["checks", "tcp", id])?;
        let payload = TypedMonitor {
            check_type: CheckType::Tcp,
            monitor: &monitor,
        };
        self.update_resource(url, &payload).await
    }

    #[instrument(name = "ChecklyClient::create_url_monitor", skip_all)]
    pub async fn create_url_monitor(&self, mut monitor: UrlMonitor) -> Result<UrlMonitor> {
        monitor.normalize_lists();
        let url = self.endpoint_without_alert_assignment(&["checks", "url"])?;
        self.create_resource(url, &monitor, EXPECT_CREATED).await
    }

    #[instrument(name = "ChecklyClient::get_url_monitor", skip(self))]
    pub async fn get_url_monitor(&self, id: &str) -> Result<UrlMonitor> {
        self.get_resource(self.endpoint(&["checks", id])?)
            .await
    }

    #[instrument(name = "ChecklyClient::update_url_monitor", skip(self, monitor))]
    pub async fn update_url_monitor(&self, id: &str, mut monitor: UrlMonitor) -> Result<UrlMonitor> {
        monitor.normalize_lists();
        let url = self.endpoint_without_alert_assignment(&["checks", "url", id])?;
        let payload = TypedMonitor {
            check_type: CheckType::Url,
            monitor: &monitor,
        };
        self.update_resource(url, &payload).await
    }

    #[instrument(name = "ChecklyClient::create_multi_step_check", skip_all)]
    pub async fn create_multi_step_check(
        &self,
        mut check: MultiStepCheck,
    ) -> Result<MultiStepCheck> {
        check.normalize_lists();
        let url = self.endpoint_without_alert_assignment(&["checks", "multistep"])?;
        self.create_resource(url, &check, EXPECT_CREATED).await
    }

    #[instrument(name = "ChecklyClient::get_multi_step_check", skip(self))]
    pub async fn get_multi_step_check(&self, id: &str) -> Result<MultiStepCheck> {
        self.get_resource(self.endpoint(&["checks", id])?)
            .await
    }

    #[instrument(name = "ChecklyClient::update_multi_step_check", skip(self, check))]
    pub async fn update_multi_step_check(
        &self,
        id: &str,
        mut check: MultiStepCheck,
    ) -> Result<MultiStepCheck> {
        check.normalize_lists();
        let url = self.endpoint_without_alert_assignment(&["checks", "multistep", id])?;
        self.update_resource(url, &check).await
    }
}
