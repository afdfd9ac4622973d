use reqwest::Method;
use tracing::{debug, instrument};

use super::{encode, ChecklyClient, EXPECT_OK, EXPECT_OK_OR_CREATED};
use crate::errors::Result;
use crate::types::AlertChannel;

impl ChecklyClient {
    /// Create an alert channel
    ///
    /// The response is decoded through the alert channel codec, so an
    /// unrecognised `type` surfaces as
    /// [`ChecklyError::UnknownAlertChannelType`](crate::ChecklyError::UnknownAlertChannelType).
    #[instrument(name = "ChecklyClient::create_alert_channel", skip_all, fields(channel_type = %channel.channel_type()))]
    pub async fn create_alert_channel(&self, channel: AlertChannel) -> Result<AlertChannel> {
        let body = encode(&channel)?;
        let text = self
            .execute(
                Method::POST,
                self.endpoint(&["alert-channels"])?,
                Some(body),
                EXPECT_OK_OR_CREATED,
            )
            .await?;
        let created = AlertChannel::from_json(&text)?;

        debug!(channel_id = ?created.id, "Created alert channel");
        Ok(created)
    }

    #[instrument(name = "ChecklyClient::get_alert_channel", skip(self))]
    pub async fn get_alert_channel(&self, id: i64) -> Result<AlertChannel> {
        let url = self.endpoint(&["alert-channels", &id.to_string()])?;
        let text = self.execute(Method::GET, url, None, EXPECT_OK).await?;
        AlertChannel::from_json(&text)
    }

    #[instrument(name = "ChecklyClient::update_alert_channel", skip(self, channel))]
    pub async fn update_alert_channel(
        &self,
        id: i64,
        channel: AlertChannel,
    ) -> Result<AlertChannel> {
        let url = self.endpoint(&["alert-channels", &id.to_string()])?;
        let text = self
            .execute(Method::PUT, url, Some(encode(&channel)?), EXPECT_OK)
            .await?;
        AlertChannel::from_json(&text)
    }

    #[instrument(name = "ChecklyClient::delete_alert_channel", skip(self))]
    pub async fn delete_alert_channel(&self, id: i64) -> Result<()> {
        self.delete_resource(self.endpoint(&["alert-channels", &id.to_string()])?)
            .await
    }
}
