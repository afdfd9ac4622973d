use tracing::{debug, instrument};

use super::{ChecklyClient, EXPECT_CREATED};
use crate::errors::Result;
use crate::types::Group;

impl ChecklyClient {
    #[instrument(name = "ChecklyClient::create_group", skip_all, fields(name = %group.name))]
    pub async fn create_group(&self, mut group: Group) -> Result<Group> {
        group.normalize_lists();
        let url = self.endpoint_without_alert_assignment(&["check-groups"])?;
        let created: Group = self.create_resource(url, &group, EXPECT_CREATED).await?;

        debug!(group_id = ?created.id, "Created check group");
        Ok(created)
    }

    #[instrument(name = "ChecklyClient::get_group", skip(self))]
    pub async fn get_group(&self, id: i64) -> Result<Group> {
        self.get_resource(self.endpoint(&["check-groups", &id.to_string()])?)
            .await
    }

    #[instrument(name = "ChecklyClient::update_group", skip(self, group))]
    pub async fn update_group(&self, id: i64, mut group: Group) -> Result<Group> {
        group.normalize_lists();
        let url = self.endpoint_without_alert_assignment(&["check-groups", &id.to_string()])?;
        self.update_resource(url, &group).await
    }

    #[instrument(name = "ChecklyClient::delete_group", skip(self))]
    pub async fn delete_group(&self, id: i64) -> Result<()> {
        self.delete_resource(self.endpoint(&["check-groups", &id.to_string()])?)
            .await
    }
}
