use tracing::instrument;

use super::{ChecklyClient, EXPECT_OK_OR_CREATED};
use crate::errors::Result;
use crate::types::MaintenanceWindow;

impl ChecklyClient {
    #[instrument(name = "ChecklyClient::create_maintenance_window", skip_all, fields(name = %window.name))]
    pub async fn create_maintenance_window(
        &self,
        window: MaintenanceWindow,
    ) -> Result<MaintenanceWindow> {
        self.create_resource(
            self.endpoint(&["maintenance-windows"])?,
            &window,
            EXPECT_OK_OR_CREATED,
        )
        .await
    }

    #[instrument(name = "ChecklyClient::get_maintenance_window", skip(self))]
    pub async fn get_maintenance_window(&self, id: i64) -> Result<MaintenanceWindow> {
        self.get_resource(self.endpoint(&["maintenance-windows", &id.to_string()])?)
            .await
    }

    #[instrument(name = "ChecklyClient::update_maintenance_window", skip(self, window))]
    pub async fn update_maintenance_window(
        &self,
        id: i64,
        window: MaintenanceWindow,
    ) -> Result<MaintenanceWindow> {
        self.update_resource(self.endpoint(&["maintenance-windows", &id.to_string()])?, &window)
            .await
    }

    #[instrument(name = "ChecklyClient::delete_maintenance_window", skip(self))]
    pub async fn delete_maintenance_window(&self, id: i64) -> Result<()> {
        self.delete_resource(self.endpoint(&["maintenance-windows", &id.to_string()])?)
            .await
    }
}
