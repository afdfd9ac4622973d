use tracing::instrument;

use super::{ChecklyClient, EXPECT_CREATED};
use crate::errors::Result;
use crate::types::EnvironmentVariable;

impl ChecklyClient {
    #[instrument(name = "ChecklyClient::create_environment_variable", skip_all, fields(key = %variable.key))]
    pub async fn create_environment_variable(
        &self,
        variable: EnvironmentVariable,
    ) -> Result<EnvironmentVariable> {
        self.create_resource(self.endpoint(&["variables"])?, &variable, EXPECT_CREATED)
            .await
    }

    #[instrument(name = "ChecklyClient::get_environment_variable", skip(self))]
    pub async fn get_environment_variable(&self, key: &str) -> Result<EnvironmentVariable> {
        self.get_resource(self.endpoint(&["variables", key])?)
            .await
    }

    /// Update the variable stored under `key`
    ///
    /// The key itself is taken from the path; `variable.key` may be left empty.
    #[instrument(name = "ChecklyClient::update_environment_variable", skip(self, variable))]
    pub async fn update_environment_variable(
        &self,
        key: &str,
        variable: EnvironmentVariable,
    ) -> Result<EnvironmentVariable> {
        self.update_resource(self.endpoint(&["variables", key])?, &variable)
            .await
    }

    #[instrument(name = "ChecklyClient::delete_environment_variable", skip(self))]
    pub async fn delete_environment_variable(&self, key: &str) -> Result<()> {
        self.delete_resource(self.endpoint(&["variables", key])?)
            .await
    }
}
