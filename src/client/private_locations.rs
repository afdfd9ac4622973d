use tracing::instrument;

use super::{ChecklyClient, EXPECT_OK_OR_CREATED};
use crate::errors::Result;
use crate::types::PrivateLocation;

impl ChecklyClient {
    /// Register a private location
    ///
    /// The returned value is the only response that carries the raw agent
    /// keys.
    #[instrument(name = "ChecklyClient::create_private_location", skip_all, fields(slug = %location.slug_name))]
    pub async fn create_private_location(
        &self,
        location: PrivateLocation,
    ) -> Result<PrivateLocation> {
        self.create_resource(
            self.endpoint(&["private-locations"])?,
            &location,
            EXPECT_OK_OR_CREATED,
        )
        .await
    }

    #[instrument(name = "ChecklyClient::get_private_location", skip(self))]
    pub async fn get_private_location(&self, id: &str) -> Result<PrivateLocation> {
        self.get_resource(self.endpoint(&["private-locations", id])?)
            .await
    }

    #[instrument(name = "ChecklyClient::update_private_location", skip(self, location))]
    pub async fn update_private_location(
        &self,
        id: &str,
        location: PrivateLocation,
    ) -> Result<PrivateLocation> {
        self.update_resource(self.endpoint(&["private-locations", id])?, &location)
            .await
    }

    #[instrument(name = "ChecklyClient::delete_private_location", skip(self))]
    pub async fn delete_private_location(&self, id: &str) -> Result<()> {
        self.delete_resource(self.endpoint(&["private-locations", id])?)
            .await
    }
}
