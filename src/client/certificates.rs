use tracing::instrument;

use super::{ChecklyClient, EXPECT_CREATED};
use crate::errors::Result;
use crate::types::ClientCertificate;

impl ChecklyClient {
    /// Upload a client certificate
    ///
    /// Certificates are immutable: replace one by deleting and re-creating it.
    #[instrument(name = "ChecklyClient::create_client_certificate", skip_all, fields(host = %certificate.host))]
    pub async fn create_client_certificate(
        &self,
        certificate: ClientCertificate,
    ) -> Result<ClientCertificate> {
        self.create_resource(
            self.endpoint(&["client-certificates"])?,
            &certificate,
            EXPECT_CREATED,
        )
        .await
    }

    #[instrument(name = "ChecklyClient::get_client_certificate", skip(self))]
    pub async fn get_client_certificate(&self, id: &str) -> Result<ClientCertificate> {
        self.get_resource(self.endpoint(&["client-certificates", id])?)
            .await
    }

    #[instrument(name = "ChecklyClient::delete_client_certificate", skip(self))]
    pub async fn delete_client_certificate(&self, id: &str) -> Result<()> {
        self.delete_resource(self.endpoint(&["client-certificates", id])?)
            .await
    }
}
