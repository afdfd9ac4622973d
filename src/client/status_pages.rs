use tracing::instrument;

use super::{ChecklyClient, EXPECT_CREATED};
use crate::errors::Result;
use crate::types::{StatusPage, StatusPageService};

impl ChecklyClient {
    #[instrument(name = "ChecklyClient::create_status_page", skip_all, fields(name = %page.name))]
    pub async fn create_status_page(&self, page: StatusPage) -> Result<StatusPage> {
        self.create_resource(self.endpoint(&["status-pages"])?, &page, EXPECT_CREATED)
            .await
    }

    #[instrument(name = "ChecklyClient::get_status_page", skip(self))]
    pub async fn get_status_page(&self, id: &str) -> Result<StatusPage> {
        self.get_resource(self.endpoint(&["status-pages", id])?)
            .await
    }

    #[instrument(name = "ChecklyClient::update_status_page", skip(self, page))]
    pub async fn update_status_page(&self, id: &str, page: StatusPage) -> Result<StatusPage> {
        self.update_resource(self.endpoint(&["status-pages", id])?, &page)
            .await
    }

    #[instrument(name = "ChecklyClient::delete_status_page", skip(self))]
    pub async fn delete_status_page(&self, id: &str) -> Result<()> {
        self.delete_resource(self.endpoint(&["status-pages", id])?)
            .await
    }

    #[instrument(name = "ChecklyClient::create_status_page_service", skip_all, fields(name = %service.name))]
    pub async fn create_status_page_service(
        &self,
        service: StatusPageService,
    ) -> Result<StatusPageService> {
        self.create_resource(
            self.endpoint(&["status-pages", "services"])?,
            &service,
            EXPECT_CREATED,
        )
        .await
    }

    #[instrument(name = "ChecklyClient::get_status_page_service", skip(self))]
    pub async fn get_status_page_service(&self, id: &str) -> Result<StatusPageService> {
        self.get_resource(self.endpoint(&["status-pages", "services", id])?)
            .await
    }

    #[instrument(name = "ChecklyClient::update_status_page_service", skip(self, service))]
    pub async fn update_status_page_service(
        &self,
        id: &str,
        service: StatusPageService,
    ) -> Result<StatusPageService> {
        self.update_resource(
            self.endpoint(&["status-pages", "services", id])?,
            &service,
        )
        .await
    }

    #[instrument(name = "ChecklyClient::delete_status_page_service", skip(self))]
    pub async fn delete_status_page_service(&self, id: &str) -> Result<()> {
        self.delete_resource(self.endpoint(&["status-pages", "services", id])?)
            .await
    }
}
