use tracing::instrument;

use super::{ChecklyClient, EXPECT_CREATED};
use crate::errors::Result;
use crate::types::Snippet;

impl ChecklyClient {
    #[instrument(name = "ChecklyClient::create_snippet", skip_all, fields(name = %snippet.name))]
    pub async fn create_snippet(&self, snippet: Snippet) -> Result<Snippet> {
        self.create_resource(self.endpoint(&["snippets"])?, &snippet, EXPECT_CREATED)
            .await
    }

    #[instrument(name = "ChecklyClient::get_snippet", skip(self))]
    pub async fn get_snippet(&self, id: i64) -> Result<Snippet> {
        self.get_resource(self.endpoint(&["snippets", &id.to_string()])?)
            .await
    }

    #[instrument(name = "ChecklyClient::update_snippet", skip(self, snippet))]
    pub async fn update_snippet(&self, id: i64, snippet: Snippet) -> Result<Snippet> {
        self.update_resource(self.endpoint(&["snippets", &id.to_string()])?, &snippet)
            .await
    }

    #[instrument(name = "ChecklyClient::delete_snippet", skip(self))]
    pub async fn delete_snippet(&self, id: i64) -> Result<()> {
        self.delete_resource(self.endpoint(&["snippets", &id.to_string()])?)
            .await
    }
}
