use tracing::instrument;

use super::ChecklyClient;
use crate::errors::Result;
use crate::types::{CheckResult, CheckResultsFilter};

impl ChecklyClient {
    #[instrument(name = "ChecklyClient::get_check_result", skip(self))]
    pub async fn get_check_result(&self, check_id: &str, result_id: &str) -> Result<CheckResult> {
        self.get_resource(self.endpoint(&["check-results", check_id, result_id])?)
            .await
    }

    /// List results of a check, narrowed by an optional filter
    #[instrument(name = "ChecklyClient::get_check_results", skip(self, filter))]
    pub async fn get_check_results(
        &self,
        check_id: &str,
        filter: Option<&CheckResultsFilter>,
    ) -> Result<Vec<CheckResult>> {
        let mut url = self.endpoint(&["check-results", check_id])?;
        if let Some(filter) = filter {
            let pairs = filter.query_pairs();
            if !pairs.is_empty() {
                url.query_pairs_mut().extend_pairs(pairs);
            }
        }
        self.get_resource(url).await
    }
}
