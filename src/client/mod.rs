use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing::debug;
use url::Url;

use crate::errors::{ChecklyError, Result};

mod alert_channels;
mod certificates;
mod check_results;
mod checks;
mod dashboards;
mod environment_variables;
mod groups;
mod maintenance_windows;
mod private_locations;
mod runtimes;
mod snippets;
mod status_pages;
mod triggers;

/// Public Checkly API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.checklyhq.com";

/// Value of the `x-checkly-source` header unless overridden
pub const DEFAULT_SOURCE: &str = "rust-sdk";

const ACCOUNT_HEADER: &str = "x-checkly-account";
const SOURCE_HEADER: &str = "x-checkly-source";

/// User API keys start with this prefix and need an account ID
const USER_API_KEY_PREFIX: &str = "cu";

const EXPECT_OK: &[StatusCode] = &[StatusCode::OK];
const EXPECT_CREATED: &[StatusCode] = &[StatusCode::CREATED];
const EXPECT_OK_OR_CREATED: &[StatusCode] = &[StatusCode::OK, StatusCode::CREATED];
const EXPECT_NO_CONTENT: &[StatusCode] = &[StatusCode::NO_CONTENT];

/// Writer that receives a dump of every request and response
pub type DebugSink = Arc<Mutex<dyn Write + Send>>;

/// Client for the Checkly REST API
///
/// Every method performs exactly one HTTP round trip (two for
/// [`ChecklyClient::get_static_ips`]) and never retries. The client holds no
/// mutable state, so clones can be used concurrently.
///
/// # Example
///
/// ```rust,no_run
/// use checkly_api::{Check, CheckType, ChecklyClient, Request};
/// use url::Url;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = ChecklyClient::new(Url::parse("https://api.checklyhq.com")?, "cu_1234")?
///         .with_account_id("8d1e8c3c-6a5b-4f7e-9f3e-0c1d2e3f4a5b");
///
///     let check = Check {
///         frequency: 10,
///         activated: true,
///         locations: Some(vec!["eu-west-1".to_string()]),
///         request: Some(Request::get("https://example.com")),
///         ..Check::new("My API Check", CheckType::Api)
///     };
///
///     let created = client.create_check(check).await?;
///     println!("created check {:?}", created.id);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct ChecklyClient {
    client: ClientWithMiddleware,
    base_url: Url,
    api_key: SecretString,
    account_id: Option<String>,
    source: String,
    debug: Option<DebugSink>,
}

impl ChecklyClient {
    /// Create a new Checkly client
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the API (e.g., `https://api.checklyhq.com`)
    /// * `api_key` - Account or user API key
    ///
    /// The underlying HTTP client has no timeout. Use
    /// [`ChecklyClient::with_client`] to supply one with your own settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(ChecklyError::BuildHttpClient)?;

        let client = ClientBuilder::new(client).build();

        Ok(Self::with_client(client, base_url, api_key))
    }

    /// Create a new client with a custom reqwest middleware client
    ///
    /// This allows you to add custom middleware (timeouts, logging, etc.)
    pub fn with_client(
        client: ClientWithMiddleware,
        base_url: Url,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url,
            api_key: SecretString::new(api_key.into().into_boxed_str()),
            account_id: None,
            source: DEFAULT_SOURCE.to_string(),
            debug: None,
        }
    }

    /// Create a client from the environment
    ///
    /// Reads `CHECKLY_API_KEY` (required), `CHECKLY_ACCOUNT_ID` and
    /// `CHECKLY_API_URL` (defaults to [`DEFAULT_BASE_URL`]).
    pub fn from_env() -> Result<Self> {
        let api_key =
            std::env::var("CHECKLY_API_KEY").map_err(|_| ChecklyError::MissingEnv("CHECKLY_API_KEY"))?;
        let base_url = std::env::var("CHECKLY_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let mut client = Self::new(Url::parse(&base_url)?, api_key)?;
        if let Ok(account_id) = std::env::var("CHECKLY_ACCOUNT_ID") {
            client = client.with_account_id(account_id);
        }
        Ok(client)
    }

    /// Set the account ID, required when using user API keys
    pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    /// Override the `x-checkly-source` analytics header
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Dump every request and response to `sink`
    ///
    /// The bearer token is redacted. Write failures are ignored.
    pub fn with_debug_sink<W: Write + Send + 'static>(mut self, sink: W) -> Self {
        self.debug = Some(Arc::new(Mutex::new(sink)));
        self
    }

    /// Get the base API URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the configured account ID
    pub fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    fn trimmed_base(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Build `{base}/v1/{segments...}`
    ///
    /// Each segment is percent-encoded, so IDs and keys containing `/`, `?`
    /// or `#` stay inside their own path segment.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/v1", self.trimmed_base()))?;
        url.path_segments_mut()
            .map_err(|()| {
                ChecklyError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase)
            })?
            .extend(segments);
        Ok(url)
    }

    /// Build a check or group mutation endpoint that leaves alert channel
    /// subscriptions to the caller
    pub(crate) fn endpoint_without_alert_assignment(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.endpoint(segments)?;
        url.query_pairs_mut().append_pair("autoAssignAlerts", "false");
        Ok(url)
    }

    /// Perform one HTTP round trip and return the status and raw body
    pub(crate) async fn api_call(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<(StatusCode, String)> {
        let api_key = self.api_key.expose_secret();
        if api_key.starts_with(USER_API_KEY_PREFIX) && self.account_id.is_none() {
            return Err(ChecklyError::MissingAccountId);
        }

        debug!(method = %method, url = %url, "Sending request to Checkly");
        self.dump_request(&method, &url, body.as_deref());

        let mut request = self
            .client
            .request(method, url)
            .header(AUTHORIZATION, format!("Bearer {api_key}"))
            .header(CONTENT_TYPE, "application/json")
            .header(SOURCE_HEADER, self.source.as_str());

        if let Some(account_id) = &self.account_id {
            request = request.header(ACCOUNT_HEADER, account_id.as_str());
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(ChecklyError::Request)?;
        let status = response.status();
        let text = response.text().await.map_err(ChecklyError::ReadBody)?;

        debug!(status = status.as_u16(), "Received response from Checkly");
        self.dump_response(status, &text);

        Ok((status, text))
    }

    /// Perform a round trip and reject any status outside `expected`
    pub(crate) async fn execute(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
        expected: &[StatusCode],
    ) -> Result<String> {
        let (status, text) = self.api_call(method, url, body).await?;
        if !expected.contains(&status) {
            return Err(ChecklyError::UnexpectedStatus {
                status: status.as_u16(),
                message: text,
            });
        }
        Ok(text)
    }

    pub(crate) async fn create_resource<B, T>(
        &self,
        url: Url,
        payload: &B,
        expected: &[StatusCode],
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let text = self
            .execute(Method::POST, url, Some(encode(payload)?), expected)
            .await?;
        decode(&text)
    }

    pub(crate) async fn get_resource<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let text = self.execute(Method::GET, url, None, EXPECT_OK).await?;
        decode(&text)
    }

    pub(crate) async fn update_resource<B, T>(&self, url: Url, payload: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let text = self
            .execute(Method::PUT, url, Some(encode(payload)?), EXPECT_OK)
            .await?;
        decode(&text)
    }

    pub(crate) async fn delete_resource(&self, url: Url) -> Result<()> {
        self.execute(Method::DELETE, url, None, EXPECT_NO_CONTENT)
            .await?;
        Ok(())
    }

    fn dump_request(&self, method: &Method, url: &Url, body: Option<&[u8]>) {
        let Some(sink) = &self.debug else {
            return;
        };
        let Ok(mut sink) = sink.lock() else {
            return;
        };
        let _ = writeln!(sink, "{method} {url}");
        let _ = writeln!(sink, "Authorization: Bearer [redacted]");
        let _ = writeln!(sink, "Content-Type: application/json");
        if let Some(account_id) = &self.account_id {
            let _ = writeln!(sink, "{ACCOUNT_HEADER}: {account_id}");
        }
        let _ = writeln!(sink, "{SOURCE_HEADER}: {}", self.source);
        let _ = writeln!(sink);
        if let Some(body) = body {
            let _ = writeln!(sink, "{}", String::from_utf8_lossy(body));
        }
        let _ = writeln!(sink);
    }

    fn dump_response(&self, status: StatusCode, text: &str) {
        let Some(sink) = &self.debug else {
            return;
        };
        let Ok(mut sink) = sink.lock() else {
            return;
        };
        let _ = writeln!(sink, "HTTP {status}");
        let _ = writeln!(sink);
        let _ = writeln!(sink, "{text}");
        let _ = writeln!(sink);
    }
}

fn encode<B: Serialize + ?Sized>(payload: &B) -> Result<Vec<u8>> {
    serde_json::to_vec(payload).map_err(ChecklyError::Serialize)
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|source| ChecklyError::Decode {
        body: text.to_string(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn test_client(uri: &str) -> ChecklyClient {
    ChecklyClient::new(Url::parse(uri).unwrap(), "dummy").unwrap()
}
