//! # Checkly API
//!
//! A typed async client for the [Checkly](https://www.checklyhq.com/) monitoring REST API.
//!
//! ## Features
//!
//! - CRUD for checks, monitors, groups, alert channels, snippets, environment variables,
//!   dashboards, maintenance windows, private locations, status pages and client certificates
//! - Check and group triggers with ready-to-call trigger URLs
//! - Check results with query filters, runtimes and static IP ranges
//! - Alert channel configuration as a single enum, so a channel can never carry two configs
//! - Explicit `[]` for unset location lists, so updates never leave stale locations behind
//!
//! ## Example
//!
//! ```rust,no_run
//! use checkly_api::{AlertChannel, AlertChannelEmail, ChecklyClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads CHECKLY_API_KEY, CHECKLY_ACCOUNT_ID and CHECKLY_API_URL
//!     let client = ChecklyClient::from_env()?;
//!
//!     let channel = AlertChannel::new(AlertChannelEmail {
//!         address: "ops@example.com".to_string(),
//!     })
//!     .with_send_failure(true)
//!     .with_send_recovery(true);
//!
//!     let created = client.create_alert_channel(channel).await?;
//!     println!("alert channel {:?}", created.id);
//!     Ok(())
//! }
//! ```

mod client;
mod errors;
mod types;

pub use client::{ChecklyClient, DebugSink, DEFAULT_BASE_URL, DEFAULT_SOURCE};
pub use errors::{ChecklyError, Result};
pub use types::*;
