//! Wire-shaped models of the Checkly API resources.

mod alert_channel;
mod check;
mod check_result;
mod client_certificate;
mod common;
mod dashboard;
mod environment_variable;
mod group;
mod maintenance_window;
mod private_location;
mod runtime;
mod snippet;
mod status_page;
mod trigger;

pub use alert_channel::{
    AlertChannel, AlertChannelCall, AlertChannelConfig, AlertChannelEmail, AlertChannelOpsgenie,
    AlertChannelPagerduty, AlertChannelSlack, AlertChannelSms, AlertChannelType,
    AlertChannelWebhook,
};
pub use check::{
    Check, Heartbeat, HeartbeatMonitor, MultiStepCheck, Request, TcpMonitor, TcpRequest,
    UrlMonitor, UrlRequest,
};
pub use check_result::{CheckResult, CheckResultsFilter};
pub use client_certificate::ClientCertificate;
pub use common::{
    AlertChannelSubscription, AlertSettings, Assertion, AssertionComparison, AssertionSource,
    BasicAuth, CheckType, EscalationType, KeyValue, ParallelRunFailureThreshold, Reminders,
    RetryStrategy, RunBasedEscalation, TimeBasedEscalation,
};
pub use dashboard::{Dashboard, DashboardKey};
pub use environment_variable::EnvironmentVariable;
pub use group::{ApiCheckDefaults, Group};
pub use maintenance_window::MaintenanceWindow;
pub use private_location::{PrivateLocation, PrivateLocationKey};
pub use runtime::{Runtime, StaticIp};
pub use snippet::Snippet;
pub use status_page::{StatusPage, StatusPageCard, StatusPageService, StatusPageTheme};
pub use trigger::{TriggerCheck, TriggerGroup};
