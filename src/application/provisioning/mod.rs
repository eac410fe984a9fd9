//! Provisioning workflow - side effects of account saves and logins.
//!
//! - `workflow` - `ProvisioningWorkflow` and its ports bundle
//! - `report` - Per-step outcomes returned by the hooks
//! - `settings` - Values resolved from configuration

mod report;
mod settings;
mod workflow;

pub use report::{AuthenticationReport, BillingOutcome, NotificationOutcome, ProvisioningReport};
pub use settings::ProvisioningSettings;
pub use workflow::{ProvisioningPorts, ProvisioningWorkflow};
