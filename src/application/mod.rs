//! Application layer - Command handlers and the provisioning workflow.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Handlers perform the account write; the workflow runs the side effects
//! that follow it.

pub mod handlers;
pub mod provisioning;

pub use handlers::account::{
    CreateAccountCommand, CreateAccountHandler, CreateAccountResult, LoginCommand, LoginHandler,
    LoginResult, UpdateAccountCommand, UpdateAccountHandler, UpdateAccountResult,
};
pub use provisioning::{
    AuthenticationReport, BillingOutcome, NotificationOutcome, ProvisioningPorts,
    ProvisioningReport, ProvisioningSettings, ProvisioningWorkflow,
};
