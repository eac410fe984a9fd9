//! Accounts - account provisioning service.
//!
//! Stores accounts with their profile, membership and payment-customer
//! records, and runs the provisioning side effects that follow account
//! creation, edits and logins.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
