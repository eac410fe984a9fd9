//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `AccountRepository` - Account identities with unique username/email
//! - `ProfileRepository` - One profile per account, create-if-absent
//! - `MembershipRepository` - One membership per account, create-if-absent
//! - `BillingLinkRepository` - At most one payment-customer link per account
//! - `SessionStore` - Login sessions
//!
//! ## Collaborator Ports
//!
//! - `PaymentProvider` - Remote customer creation at the payment processor
//! - `NotificationDispatcher` - Best-effort notifications
//! - `OperatorResolver` - Which account receives signup notifications
//! - `UserMessages` - User-visible, non-fatal messages
//! - `PasswordHasher` - One-way hashing and verification

mod account_repository;
mod billing_link_repository;
mod membership_repository;
mod notification_dispatcher;
mod operator_resolver;
mod password_hasher;
mod payment_provider;
mod profile_repository;
mod session_store;
mod user_messages;

pub use account_repository::AccountRepository;
pub use billing_link_repository::BillingLinkRepository;
pub use membership_repository::MembershipRepository;
pub use notification_dispatcher::NotificationDispatcher;
pub use operator_resolver::OperatorResolver;
pub use password_hasher::PasswordHasher;
pub use payment_provider::{
    CreateCustomerRequest, Customer, PaymentError, PaymentErrorCode, PaymentProvider,
};
pub use profile_repository::ProfileRepository;
pub use session_store::SessionStore;
pub use user_messages::{MessageLevel, UserMessage, UserMessages};
