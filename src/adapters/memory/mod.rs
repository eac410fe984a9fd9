//! In-memory adapters.
//!
//! Implementations of every persistence port backed by `HashMap`s behind
//! `tokio::sync::RwLock`. Used by tests and for local runs without a
//! database.

mod account_repository;
mod billing_link_repository;
mod membership_repository;
mod notification_dispatcher;
mod profile_repository;
mod session_store;

pub use account_repository::InMemoryAccountRepository;
pub use billing_link_repository::InMemoryBillingLinkRepository;
pub use membership_repository::InMemoryMembershipRepository;
pub use notification_dispatcher::InMemoryNotificationDispatcher;
pub use profile_repository::InMemoryProfileRepository;
pub use session_store::InMemorySessionStore;
