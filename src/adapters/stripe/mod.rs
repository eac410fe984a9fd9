//! Stripe payment provider adapter.
//!
//! Implements the `PaymentProvider` port for Stripe customer creation.
//!
//! # Security
//!
//! - The secret key is handled via `secrecy::SecretString`
//! - Every create call carries an `Idempotency-Key`, so retries never
//!   create a second customer
//!
//! # Configuration
//!
//! Required environment variables:
//! - `ACCOUNTS__PAYMENT__STRIPE_API_KEY`: Stripe secret API key

mod mock_payment_provider;
mod stripe_adapter;
mod types;

pub use mock_payment_provider::{MethodCall, MockPaymentProvider};
pub use stripe_adapter::{StripeConfig, StripePaymentAdapter};
pub use types::{StripeApiError, StripeCustomer, StripeErrorBody};
