//! Stripe API response types.
//!
//! Only the fields read by the adapter are modelled; unknown fields are
//! ignored during deserialization.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Stripe Customer object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StripeCustomer {
    /// Unique customer identifier (cus_...).
    pub id: String,

    /// Customer email address.
    pub email: Option<String>,

    /// Unix timestamp of creation.
    pub created: i64,

    /// Custom metadata.
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

/// Error envelope returned by the Stripe API on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorBody {
    pub error: StripeApiError,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StripeApiError {
    /// Error category, e.g. `invalid_request_error`.
    #[serde(rename = "type")]
    pub error_type: String,

    /// Machine-readable code, when Stripe provides one.
    pub code: Option<String>,

    pub message: Option<String>,
}
