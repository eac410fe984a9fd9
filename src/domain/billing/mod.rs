//! Billing domain module.
//!
//! Links an account to its customer record at the external payment
//! processor. An account has at most one link, and a link is only written
//! after the processor confirmed the customer.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AccountId, BillingLinkId, Timestamp, ValidationError};

/// Mapping from an account to the payment processor's customer id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingCustomerLink {
    pub id: BillingLinkId,
    pub account_id: AccountId,

    /// Opaque identifier issued by the payment processor.
    pub customer_id: String,

    pub created_at: Timestamp,
}

impl BillingCustomerLink {
    /// # Errors
    ///
    /// `customer_id` must not be blank.
    pub fn new(account_id: AccountId, customer_id: impl Into<String>) -> Result<Self, ValidationError> {
        let customer_id = customer_id.into();
        if customer_id.trim().is_empty() {
            return Err(ValidationError::empty_field("customer_id"));
        }
        Ok(Self {
            id: BillingLinkId::new(),
            account_id,
            customer_id,
            created_at: Timestamp::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_keeps_customer_id() {
        let account_id = AccountId::new();
        let link = BillingCustomerLink::new(account_id, "cust_1").unwrap();
        assert_eq!(link.account_id, account_id);
        assert_eq!(link.customer_id, "cust_1");
    }

    #[test]
    fn blank_customer_id_is_rejected() {
        assert_eq!(
            BillingCustomerLink::new(AccountId::new(), "  "),
            Err(ValidationError::empty_field("customer_id"))
        );
    }
}
