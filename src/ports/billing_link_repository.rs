//! Billing-customer link repository port.
//!
//! Lookups distinguish "no link" (`Ok(None)`) from a failed lookup (`Err`).
//! Callers must not treat a failed lookup as absence: doing so can create a
//! second customer at the payment processor.

use async_trait::async_trait;

use crate::domain::billing::BillingCustomerLink;
use crate::domain::foundation::{AccountId, DomainError};

#[async_trait]
pub trait BillingLinkRepository: Send + Sync {
    /// Find the account's link.
    ///
    /// # Errors
    ///
    /// `DatabaseError` when the lookup itself failed (transient).
    async fn find_by_account(
        &self,
        account_id: &AccountId,
    ) -> Result<Option<BillingCustomerLink>, DomainError>;

    /// Store a link to `customer_id` unless the account already has one.
    ///
    /// Returns the stored link and `true` if this call created it. When a
    /// link already exists it is returned unchanged.
    async fn get_or_create(
        &self,
        account_id: &AccountId,
        customer_id: &str,
    ) -> Result<(BillingCustomerLink, bool), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn billing_link_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn BillingLinkRepository) {}
    }
}
