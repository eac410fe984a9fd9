//! Mock payment provider for testing.
//!
//! Provides a configurable mock implementation of `PaymentProvider` for unit
//! and integration tests. Supports:
//! - Pre-configured responses
//! - Error injection
//! - Call tracking
//! - Idempotency-key replay, like the real API

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::ports::{CreateCustomerRequest, Customer, PaymentError, PaymentProvider};

/// Mock payment provider for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockPaymentProvider::new();
///
/// // Inject errors
/// mock.set_error(PaymentError::provider("Test rejection"));
///
/// // Use in tests
/// let result = mock.create_customer(request).await;
/// ```
#[derive(Default, Clone)]
pub struct MockPaymentProvider {
    /// Inner state (thread-safe for async tests).
    inner: Arc<Mutex<MockState>>,
}

/// Internal mutable state.
#[derive(Default)]
struct MockState {
    /// Customers already created, keyed by idempotency key.
    by_idempotency_key: HashMap<String, Customer>,

    /// Next customer to return.
    next_customer: Option<Customer>,

    /// Error to return on next call.
    next_error: Option<PaymentError>,

    /// Error returned on every call until cleared.
    sticky_error: Option<PaymentError>,

    /// Track method calls for assertions.
    call_log: Vec<MethodCall>,
}

/// Recorded method call for assertions.
#[derive(Debug, Clone)]
pub struct MethodCall {
    pub method: String,
    pub args: Vec<String>,
}

impl MockPaymentProvider {
    /// Create a new mock provider with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that rejects every call with `error`.
    pub fn failing(error: PaymentError) -> Self {
        let mock = Self::new();
        mock.set_sticky_error(error);
        mock
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    /// Set the customer to return on next `create_customer` call.
    pub fn set_customer(&self, customer: Customer) {
        self.state().next_customer = Some(customer);
    }

    /// Set an error to return on the next call only.
    pub fn set_error(&self, error: PaymentError) {
        self.state().next_error = Some(error);
    }

    /// Set an error to return on every call.
    pub fn set_sticky_error(&self, error: PaymentError) {
        self.state().sticky_error = Some(error);
    }

    /// Clear all configured errors.
    pub fn clear_errors(&self) {
        let mut state = self.state();
        state.next_error = None;
        state.sticky_error = None;
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Call Tracking
    // ════════════════════════════════════════════════════════════════════════════

    /// Get all recorded method calls.
    pub fn calls(&self) -> Vec<MethodCall> {
        self.state().call_log.clone()
    }

    /// Check if a method was called.
    pub fn was_called(&self, method: &str) -> bool {
        self.state().call_log.iter().any(|c| c.method == method)
    }

    /// Get count of calls to a method.
    pub fn call_count(&self, method: &str) -> usize {
        self.state()
            .call_log
            .iter()
            .filter(|c| c.method == method)
            .count()
    }

    /// Number of distinct remote customers created.
    pub fn created_count(&self) -> usize {
        self.state().by_idempotency_key.len()
    }

    /// Clear the call log.
    pub fn clear_calls(&self) {
        self.state().call_log.clear();
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Internal Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn record_call(&self, method: &str, args: Vec<String>) {
        self.state().call_log.push(MethodCall {
            method: method.to_string(),
            args,
        });
    }

    fn check_error(&self) -> Result<(), PaymentError> {
        let mut state = self.state();

        if let Some(error) = state.sticky_error.as_ref() {
            return Err(error.clone());
        }

        // Consumed on use
        if let Some(error) = state.next_error.take() {
            return Err(error);
        }

        Ok(())
    }
}

#[async_trait]
impl PaymentProvider for MockPaymentProvider {
    async fn create_customer(
        &self,
        request: CreateCustomerRequest,
    ) -> Result<Customer, PaymentError> {
        self.record_call(
            "create_customer",
            vec![
                request.account_id.to_string(),
                request.email.clone(),
                request.idempotency_key.clone(),
            ],
        );
        self.check_error()?;

        let mut state = self.state();

        if let Some(existing) = state.by_idempotency_key.get(&request.idempotency_key) {
            return Ok(existing.clone());
        }

        let customer = state.next_customer.take().unwrap_or_else(|| {
            let suffix = uuid::Uuid::new_v4().simple().to_string();
            Customer {
                id: format!("cus_mock_{}", &suffix[..8]),
                email: request.email,
                created_at: chrono::Utc::now().timestamp(),
            }
        });

        state
            .by_idempotency_key
            .insert(request.idempotency_key, customer.clone());

        Ok(customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::AccountId;
    use crate::ports::PaymentErrorCode;

    fn request() -> CreateCustomerRequest {
        CreateCustomerRequest::for_account(AccountId::new(), "bob@example.com")
    }

    #[tokio::test]
    async fn create_customer_returns_mock_customer() {
        let mock = MockPaymentProvider::new();
        let customer = mock.create_customer(request()).await.unwrap();

        assert!(customer.id.starts_with("cus_mock_"));
        assert_eq!(customer.email, "bob@example.com");
        assert_eq!(mock.created_count(), 1);
    }

    #[tokio::test]
    async fn set_customer_returns_configured() {
        let mock = MockPaymentProvider::new();
        mock.set_customer(Customer {
            id: "cus_custom".to_string(),
            email: "custom@example.com".to_string(),
            created_at: 1_704_067_200,
        });

        let customer = mock.create_customer(request()).await.unwrap();
        assert_eq!(customer.id, "cus_custom");
    }

    #[tokio::test]
    async fn repeated_idempotency_key_returns_same_customer() {
        let mock = MockPaymentProvider::new();
        let req = request();

        let first = mock.create_customer(req.clone()).await.unwrap();
        let second = mock.create_customer(req).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(mock.created_count(), 1);
        assert_eq!(mock.call_count("create_customer"), 2);
    }

    #[tokio::test]
    async fn set_error_is_consumed() {
        let mock = MockPaymentProvider::new();
        mock.set_error(PaymentError::network("Connection reset"));

        let err = mock.create_customer(request()).await.unwrap_err();
        assert_eq!(err.code, PaymentErrorCode::NetworkError);

        assert!(mock.create_customer(request()).await.is_ok());
    }

    #[tokio::test]
    async fn failing_mock_rejects_until_cleared() {
        let mock = MockPaymentProvider::failing(PaymentError::provider("down"));

        assert!(mock.create_customer(request()).await.is_err());
        assert!(mock.create_customer(request()).await.is_err());
        assert_eq!(mock.created_count(), 0);

        mock.clear_errors();
        assert!(mock.create_customer(request()).await.is_ok());
    }

    #[tokio::test]
    async fn call_log_contains_arguments() {
        let mock = MockPaymentProvider::new();
        let req = request();
        mock.create_customer(req.clone()).await.unwrap();

        let calls = mock.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, "create_customer");
        assert_eq!(calls[0].args[0], req.account_id.to_string());
        assert_eq!(calls[0].args[2], req.idempotency_key);
    }

    #[tokio::test]
    async fn clear_calls_resets_log() {
        let mock = MockPaymentProvider::new();
        mock.create_customer(request()).await.unwrap();
        assert!(mock.was_called("create_customer"));

        mock.clear_calls();
        assert!(!mock.was_called("create_customer"));
    }
}
