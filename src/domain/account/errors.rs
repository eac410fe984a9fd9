//! Account-specific error types.

use thiserror::Error;

use crate::domain::foundation::{AccountId, DomainError, ErrorCode, ValidationError};

/// Errors surfaced by account operations.
#[derive(Debug, Clone, Error)]
pub enum AccountError {
    /// Input failed validation (missing username, malformed email, ...).
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Username '{0}' is already taken")]
    UsernameTaken(String),

    #[error("An account with email '{0}' already exists")]
    EmailTaken(String),

    /// Unknown username or wrong password. Deliberately indistinguishable.
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Account is inactive")]
    Inactive,

    #[error("Account not found: {0}")]
    NotFound(AccountId),

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl AccountError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AccountError::Validation(_) => ErrorCode::ValidationFailed,
            AccountError::UsernameTaken(_) => ErrorCode::UsernameTaken,
            AccountError::EmailTaken(_) => ErrorCode::EmailTaken,
            AccountError::InvalidCredentials | AccountError::Inactive => ErrorCode::Unauthorized,
            AccountError::NotFound(_) => ErrorCode::AccountNotFound,
            AccountError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AccountError::Validation(_))
    }
}

impl From<DomainError> for AccountError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::UsernameTaken => AccountError::UsernameTaken(
                err.details.get("username").cloned().unwrap_or_default(),
            ),
            ErrorCode::EmailTaken => {
                AccountError::EmailTaken(err.details.get("email").cloned().unwrap_or_default())
            }
            ErrorCode::ValidationFailed => {
                let field = err.details.get("field").cloned().unwrap_or_default();
                AccountError::Validation(ValidationError::invalid_format(field, err.message))
            }
            _ => AccountError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_converts() {
        let err: AccountError = ValidationError::empty_field("username").into();
        assert!(err.is_validation());
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert_eq!(err.to_string(), "Field 'username' cannot be empty");
    }

    #[test]
    fn conflict_domain_error_maps_to_taken() {
        let domain = DomainError::new(ErrorCode::EmailTaken, "duplicate")
            .with_detail("email", "bob@example.com");
        let err: AccountError = domain.into();
        assert!(matches!(err, AccountError::EmailTaken(ref e) if e == "bob@example.com"));
    }

    #[test]
    fn database_error_maps_to_infrastructure() {
        let err: AccountError = DomainError::database("connection refused").into();
        assert!(matches!(err, AccountError::Infrastructure(_)));
        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }
}
