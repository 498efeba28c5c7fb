//! Error types for the payment workflow.
//!
//! Two kinds cover every failure: [`InvalidArgument`] for precondition
//! violations on input values, and [`NotFound`] for references to entities
//! absent from a repository. Both pass through every calling layer
//! unchanged - there is no translation or wrapping anywhere.

use crate::domain::{PaymentId, UserId};

/// Precondition violation on an input value (missing or out of range).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArgument {
    #[error("Amount must not be null")]
    AmountMissing,

    #[error("Amount must be greater than 0")]
    AmountNotPositive,

    #[error("Payment id must not be null")]
    PaymentIdMissing,

    #[error("User id must not be null")]
    UserIdMissing,

    #[error("Payment message must not be null")]
    MessageMissing,

    #[error("Payment must not be null")]
    PaymentMissing,

    #[error("User with id {0} not in ACTIVE status")]
    UserNotActive(UserId),

    #[error("Payment with id {0} already saved")]
    AlreadySaved(PaymentId),
}

/// Referenced entity absent from a repository.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFound {
    #[error("User with id {0} not found")]
    User(UserId),

    #[error("Payment with id {0} not found")]
    Payment(PaymentId),
}

/// Top-level error: either of the two kinds.
///
/// Transparent so the underlying message surfaces verbatim to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaymentError {
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    #[error(transparent)]
    NotFound(#[from] NotFound),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolated_messages() {
        let user = UserId::new(22);
        assert_eq!(
            NotFound::User(user).to_string(),
            "User with id 22 not found"
        );
        assert_eq!(
            InvalidArgument::UserNotActive(user).to_string(),
            "User with id 22 not in ACTIVE status"
        );

        let payment = PaymentId::new();
        assert_eq!(
            NotFound::Payment(payment).to_string(),
            format!("Payment with id {} not found", payment)
        );
        assert_eq!(
            InvalidArgument::AlreadySaved(payment).to_string(),
            format!("Payment with id {} already saved", payment)
        );
    }

    #[test]
    fn test_transparent_propagation() {
        let err = PaymentError::from(InvalidArgument::AmountMissing);
        assert_eq!(err.to_string(), "Amount must not be null");

        let err = PaymentError::from(NotFound::User(UserId::new(7)));
        assert_eq!(err.to_string(), "User with id 7 not found");
    }
}
