//! Validation port trait.

use rust_decimal::Decimal;

use crate::domain::{PaymentId, User, UserId};
use crate::error::InvalidArgument;

/// Stateless field-level validation applied before mutating operations.
///
/// Each check either fails with a precise [`InvalidArgument`] or hands the
/// validated value back to the caller. No check has side effects.
pub trait ValidationService: Send + Sync {
    /// Rejects absent and non-positive amounts.
    fn validate_amount(&self, amount: Option<Decimal>) -> Result<Decimal, InvalidArgument>;

    /// Rejects an absent payment id.
    fn validate_payment_id(&self, id: Option<PaymentId>) -> Result<PaymentId, InvalidArgument>;

    /// Rejects an absent user id.
    fn validate_user_id(&self, id: Option<UserId>) -> Result<UserId, InvalidArgument>;

    /// Rejects a user that is not in ACTIVE status.
    fn validate_user(&self, user: &User) -> Result<(), InvalidArgument>;

    /// Rejects an absent payment message.
    fn validate_message(&self, message: Option<String>) -> Result<String, InvalidArgument>;
}
