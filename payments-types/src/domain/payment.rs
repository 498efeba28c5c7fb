//! Payment domain model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserId;

/// Unique identifier for a Payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(Uuid);

impl PaymentId {
    /// Creates a new random PaymentId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a PaymentId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Returns the UUID value.
    pub fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for PaymentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PaymentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A recorded payment.
///
/// The message is the only attribute that may change after creation;
/// everything else is fixed when the payment is constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier, generated at creation
    pub id: PaymentId,
    /// The user the payment belongs to
    pub user_id: UserId,
    /// Monetary amount
    pub amount: Decimal,
    /// Free-text message
    pub message: String,
    /// When the payment was created
    pub created_at: DateTime<Utc>,
}

impl Payment {
    /// Creates a new payment with a freshly generated identifier.
    pub fn new(user_id: UserId, amount: Decimal, message: impl Into<String>) -> Self {
        Self {
            id: PaymentId::new(),
            user_id,
            amount,
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    /// Reconstructs a payment with all fields specified.
    pub fn from_parts(
        id: PaymentId,
        user_id: UserId,
        amount: Decimal,
        message: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            amount,
            message,
            created_at,
        }
    }

    /// Replaces the message.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_payment_creation() {
        let payment = Payment::new(UserId::new(11), dec!(333.00), "Payed");

        assert_eq!(payment.user_id, UserId::new(11));
        assert_eq!(payment.amount, dec!(333.00));
        assert_eq!(payment.message, "Payed");
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        let a = Payment::new(UserId::new(1), dec!(1), "a");
        let b = Payment::new(UserId::new(1), dec!(1), "b");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_set_message() {
        let mut payment = Payment::new(UserId::new(11), dec!(55.00), "Payed");
        payment.set_message("The payment was canceled");
        assert_eq!(payment.message, "The payment was canceled");
    }

    #[test]
    fn test_from_parts_keeps_the_given_id() {
        let id = PaymentId::new();
        let payment =
            Payment::from_parts(id, UserId::new(7), dec!(1.00), "Payed".into(), Utc::now());
        assert_eq!(payment.id, id);
    }

    #[test]
    fn test_payment_id_roundtrip() {
        let id = PaymentId::new();
        let parsed: PaymentId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }
}
