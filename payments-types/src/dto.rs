//! Data Transfer Objects (DTOs) for requests crossing the service boundary.
//!
//! Fields a client may omit are `Option` - the validation service is the
//! single place where absence is rejected, so requests arrive unchecked.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{PaymentId, UserId};

/// Request to create a new payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePaymentRequest {
    /// The user creating the payment
    pub user_id: Option<UserId>,
    /// Amount to pay
    pub amount: Option<Decimal>,
}

impl CreatePaymentRequest {
    pub fn new(user_id: impl Into<UserId>, amount: Decimal) -> Self {
        Self {
            user_id: Some(user_id.into()),
            amount: Some(amount),
        }
    }
}

/// Request to replace the message of an existing payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditMessageRequest {
    /// The payment to edit
    pub payment_id: Option<PaymentId>,
    /// The new message
    pub message: Option<String>,
}

impl EditMessageRequest {
    pub fn new(payment_id: PaymentId, message: impl Into<String>) -> Self {
        Self {
            payment_id: Some(payment_id),
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let req: CreatePaymentRequest = serde_json::from_str("{}").unwrap();
        assert!(req.user_id.is_none());
        assert!(req.amount.is_none());

        let req: EditMessageRequest = serde_json::from_str("{}").unwrap();
        assert!(req.payment_id.is_none());
        assert!(req.message.is_none());
    }
}

