//! Payment application service.
//!
//! Orchestrates validation, the user directory and the payment store.
//! Contains NO storage logic - pure business orchestration.

use rust_decimal::Decimal;

use payments_types::{
    CreatePaymentRequest, EditMessageRequest, NotFound, Payment, PaymentError,
    PaymentRepository, UserRepository, ValidationService,
};

/// Application service for payment operations.
///
/// Generic over its three ports - the adapters are injected at compile
/// time. This enables:
/// - Swapping stores without code changes
/// - Testing with recording mocks
/// - Compile-time checks for port implementation
pub struct PaymentService<P, U, V>
where
    P: PaymentRepository,
    U: UserRepository,
    V: ValidationService,
{
    payments: P,
    users: U,
    validator: V,
}

impl<P, U, V> PaymentService<P, U, V>
where
    P: PaymentRepository,
    U: UserRepository,
    V: ValidationService,
{
    /// Creates a new payment service with the given collaborators.
    pub fn new(payments: P, users: U, validator: V) -> Self {
        Self {
            payments,
            users,
            validator,
        }
    }

    /// Returns a reference to the underlying payment store.
    pub fn payments(&self) -> &P {
        &self.payments
    }

    /// Creates and stores a payment for an active user.
    ///
    /// The stored payment carries a fresh id and the message
    /// `Payment from user {name}`. Every validation failure and the
    /// user lookup miss surface unchanged to the caller.
    pub fn create_payment(&self, req: CreatePaymentRequest) -> Result<Payment, PaymentError> {
        let user_id = self.validator.validate_user_id(req.user_id)?;
        let amount = self.validator.validate_amount(req.amount)?;

        let user = self
            .users
            .find_by_id(user_id)?
            .ok_or(NotFound::User(user_id))?;
        self.validator.validate_user(&user)?;

        let payment = Payment::new(user_id, amount, format!("Payment from user {}", user.name));
        self.payments.save(Some(payment))
    }

    /// Replaces the message of an existing payment.
    pub fn edit_payment_message(&self, req: EditMessageRequest) -> Result<Payment, PaymentError> {
        let payment_id = self.validator.validate_payment_id(req.payment_id)?;
        let message = self.validator.validate_message(req.message)?;

        self.payments.edit_message(payment_id, message)
    }

    /// Returns the stored payments whose amount is strictly greater than
    /// the threshold, in store enumeration order.
    pub fn get_all_by_amount_exceeding(
        &self,
        threshold: Decimal,
    ) -> Result<Vec<Payment>, PaymentError> {
        let payments = self.payments.find_all()?;
        Ok(payments
            .into_iter()
            .filter(|p| p.amount > threshold)
            .collect())
    }
}
