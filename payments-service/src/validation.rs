//! Field-level validation.

use rust_decimal::Decimal;

use payments_types::{InvalidArgument, PaymentId, User, UserId, ValidationService};

/// Default implementation of the validation port.
///
/// Stateless - every check inspects only its argument.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicValidationService;

impl BasicValidationService {
    pub fn new() -> Self {
        Self
    }
}

impl ValidationService for BasicValidationService {
    fn validate_amount(&self, amount: Option<Decimal>) -> Result<Decimal, InvalidArgument> {
        let amount = amount.ok_or(InvalidArgument::AmountMissing)?;
        if amount <= Decimal::ZERO {
            return Err(InvalidArgument::AmountNotPositive);
        }
        Ok(amount)
    }

    fn validate_payment_id(&self, id: Option<PaymentId>) -> Result<PaymentId, InvalidArgument> {
        id.ok_or(InvalidArgument::PaymentIdMissing)
    }

    fn validate_user_id(&self, id: Option<UserId>) -> Result<UserId, InvalidArgument> {
        id.ok_or(InvalidArgument::UserIdMissing)
    }

    fn validate_user(&self, user: &User) -> Result<(), InvalidArgument> {
        if !user.is_active() {
            return Err(InvalidArgument::UserNotActive(user.id));
        }
        Ok(())
    }

    fn validate_message(&self, message: Option<String>) -> Result<String, InvalidArgument> {
        message.ok_or(InvalidArgument::MessageMissing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payments_types::UserStatus;
    use rust_decimal_macros::dec;

    fn validator() -> BasicValidationService {
        BasicValidationService::new()
    }

    #[test]
    fn test_validate_amount_accepts_positive() {
        assert_eq!(validator().validate_amount(Some(dec!(55.00))), Ok(dec!(55.00)));
    }

    #[test]
    fn test_validate_amount_missing_fails() {
        let err = validator().validate_amount(None).unwrap_err();
        assert_eq!(err.to_string(), "Amount must not be null");
    }

    #[test]
    fn test_validate_amount_zero_or_negative_fails() {
        for amount in [dec!(0.00), dec!(-5.00)] {
            let err = validator().validate_amount(Some(amount)).unwrap_err();
            assert_eq!(err.to_string(), "Amount must be greater than 0");
        }
    }

    #[test]
    fn test_validate_payment_id_accepts_id() {
        let id = PaymentId::new();
        assert_eq!(validator().validate_payment_id(Some(id)), Ok(id));
    }

    #[test]
    fn test_validate_payment_id_missing_fails() {
        let err = validator().validate_payment_id(None).unwrap_err();
        assert_eq!(err.to_string(), "Payment id must not be null");
    }

    #[test]
    fn test_validate_user_id_accepts_id() {
        assert_eq!(
            validator().validate_user_id(Some(UserId::new(11))),
            Ok(UserId::new(11))
        );
    }

    #[test]
    fn test_validate_user_id_missing_fails() {
        let err = validator().validate_user_id(None).unwrap_err();
        assert_eq!(err.to_string(), "User id must not be null");
    }

    #[test]
    fn test_validate_user_accepts_active_user() {
        let user = User::new(11, "Ron", UserStatus::Active);
        assert_eq!(validator().validate_user(&user), Ok(()));
    }

    #[test]
    fn test_validate_user_rejects_inactive_user() {
        let user = User::new(11, "Ben", UserStatus::Inactive);
        let err = validator().validate_user(&user).unwrap_err();
        assert_eq!(err.to_string(), "User with id 11 not in ACTIVE status");
    }

    #[test]
    fn test_validate_message_accepts_message() {
        assert_eq!(
            validator().validate_message(Some("Payment is complete".into())),
            Ok("Payment is complete".to_string())
        );
    }

    #[test]
    fn test_validate_message_missing_fails() {
        let err = validator().validate_message(None).unwrap_err();
        assert_eq!(err.to_string(), "Payment message must not be null");
    }
}
