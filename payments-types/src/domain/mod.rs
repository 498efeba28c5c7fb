//! Domain models for the payment workflow.

pub mod payment;
pub mod user;

pub use payment::{Payment, PaymentId};
pub use user::{User, UserId, UserStatus};
