//! Repository port traits.
//!
//! These are the primary ports in our hexagonal architecture.
//! Adapters (in-memory today, anything keyed tomorrow) implement them.
//!
//! Execution is synchronous: every operation runs to completion on the
//! caller's thread, and any failure aborts the operation immediately.

use crate::domain::{Payment, PaymentId, User, UserId};
use crate::error::PaymentError;

/// Store of payment records, keyed by payment id.
pub trait PaymentRepository: Send + Sync {
    /// Looks up a payment by id.
    ///
    /// Fails with [`InvalidArgument::PaymentIdMissing`] when the id is
    /// absent; returns `None` when no payment has that id.
    ///
    /// [`InvalidArgument::PaymentIdMissing`]: crate::error::InvalidArgument::PaymentIdMissing
    fn find_by_id(&self, id: Option<PaymentId>) -> Result<Option<Payment>, PaymentError>;

    /// Returns all stored payments in insertion order.
    fn find_all(&self) -> Result<Vec<Payment>, PaymentError>;

    /// Stores a payment and returns the stored instance.
    ///
    /// Fails with [`InvalidArgument::PaymentMissing`] when the payment is
    /// absent, and with [`InvalidArgument::AlreadySaved`] when a payment
    /// with the same id is already stored.
    ///
    /// [`InvalidArgument::PaymentMissing`]: crate::error::InvalidArgument::PaymentMissing
    /// [`InvalidArgument::AlreadySaved`]: crate::error::InvalidArgument::AlreadySaved
    fn save(&self, payment: Option<Payment>) -> Result<Payment, PaymentError>;

    /// Replaces the message of a stored payment and returns the updated
    /// payment.
    ///
    /// Fails with [`NotFound::Payment`] when no payment has that id.
    ///
    /// [`NotFound::Payment`]: crate::error::NotFound::Payment
    fn edit_message(&self, id: PaymentId, message: String) -> Result<Payment, PaymentError>;
}

/// Read-only directory of users, owned by an external collaborator.
pub trait UserRepository: Send + Sync {
    /// Looks up a user by id; returns `None` when unknown.
    fn find_by_id(&self, id: UserId) -> Result<Option<User>, PaymentError>;
}
