//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The application layer depends on these traits, not concrete implementations.

mod repository;
mod validation;

pub use repository::{PaymentRepository, UserRepository};
pub use validation::ValidationService;
