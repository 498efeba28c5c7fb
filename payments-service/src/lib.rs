//! # Payments Service
//!
//! Application service layer for the payment workflow.
//!
//! ## Architecture
//!
//! - `validation` - Field-level validation (implements the validation port)
//! - `service` - Application service (orchestrates validation, the user
//!   directory and the payment store)
//!
//! The service is generic over its three ports, allowing different
//! implementations to be injected - the in-memory adapters in production
//! wiring, recording mocks in tests.

pub mod service;
pub mod validation;


pub use service::PaymentService;
pub use validation::BasicValidationService;
