//! # Payments Repo
//!
//! Concrete repository implementations (adapters) for the payment workflow.
//! This crate provides the in-memory adapters that implement the
//! `PaymentRepository` and `UserRepository` ports.

pub mod memory;


pub use memory::{InMemoryPaymentRepository, InMemoryUserRepository};
