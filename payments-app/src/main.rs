//! # Payments Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the tracing subscriber
//! - Seed the user directory and create the payment service
//! - Run a short create / edit / query session

mod config;

use rust_decimal_macros::dec;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use payments_repo::{InMemoryPaymentRepository, InMemoryUserRepository};
use payments_service::{BasicValidationService, PaymentService};
use payments_types::{CreatePaymentRequest, EditMessageRequest, User, UserStatus};

use config::{Config, LogFormat};

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,payments_app=debug,payments_repo=debug".into());

    match config.log_format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;
    init_tracing(&config);

    // Seed the user directory
    let users = InMemoryUserRepository::from_users([
        User::new(11, "Ben", UserStatus::Active),
        User::new(44, "Ron", UserStatus::Inactive),
    ]);

    // Create the payment service
    let service = PaymentService::new(
        InMemoryPaymentRepository::new(),
        users,
        BasicValidationService::new(),
    );

    tracing::info!("Starting payment demo session");

    let first = service.create_payment(CreatePaymentRequest::new(11, dec!(333.00)))?;
    tracing::info!(payment_id = %first.id, message = %first.message, "created payment");

    let second = service.create_payment(CreatePaymentRequest::new(11, dec!(55.00)))?;
    tracing::info!(payment_id = %second.id, "created payment");

    let updated =
        service.edit_payment_message(EditMessageRequest::new(second.id, "The payment was canceled"))?;
    tracing::info!(payment_id = %updated.id, message = %updated.message, "edited payment message");

    // An inactive user is rejected before anything is stored.
    if let Err(err) = service.create_payment(CreatePaymentRequest::new(44, dec!(10.00))) {
        tracing::warn!(%err, "payment rejected");
    }

    let exceeding = service.get_all_by_amount_exceeding(dec!(100.00))?;
    tracing::info!(count = exceeding.len(), "payments above 100.00");

    Ok(())
}
