//! Shared types, errors, and configuration for Coinage.
//!
//! This crate provides the pieces every other crate depends on:
//! - Currency metadata records
//! - Rounding modes
//! - The money error type
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::CoinageConfig;
pub use error::{ErrorKind, MoneyError, MoneyResult};
pub use types::{Currency, CurrencyConfig, RoundingMode};
