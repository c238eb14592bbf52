//! Money value type for Coinage.
//!
//! An immutable amount bound to a currency, with currency-checked
//! arithmetic, rounding-mode-aware scaling, exact allocation across ratios,
//! minor-unit conversion and locale-style formatting.
//!
//! # Modules
//!
//! - `money` - The `Money` value type and its operations
//! - `currency` - Currency lookup by code

pub mod currency;
pub mod money;

pub use coinage_shared::{Currency, MoneyError, MoneyResult, RoundingMode};
pub use currency::{CurrencyProvider, CurrencyRegistry, default_registry};
pub use money::{Money, Operand, string_to_units};
