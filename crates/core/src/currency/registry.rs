//! Currency lookup by code and the named-currency money factory.

use std::collections::HashMap;
use std::sync::Arc;

use coinage_shared::{CoinageConfig, Currency, MoneyResult};
use once_cell::sync::Lazy;
use tracing::debug;

use crate::money::{Money, Operand};

/// Multiplier used for codes the provider does not know.
const GENERIC_MULTIPLIER: i64 = 100;

/// Supplies currency metadata by code.
pub trait CurrencyProvider {
    /// Looks up a currency by code, ignoring case.
    fn currency(&self, code: &str) -> Option<Arc<Currency>>;

    /// Looks up a currency, falling back to generic two-decimal metadata
    /// (symbol = code, written after the number) for unknown codes.
    ///
    /// # Errors
    ///
    /// Fails with [`coinage_shared::MoneyError::InvalidCurrency`] if `code` is not a usable
    /// currency code.
    fn resolve(&self, code: &str) -> MoneyResult<Arc<Currency>> {
        if let Some(currency) = self.currency(code) {
            return Ok(currency);
        }
        debug!(code, "Unknown currency code, using generic metadata");
        let symbol = code.trim().to_uppercase();
        Currency::new(code, GENERIC_MULTIPLIER, &symbol).map(Arc::new)
    }

    /// Creates money in the currency named by `code`.
    ///
    /// The amount must still be fractional: `money("USD", 5)` fails.
    fn money(&self, code: &str, amount: impl Into<Operand>) -> MoneyResult<Money>
    where
        Self: Sized,
    {
        let amount = amount.into();
        let currency = self.resolve(code)?;
        Money::new(amount, currency)
    }
}

/// In-memory currency table keyed by upper-case code.
#[derive(Debug, Clone, Default)]
pub struct CurrencyRegistry {
    currencies: HashMap<String, Arc<Currency>>,
}

impl CurrencyRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in currencies.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for currency in builtin() {
            registry.register(currency);
        }
        registry
    }

    /// Creates a registry from the built-in currencies plus configured ones.
    ///
    /// Configured currencies replace built-in ones with the same code.
    ///
    /// # Errors
    ///
    /// Fails if a configured currency is malformed.
    pub fn from_config(config: &CoinageConfig) -> MoneyResult<Self> {
        let mut registry = Self::with_defaults();
        for entry in &config.currencies {
            registry.register(Currency::try_from(entry)?);
        }
        debug!(
            configured = config.currencies.len(),
            total = registry.len(),
            "Currency registry built"
        );
        Ok(registry)
    }

    /// Adds a currency, replacing any currency with the same code.
    pub fn register(&mut self, currency: Currency) -> Arc<Currency> {
        let currency = Arc::new(currency);
        self.currencies
            .insert(currency.code().to_string(), Arc::clone(&currency));
        currency
    }

    /// Number of registered currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    /// Returns true if no currency is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    /// Registered codes, sorted.
    #[must_use]
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.currencies.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}

impl CurrencyProvider for CurrencyRegistry {
    fn currency(&self, code: &str) -> Option<Arc<Currency>> {
        self.currencies
            .get(&code.trim().to_uppercase())
            .map(Arc::clone)
    }
}

static DEFAULT_REGISTRY: Lazy<CurrencyRegistry> = Lazy::new(CurrencyRegistry::with_defaults);

/// Process-wide registry of built-in currencies.
pub fn default_registry() -> &'static CurrencyRegistry {
    &DEFAULT_REGISTRY
}

impl Money {
    /// Creates money in the currency named by `code`, using the built-in
    /// currencies.
    ///
    /// # Example
    ///
    /// ```
    /// use coinage_core::Money;
    ///
    /// let price = Money::of("USD", 5.0).unwrap();
    /// assert_eq!(price.currency().code(), "USD");
    /// assert!(Money::of("USD", 5).is_err());
    /// ```
    pub fn of(code: &str, amount: impl Into<Operand>) -> MoneyResult<Self> {
        default_registry().money(code, amount)
    }
}

// (code, multiplier, symbol, decimal separator, thousand separator, symbol first)
const BUILTIN: [(&str, i64, &str, char, char, bool); 6] = [
    ("USD", 100, "$", '.', ',', true),
    ("EUR", 100, "€", ',', '.', false),
    ("GBP", 100, "£", '.', ',', true),
    ("JPY", 1, "¥", '.', ',', true),
    ("IDR", 100, "Rp", ',', '.', true),
    ("SGD", 100, "S$", '.', ',', true),
];

fn builtin() -> impl Iterator<Item = Currency> {
    BUILTIN
        .iter()
        .map(|&(code, multiplier, symbol, decimal, thousand, symbol_first)| {
            Currency::new(code, multiplier, symbol)
                .expect("built-in currency table holds valid codes and multipliers")
                .with_separators(decimal, thousand)
                .with_symbol_first(symbol_first)
        })
}
