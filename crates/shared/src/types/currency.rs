//! Currency metadata record.
//!
//! A `Currency` carries everything money needs to scale and render an
//! amount: the minor-unit multiplier, the separators, and the symbol.
//! Two currencies are the same currency when their codes match.

use std::hash::{Hash, Hasher};

use serde::Deserialize;

use crate::error::{MoneyError, MoneyResult};

/// Largest supported multiplier exponent; 10^18 still fits an `i64`.
pub const MAX_DECIMALS: u32 = 18;

/// Currency metadata consumed by money operations.
#[derive(Debug, Clone)]
pub struct Currency {
    code: String,
    multiplier: i64,
    decimals: u32,
    decimal_separator: char,
    thousand_separator: char,
    symbol: String,
    symbol_first: bool,
}

impl Currency {
    /// Creates a currency with `.` as decimal separator, `,` as thousand
    /// separator and the symbol placed after the number.
    ///
    /// # Errors
    ///
    /// Fails if the code is empty or the multiplier is not a power of ten.
    pub fn new(code: &str, multiplier: i64, symbol: &str) -> MoneyResult<Self> {
        let code = code.trim();
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(MoneyError::InvalidCurrency(format!(
                "code {code:?} must be non-empty and alphanumeric"
            )));
        }

        let decimals = decimals_of(multiplier).ok_or_else(|| {
            MoneyError::InvalidCurrency(format!(
                "multiplier {multiplier} for {code} is not a power of ten"
            ))
        })?;

        Ok(Self {
            code: code.to_uppercase(),
            multiplier,
            decimals,
            decimal_separator: '.',
            thousand_separator: ',',
            symbol: symbol.to_string(),
            symbol_first: false,
        })
    }

    /// Sets the decimal and thousand separators.
    #[must_use]
    pub fn with_separators(mut self, decimal: char, thousand: char) -> Self {
        self.decimal_separator = decimal;
        self.thousand_separator = thousand;
        self
    }

    /// Sets whether the symbol is written before the number.
    #[must_use]
    pub fn with_symbol_first(mut self, symbol_first: bool) -> Self {
        self.symbol_first = symbol_first;
        self
    }

    /// Currency code, upper-cased.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Number of minor units in one major unit.
    #[must_use]
    pub const fn multiplier(&self) -> i64 {
        self.multiplier
    }

    /// Number of fractional digits, `log10(multiplier)`.
    #[must_use]
    pub const fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Separator between the integer and fractional digits.
    #[must_use]
    pub const fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// Separator between groups of three integer digits.
    #[must_use]
    pub const fn thousand_separator(&self) -> char {
        self.thousand_separator
    }

    /// Display symbol, e.g. `$`.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// True if the symbol precedes the number.
    #[must_use]
    pub const fn symbol_first(&self) -> bool {
        self.symbol_first
    }
}

fn decimals_of(multiplier: i64) -> Option<u32> {
    (0..=MAX_DECIMALS).find(|exp| 10i64.checked_pow(*exp) == Some(multiplier))
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}

/// Currency definition as it appears in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurrencyConfig {
    /// Currency code.
    pub code: String,
    /// Minor units per major unit.
    #[serde(default = "default_multiplier")]
    pub multiplier: i64,
    /// Display symbol; defaults to the code.
    #[serde(default)]
    pub symbol: Option<String>,
    /// Decimal separator.
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,
    /// Thousand separator.
    #[serde(default = "default_thousand_separator")]
    pub thousand_separator: char,
    /// Whether the symbol precedes the number.
    #[serde(default)]
    pub symbol_first: bool,
}

fn default_multiplier() -> i64 {
    100
}

fn default_decimal_separator() -> char {
    '.'
}

fn default_thousand_separator() -> char {
    ','
}

impl TryFrom<&CurrencyConfig> for Currency {
    type Error = MoneyError;

    fn try_from(value: &CurrencyConfig) -> Result<Self, Self::Error> {
        let symbol = value.symbol.as_deref().unwrap_or(&value.code);
        Ok(Self::new(&value.code, value.multiplier, symbol)?
            .with_separators(value.decimal_separator, value.thousand_separator)
            .with_symbol_first(value.symbol_first))
    }
}
