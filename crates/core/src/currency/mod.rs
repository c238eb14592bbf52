//! Currency lookup and the named-currency money factory.

pub mod registry;

pub use registry::{CurrencyProvider, CurrencyRegistry, default_registry};
