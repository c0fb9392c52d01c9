//! FX Macro Index API
//!
//! This library provides functionality for fetching economic indicators
//! (interest rate, GDP growth, inflation, unemployment) per country from
//! Trading Economics and aggregating them per currency pair.

pub mod aggregator;
pub mod api;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod provider;
pub mod registry;

// Re-export commonly used items
pub use aggregator::{aggregate, resolve_pair};
pub use api::start_server;
pub use config::SETTINGS;
pub use error::{MacroIndexError, Result};
pub use fetcher::fetch;
pub use models::{
    CountryEconomicProfile, CurrencyPairProfile, EconomicIndicator, IndicatorKind,
};
pub use registry::CurrencyRegistry;

// Re-export provider types
pub use provider::trading_economics::TradingEconomicsProvider;
pub use provider::{EconomicDataProvider, IndicatorRecord};
