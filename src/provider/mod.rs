// Provider trait and record shape
use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub mod trading_economics;

/// One timestamped observation for a (country, category) query, as returned
/// by the upstream provider. Everything except country and category is
/// optional in the payload.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorRecord {
    pub country: String,
    pub category: String,
    pub value: Option<f64>,
    pub previous_value: Option<f64>,
    pub last_update: Option<DateTime<Utc>>,
    pub unit: Option<String>,
    pub frequency: Option<String>,
}

/// The EconomicDataProvider trait is the boundary to the upstream economic
/// data service.
///
/// Implementations raise on transport, auth, or decoding failure; an empty
/// record list is a valid (if unhelpful) answer. Callers above the fetcher
/// never see these errors — the fetcher converts them to the null fallback.
#[async_trait]
pub trait EconomicDataProvider: Send + Sync {
    /// Returns the name of the provider as a static string
    fn name(&self) -> &'static str;

    /// Queries the latest and previous values for one indicator category in
    /// one country
    async fn query_indicator(&self, country: &str, category: &str)
        -> Result<Vec<IndicatorRecord>>;
}
