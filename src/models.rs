// EconomicIndicator, CountryEconomicProfile, CurrencyPairProfile
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The four indicator kinds this service knows about.
///
/// The mapping from kind to provider category string and to the default
/// unit/frequency used in the fallback shape is fixed here so that adding a
/// kind forces every match below to be updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    InterestRate,
    GdpGrowth,
    Inflation,
    Unemployment,
}

impl IndicatorKind {
    /// Category string the upstream provider expects for this kind
    pub fn provider_category(&self) -> &'static str {
        match self {
            IndicatorKind::InterestRate => "Interest Rate",
            IndicatorKind::GdpGrowth => "GDP Growth Rate",
            IndicatorKind::Inflation => "Inflation Rate",
            IndicatorKind::Unemployment => "Unemployment Rate",
        }
    }

    /// Unit reported when the provider gives none or the fetch failed
    pub fn default_unit(&self) -> &'static str {
        match self {
            IndicatorKind::InterestRate
            | IndicatorKind::GdpGrowth
            | IndicatorKind::Inflation
            | IndicatorKind::Unemployment => "%",
        }
    }

    /// Frequency reported when the provider gives none or the fetch failed
    pub fn default_frequency(&self) -> &'static str {
        match self {
            IndicatorKind::InterestRate => "Monthly",
            IndicatorKind::GdpGrowth => "Quarterly",
            IndicatorKind::Inflation => "Monthly",
            IndicatorKind::Unemployment => "Monthly",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomicIndicator {
    pub country: String,
    pub indicator: IndicatorKind,
    pub value: Option<f64>,
    pub previous_value: Option<f64>,
    pub last_update: Option<DateTime<Utc>>,
    pub unit: String,
    pub frequency: String,
}

impl EconomicIndicator {
    /// The shape returned when the upstream fetch failed or came back empty.
    ///
    /// value/previous_value/last_update are jointly None; unit and frequency
    /// fall back to the kind's static defaults.
    pub fn fallback(country: &str, indicator: IndicatorKind) -> Self {
        Self {
            country: country.to_string(),
            indicator,
            value: None,
            previous_value: None,
            last_update: None,
            unit: indicator.default_unit().to_string(),
            frequency: indicator.default_frequency().to_string(),
        }
    }

    /// True when this indicator carries the null fallback shape
    pub fn is_fallback(&self) -> bool {
        self.value.is_none() && self.previous_value.is_none() && self.last_update.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryEconomicProfile {
    pub country: String,
    pub interest_rate: EconomicIndicator,
    pub gdp_growth: EconomicIndicator,
    pub inflation_rate: EconomicIndicator,
    pub unemployment_rate: EconomicIndicator,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyPairProfile {
    pub base_currency: String,
    pub quote_currency: String,
    pub base_country_data: CountryEconomicProfile,
    pub quote_country_data: CountryEconomicProfile,
}
