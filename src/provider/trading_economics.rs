// REST client for the Trading Economics API
use crate::config;
use crate::error::{MacroIndexError, Result};
use crate::provider::{EconomicDataProvider, IndicatorRecord};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;

/// One row of the `/country/{country}/indicator/{category}` response.
/// Field names follow the provider's PascalCase payload.
#[derive(Debug, Deserialize)]
struct TeIndicatorRow {
    #[serde(rename = "Country")]
    country: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "LatestValue")]
    latest_value: Option<f64>,
    #[serde(rename = "PreviousValue")]
    previous_value: Option<f64>,
    #[serde(rename = "LatestValueDate")]
    latest_value_date: Option<String>,
    #[serde(rename = "Unit")]
    unit: Option<String>,
    #[serde(rename = "Frequency")]
    frequency: Option<String>,
}

// Trading Economics dates come in several shapes depending on the endpoint:
// RFC 3339, a naive "2024-03-01T00:00:00", or a bare date. Anything else is
// treated as absent rather than failing the whole row.
fn parse_te_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.and_utc());
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

impl TeIndicatorRow {
    fn into_record(self) -> IndicatorRecord {
        IndicatorRecord {
            country: self.country,
            category: self.category,
            value: self.latest_value,
            previous_value: self.previous_value,
            last_update: self.latest_value_date.as_deref().and_then(parse_te_date),
            unit: self.unit,
            frequency: self.frequency,
        }
    }
}

pub struct TradingEconomicsProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TradingEconomicsProvider {
    pub fn new() -> Result<Self> {
        Self::with_base_url(config::get_provider_base_url(), config::get_provider_api_key())
    }

    /// Client against an explicit base URL and key. Tests point this at a
    /// local mock server.
    pub fn with_base_url(base_url: String, api_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config::get_provider_timeout())
            .build()
            .map_err(|e| {
                MacroIndexError::ProviderError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    fn indicator_url(&self, country: &str, category: &str) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.base_url).map_err(|e| {
            MacroIndexError::ProviderError(format!("Invalid provider base URL: {}", e))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                MacroIndexError::ProviderError("Provider base URL cannot be a base".to_string())
            })?
            .push("country")
            .push(country)
            .push("indicator")
            .push(category);
        url.query_pairs_mut()
            .append_pair("c", &self.api_key)
            .append_pair("f", "json");
        Ok(url)
    }
}

#[async_trait]
impl EconomicDataProvider for TradingEconomicsProvider {
    fn name(&self) -> &'static str {
        "TradingEconomics"
    }

    async fn query_indicator(
        &self,
        country: &str,
        category: &str,
    ) -> Result<Vec<IndicatorRecord>> {
        let url = self.indicator_url(country, category)?;
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(MacroIndexError::ProviderError(format!(
                "Trading Economics returned {} for {} / {}",
                response.status(),
                country,
                category
            )));
        }

        let rows: Vec<TeIndicatorRow> = response.json().await?;
        Ok(rows.into_iter().map(TeIndicatorRow::into_record).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_naive_and_rfc3339_dates() {
        let naive = parse_te_date("2024-03-01T00:00:00").unwrap();
        assert_eq!(naive.to_rfc3339(), "2024-03-01T00:00:00+00:00");

        let rfc = parse_te_date("2024-03-01T12:30:00+02:00").unwrap();
        assert_eq!(rfc.to_rfc3339(), "2024-03-01T10:30:00+00:00");

        let date_only = parse_te_date("2024-03-01").unwrap();
        assert_eq!(date_only.to_rfc3339(), "2024-03-01T00:00:00+00:00");

        assert!(parse_te_date("not a date").is_none());
    }

    #[test]
    fn builds_percent_encoded_indicator_url() {
        let provider = TradingEconomicsProvider::with_base_url(
            "https://api.tradingeconomics.com".to_string(),
            "guest:guest".to_string(),
        )
        .unwrap();

        let url = provider
            .indicator_url("United States", "Interest Rate")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.tradingeconomics.com/country/United%20States/indicator/Interest%20Rate?c=guest%3Aguest&f=json"
        );
    }
}
