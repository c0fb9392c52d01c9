// Country aggregation and currency-pair resolution
use crate::error::Result;
use crate::fetcher::fetch;
use crate::models::{CountryEconomicProfile, CurrencyPairProfile, IndicatorKind};
use crate::provider::EconomicDataProvider;
use crate::registry::CurrencyRegistry;
use chrono::Utc;

/// Assembles the composite profile for one country.
///
/// The four indicator fetches run concurrently; they share no state and each
/// already absorbs its own failure, so this function never fails. The
/// profile's `last_updated` is the time aggregation completed, not anything
/// derived from the per-indicator timestamps.
pub async fn aggregate(
    provider: &dyn EconomicDataProvider,
    country: &str,
) -> CountryEconomicProfile {
    let (interest_rate, gdp_growth, inflation_rate, unemployment_rate) = futures::join!(
        fetch(provider, country, IndicatorKind::InterestRate),
        fetch(provider, country, IndicatorKind::GdpGrowth),
        fetch(provider, country, IndicatorKind::Inflation),
        fetch(provider, country, IndicatorKind::Unemployment),
    );

    CountryEconomicProfile {
        country: country.to_string(),
        interest_rate,
        gdp_growth,
        inflation_rate,
        unemployment_rate,
        last_updated: Utc::now(),
    }
}

/// Resolves a currency pair into the two country profiles behind it.
///
/// Both codes are resolved before any provider call is made, so an unknown
/// currency fails fast with `UnknownCurrency` and the provider is never hit.
/// Once both codes are valid the result is never a partial failure: the two
/// aggregations run concurrently and degrade per indicator.
pub async fn resolve_pair(
    registry: &CurrencyRegistry,
    provider: &dyn EconomicDataProvider,
    base: &str,
    quote: &str,
) -> Result<CurrencyPairProfile> {
    let base_currency = base.to_uppercase();
    let quote_currency = quote.to_uppercase();

    let base_country = registry.resolve(&base_currency)?.to_string();
    let quote_country = registry.resolve(&quote_currency)?.to_string();

    let (base_country_data, quote_country_data) = tokio::join!(
        aggregate(provider, &base_country),
        aggregate(provider, &quote_country),
    );

    Ok(CurrencyPairProfile {
        base_currency,
        quote_currency,
        base_country_data,
        quote_country_data,
    })
}
