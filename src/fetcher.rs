// Failure-tolerant single-indicator fetch
use crate::models::{EconomicIndicator, IndicatorKind};
use crate::provider::{EconomicDataProvider, IndicatorRecord};

/// Picks the newest record by last-update timestamp. Records without a
/// timestamp sort oldest; among equal timestamps the record the provider
/// listed later wins, so the provider's own ordering breaks ties.
fn newest_record(records: Vec<IndicatorRecord>) -> Option<IndicatorRecord> {
    records
        .into_iter()
        .enumerate()
        .max_by_key(|(index, record)| (record.last_update, *index))
        .map(|(_, record)| record)
}

/// Fetches one indicator for one country.
///
/// This function never fails: any provider error or empty result set is
/// absorbed here and converted into the null fallback shape, so a single
/// upstream hiccup cannot abort an aggregate response.
pub async fn fetch(
    provider: &dyn EconomicDataProvider,
    country: &str,
    kind: IndicatorKind,
) -> EconomicIndicator {
    let records = match provider.query_indicator(country, kind.provider_category()).await {
        Ok(records) => records,
        Err(e) => {
            log::warn!(
                "Error fetching {} for {} from {}: {}",
                kind.provider_category(),
                country,
                provider.name(),
                e
            );
            return EconomicIndicator::fallback(country, kind);
        }
    };

    let Some(record) = newest_record(records) else {
        log::warn!(
            "{} returned no {} records for {}",
            provider.name(),
            kind.provider_category(),
            country
        );
        return EconomicIndicator::fallback(country, kind);
    };

    let country = if record.country.is_empty() {
        country.to_string()
    } else {
        record.country
    };

    EconomicIndicator {
        country,
        indicator: kind,
        value: record.value,
        previous_value: record.previous_value,
        last_update: record.last_update,
        unit: record.unit.unwrap_or_else(|| kind.default_unit().to_string()),
        frequency: record
            .frequency
            .unwrap_or_else(|| kind.default_frequency().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MacroIndexError, Result};
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub Provider {}

        #[async_trait]
        impl EconomicDataProvider for Provider {
            fn name(&self) -> &'static str;
            async fn query_indicator(
                &self,
                country: &str,
                category: &str,
            ) -> Result<Vec<IndicatorRecord>>;
        }
    }

    fn record(ts: Option<i64>, value: f64) -> IndicatorRecord {
        IndicatorRecord {
            country: "Japan".to_string(),
            category: "Interest Rate".to_string(),
            value: Some(value),
            previous_value: Some(value - 0.25),
            last_update: ts.map(|secs| Utc.timestamp_opt(secs, 0).unwrap()),
            unit: Some("percent".to_string()),
            frequency: Some("Daily".to_string()),
        }
    }

    #[tokio::test]
    async fn maps_the_newest_record() {
        let mut provider = MockProvider::new();
        provider
            .expect_query_indicator()
            .with(eq("Japan"), eq("Interest Rate"))
            .returning(|_, _| Ok(vec![record(Some(100), 0.5), record(Some(200), 0.75)]));

        let indicator = fetch(&provider, "Japan", IndicatorKind::InterestRate).await;
        assert_eq!(indicator.value, Some(0.75));
        assert_eq!(indicator.unit, "percent");
        assert_eq!(indicator.frequency, "Daily");
    }

    #[tokio::test]
    async fn equal_timestamps_keep_the_later_record() {
        let mut provider = MockProvider::new();
        provider
            .expect_query_indicator()
            .returning(|_, _| Ok(vec![record(Some(100), 0.5), record(Some(100), 0.75)]));

        let indicator = fetch(&provider, "Japan", IndicatorKind::InterestRate).await;
        assert_eq!(indicator.value, Some(0.75));
    }

    #[tokio::test]
    async fn missing_timestamps_sort_oldest() {
        let mut provider = MockProvider::new();
        provider
            .expect_query_indicator()
            .returning(|_, _| Ok(vec![record(None, 9.9), record(Some(100), 0.5)]));

        let indicator = fetch(&provider, "Japan", IndicatorKind::InterestRate).await;
        assert_eq!(indicator.value, Some(0.5));
    }

    #[tokio::test]
    async fn provider_error_becomes_the_fallback_shape() {
        let mut provider = MockProvider::new();
        provider.expect_name().return_const("Mock");
        provider.expect_query_indicator().returning(|_, _| {
            Err(MacroIndexError::ProviderError("boom".to_string()))
        });

        let indicator = fetch(&provider, "Japan", IndicatorKind::GdpGrowth).await;
        assert!(indicator.is_fallback());
        assert_eq!(indicator.country, "Japan");
        assert_eq!(indicator.unit, "%");
        assert_eq!(indicator.frequency, "Quarterly");
    }

    #[tokio::test]
    async fn empty_result_set_becomes_the_fallback_shape() {
        let mut provider = MockProvider::new();
        provider.expect_name().return_const("Mock");
        provider.expect_query_indicator().returning(|_, _| Ok(vec![]));

        let indicator = fetch(&provider, "Japan", IndicatorKind::Unemployment).await;
        assert!(indicator.is_fallback());
        assert_eq!(indicator.frequency, "Monthly");
    }
}
