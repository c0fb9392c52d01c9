// Actix handlers and server setup
use crate::aggregator::{aggregate, resolve_pair};
use crate::config;
use crate::error::MacroIndexError;
use crate::fetcher::fetch;
use crate::models::{CurrencyPairProfile, EconomicIndicator, IndicatorKind};
use crate::provider::trading_economics::TradingEconomicsProvider;
use crate::provider::EconomicDataProvider;
use crate::registry::CurrencyRegistry;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use serde::Deserialize;
use std::sync::Arc;

pub struct AppState {
    pub registry: CurrencyRegistry,
    pub provider: Arc<dyn EconomicDataProvider>,
}

/// The majors served by `/all-currency-pairs`
const MAJOR_CURRENCIES: [&str; 7] = ["USD", "EUR", "GBP", "JPY", "CHF", "CAD", "AUD"];

/// Base sides of the major pairs
const MAJOR_BASE_CURRENCIES: [&str; 3] = ["USD", "EUR", "GBP"];

#[derive(Debug, Deserialize)]
pub struct CountriesQuery {
    /// Comma-separated country list; defaults to the first ten registry
    /// countries when absent
    pub countries: Option<String>,
}

pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "FX Macro Index API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "currencies": "/currencies",
            "countries": "/countries",
            "indicators": "/indicators/{country}",
            "currency_pairs": "/currency-pairs/{base}/{quote}",
            "all_currency_pairs": "/all-currency-pairs",
            "interest_rates": "/interest-rates",
            "gdp_growth": "/gdp-growth",
            "inflation": "/inflation",
            "unemployment": "/unemployment",
            "health": "/health"
        }
    }))
}

pub async fn get_currencies(data: web::Data<AppState>) -> impl Responder {
    let codes: Vec<&str> = data.registry.codes().collect();
    HttpResponse::Ok().json(codes)
}

pub async fn get_countries(data: web::Data<AppState>) -> impl Responder {
    let countries: Vec<&str> = data.registry.countries().collect();
    HttpResponse::Ok().json(countries)
}

pub async fn get_country_indicators(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let country = path.into_inner();
    let profile = aggregate(data.provider.as_ref(), &country).await;
    HttpResponse::Ok().json(profile)
}

pub async fn get_currency_pair(
    data: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (base, quote) = path.into_inner();
    match resolve_pair(&data.registry, data.provider.as_ref(), &base, &quote).await {
        Ok(pair) => HttpResponse::Ok().json(pair),
        Err(e @ MacroIndexError::UnknownCurrency(_)) => {
            HttpResponse::NotFound().json(serde_json::json!({ "error": e.to_string() }))
        }
        Err(e) => {
            log::error!("Error resolving currency pair {}/{}: {}", base, quote, e);
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "Error fetching currency pair data" }))
        }
    }
}

// Shared by the four per-indicator list endpoints. Fallback-shaped results
// (the fetch failed upstream) are dropped from the list rather than reported
// as nulls.
async fn list_indicator(
    data: &AppState,
    kind: IndicatorKind,
    query: &CountriesQuery,
) -> Vec<EconomicIndicator> {
    let countries: Vec<String> = match &query.countries {
        Some(raw) => raw
            .split(',')
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect(),
        None => data.registry.countries().take(10).map(str::to_string).collect(),
    };

    let fetches = countries
        .iter()
        .map(|country| fetch(data.provider.as_ref(), country, kind));

    futures::future::join_all(fetches)
        .await
        .into_iter()
        .filter(|indicator| !indicator.is_fallback())
        .collect()
}

pub async fn get_interest_rates(
    data: web::Data<AppState>,
    query: web::Query<CountriesQuery>,
) -> impl Responder {
    HttpResponse::Ok().json(list_indicator(&data, IndicatorKind::InterestRate, &query).await)
}

pub async fn get_gdp_growth(
    data: web::Data<AppState>,
    query: web::Query<CountriesQuery>,
) -> impl Responder {
    HttpResponse::Ok().json(list_indicator(&data, IndicatorKind::GdpGrowth, &query).await)
}

pub async fn get_inflation(
    data: web::Data<AppState>,
    query: web::Query<CountriesQuery>,
) -> impl Responder {
    HttpResponse::Ok().json(list_indicator(&data, IndicatorKind::Inflation, &query).await)
}

pub async fn get_unemployment(
    data: web::Data<AppState>,
    query: web::Query<CountriesQuery>,
) -> impl Responder {
    HttpResponse::Ok().json(list_indicator(&data, IndicatorKind::Unemployment, &query).await)
}

pub async fn get_all_currency_pairs(data: web::Data<AppState>) -> impl Responder {
    let mut combos = Vec::new();
    for base in MAJOR_BASE_CURRENCIES {
        for quote in MAJOR_CURRENCIES {
            if base != quote {
                combos.push((base, quote));
            }
        }
    }

    // Pairs that fail to resolve are skipped, not fatal to the listing
    let fetches = combos.into_iter().map(|(base, quote)| {
        let state = data.clone();
        async move {
            match resolve_pair(&state.registry, state.provider.as_ref(), base, quote).await {
                Ok(pair) => Some(pair),
                Err(e) => {
                    log::warn!("Error fetching pair {}/{}: {}", base, quote, e);
                    None
                }
            }
        }
    });

    let pairs: Vec<CurrencyPairProfile> = futures::future::join_all(fetches)
        .await
        .into_iter()
        .flatten()
        .collect();

    HttpResponse::Ok().json(pairs)
}

pub async fn health_check(data: web::Data<AppState>) -> impl Responder {
    let provider_status = match data
        .provider
        .query_indicator("United States", "Interest Rate")
        .await
    {
        Ok(records) if !records.is_empty() => "healthy".to_string(),
        Ok(_) => "degraded".to_string(),
        Err(e) => format!("error: {}", e),
    };

    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "provider": provider_status,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Registers every route on an actix App; shared between the real server and
/// the test harness
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/currencies", web::get().to(get_currencies))
        .route("/countries", web::get().to(get_countries))
        .route("/indicators/{country}", web::get().to(get_country_indicators))
        .route(
            "/currency-pairs/{base}/{quote}",
            web::get().to(get_currency_pair),
        )
        .route("/all-currency-pairs", web::get().to(get_all_currency_pairs))
        .route("/interest-rates", web::get().to(get_interest_rates))
        .route("/gdp-growth", web::get().to(get_gdp_growth))
        .route("/inflation", web::get().to(get_inflation))
        .route("/unemployment", web::get().to(get_unemployment))
        .route("/health", web::get().to(health_check));
}

pub async fn start_server() -> std::io::Result<()> {
    let provider = Arc::new(
        TradingEconomicsProvider::new().expect("Failed to create Trading Economics client"),
    );

    let addr = config::get_server_addr();
    log::info!("Listening on {}", addr);

    HttpServer::new(move || {
        let app_state = web::Data::new(AppState {
            registry: CurrencyRegistry::new(),
            provider: provider.clone(),
        });
        App::new().app_data(app_state).configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
