//! API Handlers
//!
//! HTTP request handlers for each catalog endpoint. Handlers dispatch
//! fetches through the catalog and answer with views derived from the store.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tokio::sync::RwLock;
use tracing::info;

use crate::client::{CountryApi, HttpClient, RestCountries};
use crate::config::Config;
use crate::error::{ApiError, NetworkError, Result};
use crate::models::{
    is_country_code, HealthResponse, ListQuery, RefreshResponse, StatusResponse, ThemeRequest,
    ThemeResponse,
};
use crate::preferences::{Theme, ThemePreference};
use crate::store::Catalog;
use crate::view::{
    derive_detail, derive_landing, BorderResolver, CountryFilter, DetailPage, LandingPage,
    ListPage, ListView, REGIONS,
};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Country store and fetch actions
    pub catalog: Catalog,
    /// Persisted display preference
    pub theme: Arc<RwLock<ThemePreference>>,
}

impl AppState {
    /// Creates a new AppState with the given catalog and preference.
    pub fn new(catalog: Catalog, theme: ThemePreference) -> Self {
        Self {
            catalog,
            theme: Arc::new(RwLock::new(theme)),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the upstream client and loads the saved theme.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = HttpClient::from_config(config)?;
        let api: Arc<dyn CountryApi> = Arc::new(RestCountries::new(client));
        let theme = ThemePreference::load(config.theme_file.clone(), Theme::system());
        Ok(Self::new(Catalog::new(api), theme))
    }
}

/// Handler for GET /
///
/// Landing page with the most populated countries.
pub async fn landing_handler(State(state): State<AppState>) -> Json<LandingPage> {
    // Failure is recorded in the store and reported through `status`
    let _ = state.catalog.ensure_loaded().await;

    let store = state.catalog.read().await;
    Json(derive_landing(&store))
}

/// Handler for GET /countries
///
/// Filtered listing; `reveals` replays the sentinel triggers.
pub async fn list_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListPage>> {
    if let Some(error_msg) = query.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let _ = state.catalog.ensure_loaded().await;

    let mut view = ListView::new();
    view.set_filter(CountryFilter::new(
        query.q.unwrap_or_default(),
        query.region.unwrap_or_default(),
    ));

    let store = state.catalog.read().await;
    for _ in 0..query.reveals.unwrap_or(0) {
        if !view.reveal_more(&store) {
            break;
        }
    }

    Ok(Json(view.render(&store)))
}

/// Handler for GET /countries/:code
///
/// Fetches the country if it is not cached, then resolves its borders.
pub async fn detail_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<DetailPage>> {
    let code = code.trim().to_ascii_uppercase();
    if !is_country_code(&code) {
        return Err(ApiError::InvalidRequest(format!(
            "'{}' is not a 3-letter country code",
            code
        )));
    }

    let fetched = state.catalog.ensure_country(&code).await;

    let country = state.catalog.read().await.get(&code).cloned();
    let resolver = BorderResolver::new(state.catalog.clone());
    if let Some(country) = &country {
        let resolution = resolver.resolve(country).await;
        if !resolution.failed.is_empty() {
            info!(
                "Borders of {} left unresolved: {}",
                code,
                resolution.failed.join(", ")
            );
        }
    }

    let store = state.catalog.read().await;
    match derive_detail(&store, &code, resolver.is_loading()) {
        DetailPage::Failed { message, upstream } => match fetched {
            // Only a 404 from upstream means the code does not exist
            Some(Err(err)) if err != NetworkError::Status(404) => Err(err.into()),
            _ if upstream => Err(ApiError::Upstream(message)),
            _ => Err(ApiError::NotFound(message)),
        },
        page => Ok(Json(page)),
    }
}

/// Handler for POST /countries/refresh
///
/// Explicit bulk re-fetch; also the retry affordance after a failure.
pub async fn refresh_handler(State(state): State<AppState>) -> Result<Json<RefreshResponse>> {
    let count = state.catalog.fetch_all().await?;
    Ok(Json(RefreshResponse::new(count)))
}

/// Handler for GET /regions
pub async fn regions_handler() -> Json<Vec<&'static str>> {
    Json(REGIONS.to_vec())
}

/// Handler for GET /status
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    let store = state.catalog.read().await;
    Json(StatusResponse::from_store(&store))
}

/// Handler for GET /theme
pub async fn get_theme_handler(State(state): State<AppState>) -> Json<ThemeResponse> {
    let theme = state.theme.read().await.theme();
    Json(ThemeResponse { theme })
}

/// Handler for PUT /theme
pub async fn set_theme_handler(
    State(state): State<AppState>,
    Json(req): Json<ThemeRequest>,
) -> Result<Json<ThemeResponse>> {
    let mut pref = state.theme.write().await;
    pref.set(req.theme)
        .map_err(|e| ApiError::Internal(format!("Failed to save theme: {}", e)))?;
    Ok(Json(ThemeResponse { theme: req.theme }))
}

/// Handler for POST /theme/toggle
pub async fn toggle_theme_handler(State(state): State<AppState>) -> Result<Json<ThemeResponse>> {
    let mut pref = state.theme.write().await;
    let theme = pref
        .toggle()
        .map_err(|e| ApiError::Internal(format!("Failed to save theme: {}", e)))?;
    Ok(Json(ThemeResponse { theme }))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
