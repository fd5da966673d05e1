//! # API REST
//!
//! HTTP surface of the vet clinic site.
//!
//! Handles:
//! - the landing page and clinic panel / doctor details fragments (HTML)
//! - catalog endpoints (JSON) with OpenAPI/Swagger documentation
//! - the scroll navigator script
//!
//! Rendering lives in `vet-core`; this crate only maps requests onto it.

#![warn(rust_2018_idioms)]

use axum::{
    extract::{Path as AxumPath, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{HealthRes, HealthService, ListClinicsRes, ListDoctorsRes};
use vet_core::{
    assets::{SCROLL_JS, SCROLL_JS_PATH},
    config::{resolve_components_dir, site_title_from_env_value},
    render_page, Catalog, CoreConfig, DoctorRef, FsFragmentSource, PanelRenderer,
    SelectionState,
};

/// Application state shared across request handlers.
///
/// Holds read-only data only; each request builds its own page and selection state.
#[derive(Clone)]
pub struct AppState {
    cfg: Arc<CoreConfig>,
    catalog: Arc<Catalog>,
    fragments: FsFragmentSource,
}

impl AppState {
    pub fn new(cfg: Arc<CoreConfig>, catalog: Arc<Catalog>) -> Self {
        let fragments = FsFragmentSource::new(cfg.components_dir());
        Self {
            cfg,
            catalog,
            fragments,
        }
    }

    /// Resolves configuration from the environment and loads the catalog.
    ///
    /// # Environment Variables
    /// - `VET_COMPONENTS_DIR`: directory holding `header.html` / `footer.html`
    /// - `VET_CATALOG_PATH`: catalog YAML replacing the embedded one
    /// - `VET_SITE_TITLE`: page title
    ///
    /// # Errors
    /// Returns an error if the components override is not a directory or the catalog cannot
    /// be loaded.
    pub fn from_env() -> anyhow::Result<Self> {
        let components_override = std::env::var("VET_COMPONENTS_DIR").ok().map(PathBuf::from);
        let components_dir = resolve_components_dir(components_override)?;
        let catalog_path = std::env::var("VET_CATALOG_PATH").ok().map(PathBuf::from);
        let site_title = site_title_from_env_value(std::env::var("VET_SITE_TITLE").ok());

        let cfg = CoreConfig::new(components_dir, catalog_path, site_title)?;
        let catalog = Catalog::load(cfg.catalog_path())?;

        tracing::info!(
            "-- Catalog ready: {} clinics, components from {}",
            catalog.clinic_ids().len(),
            cfg.components_dir().display()
        );

        Ok(Self::new(Arc::new(cfg), Arc::new(catalog)))
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        index,
        clinic_panel,
        doctor_details,
        list_clinics,
        list_doctors,
    ),
    components(schemas(
        api_shared::HealthRes,
        api_shared::ClinicSummary,
        api_shared::ListClinicsRes,
        api_shared::Doctor,
        api_shared::ListDoctorsRes,
    ))
)]
struct ApiDoc;

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/clinics/:id/panel", get(clinic_panel))
        .route("/clinics/:id/doctors/:index", get(doctor_details))
        .route("/api/clinics", get(list_clinics))
        .route("/api/clinics/:id/doctors", get(list_doctors))
        .route(SCROLL_JS_PATH, get(scroll_script))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    clinic: Option<String>,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint used for monitoring and load balancer checks.
#[axum::debug_handler]
async fn health(State(state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health(state.catalog.clinic_ids().len()))
}

#[utoipa::path(
    get,
    path = "/",
    params(("clinic" = Option<String>, Query, description = "Clinic shown initially")),
    responses(
        (status = 200, description = "Landing page", content_type = "text/html", body = String)
    )
)]
/// Landing page.
///
/// Shows the first clinic unless `?clinic=` names another one. An unknown clinic still
/// yields the page, with the not-found placeholder in the clinic panel.
#[axum::debug_handler]
async fn index(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Html<String> {
    let initial = query.clinic.as_deref().filter(|c| !c.is_empty());
    Html(render_page(&state.catalog, &state.cfg, &state.fragments, initial).await)
}

#[utoipa::path(
    get,
    path = "/clinics/{id}/panel",
    params(("id" = String, Path, description = "Clinic identifier")),
    responses(
        (status = 200, description = "Clinic panel fragment (placeholder for unknown clinics)", content_type = "text/html", body = String)
    )
)]
/// Clinic panel fragment: heading plus card strip.
#[axum::debug_handler]
async fn clinic_panel(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Html<String> {
    let mut selection = SelectionState::new();
    let render = PanelRenderer::new(&state.catalog).render(&id, &mut selection);
    Html(render.fragment())
}

#[utoipa::path(
    get,
    path = "/clinics/{id}/doctors/{index}",
    params(
        ("id" = String, Path, description = "Clinic identifier"),
        ("index" = usize, Path, description = "Doctor position in the clinic list")
    ),
    responses(
        (status = 200, description = "Doctor details fragment", content_type = "text/html", body = String),
        (status = 404, description = "No such doctor")
    )
)]
/// Doctor details fragment for a card's details trigger.
#[axum::debug_handler]
async fn doctor_details(
    State(state): State<AppState>,
    AxumPath((id, index)): AxumPath<(String, usize)>,
) -> Result<Html<String>, (StatusCode, &'static str)> {
    let trigger = DoctorRef::new(id, index);
    match PanelRenderer::new(&state.catalog).details(&trigger) {
        Some(markup) => Ok(Html(markup)),
        None => {
            tracing::debug!("doctor not found: {:?}", trigger);
            Err((StatusCode::NOT_FOUND, "Doctor not found"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/clinics",
    responses(
        (status = 200, description = "Clinics in selector order", body = ListClinicsRes)
    )
)]
/// Lists clinics with their labels and doctor counts.
#[axum::debug_handler]
async fn list_clinics(State(state): State<AppState>) -> Json<ListClinicsRes> {
    Json(ListClinicsRes::from_catalog(&state.catalog))
}

#[utoipa::path(
    get,
    path = "/api/clinics/{id}/doctors",
    params(("id" = String, Path, description = "Clinic identifier")),
    responses(
        (status = 200, description = "Doctors in display order", body = ListDoctorsRes),
        (status = 404, description = "Unknown clinic")
    )
)]
/// Lists a clinic's doctors in display order.
#[axum::debug_handler]
async fn list_doctors(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<ListDoctorsRes>, (StatusCode, &'static str)> {
    ListDoctorsRes::from_catalog(&state.catalog, &id)
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Clinic not found"))
}

async fn scroll_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        SCROLL_JS,
    )
}
