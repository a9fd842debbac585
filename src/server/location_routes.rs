use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::content::selector::{quarterly_focus, weekly_tip};
use crate::content::{related_locations, DateContext, LocationContent};
use crate::helpers::time::Clock;
use crate::locations::LocationDataset;
use crate::server::server::AppState;
use crate::utils::constants::DEFAULT_RELATED_LIMIT;

/// Location copy endpoints. Dates come from the injected clock.
#[derive(Debug, Clone)]
pub struct LocationState {
    dataset: Arc<LocationDataset>,
    clock: Arc<dyn Clock>,
}

impl LocationState {
    pub fn new(dataset: Arc<LocationDataset>, clock: Arc<dyn Clock>) -> Self {
        Self { dataset, clock }
    }

    fn today(&self) -> DateContext {
        DateContext::now(self.clock.as_ref())
    }

    pub fn router(&self) -> Router<AppState> {
        Router::new()
            .route("/locations/{state}/{city}/content", get(location_content))
            .route("/locations/{state}/{city}/related", get(related))
            .route("/tips/weekly", get(weekly))
            .route("/tips/quarterly", get(quarterly))
    }
}

#[derive(Debug, Deserialize)]
struct RelatedQuery {
    limit: Option<usize>,
}

fn location_not_found(state_slug: &str, city_slug: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("location '{}/{}' not found", state_slug, city_slug) })),
    )
        .into_response()
}

async fn location_content(
    State(state): State<AppState>,
    Path((state_slug, city_slug)): Path<(String, String)>,
) -> Response {
    let locations = &state.location_state;
    match locations.dataset.locate(&state_slug, &city_slug) {
        Some((city, region)) => {
            Json(LocationContent::build(city, region, &locations.today())).into_response()
        }
        None => location_not_found(&state_slug, &city_slug),
    }
}

async fn related(
    State(state): State<AppState>,
    Path((state_slug, city_slug)): Path<(String, String)>,
    Query(query): Query<RelatedQuery>,
) -> Response {
    let dataset = &state.location_state.dataset;
    let Some(city) = dataset.city(&state_slug, &city_slug) else {
        return location_not_found(&state_slug, &city_slug);
    };
    let limit = query.limit.unwrap_or(DEFAULT_RELATED_LIMIT);
    Json(related_locations(city, dataset.cities(), limit)).into_response()
}

async fn weekly(State(state): State<AppState>) -> Response {
    Json(weekly_tip(&state.location_state.today())).into_response()
}

async fn quarterly(State(state): State<AppState>) -> Response {
    Json(quarterly_focus(&state.location_state.today())).into_response()
}
