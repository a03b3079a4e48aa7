//! JSON API over the catalog, sharing the page's filter parameters.

use axum::{
    extract::{Path, RawQuery, State},
    Json,
};
use serde::Serialize;
use techroad_catalog::{filter, params::parse_query, FilterState, TechnologyRecord};

use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct AppliedFilters {
    pub q: String,
    pub category: &'static str,
    pub level: &'static str,
    pub sort: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TechnologiesResponse {
    pub filters: AppliedFilters,
    /// Minimal query string for these filters, without the leading `?`
    pub canonical_query: String,
    pub total: usize,
    pub count: usize,
    pub results: Vec<TechnologyRecord>,
}

/// GET /api/technologies - Filtered, sorted catalog
pub async fn api_technologies(
    State(state): State<SharedState>,
    RawQuery(raw): RawQuery,
) -> Json<TechnologiesResponse> {
    let pairs = parse_query(raw.as_deref().unwrap_or_default());
    let current = FilterState::from_query_pairs(&pairs);
    let records = state.catalog.records();
    let results: Vec<TechnologyRecord> = filter::apply(records, &current)
        .into_iter()
        .cloned()
        .collect();

    let response = TechnologiesResponse {
        filters: AppliedFilters {
            q: current.query.clone(),
            category: current.category.id(),
            level: current.level.id(),
            sort: current.sort.id(),
        },
        canonical_query: current.to_query_string(&pairs),
        total: records.len(),
        count: results.len(),
        results,
    };
    Json(response)
}

/// GET /api/technologies/{id} - Single record
pub async fn api_technology_detail(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<TechnologyRecord>, ApiError> {
    id.parse::<u32>()
        .ok()
        .and_then(|id| state.catalog.find(id))
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("No technology with id {}", id)))
}
