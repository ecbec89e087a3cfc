use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use dnsdiff_domain::dns_record::SELECTABLE_RECORD_TYPES;
use dnsdiff_domain::{DomainError, NameserverPreset};
use tracing::{debug, instrument};

use crate::{dto::NameserversQuery, errors::ApiError, state::AppState};

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn get_record_types() -> Json<&'static [&'static str]> {
    Json(SELECTABLE_RECORD_TYPES)
}

#[instrument(skip(state, query))]
pub async fn get_nameservers(
    State(state): State<AppState>,
    query: Result<Query<NameserversQuery>, QueryRejection>,
) -> Result<Json<Vec<NameserverPreset>>, ApiError> {
    let Query(params) = query.map_err(|_| DomainError::InvalidRequestUrl)?;

    let presets = state.nameservers.execute(params.resolve).await;
    debug!(count = presets.len(), resolve = params.resolve, "Nameserver presets listed");

    Ok(Json(presets))
}
