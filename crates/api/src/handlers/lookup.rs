use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use dnsdiff_domain::{DomainError, LookupResult};
use tracing::{error, instrument};

use crate::{dto::LookupQuery, errors::ApiError, state::AppState};

#[instrument(skip(state, query))]
pub async fn lookup(
    State(state): State<AppState>,
    query: Result<Query<LookupQuery>, QueryRejection>,
) -> Result<Json<LookupResult>, ApiError> {
    let Query(params) = query.map_err(|_| DomainError::InvalidRequestUrl)?;
    let (domain, record_type, nameserver) = params.into_parts()?;

    match state.lookup.execute(&domain, &record_type, &nameserver).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            if !e.is_validation() {
                error!(
                    domain = %domain,
                    record_type = %record_type,
                    nameserver = %nameserver,
                    error = %e,
                    "Lookup failed"
                );
            }
            Err(ApiError(e))
        }
    }
}
