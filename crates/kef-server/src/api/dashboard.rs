use axum::{extract::State, Extension, Json};
use kef_core::Opportunity;
use kef_discovery::{sort_opportunities, SortDirection, SortKey};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{map_store_error, ApiError, ApiResponse, AppState, ResponseMeta};

const RECENT_LIMIT: usize = 5;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct DashboardSummary {
    pub total_clients: usize,
    pub total_keywords: usize,
    pub total_opportunities: usize,
    pub recent_opportunities: Vec<Opportunity>,
}

pub(super) async fn summary(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<DashboardSummary>>, ApiError> {
    let clients = state
        .clients
        .list()
        .await
        .map_err(|e| map_store_error(req_id.0.clone(), &e))?;
    let opportunities = state
        .opportunities
        .list()
        .await
        .map_err(|e| map_store_error(req_id.0.clone(), &e))?;

    let total_keywords = clients.iter().map(|client| client.keywords.len()).sum();
    let total_opportunities = opportunities.len();
    let mut recent = sort_opportunities(
        opportunities,
        &clients,
        SortKey::DiscoveredAt,
        SortDirection::Desc,
    );
    recent.truncate(RECENT_LIMIT);

    Ok(Json(ApiResponse {
        data: DashboardSummary {
            total_clients: clients.len(),
            total_keywords,
            total_opportunities,
            recent_opportunities: recent,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}
