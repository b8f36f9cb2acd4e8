use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Extension, Json,
};
use chrono::Utc;
use kef_core::{Opportunity, Platform};
use kef_discovery::{
    export, filter_opportunities, sort_opportunities, OpportunityFilter, SortDirection, SortKey,
};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{map_store_error, ApiError, ApiResponse, AppState, ResponseMeta};

/// Filter and sort parameters for the opportunity table. Empty strings mean
/// "no constraint", matching the dashboard's filter dropdowns.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct OpportunityViewQuery {
    pub client_id: Option<String>,
    pub platform: Option<String>,
    pub keyword: Option<String>,
    pub visited: Option<bool>,
    pub sort: Option<String>,
    pub direction: Option<String>,
}

struct OpportunityView {
    filter: OpportunityFilter,
    sort: SortKey,
    direction: SortDirection,
}

fn parse_view(req_id: &str, query: OpportunityViewQuery) -> Result<OpportunityView, ApiError> {
    let non_empty = |value: Option<String>| value.filter(|s| !s.is_empty());

    let platform = non_empty(query.platform)
        .map(|raw| {
            raw.parse::<Platform>().map_err(|e| {
                ApiError::new(req_id.to_string(), "bad_request", e.to_string())
            })
        })
        .transpose()?;

    let sort = non_empty(query.sort)
        .map(|raw| {
            raw.parse::<SortKey>()
                .map_err(|e| ApiError::new(req_id.to_string(), "bad_request", e.to_string()))
        })
        .transpose()?
        .unwrap_or_default();

    let direction = non_empty(query.direction)
        .map(|raw| {
            raw.parse::<SortDirection>()
                .map_err(|e| ApiError::new(req_id.to_string(), "bad_request", e.to_string()))
        })
        .transpose()?
        .unwrap_or_default();

    Ok(OpportunityView {
        filter: OpportunityFilter {
            client_id: non_empty(query.client_id),
            platform,
            keyword: non_empty(query.keyword),
            visited: query.visited,
        },
        sort,
        direction,
    })
}

async fn filtered_view(
    state: &AppState,
    req_id: &str,
    query: OpportunityViewQuery,
) -> Result<(Vec<Opportunity>, Vec<kef_core::Client>), ApiError> {
    let view = parse_view(req_id, query)?;

    let opportunities = state
        .opportunities
        .list()
        .await
        .map_err(|e| map_store_error(req_id.to_string(), &e))?;
    let clients = state
        .clients
        .list()
        .await
        .map_err(|e| map_store_error(req_id.to_string(), &e))?;

    let filtered = filter_opportunities(opportunities, &view.filter);
    let sorted = sort_opportunities(filtered, &clients, view.sort, view.direction);
    Ok((sorted, clients))
}

pub(super) async fn list_opportunities(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<OpportunityViewQuery>,
) -> Result<Json<ApiResponse<Vec<Opportunity>>>, ApiError> {
    let (sorted, _) = filtered_view(&state, &req_id.0, query).await?;

    Ok(Json(ApiResponse {
        data: sorted,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// Run the collector over every stored client and replace the stored set.
///
/// The previous set is only overwritten once collection has completed, so a
/// failed run leaves prior results untouched.
pub(super) async fn run_search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<Vec<Opportunity>>>, ApiError> {
    let clients = state
        .clients
        .list()
        .await
        .map_err(|e| map_store_error(req_id.0.clone(), &e))?;

    let collected = state.collector.collect(&clients).await;

    state
        .opportunities
        .replace_all(&collected)
        .await
        .map_err(|e| map_store_error(req_id.0.clone(), &e))?;

    tracing::info!(count = collected.len(), "search run replaced opportunity set");

    Ok(Json(ApiResponse {
        data: collected,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn mark_visited(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(opportunity_id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state
        .opportunities
        .set_visited(&opportunity_id)
        .await
        .map_err(|e| map_store_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: (),
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn export_csv(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<OpportunityViewQuery>,
) -> Result<Response, ApiError> {
    let (sorted, clients) = filtered_view(&state, &req_id.0, query).await?;
    let csv = export::to_csv(&sorted, &clients);

    let filename = format!("keyword-opportunities-{}.csv", Utc::now().format("%Y-%m-%d"));
    let headers = [
        (header::CONTENT_TYPE, "text/csv".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];

    Ok((headers, csv).into_response())
}
