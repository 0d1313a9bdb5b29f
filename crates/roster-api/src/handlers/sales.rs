//! Rank sale handler

use axum::{extract::State, Json};
use roster_service::{CreateSaleRequest, SaleResponse, SaleService};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Sell a rank, creating the buyer if needed
///
/// POST /sales
pub async fn create_sale(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateSaleRequest>,
) -> ApiResult<Json<SaleResponse>> {
    let service = SaleService::new(state.service_context());
    let response = service.sell(request).await?;
    Ok(Json(response))
}
