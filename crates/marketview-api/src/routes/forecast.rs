//! 단기 예측 조회 endpoint.
//!
//! `GET /get_forecast?asset_type=<유형>&asset=<심볼>`
//!
//! 저장된 시계열의 마지막 종가를 기준으로 7일치 예측 값을
//! 반환합니다. 예측은 저장되지 않으며 호출할 때마다 새로
//! 추출됩니다.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::debug;

use marketview_core::ForecastPoint;
use marketview_data::forecast_from_close;

use crate::error::{ApiError, ErrorResponse};
use crate::routes::series::InstrumentQuery;
use crate::state::AppState;

/// 단기 예측 조회.
///
/// GET /get_forecast
///
/// 검증 순서는 시계열 조회와 동일합니다: 파라미터 누락 검사,
/// 카탈로그 조회, 그 다음에야 계산이 수행됩니다.
#[utoipa::path(
    get,
    path = "/get_forecast",
    params(InstrumentQuery),
    responses(
        (status = 200, description = "예측 시계열 (날짜 오름차순)", body = [ForecastPoint]),
        (status = 400, description = "파라미터 누락", body = ErrorResponse),
        (status = 404, description = "등록되지 않은 상품", body = ErrorResponse),
        (status = 500, description = "저장된 시계열이 비어 있음", body = ErrorResponse)
    ),
    tag = "forecast"
)]
pub async fn get_forecast(
    State(state): State<Arc<AppState>>,
    Query(query): Query<InstrumentQuery>,
) -> Result<Json<Vec<ForecastPoint>>, ApiError> {
    let (class, asset) = query.resolve(&state)?;

    let series = state
        .store
        .get(class, asset)
        .ok_or_else(|| ApiError::UnknownInstrument {
            asset_type: class.to_string(),
            asset: asset.to_string(),
        })?;

    // 빈 시계열은 시작 시 생성이 끝났다면 나올 수 없지만,
    // 신뢰하는 대신 검사한다
    let last = series.last().ok_or_else(|| ApiError::EmptySeries {
        asset: asset.to_string(),
    })?;

    let today = Utc::now().date_naive();
    let mut rng = rand::thread_rng();
    let forecast = forecast_from_close(&mut rng, today, last.close, state.config.forecast_days);

    debug!(
        asset_type = %class,
        asset = %asset,
        last_close = %last.close,
        days = forecast.len(),
        "Forecast served"
    );

    Ok(Json(forecast))
}

/// 예측 라우터 생성.
pub fn forecast_router() -> Router<Arc<AppState>> {
    Router::new().route("/get_forecast", get(get_forecast))
}
