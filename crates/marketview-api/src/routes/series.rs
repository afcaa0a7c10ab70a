//! 과거 시계열 조회 endpoint.
//!
//! `GET /get_data?asset_type=<유형>&asset=<심볼>`
//!
//! 저장된 일봉 시계열 전체를 날짜 오름차순으로 반환합니다.
//! 서버는 날짜 범위 필터링을 하지 않습니다. 그래픽 클라이언트가
//! 시작/종료 날짜를 수집하더라도 잘라내기는 클라이언트 몫입니다.
//! 이 좁은 계약은 레거시 호환을 위해 의도적으로 유지됩니다.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;
use utoipa::IntoParams;

use marketview_core::{AssetClass, DailyBar};

use crate::error::{ApiError, ErrorResponse};
use crate::state::AppState;

/// 상품 조회 쿼리 파라미터.
///
/// 두 파라미터 모두 필수입니다. Option은 누락을 빈 문자열과 같은
/// 방식으로 처리하기 위한 것으로, 둘 다 `MissingParameter`가 됩니다.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct InstrumentQuery {
    /// 자산 유형 (Equity | Crypto | FX)
    pub asset_type: Option<String>,
    /// 자산 심볼 (예: AAPL, BTC-USD)
    pub asset: Option<String>,
}

impl InstrumentQuery {
    /// 파라미터를 카탈로그에 등록된 상품으로 해석합니다.
    ///
    /// 누락/빈 값 검사가 카탈로그 조회보다 항상 먼저 수행됩니다.
    /// 파싱되지 않는 자산 유형은 미등록 상품과 동일하게 취급합니다.
    pub(crate) fn resolve(&self, state: &AppState) -> Result<(AssetClass, &str), ApiError> {
        let (asset_type, asset) = match (self.asset_type.as_deref(), self.asset.as_deref()) {
            (Some(t), Some(a)) if !t.is_empty() && !a.is_empty() => (t, a),
            _ => return Err(ApiError::MissingParameter),
        };

        let unknown = || ApiError::UnknownInstrument {
            asset_type: asset_type.to_string(),
            asset: asset.to_string(),
        };

        let class: AssetClass = asset_type.parse().map_err(|_| unknown())?;
        if !state.catalog.contains(class, asset) {
            return Err(unknown());
        }

        Ok((class, asset))
    }
}

/// 과거 일봉 시계열 조회.
///
/// GET /get_data
#[utoipa::path(
    get,
    path = "/get_data",
    params(InstrumentQuery),
    responses(
        (status = 200, description = "일봉 시계열 (날짜 오름차순)", body = [DailyBar]),
        (status = 400, description = "파라미터 누락", body = ErrorResponse),
        (status = 404, description = "등록되지 않은 상품", body = ErrorResponse)
    ),
    tag = "series"
)]
pub async fn get_data(
    State(state): State<Arc<AppState>>,
    Query(query): Query<InstrumentQuery>,
) -> Result<Json<Vec<DailyBar>>, ApiError> {
    let (class, asset) = query.resolve(&state)?;

    let series = state
        .store
        .get(class, asset)
        .ok_or_else(|| ApiError::UnknownInstrument {
            asset_type: class.to_string(),
            asset: asset.to_string(),
        })?;

    debug!(asset_type = %class, asset = %asset, bars = series.len(), "Series served");

    Ok(Json(series.to_vec()))
}

/// 시계열 라우터 생성.
pub fn series_router() -> Router<Arc<AppState>> {
    Router::new().route("/get_data", get(get_data))
}
