//! API 라우트.
//!
//! 모든 REST API 엔드포인트를 정의하고 라우터를 구성합니다.
//!
//! # 라우트 구조
//!
//! - `/health` - 헬스 체크 (liveness)
//! - `/health/ready` - 상세 헬스 체크 (readiness)
//! - `/get_data` - 과거 일봉 시계열 조회
//! - `/get_forecast` - 단기 예측 조회
//! - `/assets` - 카탈로그 목록
//!
//! `/get_data`와 `/get_forecast`는 기존 클라이언트가 사용하는 경로
//! 그대로이며 버전 접두사를 붙이지 않습니다.

pub mod assets;
pub mod forecast;
pub mod health;
pub mod series;

pub use assets::{assets_router, AssetGroup};
pub use forecast::{forecast_router, get_forecast};
pub use health::{health_router, ComponentHealth, ComponentStatus, HealthResponse};
pub use series::{get_data, series_router, InstrumentQuery};

use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

/// 전체 API 라우터 생성.
///
/// 모든 서브 라우터를 조합하여 하나의 라우터로 반환합니다.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        // 헬스 체크 엔드포인트
        .nest("/health", health_router())
        // 레거시 호환 엔드포인트 (접두사 없음)
        .merge(series_router())
        .merge(forecast_router())
        // 카탈로그 목록
        .nest("/assets", assets_router())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::state::create_test_state;

    #[tokio::test]
    async fn test_api_router_serves_all_routes() {
        let app = create_api_router().with_state(Arc::new(create_test_state()));

        for uri in [
            "/health",
            "/health/ready",
            "/get_data?asset_type=Equity&asset=MSFT",
            "/get_forecast?asset_type=Crypto&asset=ETH-USD",
            "/assets",
        ] {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK, "uri: {uri}");
        }
    }
}
