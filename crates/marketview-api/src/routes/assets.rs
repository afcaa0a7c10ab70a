//! 카탈로그 조회 endpoint.
//!
//! `GET /assets`
//!
//! 등록된 자산 유형과 심볼 목록을 등록 순서대로 반환합니다.
//! 프론트엔드는 이 목록으로 선택 위젯을 채울 수 있으므로 심볼
//! 목록을 하드코딩할 필요가 없습니다.

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use marketview_core::AssetClass;

use crate::state::AppState;

/// 자산 유형 하나와 그 심볼 목록.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssetGroup {
    /// 자산 유형
    pub asset_type: AssetClass,
    /// 심볼 목록 (등록 순서)
    pub assets: Vec<String>,
}

/// 카탈로그 목록 조회.
///
/// GET /assets
#[utoipa::path(
    get,
    path = "/assets",
    responses(
        (status = 200, description = "자산 유형별 심볼 목록", body = [AssetGroup])
    ),
    tag = "assets"
)]
pub async fn list_assets(State(state): State<Arc<AppState>>) -> Json<Vec<AssetGroup>> {
    let groups = state
        .catalog
        .categories()
        .into_iter()
        .map(|class| AssetGroup {
            asset_type: class,
            assets: state.catalog.symbols(class).to_vec(),
        })
        .collect();

    Json(groups)
}

/// 카탈로그 라우터 생성.
pub fn assets_router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(list_assets))
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
    async fn test_list_assets_matches_catalog_order() {
        let app = Router::new()
            .nest("/assets", assets_router())
            .with_state(Arc::new(create_test_state()));

        let response = app
            .oneshot(Request::builder().uri("/assets").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let groups: Vec<AssetGroup> = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].asset_type, AssetClass::Equity);
        assert_eq!(groups[0].assets, ["AAPL", "GOOGL", "MSFT"]);
        assert_eq!(groups[2].asset_type, AssetClass::Fx);

        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value[2]["asset_type"], "FX");
    }
}
