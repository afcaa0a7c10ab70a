//! OpenAPI 문서화 설정.
//!
//! utoipa를 사용하여 REST API의 OpenAPI 3.0 스펙을 생성합니다.
//! Swagger UI는 `/swagger-ui` 경로에서 사용 가능합니다.
//!
//! 새로운 엔드포인트를 추가할 때:
//!
//! 1. 응답/요청 타입에 `#[derive(ToSchema)]` 추가
//! 2. 핸들러에 `#[utoipa::path(...)]` 어노테이션 추가
//! 3. 이 파일의 `components(schemas(...))` 및 `paths(...)` 섹션에 추가

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use marketview_core::{AssetClass, DailyBar, ForecastPoint};

use crate::error::ErrorResponse;
use crate::routes::{AssetGroup, ComponentHealth, ComponentStatus, HealthResponse};

/// Marketview API 문서.
///
/// 모든 엔드포인트와 스키마를 포함하는 OpenAPI 3.0 스펙입니다.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Marketview API",
        version = "0.1.0",
        description = r#"
# Marketview 시장 데이터 REST API

상품별 과거 일봉 시계열과 단기 예측 시계열을 제공하는 조회 전용 API입니다.

## 주요 기능

- **시계열 조회**: 상품별 30일 일봉 OHLC 데이터
- **예측 조회**: 마지막 종가 기반 7일 예측 시계열
- **카탈로그**: 제공 가능한 자산 유형/심볼 목록

데이터는 서버 시작 시 합성 생성되는 스냅샷이며, 프로세스가 살아 있는
동안 변하지 않습니다.
"#,
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "로컬 개발 서버"),
    ),
    tags(
        (name = "health", description = "헬스 체크 - 서버 상태 확인"),
        (name = "series", description = "시계열 - 과거 일봉 OHLC 조회"),
        (name = "forecast", description = "예측 - 단기 예측 시계열 조회"),
        (name = "assets", description = "카탈로그 - 자산 유형/심볼 목록")
    ),
    paths(
        crate::routes::series::get_data,
        crate::routes::forecast::get_forecast,
        crate::routes::assets::list_assets,
    ),
    components(
        schemas(
            // ===== Core =====
            AssetClass,
            DailyBar,
            ForecastPoint,

            // ===== Common =====
            ErrorResponse,

            // ===== Assets =====
            AssetGroup,

            // ===== Health =====
            HealthResponse,
            ComponentHealth,
            ComponentStatus,
        )
    )
)]
pub struct ApiDoc;

/// Swagger UI 라우터 생성.
///
/// 다음 경로에 문서 UI를 마운트합니다:
/// - `/swagger-ui` - Swagger UI 대화형 문서
/// - `/api-docs/openapi.json` - OpenAPI JSON 스펙
pub fn swagger_ui_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}
