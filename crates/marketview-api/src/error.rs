//! 통합 API 에러 응답 타입.
//!
//! 모든 엔드포인트에서 일관된 에러 형식을 제공합니다.
//! 본문은 레거시 클라이언트와의 호환을 위해 `{"error": "<메시지>"}`
//! 형태를 유지합니다. `error` 필드명은 와이어 계약의 일부입니다.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// 요청 처리 실패.
///
/// 어느 변형도 프로세스를 종료시키지 않습니다. 에러는 응답으로
/// 보고되고 서비스는 다음 요청을 계속 처리합니다.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 필수 쿼리 파라미터가 없거나 비어 있음
    #[error("자산 유형 또는 자산이 지정되지 않았습니다")]
    MissingParameter,

    /// 카탈로그에 등록되지 않은 상품
    #[error("자산을 찾을 수 없습니다: {asset_type}/{asset}")]
    UnknownInstrument {
        /// 요청된 자산 유형
        asset_type: String,
        /// 요청된 심볼
        asset: String,
    },

    /// 저장된 시계열이 비어 있음 (시작 시 생성이 수행됐다면 발생하지 않음)
    #[error("저장된 시계열이 비어 있습니다: {asset}")]
    EmptySeries {
        /// 대상 심볼
        asset: String,
    },
}

impl ApiError {
    /// 에러에 대응하는 HTTP 상태 코드.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter => StatusCode::BAD_REQUEST,
            ApiError::UnknownInstrument { .. } => StatusCode::NOT_FOUND,
            ApiError::EmptySeries { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// 에러 응답 본문.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// 사람이 읽을 수 있는 에러 메시지
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::MissingParameter.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::UnknownInstrument {
                asset_type: "Bonds".to_string(),
                asset: "XS123".to_string(),
            }
            .status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::EmptySeries {
                asset: "AAPL".to_string(),
            }
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_body_shape() {
        let error = ApiError::UnknownInstrument {
            asset_type: "Bonds".to_string(),
            asset: "XS123".to_string(),
        };
        let body = serde_json::to_value(ErrorResponse {
            error: error.to_string(),
        })
        .unwrap();

        assert!(body["error"].as_str().unwrap().contains("Bonds/XS123"));
        assert_eq!(body.as_object().unwrap().len(), 1);
    }
}
