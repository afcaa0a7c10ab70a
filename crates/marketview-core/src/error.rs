//! 시장 데이터 서비스의 에러 타입.

use thiserror::Error;

/// 핵심 도메인 에러.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// 알 수 없는 자산 유형 문자열
    #[error("알 수 없는 자산 유형: {0}")]
    UnknownAssetClass(String),

    /// 알 수 없는 로그 형식 문자열
    #[error("알 수 없는 로그 형식: {0}")]
    UnknownLogFormat(String),

    /// 잘못된 로그 필터 표현식
    #[error("잘못된 로그 필터: {0}")]
    InvalidLogFilter(String),

    /// 로깅 초기화 실패 (중복 초기화 등)
    #[error("로깅 초기화 실패: {0}")]
    LoggingInit(String),
}

/// 핵심 작업을 위한 Result 타입.
pub type CoreResult<T> = Result<T, CoreError>;
