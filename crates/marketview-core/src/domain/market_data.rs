//! 시장 데이터 타입 및 구조체.
//!
//! 이 모듈은 시장 데이터 관련 타입을 정의합니다:
//! - `DailyBar` - 일봉 OHLC 데이터
//! - `ForecastPoint` - 예측 시계열의 한 지점
//!
//! 가격 필드는 JSON 직렬화 시 문자열이 아닌 숫자로 내보냅니다.
//! 프론트엔드가 수치형 페이로드를 기대하기 때문입니다.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 일봉 OHLC 데이터.
///
/// 생성기가 고가/저가를 기준가의 고정 오프셋으로, 종가를 별도의 난수로
/// 독립적으로 산출하므로 `close > high` 또는 `close < low`인 봉이 존재할
/// 수 있습니다. 이는 유효한 데이터이며 소비자는 이를 허용해야 합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct DailyBar {
    /// 거래일 (YYYY-MM-DD)
    pub date: NaiveDate,
    /// 시가
    #[serde(with = "rust_decimal::serde::float")]
    #[cfg_attr(feature = "utoipa-support", schema(value_type = f64))]
    pub open: Decimal,
    /// 고가
    #[serde(with = "rust_decimal::serde::float")]
    #[cfg_attr(feature = "utoipa-support", schema(value_type = f64))]
    pub high: Decimal,
    /// 저가
    #[serde(with = "rust_decimal::serde::float")]
    #[cfg_attr(feature = "utoipa-support", schema(value_type = f64))]
    pub low: Decimal,
    /// 종가
    #[serde(with = "rust_decimal::serde::float")]
    #[cfg_attr(feature = "utoipa-support", schema(value_type = f64))]
    pub close: Decimal,
}

impl DailyBar {
    /// 새 일봉을 생성합니다.
    pub fn new(date: NaiveDate, open: Decimal, high: Decimal, low: Decimal, close: Decimal) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
        }
    }

    /// 봉 몸통 크기(절대값)를 반환합니다.
    pub fn body_size(&self) -> Decimal {
        (self.close - self.open).abs()
    }

    /// 봉 범위(고가 - 저가)를 반환합니다.
    pub fn range(&self) -> Decimal {
        self.high - self.low
    }

    /// 양봉(종가 > 시가)인지 확인합니다.
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// 음봉(종가 < 시가)인지 확인합니다.
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }
}

/// 예측 시계열의 한 지점.
///
/// 날짜는 항상 원본 시계열의 마지막 날짜 이후입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct ForecastPoint {
    /// 예측 대상 날짜 (YYYY-MM-DD)
    pub date: NaiveDate,
    /// 예측 값
    #[serde(with = "rust_decimal::serde::float")]
    #[cfg_attr(feature = "utoipa-support", schema(value_type = f64))]
    pub value: Decimal,
}
