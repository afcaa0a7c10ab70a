//! 합성 일봉 시계열 생성기.
//!
//! 상품 하나에 대해 고정 길이의 일봉 시계열을 생성합니다.
//! 각 날짜의 필드는 독립적으로 추출됩니다. 연속된 날짜의 종가/시가
//! 사이에 연속성이 없는 의도적인 합성 노이즈이며, 가격 워크 모델이
//! 아닙니다.

use chrono::{Duration, NaiveDate};
use rand::Rng;
use rust_decimal::Decimal;

use marketview_core::DailyBar;

/// 시계열 생성 설정.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorConfig {
    /// 과거 시계열 길이 (일)
    pub lookback_days: u32,
    /// 예측 시계열 길이 (일)
    pub forecast_days: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            lookback_days: 30,
            forecast_days: 7,
        }
    }
}

/// 하루치 기준가에서 봉 하나를 산출할 때 쓰는 오프셋.
const HIGH_FACTOR: f64 = 1.05;
const LOW_FACTOR: f64 = 0.95;
const CLOSE_JITTER: f64 = 0.03;

/// 기준가 추출 구간.
const BASE_RANGE: std::ops::RangeInclusive<f64> = 50.0..=200.0;

/// 상품 하나의 일봉 시계열을 생성합니다.
///
/// `today - lookback_days`부터 `today - 1`까지 하루에 한 건,
/// 날짜 오름차순으로 `lookback_days`건을 반환합니다.
///
/// 고가/저가는 기준가의 고정 오프셋으로, 종가는 별도의 난수로
/// 산출하므로 종가가 고가/저가 범위를 벗어나는 봉이 나올 수 있습니다.
/// 원 서비스의 동작을 그대로 유지한 것이므로 보정하지 않습니다.
pub fn generate_daily_series<R: Rng>(
    rng: &mut R,
    today: NaiveDate,
    lookback_days: u32,
) -> Vec<DailyBar> {
    (0..lookback_days)
        .map(|i| {
            let date = today - Duration::days(i64::from(lookback_days - i));
            let base = rng.gen_range(BASE_RANGE);
            let close_drift = rng.gen_range(-CLOSE_JITTER..=CLOSE_JITTER);

            DailyBar::new(
                date,
                round2(base),
                round2(base * HIGH_FACTOR),
                round2(base * LOW_FACTOR),
                round2(base * (1.0 + close_drift)),
            )
        })
        .collect()
}

/// f64 가격을 소수점 2자리 Decimal로 변환합니다.
///
/// 생성 경로의 입력은 유한한 값뿐이므로 변환 실패는 발생하지 않습니다.
fn round2(value: f64) -> Decimal {
    Decimal::try_from(value).unwrap_or_default().round_dp(2)
}
