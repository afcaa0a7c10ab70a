//! 단기 예측 시계열 산출.
//!
//! 마지막 종가 주변의 제한된 난수 섭동으로 예측 값을 만듭니다.
//! 예측일 사이에 추세 연속성이 없는 비상관 노이즈이며, 통계적으로
//! 의미 있는 모델이 아닙니다. 원 서비스의 동작을 그대로 따릅니다.

use chrono::{Duration, NaiveDate};
use rand::Rng;
use rust_decimal::Decimal;

use marketview_core::ForecastPoint;

/// 예측 값의 섭동 폭 (±10%).
const FORECAST_JITTER: f64 = 0.10;

/// 마지막 종가에서 예측 시계열을 산출합니다.
///
/// `today + 1`부터 `today + horizon_days`까지 하루에 한 건,
/// 날짜 오름차순으로 반환합니다. 각 값은
/// `round(last_close * (1 + u), 2)`, `u ~ U[-0.10, 0.10]`이며
/// 날짜별로 독립적으로 추출됩니다.
pub fn forecast_from_close<R: Rng>(
    rng: &mut R,
    today: NaiveDate,
    last_close: Decimal,
    horizon_days: u32,
) -> Vec<ForecastPoint> {
    (1..=horizon_days)
        .map(|day| {
            let jitter = rng.gen_range(-FORECAST_JITTER..=FORECAST_JITTER);
            // 유한한 f64이므로 변환은 실패하지 않는다
            let factor = Decimal::try_from(1.0 + jitter).unwrap_or(Decimal::ONE);

            ForecastPoint {
                date: today + Duration::days(i64::from(day)),
                value: (last_close * factor).round_dp(2),
            }
        })
        .collect()
}
