//! 시계열 저장소.
//!
//! (자산 유형, 심볼) → 일봉 시계열의 인메모리 스냅샷입니다.
//! 서버 시작 시 카탈로그 전체에 대해 한 번 생성되며, 요청 수신이
//! 시작된 이후에는 읽기만 합니다. 쓰기가 없으므로 잠금 없이
//! 공유해도 안전합니다.

use std::collections::HashMap;

use chrono::NaiveDate;
use rand::Rng;
use tracing::debug;

use marketview_core::{AssetClass, Catalog, DailyBar};

use crate::generator::{generate_daily_series, GeneratorConfig};

/// 상품별 시계열 스냅샷.
#[derive(Debug, Clone, Default)]
pub struct SeriesStore {
    series: HashMap<(AssetClass, String), Vec<DailyBar>>,
}

impl SeriesStore {
    /// 빈 저장소를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 상품의 시계열을 저장합니다. 기존 항목은 교체됩니다.
    pub fn put(&mut self, class: AssetClass, symbol: impl Into<String>, series: Vec<DailyBar>) {
        self.series.insert((class, symbol.into()), series);
    }

    /// 상품의 시계열을 조회합니다.
    pub fn get(&self, class: AssetClass, symbol: &str) -> Option<&[DailyBar]> {
        self.series
            .get(&(class, symbol.to_string()))
            .map(Vec::as_slice)
    }

    /// 저장된 상품 개수.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// 저장소가 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// 카탈로그의 모든 상품에 대해 시계열을 생성합니다.
    ///
    /// 시작 루틴에서 리스너를 열기 전에 한 번 호출됩니다.
    pub fn generate<R: Rng>(
        catalog: &Catalog,
        rng: &mut R,
        today: NaiveDate,
        config: &GeneratorConfig,
    ) -> Self {
        let mut store = Self::new();

        for (class, symbol) in catalog.instruments() {
            let series = generate_daily_series(rng, today, config.lookback_days);
            debug!(asset_type = %class, asset = %symbol, bars = series.len(), "Series generated");
            store.put(class, symbol, series);
        }

        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    fn generated_store() -> SeriesStore {
        let mut rng = StdRng::seed_from_u64(99);
        SeriesStore::generate(
            &Catalog::default(),
            &mut rng,
            today(),
            &GeneratorConfig::default(),
        )
    }

    #[test]
    fn test_generate_covers_whole_catalog() {
        let catalog = Catalog::default();
        let store = generated_store();

        assert_eq!(store.len(), catalog.len());
        for (class, symbol) in catalog.instruments() {
            let series = store.get(class, symbol).unwrap();
            assert_eq!(series.len(), 30);
        }
    }

    #[test]
    fn test_get_unknown_instrument() {
        let store = generated_store();

        assert!(store.get(AssetClass::Equity, "TSLA").is_none());
        assert!(store.get(AssetClass::Crypto, "AAPL").is_none());
    }

    #[test]
    fn test_repeated_reads_are_identical() {
        let store = generated_store();

        let first = store.get(AssetClass::Equity, "AAPL").unwrap().to_vec();
        let second = store.get(AssetClass::Equity, "AAPL").unwrap().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_put_replaces_existing_series() {
        let mut store = generated_store();

        store.put(AssetClass::Equity, "AAPL", Vec::new());
        assert!(store.get(AssetClass::Equity, "AAPL").unwrap().is_empty());
        assert_eq!(store.len(), Catalog::default().len());
    }
}
