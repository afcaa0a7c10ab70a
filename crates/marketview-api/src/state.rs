//! 모든 핸들러에서 공유되는 애플리케이션 상태.
//!
//! AppState는 시작 시 한 번 구성되어 Arc로 래핑된 채 모든 요청에
//! 공유됩니다. 저장소는 리스너가 열리기 전에 생성이 끝나고 이후
//! 변경되지 않으므로, 동시 요청 처리에 잠금이 필요 없습니다.

use chrono::{DateTime, Utc};

use marketview_core::Catalog;
use marketview_data::{GeneratorConfig, SeriesStore};

/// 애플리케이션 공유 상태.
///
/// Axum의 State extractor를 통해 핸들러에 주입됩니다.
#[derive(Debug, Clone)]
pub struct AppState {
    /// 상품 카탈로그 - 요청 파라미터 검증의 기준
    pub catalog: Catalog,

    /// 시계열 스냅샷 - 시작 시 생성되고 이후 읽기 전용
    pub store: SeriesStore,

    /// 생성/예측 길이 설정
    pub config: GeneratorConfig,

    /// 서버 시작 시간 (업타임 계산용)
    pub started_at: DateTime<Utc>,

    /// API 버전
    pub version: String,
}

impl AppState {
    /// 새로운 AppState 생성.
    pub fn new(catalog: Catalog, store: SeriesStore, config: GeneratorConfig) -> Self {
        Self {
            catalog,
            store,
            config,
            started_at: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// 서버 업타임(초).
    pub fn uptime_secs(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}

/// 테스트용 AppState 생성.
///
/// 시드된 RNG로 저장소를 생성하므로 같은 날짜에 대해 항상 동일한
/// 시계열을 담고 있습니다.
pub fn create_test_state() -> AppState {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let catalog = Catalog::default();
    let config = GeneratorConfig::default();
    let mut rng = StdRng::seed_from_u64(42);
    let today = Utc::now().date_naive();
    let store = SeriesStore::generate(&catalog, &mut rng, today, &config);

    AppState::new(catalog, store, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use marketview_core::AssetClass;

    #[test]
    fn test_test_state_is_fully_populated() {
        let state = create_test_state();

        assert_eq!(state.store.len(), state.catalog.len());
        assert!(!state.version.is_empty());
        assert!(state.uptime_secs() >= 0);
        assert!(state.store.get(AssetClass::Fx, "EUR-USD").is_some());
    }
}
