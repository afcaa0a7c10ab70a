//! 자산 유형 정의.
//!
//! 이 모듈은 서비스가 제공하는 자산 유형을 정의합니다.
//! 자산 유형은 닫힌 집합이며, 요청 파라미터의 문자열과 정확히
//! 일치해야 파싱됩니다 (`"Equity"`, `"Crypto"`, `"FX"`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// 자산 유형 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub enum AssetClass {
    /// 주식
    Equity,
    /// 암호화폐
    Crypto,
    /// 외환
    #[serde(rename = "FX")]
    Fx,
}

impl AssetClass {
    /// 요청 파라미터에 쓰이는 정규 이름을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetClass::Equity => "Equity",
            AssetClass::Crypto => "Crypto",
            AssetClass::Fx => "FX",
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetClass {
    type Err = CoreError;

    /// 대소문자를 구분하는 정확한 일치만 허용합니다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Equity" => Ok(AssetClass::Equity),
            "Crypto" => Ok(AssetClass::Crypto),
            "FX" => Ok(AssetClass::Fx),
            _ => Err(CoreError::UnknownAssetClass(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_class_round_trip() {
        for class in [AssetClass::Equity, AssetClass::Crypto, AssetClass::Fx] {
            let parsed: AssetClass = class.as_str().parse().unwrap();
            assert_eq!(parsed, class);
        }
    }

    #[test]
    fn test_asset_class_rejects_unknown() {
        assert!("Bonds".parse::<AssetClass>().is_err());
        assert!("equity".parse::<AssetClass>().is_err());
        assert!("".parse::<AssetClass>().is_err());
        assert!("Крипто-неверный".parse::<AssetClass>().is_err());
    }

    #[test]
    fn test_asset_class_serde_names() {
        assert_eq!(serde_json::to_string(&AssetClass::Fx).unwrap(), "\"FX\"");
        assert_eq!(
            serde_json::from_str::<AssetClass>("\"Equity\"").unwrap(),
            AssetClass::Equity
        );
    }
}
