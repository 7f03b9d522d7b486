//! 거래 상품 심볼.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::MarketDataError;

/// 거래 가능한 상품의 티커 심볼 (예: AAPL, 005930.KS).
///
/// 대소문자나 공백 정규화는 하지 않습니다. 존재하지 않는 심볼은
/// 외부 제공자의 실패로만 걸러집니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// 문자열에서 심볼을 생성합니다.
    ///
    /// # Errors
    /// 빈 문자열이면 `MarketDataError::InvalidRequest`를 반환합니다.
    pub fn new(value: impl Into<String>) -> Result<Self, MarketDataError> {
        let value = value.into();
        if value.is_empty() {
            return Err(MarketDataError::symbol_required());
        }
        Ok(Self(value))
    }

    /// 쿼리 파라미터처럼 없을 수도 있는 값에서 심볼을 생성합니다.
    pub fn from_param(value: Option<&str>) -> Result<Self, MarketDataError> {
        match value {
            Some(v) => Self::new(v),
            None => Err(MarketDataError::symbol_required()),
        }
    }

    /// 심볼 문자열을 반환합니다.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_keeps_input_unchanged() {
        let symbol = Symbol::new(" aapl ").unwrap();
        assert_eq!(symbol.as_str(), " aapl ");
        assert_eq!(symbol.to_string(), " aapl ");
    }

    #[test]
    fn test_empty_symbol_rejected() {
        assert_eq!(Symbol::new(""), Err(MarketDataError::symbol_required()));
    }

    #[test]
    fn test_from_param() {
        assert!(Symbol::from_param(Some("MSFT")).is_ok());
        assert!(Symbol::from_param(Some("")).is_err());
        assert!(Symbol::from_param(None).is_err());
    }
}
