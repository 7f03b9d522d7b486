//! 히스토리 조회 샘플링 간격.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 시계열 샘플링 간격.
///
/// 현재 조회 윈도우는 모두 일봉을 사용합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    /// 일봉
    #[serde(rename = "1d")]
    D1,
}

impl Interval {
    /// 제공자 간격 문자열로 변환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::D1 => "1d",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_strings() {
        assert_eq!(Interval::D1.as_str(), "1d");
        assert_eq!(Interval::D1.to_string(), "1d");
        assert_eq!(serde_json::to_string(&Interval::D1).unwrap(), "\"1d\"");
    }
}
