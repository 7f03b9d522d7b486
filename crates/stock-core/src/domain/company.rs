//! 회사 목록 레코드.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `companies` 테이블의 한 행.
///
/// `name` 외의 컬럼은 스키마를 고정하지 않고 그대로 전달합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct Company {
    /// 회사명
    pub name: String,
    /// 나머지 컬럼
    #[serde(flatten)]
    pub attributes: BTreeMap<String, serde_json::Value>,
}

impl Company {
    /// 이름만 있는 레코드를 생성합니다.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// 컬럼 값을 추가합니다.
    pub fn with_attribute(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }
}
