//! 驗證錯誤模型
//!
//! 驗證錯誤不是致命錯誤：它們累積在狀態轉換上下文中，
//! 由宿主引擎決定是否中止轉換。訊息鍵由外部訊息目錄翻譯。

use serde::{Deserialize, Serialize};

/// 驗證錯誤
///
/// 只有兩種形態：欄位級（指向一個缺漏的引用欄位）
/// 與全域級（標記規則違反，不指明具體資料列）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "camelCase")]
pub enum ValidationError {
    /// 欄位級錯誤
    #[serde(rename_all = "camelCase")]
    Field {
        /// 欄位名稱
        field: String,
        /// 訊息鍵
        key: String,
    },
    /// 全域錯誤
    #[serde(rename_all = "camelCase")]
    Global {
        /// 訊息鍵
        key: String,
    },
}

impl ValidationError {
    /// 創建欄位級錯誤
    pub fn field(field: &str, key: &str) -> Self {
        Self::Field {
            field: field.to_string(),
            key: key.to_string(),
        }
    }

    /// 創建全域錯誤
    pub fn global(key: &str) -> Self {
        Self::Global {
            key: key.to_string(),
        }
    }

    /// 訊息鍵
    pub fn key(&self) -> &str {
        match self {
            Self::Field { key, .. } => key,
            Self::Global { key } => key,
        }
    }

    /// 欄位名稱（全域錯誤為 None）
    pub fn field_name(&self) -> Option<&str> {
        match self {
            Self::Field { field, .. } => Some(field),
            Self::Global { .. } => None,
        }
    }
}
