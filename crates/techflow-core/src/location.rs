//! 庫位（倉庫/組織單位）模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 庫位：物料路由引用的倉庫或組織單位
///
/// 本模組只引用庫位，不擁有其生命週期。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// 庫位ID
    pub id: Uuid,

    /// 庫位編號
    pub number: String,

    /// 庫位名稱
    pub name: String,
}

impl Location {
    /// 創建新的庫位
    pub fn new(number: String, name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            number,
            name,
        }
    }
}
