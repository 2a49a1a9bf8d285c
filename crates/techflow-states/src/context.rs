//! 狀態轉換上下文

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use techflow_core::{Technology, TechnologyState};

use crate::error::ValidationError;

/// 狀態轉換執行狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateChangeStatus {
    /// 進行中
    InProgress,
    /// 已暫停
    Paused,
    /// 成功
    Successful,
    /// 失敗
    Failure,
    /// 已取消
    Canceled,
}

impl StateChangeStatus {
    /// 轉換是否已失敗
    pub fn is_failure(&self) -> bool {
        *self == Self::Failure
    }
}

/// 狀態轉換上下文
///
/// 由宿主工作流引擎建立並在轉換期間傳遞：攜帶轉換主體（工藝）、
/// 當前執行狀態與累積的驗證錯誤。本模組只讀取主體並記錄錯誤；
/// 是否中止轉換由引擎依據錯誤清單決定。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateChangeContext {
    /// 轉換記錄ID
    pub id: Uuid,

    /// 轉換主體（工藝）
    owner: Option<Technology>,

    /// 目標狀態
    target_state: TechnologyState,

    /// 執行狀態
    status: StateChangeStatus,

    /// 轉換發起時間
    created_at: DateTime<Utc>,

    /// 累積的驗證錯誤
    errors: Vec<ValidationError>,
}

impl StateChangeContext {
    /// 創建新的狀態轉換上下文（進行中）
    pub fn new(owner: Option<Technology>, target_state: TechnologyState) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            target_state,
            status: StateChangeStatus::InProgress,
            created_at: Utc::now(),
            errors: Vec::new(),
        }
    }

    /// 轉換主體
    pub fn owner(&self) -> Option<&Technology> {
        self.owner.as_ref()
    }

    /// 目標狀態
    pub fn target_state(&self) -> TechnologyState {
        self.target_state
    }

    /// 當前執行狀態
    pub fn status(&self) -> StateChangeStatus {
        self.status
    }

    /// 設置執行狀態（由宿主引擎呼叫）
    pub fn set_status(&mut self, status: StateChangeStatus) {
        self.status = status;
    }

    /// 轉換發起時間
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// 記錄全域驗證錯誤
    pub fn add_validation_error(&mut self, key: &str) {
        self.errors.push(ValidationError::global(key));
    }

    /// 記錄欄位級驗證錯誤
    pub fn add_field_validation_error(&mut self, field: &str, key: &str) {
        self.errors.push(ValidationError::field(field, key));
    }

    /// 記錄已構造好的驗證錯誤
    pub fn record(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// 是否存在驗證錯誤
    pub fn has_validation_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// 累積的驗證錯誤
    pub fn validation_errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use techflow_core::{Range, Technology};

    fn draft_technology() -> Technology {
        Technology::new(
            "TECH-001".to_string(),
            "自行車組裝".to_string(),
            Range::OneDivision,
        )
    }

    #[test]
    fn test_new_context_in_progress_without_errors() {
        let context =
            StateChangeContext::new(Some(draft_technology()), TechnologyState::Accepted);

        assert_eq!(context.status(), StateChangeStatus::InProgress);
        assert_eq!(context.target_state(), TechnologyState::Accepted);
        assert!(!context.has_validation_errors());
    }

    #[test]
    fn test_errors_accumulate_without_aborting() {
        let mut context =
            StateChangeContext::new(Some(draft_technology()), TechnologyState::Accepted);

        context.add_field_validation_error("componentsLocation", "validate.field.error.missing");
        context.add_validation_error("productFlowThruDivision.location.components.notFilled");

        assert!(context.has_validation_errors());
        assert_eq!(context.validation_errors().len(), 2);
        // 記錄錯誤不改變執行狀態，中止與否由引擎決定
        assert_eq!(context.status(), StateChangeStatus::InProgress);
    }

    #[test]
    fn test_engine_marks_failure() {
        let mut context =
            StateChangeContext::new(Some(draft_technology()), TechnologyState::Accepted);

        context.add_validation_error("productFlowThruDivision.location.final.notFilled");
        if context.has_validation_errors() {
            context.set_status(StateChangeStatus::Failure);
        }

        assert!(context.status().is_failure());
    }

    #[test]
    fn test_context_without_owner() {
        let context = StateChangeContext::new(None, TechnologyState::Accepted);

        assert!(context.owner().is_none());
    }
}
