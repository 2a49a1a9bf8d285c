//! 工藝接受驗證器
//!
//! 在工藝轉換至「已接受」狀態時檢查庫位引用。所有發現都記錄在
//! 狀態轉換上下文上，不丟出例外；是否中止轉換由宿主引擎決定。

use std::sync::Arc;

use uuid::Uuid;

use techflow_core::technology::fields;
use techflow_core::{Range, Result, Technology};
use techflow_states::{StateChangeContext, ValidationError};

use crate::classify::ProductClassifier;
use crate::provider::{OperationComponentDataProvider, ProductComponentRepository};

/// 欄位缺漏共用訊息鍵
const FIELD_ERROR_MISSING: &str = "validate.field.error.missing";

/// 投入產品元件庫位未填
const COMPONENTS_LOCATION_NOT_FILLED: &str =
    "productFlowThruDivision.location.components.notFilled";

/// 最終產品入庫庫位未填
const FINAL_LOCATION_NOT_FILLED: &str = "productFlowThruDivision.location.final.notFilled";

/// 逐列檢查：投入產品元件庫位未設置
const OPERATION_INPUT_LOCATION_NOT_SET: &str =
    "productFlowThruDivision.states.validation.LocationOPICNotSet";

/// 逐列檢查：產出產品入庫庫位未設置
const OPERATION_OUTPUT_LOCATION_NOT_SET: &str =
    "productFlowThruDivision.states.validation.LocationOPOCNotSet";

/// 單一事業部範圍時檢查工藝自身的兩個庫位引用
///
/// 每個缺漏的引用產生一個欄位級錯誤；範圍非單一事業部時不檢查。
pub fn check_one_division_locations(technology: &Technology) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if technology.range != Range::OneDivision {
        return errors;
    }

    if technology.components_location.is_none() {
        errors.push(ValidationError::field(
            fields::COMPONENTS_LOCATION,
            FIELD_ERROR_MISSING,
        ));
    }
    if technology.products_input_location.is_none() {
        errors.push(ValidationError::field(
            fields::PRODUCTS_INPUT_LOCATION,
            FIELD_ERROR_MISSING,
        ));
    }

    errors
}

/// 工藝接受驗證器
///
/// 協作者經建構子注入，無全域狀態；每次呼叫獨立讀取資料。
pub struct TechnologyAcceptValidator {
    data_provider: Arc<dyn OperationComponentDataProvider>,
    repository: Arc<dyn ProductComponentRepository>,
    classifier: Arc<dyn ProductClassifier>,
}

impl TechnologyAcceptValidator {
    /// 創建新的驗證器
    pub fn new(
        data_provider: Arc<dyn OperationComponentDataProvider>,
        repository: Arc<dyn ProductComponentRepository>,
        classifier: Arc<dyn ProductClassifier>,
    ) -> Self {
        Self {
            data_provider,
            repository,
            classifier,
        }
    }

    /// 接受轉換時的驗證入口
    ///
    /// 主體不存在或轉換已失敗時不做任何事（不發查詢、不記錯誤）。
    /// 三項檢查全部執行，結果一併記錄在上下文上。
    /// Err 只代表資料存取失敗，驗證發現不經由 Err 傳遞。
    pub fn validate_on_accepted(&self, context: &mut StateChangeContext) -> Result<()> {
        if context.status().is_failure() {
            return Ok(());
        }
        let Some(technology) = context.owner() else {
            return Ok(());
        };

        tracing::debug!("驗證工藝 {} 的庫位設定", technology.number);

        let technology_id = technology.id;
        let mut errors = check_one_division_locations(technology);
        errors.extend(self.check_components_locations(technology_id)?);
        errors.extend(self.check_final_product_locations(technology_id)?);

        if !errors.is_empty() {
            tracing::info!("工藝庫位驗證未通過：{} 項錯誤", errors.len());
        }
        for error in errors {
            context.record(error);
        }

        Ok(())
    }

    /// 檢查候選投入產品記錄的元件庫位
    ///
    /// ID清單為空時跳過；任一記錄缺漏時只記錄一個全域錯誤，
    /// 不列舉具體資料列。
    fn check_components_locations(&self, technology_id: Uuid) -> Result<Vec<ValidationError>> {
        let ids = self.data_provider.components_for_technology(technology_id)?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let components = self.repository.input_components(&ids)?;
        let missing = components
            .iter()
            .any(|c| c.components_location.is_none());

        if missing {
            Ok(vec![ValidationError::global(COMPONENTS_LOCATION_NOT_FILLED)])
        } else {
            Ok(Vec::new())
        }
    }

    /// 檢查最終產品記錄的入庫庫位
    fn check_final_product_locations(&self, technology_id: Uuid) -> Result<Vec<ValidationError>> {
        let ids = self
            .data_provider
            .final_products_for_technology(technology_id)?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let components = self.repository.output_components(&ids)?;
        let missing = components
            .iter()
            .any(|c| c.products_input_location.is_none());

        if missing {
            Ok(vec![ValidationError::global(FINAL_LOCATION_NOT_FILLED)])
        } else {
            Ok(Vec::new())
        }
    }

    /// 逐列檢查各作業的投入產品庫位
    ///
    /// 略過中間產品，遇到第一筆缺漏即停止並回傳錯誤。
    /// 不在接受轉換的入口路徑上，供需要逐列精度的宿主另行呼叫。
    pub fn check_operation_input_locations(
        &self,
        technology: &Technology,
    ) -> Option<ValidationError> {
        for operation in &technology.operation_components {
            for input in &operation.operation_product_in_components {
                if self.classifier.is_intermediate(technology, input) {
                    continue;
                }
                if input.components_location.is_none() {
                    return Some(ValidationError::global(OPERATION_INPUT_LOCATION_NOT_SET));
                }
            }
        }
        None
    }

    /// 逐列檢查各作業的產出產品庫位
    ///
    /// 只檢查最終產品，遇到第一筆缺漏即停止並回傳錯誤。
    pub fn check_operation_output_locations(
        &self,
        technology: &Technology,
    ) -> Option<ValidationError> {
        for operation in &technology.operation_components {
            for output in &operation.operation_product_out_components {
                if !self.classifier.is_final(technology, output) {
                    continue;
                }
                if output.products_input_location.is_none() {
                    return Some(ValidationError::global(OPERATION_OUTPUT_LOCATION_NOT_SET));
                }
            }
        }
        None
    }
}
