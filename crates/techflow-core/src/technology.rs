//! 工藝（製造流程定義）模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::operation::OperationComponent;

/// 工藝狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TechnologyState {
    /// 草稿
    Draft,
    /// 已接受
    Accepted,
    /// 已拒絕
    Declined,
    /// 已過時
    Outdated,
    /// 已檢查
    Checked,
}

/// 物料流範圍
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Range {
    /// 單一事業部：物料只在一個事業部內流轉
    OneDivision,
    /// 多事業部
    ManyDivisions,
}

/// 工藝欄位名稱（欄位級驗證錯誤使用）
pub mod fields {
    /// 元件庫位
    pub const COMPONENTS_LOCATION: &str = "componentsLocation";
    /// 成品入庫庫位
    pub const PRODUCTS_INPUT_LOCATION: &str = "productsInputLocation";
}

/// 工藝
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Technology {
    /// 工藝ID
    pub id: Uuid,

    /// 工藝編號
    pub number: String,

    /// 工藝名稱
    pub name: String,

    /// 當前狀態
    pub state: TechnologyState,

    /// 物料流範圍
    pub range: Range,

    /// 元件庫位引用（單一事業部範圍時必填）
    pub components_location: Option<Uuid>,

    /// 成品入庫庫位引用（單一事業部範圍時必填）
    pub products_input_location: Option<Uuid>,

    /// 作業組件（工藝步驟）
    pub operation_components: Vec<OperationComponent>,
}

impl Technology {
    /// 創建新的工藝（草稿狀態）
    pub fn new(number: String, name: String, range: Range) -> Self {
        Self {
            id: Uuid::new_v4(),
            number,
            name,
            state: TechnologyState::Draft,
            range,
            components_location: None,
            products_input_location: None,
            operation_components: Vec::new(),
        }
    }

    /// 建構器模式：設置元件庫位
    pub fn with_components_location(mut self, location_id: Uuid) -> Self {
        self.components_location = Some(location_id);
        self
    }

    /// 建構器模式：設置成品入庫庫位
    pub fn with_products_input_location(mut self, location_id: Uuid) -> Self {
        self.products_input_location = Some(location_id);
        self
    }

    /// 建構器模式：加入作業組件
    pub fn with_operation_component(mut self, component: OperationComponent) -> Self {
        self.operation_components.push(component);
        self
    }

    /// 根作業組件（沒有父作業的組件，其產出為最終產品）
    pub fn root_operation(&self) -> Option<&OperationComponent> {
        self.operation_components.iter().find(|oc| oc.parent.is_none())
    }

    /// 依ID查找作業組件
    pub fn operation(&self, id: Uuid) -> Option<&OperationComponent> {
        self.operation_components.iter().find(|oc| oc.id == id)
    }
}
