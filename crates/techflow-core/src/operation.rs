//! 作業組件與產品流記錄模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 作業組件（工藝中的一個步驟）
///
/// 作業組件構成一棵樹：根作業產出工藝的最終產品，
/// 子作業的產出作為上層作業的中間投入。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationComponent {
    /// 作業組件ID
    pub id: Uuid,

    /// 父作業組件ID（根作業為 None）
    pub parent: Option<Uuid>,

    /// 投入產品記錄
    pub operation_product_in_components: Vec<OperationProductInComponent>,

    /// 產出產品記錄
    pub operation_product_out_components: Vec<OperationProductOutComponent>,
}

impl OperationComponent {
    /// 創建新的作業組件（根作業）
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            parent: None,
            operation_product_in_components: Vec::new(),
            operation_product_out_components: Vec::new(),
        }
    }

    /// 建構器模式：設置父作業
    pub fn with_parent(mut self, parent_id: Uuid) -> Self {
        self.parent = Some(parent_id);
        self
    }

    /// 建構器模式：加入投入產品記錄
    pub fn with_input(mut self, input: OperationProductInComponent) -> Self {
        self.operation_product_in_components.push(input);
        self
    }

    /// 建構器模式：加入產出產品記錄
    pub fn with_output(mut self, output: OperationProductOutComponent) -> Self {
        self.operation_product_out_components.push(output);
        self
    }
}

impl Default for OperationComponent {
    fn default() -> Self {
        Self::new()
    }
}

/// 投入產品記錄（作業消耗的產品）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationProductInComponent {
    /// 記錄ID
    pub id: Uuid,

    /// 產品ID
    pub product_id: String,

    /// 投入數量
    pub quantity: Decimal,

    /// 元件庫位引用（領料來源）
    pub components_location: Option<Uuid>,
}

impl OperationProductInComponent {
    /// 創建新的投入產品記錄
    pub fn new(product_id: String, quantity: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id,
            quantity,
            components_location: None,
        }
    }

    /// 建構器模式：設置元件庫位
    pub fn with_components_location(mut self, location_id: Uuid) -> Self {
        self.components_location = Some(location_id);
        self
    }
}

/// 產出產品記錄（作業產出的產品）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationProductOutComponent {
    /// 記錄ID
    pub id: Uuid,

    /// 產品ID
    pub product_id: String,

    /// 產出數量
    pub quantity: Decimal,

    /// 成品入庫庫位引用
    pub products_input_location: Option<Uuid>,
}

impl OperationProductOutComponent {
    /// 創建新的產出產品記錄
    pub fn new(product_id: String, quantity: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id,
            quantity,
            products_input_location: None,
        }
    }

    /// 建構器模式：設置成品入庫庫位
    pub fn with_products_input_location(mut self, location_id: Uuid) -> Self {
        self.products_input_location = Some(location_id);
        self
    }
}
