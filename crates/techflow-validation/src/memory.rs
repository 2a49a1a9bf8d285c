//! 記憶體內資料提供者
//!
//! 以雜湊表實作兩個資料介面，供測試與小型嵌入式部署使用。
//! 索引工藝時以分類器預先篩選：投入側排除中間產品，
//! 產出側只保留最終產品，與外部查詢提供者的行為一致。

use std::collections::HashMap;

use uuid::Uuid;

use techflow_core::{
    Location, OperationProductInComponent, OperationProductOutComponent, Result, Technology,
};

use crate::classify::ProductClassifier;
use crate::provider::{OperationComponentDataProvider, ProductComponentRepository};

/// 記憶體內作業組件儲存
#[derive(Debug, Default)]
pub struct InMemoryOperationComponentStore {
    inputs: HashMap<Uuid, OperationProductInComponent>,
    outputs: HashMap<Uuid, OperationProductOutComponent>,
    components_by_technology: HashMap<Uuid, Vec<Uuid>>,
    finals_by_technology: HashMap<Uuid, Vec<Uuid>>,
    locations: HashMap<Uuid, Location>,
}

impl InMemoryOperationComponentStore {
    /// 創建空的儲存
    pub fn new() -> Self {
        Self::default()
    }

    /// 登錄庫位
    pub fn add_location(&mut self, location: Location) {
        self.locations.insert(location.id, location);
    }

    /// 依ID查找庫位
    pub fn location(&self, id: Uuid) -> Option<&Location> {
        self.locations.get(&id)
    }

    /// 索引工藝的產品記錄
    ///
    /// 以分類器篩選出待檢查的資料列並建立ID清單，
    /// 同時保存完整記錄以供批次讀取。
    pub fn index_technology(
        &mut self,
        technology: &Technology,
        classifier: &dyn ProductClassifier,
    ) {
        let mut component_ids = Vec::new();
        let mut final_ids = Vec::new();

        for operation in &technology.operation_components {
            for input in &operation.operation_product_in_components {
                if classifier.is_intermediate(technology, input) {
                    continue;
                }
                component_ids.push(input.id);
                self.inputs.insert(input.id, input.clone());
            }
            for output in &operation.operation_product_out_components {
                if !classifier.is_final(technology, output) {
                    continue;
                }
                final_ids.push(output.id);
                self.outputs.insert(output.id, output.clone());
            }
        }

        self.components_by_technology
            .insert(technology.id, component_ids);
        self.finals_by_technology.insert(technology.id, final_ids);
    }
}

impl OperationComponentDataProvider for InMemoryOperationComponentStore {
    fn components_for_technology(&self, technology_id: Uuid) -> Result<Vec<Uuid>> {
        Ok(self
            .components_by_technology
            .get(&technology_id)
            .cloned()
            .unwrap_or_default())
    }

    fn final_products_for_technology(&self, technology_id: Uuid) -> Result<Vec<Uuid>> {
        Ok(self
            .finals_by_technology
            .get(&technology_id)
            .cloned()
            .unwrap_or_default())
    }
}

impl ProductComponentRepository for InMemoryOperationComponentStore {
    fn input_components(&self, ids: &[Uuid]) -> Result<Vec<OperationProductInComponent>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.inputs.get(id))
            .cloned()
            .collect())
    }

    fn output_components(&self, ids: &[Uuid]) -> Result<Vec<OperationProductOutComponent>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.outputs.get(id))
            .cloned()
            .collect())
    }
}
