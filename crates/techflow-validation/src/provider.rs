//! 資料提供者介面
//!
//! 查詢與批次讀取由外部持久層實作，經建構子注入驗證器。
//! 事務一致性由宿主持久層負責。

use uuid::Uuid;

use techflow_core::{OperationProductInComponent, OperationProductOutComponent, Result};

/// 作業組件查詢提供者
///
/// 回傳的ID清單已由實作方預先篩選至需要檢查庫位的資料列
/// （投入側排除中間產品，產出側只含最終產品）。
pub trait OperationComponentDataProvider {
    /// 指定工藝下待檢查的投入產品記錄ID
    fn components_for_technology(&self, technology_id: Uuid) -> Result<Vec<Uuid>>;

    /// 指定工藝下最終產品的產出記錄ID
    fn final_products_for_technology(&self, technology_id: Uuid) -> Result<Vec<Uuid>>;
}

/// 產品記錄批次讀取
pub trait ProductComponentRepository {
    /// 依ID集合讀取投入產品記錄
    fn input_components(&self, ids: &[Uuid]) -> Result<Vec<OperationProductInComponent>>;

    /// 依ID集合讀取產出產品記錄
    fn output_components(&self, ids: &[Uuid]) -> Result<Vec<OperationProductOutComponent>>;
}
