//! # TechFlow
//!
//! 工藝接受流程的庫位驗證：工藝轉換至「已接受」狀態時，
//! 檢查下游物料路由所需的庫位引用是否齊備。

pub use techflow_core::{
    Location, OperationComponent, OperationProductInComponent, OperationProductOutComponent,
    Range, Result, TechFlowError, Technology, TechnologyState,
};
pub use techflow_states::{StateChangeContext, StateChangeStatus, ValidationError};
pub use techflow_validation::{
    check_one_division_locations, InMemoryOperationComponentStore, OperationComponentDataProvider,
    ProductClassifier, ProductComponentRepository, StructuralClassifier,
    TechnologyAcceptValidator,
};
