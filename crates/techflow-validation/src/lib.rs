//! # TechFlow Validation
//!
//! 工藝接受轉換時的庫位驗證規則
//!
//! 由宿主工作流引擎在工藝轉換至「已接受」狀態時呼叫，
//! 檢查下游物料路由所需的庫位引用是否齊備。

pub mod classify;
pub mod memory;
pub mod provider;
pub mod validator;

// Re-export 主要類型
pub use classify::{ProductClassifier, StructuralClassifier};
pub use memory::InMemoryOperationComponentStore;
pub use provider::{OperationComponentDataProvider, ProductComponentRepository};
pub use validator::{check_one_division_locations, TechnologyAcceptValidator};
