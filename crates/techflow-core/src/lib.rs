//! # TechFlow Core
//!
//! 工藝（製造流程定義）核心資料模型與類型定義

pub mod location;
pub mod operation;
pub mod technology;

// Re-export 主要類型
pub use location::Location;
pub use operation::{
    OperationComponent, OperationProductInComponent, OperationProductOutComponent,
};
pub use technology::{Range, Technology, TechnologyState};

/// TechFlow 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum TechFlowError {
    #[error("找不到實體: {model} id={id}")]
    EntityNotFound { model: String, id: String },

    #[error("資料存取錯誤: {0}")]
    DataAccessError(String),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TechFlowError>;
