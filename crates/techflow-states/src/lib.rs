//! # TechFlow States
//!
//! 狀態轉換上下文與驗證錯誤累積

pub mod context;
pub mod error;

// Re-export 主要類型
pub use context::{StateChangeContext, StateChangeStatus};
pub use error::ValidationError;
