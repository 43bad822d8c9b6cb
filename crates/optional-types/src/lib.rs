//! optional shared types
//! 错误类型与契约词汇，供 `optional` 主 crate 使用

#![warn(missing_docs)]

pub mod contract;
pub mod error;

// Re-export commonly used types
pub use contract::*;
pub use error::*;
