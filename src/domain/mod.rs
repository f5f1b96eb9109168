//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Story Context: 故事数据与模型输出解析
//! - Book Context: 分页、翻页与单页视图

pub mod book;
pub mod story;
