//! Book Queries - 阅读相关查询

use crate::domain::story::Story;

/// 获取指定页视图
#[derive(Debug, Clone)]
pub struct GetPageView {
    pub story: Option<Story>,
    /// 页码（从 1 开始），越界时收敛到合法范围
    pub page: usize,
}
