//! Story Commands - 故事生成相关命令

use crate::domain::story::Story;

/// 生成故事命令（后端 `POST /generate`）
#[derive(Debug, Clone)]
pub struct GenerateStoryCommand {
    pub prompt: String,
}

/// 生成故事响应
#[derive(Debug, Clone)]
pub struct GenerateStoryResponse {
    pub story: Story,
    /// 模型真实生成的插图数量
    pub images_generated: usize,
    /// 使用占位插图的数量
    pub placeholders_used: usize,
}

/// 提交提示词的结果（阅读端）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 提示词为空或已有请求进行中，未发出请求
    Skipped,
    /// 请求成功，故事已替换
    Loaded,
    /// 请求失败，已记录错误信息
    Failed,
}
