//! Story Context - Value Objects

use serde::{Deserialize, Serialize};

use super::StoryError;

/// 用户输入的故事提示词
///
/// 不变量: 去除首尾空白后非空
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Prompt(String);

impl Prompt {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, StoryError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(StoryError::EmptyPrompt);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 日志用的截断预览（按字符截断）
    pub fn preview(&self, max_chars: usize) -> String {
        self.0.chars().take(max_chars).collect()
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 生成请求，即 `POST /generate` 的请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub prompt: Prompt,
}

impl GenerationRequest {
    pub fn new(prompt: Prompt) -> Self {
        Self { prompt }
    }
}

/// 故事片段：一段文本 + 一张插图
///
/// `image` 为图片 URI（通常是 data URI），可以为空字符串
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryPart {
    pub text: String,
    pub image: String,
}

impl StoryPart {
    pub fn new(text: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image: image.into(),
        }
    }
}

/// 生成的完整故事
///
/// 片段顺序即叙事顺序，由后端响应决定，接收后不可变
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub title: String,
    pub parts: Vec<StoryPart>,
}

impl Story {
    pub fn new(title: impl Into<String>, parts: Vec<StoryPart>) -> Self {
        Self {
            title: title.into(),
            parts,
        }
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }
}
