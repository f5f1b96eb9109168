//! 模型输出解析
//!
//! 把文本模型返回的原始内容整理成 [`StoryDraft`]：
//! 1. 去掉 Markdown 代码块围栏
//! 2. 修复模型偶尔生成的 JavaScript 风格字符串拼接（`"a" + "b"`）
//! 3. JSON 解析失败时退化为按空行切分段落

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

use super::StoryError;

/// 缺省标题
pub const DEFAULT_TITLE: &str = "A Magical Adventure";

static CONCATENATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""\s*\+\s*""#).expect("concatenation pattern is valid"));

/// 尚未配图的故事草稿
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryDraft {
    pub title: String,
    pub parts: Vec<String>,
    /// 是否来自段落切分的退化路径
    pub from_fallback: bool,
}

#[derive(Debug, Deserialize)]
struct RawStory {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    parts: Vec<RawPart>,
}

#[derive(Debug, Deserialize)]
struct RawPart {
    #[serde(default)]
    content: Option<String>,
}

/// 清洗模型输出，使其尽量成为合法 JSON
pub fn clean_model_output(raw: &str) -> String {
    let mut text = raw.trim().to_string();

    if text.starts_with("```json") {
        text = text.replace("```json", "").replace("```", "").trim().to_string();
    } else if text.starts_with("```") {
        text = text.replace("```", "").trim().to_string();
    }

    CONCATENATION.replace_all(&text, "").into_owned()
}

/// 解析模型输出
///
/// 语法错误走退化路径（按空行切分出 `part_count` 段）；
/// JSON 合法但结构不符则返回 [`StoryError::InvalidStructure`]。
pub fn parse_story_response(raw: &str, part_count: usize) -> Result<StoryDraft, StoryError> {
    let cleaned = clean_model_output(raw);

    let value: serde_json::Value = match serde_json::from_str(&cleaned) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, "Story response is not valid JSON, falling back to paragraphs");
            return Ok(fallback_from_paragraphs(raw, part_count));
        }
    };

    let story: RawStory = serde_json::from_value(value)
        .map_err(|e| StoryError::InvalidStructure(e.to_string()))?;

    Ok(StoryDraft {
        title: story.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        parts: story
            .parts
            .into_iter()
            .map(|p| p.content.unwrap_or_default())
            .collect(),
        from_fallback: false,
    })
}

/// 退化路径：按空行切分原始文本
fn fallback_from_paragraphs(raw: &str, part_count: usize) -> StoryDraft {
    let paragraphs: Vec<&str> = raw
        .split("\n\n")
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect();

    let parts = (0..part_count)
        .map(|i| match paragraphs.get(i) {
            Some(p) => p.to_string(),
            None => format!(
                "## Part {}\n\nThe adventure continues with magical surprises!",
                i + 1
            ),
        })
        .collect();

    StoryDraft {
        title: DEFAULT_TITLE.to_string(),
        parts,
        from_fallback: true,
    }
}

/// 补齐或截断到恰好 `part_count` 段
pub fn ensure_part_count(mut parts: Vec<String>, part_count: usize) -> Vec<String> {
    if parts.len() > part_count {
        parts.truncate(part_count);
        return parts;
    }

    while parts.len() < part_count {
        let part_num = parts.len() + 1;
        parts.push(format!(
            "## Part {}\n\nAnd so the **magical adventure** continued with even more wonderful surprises ahead!",
            part_num
        ));
    }

    parts
}
