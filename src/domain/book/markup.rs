//! 轻量标记转换
//!
//! 只识别两种规则：
//! - `**粗体**` → [`MarkupSegment::Bold`]
//! - 以 `##` 开头的行 → [`MarkupSegment::Heading`]，标题内部仍识别粗体
//!
//! 其余文本原样保留为 [`MarkupSegment::Plain`]。这不是通用 Markdown 解析器。

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static MARKUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^##[ \t]*(?P<heading>[^\r\n]*)|\*\*(?P<bold>.+?)\*\*")
        .expect("markup pattern is valid")
});

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(?P<bold>.+?)\*\*").expect("bold pattern is valid"));

/// 转换后的文本片段
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum MarkupSegment {
    Plain(String),
    Bold(String),
    /// 标题内容，只含 `Plain` 与 `Bold`
    Heading(Vec<MarkupSegment>),
}

/// 把原始文本转换为片段序列
pub fn render_markup(text: &str) -> Vec<MarkupSegment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for caps in MARKUP.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };

        if whole.start() > cursor {
            segments.push(MarkupSegment::Plain(text[cursor..whole.start()].to_string()));
        }

        if let Some(heading) = caps.name("heading") {
            segments.push(MarkupSegment::Heading(render_inline(heading.as_str().trim_end())));
        } else if let Some(bold) = caps.name("bold") {
            segments.push(MarkupSegment::Bold(bold.as_str().to_string()));
        }

        cursor = whole.end();
    }

    if cursor < text.len() {
        segments.push(MarkupSegment::Plain(text[cursor..].to_string()));
    }

    segments
}

/// 行内转换：只识别粗体
fn render_inline(text: &str) -> Vec<MarkupSegment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for caps in BOLD.captures_iter(text) {
        let (Some(whole), Some(bold)) = (caps.get(0), caps.name("bold")) else {
            continue;
        };
        if whole.start() > cursor {
            segments.push(MarkupSegment::Plain(text[cursor..whole.start()].to_string()));
        }
        segments.push(MarkupSegment::Bold(bold.as_str().to_string()));
        cursor = whole.end();
    }

    if cursor < text.len() {
        segments.push(MarkupSegment::Plain(text[cursor..].to_string()));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use MarkupSegment::*;

    #[test]
    fn test_bold_inner_text_preserved() {
        assert_eq!(
            render_markup("**Once** upon a time"),
            vec![Bold("Once".into()), Plain(" upon a time".into())]
        );
    }

    #[test]
    fn test_heading_line() {
        assert_eq!(
            render_markup("## The End"),
            vec![Heading(vec![Plain("The End".into())])]
        );
    }

    #[test]
    fn test_bold_inside_heading() {
        let segments = render_markup("## The **Big** End");
        assert_eq!(
            segments,
            vec![Heading(vec![
                Plain("The ".into()),
                Bold("Big".into()),
                Plain(" End".into()),
            ])]
        );
    }

    #[test]
    fn test_empty_heading() {
        assert_eq!(render_markup("##"), vec![Heading(vec![])]);
    }

    #[test]
    fn test_plain_text_unchanged() {
        let text = "Just a *little* text with # signs\nand lines.";
        assert_eq!(render_markup(text), vec![Plain(text.into())]);
    }

    #[test]
    fn test_empty_text_has_no_segments() {
        assert!(render_markup("").is_empty());
    }

    #[test]
    fn test_heading_then_body() {
        let segments = render_markup("## Part 1\n\nThe **brave** mouse.");
        assert_eq!(
            segments,
            vec![
                Heading(vec![Plain("Part 1".into())]),
                Plain("\n\nThe ".into()),
                Bold("brave".into()),
                Plain(" mouse.".into()),
            ]
        );
    }

    #[test]
    fn test_heading_only_at_line_start() {
        let segments = render_markup("see ## not a heading");
        assert_eq!(segments, vec![Plain("see ## not a heading".into())]);
    }

    #[test]
    fn test_bold_does_not_span_lines() {
        let text = "**open\nclose**";
        assert_eq!(render_markup(text), vec![Plain(text.into())]);
    }

    #[test]
    fn test_multiple_bold_spans() {
        let segments = render_markup("**a** and **b**");
        assert_eq!(
            segments,
            vec![Bold("a".into()), Plain(" and ".into()), Bold("b".into())]
        );
    }
}
