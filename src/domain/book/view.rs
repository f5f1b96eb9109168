//! BookView - 单页视图模型
//!
//! 给定当前页内容，得到渲染层所需的全部数据。视图本身无状态。

use serde::Serialize;

use super::markup::{render_markup, MarkupSegment};
use super::paginator::{derive, PageIndex};
use crate::domain::story::Story;

/// 右页插图
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "src", rename_all = "lowercase")]
pub enum Illustration {
    Image(String),
    Placeholder,
}

impl Illustration {
    pub fn from_reference(image: &str) -> Self {
        if image.is_empty() {
            Self::Placeholder
        } else {
            Self::Image(image.to_string())
        }
    }
}

/// 页码指示点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageDot {
    pub page: usize,
    pub active: bool,
}

/// 页码指示点，当前页高亮
pub fn page_dots(total_pages: usize, current: PageIndex) -> Vec<PageDot> {
    (1..=total_pages.max(1))
        .map(|page| PageDot {
            page,
            active: page == current.get(),
        })
        .collect()
}

/// 一页的完整视图
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub title: Option<String>,
    pub page: usize,
    pub total_pages: usize,
    /// 左页文本；为空表示展示输入提示占位
    pub text: Vec<MarkupSegment>,
    pub illustration: Illustration,
    pub dots: Vec<PageDot>,
    pub can_advance: bool,
    pub can_retreat: bool,
}

impl PageView {
    pub fn build(story: Option<&Story>, page: PageIndex) -> Self {
        let parts = story.map(|s| s.parts.as_slice()).unwrap_or(&[]);
        let content = derive(parts, page);

        Self {
            title: story.map(|s| s.title.clone()),
            page: page.get(),
            total_pages: content.total_pages,
            text: render_markup(&content.left_text),
            illustration: Illustration::from_reference(&content.right_image),
            dots: page_dots(content.total_pages, page),
            can_advance: page.next(content.total_pages).is_some(),
            can_retreat: page.prev().is_some(),
        }
    }

    /// 左页是否需要展示占位提示
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}
