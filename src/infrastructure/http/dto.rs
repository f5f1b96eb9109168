//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::domain::book::{Illustration, MarkupSegment, PageDot, PageView};
use crate::domain::story::{Story, StoryPart};

// ============================================================================
// Story DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct StoryPartResponse {
    pub text: String,
    /// data URI，可能为空
    pub image: String,
}

impl From<StoryPart> for StoryPartResponse {
    fn from(part: StoryPart) -> Self {
        Self {
            text: part.text,
            image: part.image,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StoryResponse {
    pub title: String,
    pub parts: Vec<StoryPartResponse>,
}

impl From<Story> for StoryResponse {
    fn from(story: Story) -> Self {
        Self {
            title: story.title,
            parts: story.parts.into_iter().map(Into::into).collect(),
        }
    }
}

// ============================================================================
// Book DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PageRequest {
    #[serde(default)]
    pub story: Option<Story>,
    #[serde(default = "default_page")]
    pub page: usize,
}

fn default_page() -> usize {
    1
}

#[derive(Debug, Serialize)]
pub struct PageResponse {
    pub title: Option<String>,
    pub page: usize,
    pub total_pages: usize,
    pub can_advance: bool,
    pub can_retreat: bool,
    pub dots: Vec<PageDot>,
    pub text: Vec<MarkupSegment>,
    pub illustration: Illustration,
    /// 渲染好的 HTML 片段
    pub html: String,
}

impl PageResponse {
    pub fn new(view: PageView, html: String) -> Self {
        Self {
            title: view.title,
            page: view.page,
            total_pages: view.total_pages,
            can_advance: view.can_advance,
            can_retreat: view.can_retreat,
            dots: view.dots,
            text: view.text,
            illustration: view.illustration,
            html,
        }
    }
}
