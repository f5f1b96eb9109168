//! Book Query Handlers

use crate::application::queries::GetPageView;
use crate::domain::book::{total_pages, PageIndex, PageView};

/// GetPageView Handler - 无状态，按请求的故事与页码推导视图
#[derive(Debug, Default)]
pub struct GetPageViewHandler;

impl GetPageViewHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: GetPageView) -> PageView {
        let total = total_pages(query.story.as_ref().map_or(0, |s| s.part_count()));
        let page = PageIndex::clamped(query.page, total);

        if page.get() != query.page {
            tracing::debug!(requested = query.page, page = page.get(), "Page request clamped");
        }

        PageView::build(query.story.as_ref(), page)
    }
}
