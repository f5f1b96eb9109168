//! ReaderSession - 阅读会话状态
//!
//! 顶层视图持有的唯一可变状态：当前故事、当前页、请求进行中标记、错误信息。
//! 所有变更都来自离散的用户操作或单次生成请求的完成。
//!
//! 不变量:
//! - `1 <= current_page <= total_pages`
//! - 设置新故事时页码重置为 1
//! - 生成失败不会改动已有故事与页码

use std::fmt::Display;

use super::paginator::{total_pages, PageIndex};
use super::view::{page_dots, PageDot, PageView};
use crate::domain::story::{GenerationRequest, Prompt, Story};

/// 生成失败时展示给用户的统一提示
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate story. Please try again.";

#[derive(Debug, Clone, Default)]
pub struct ReaderSession {
    story: Option<Story>,
    current_page: PageIndex,
    in_flight: bool,
    error: Option<String>,
}

impl ReaderSession {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== 提交 ==========

    /// 开始一次提交
    ///
    /// 提示词为空或已有请求进行中时返回 None（不发请求）；
    /// 否则置位进行中标记、清除旧错误，并返回要发送的请求。
    pub fn begin_submission(&mut self, raw_prompt: &str) -> Option<GenerationRequest> {
        if self.in_flight {
            tracing::debug!("Submission ignored: request already in flight");
            return None;
        }

        let prompt = Prompt::new(raw_prompt).ok()?;

        self.in_flight = true;
        self.error = None;
        Some(GenerationRequest::new(prompt))
    }

    /// 结束一次提交
    ///
    /// 成功时替换故事并回到第 1 页；失败时只记录错误信息。
    pub fn complete_submission<E: Display>(&mut self, result: Result<Story, E>) {
        self.in_flight = false;

        match result {
            Ok(story) => {
                tracing::info!(
                    title = %story.title,
                    parts = story.part_count(),
                    "Story received"
                );
                self.set_story(story);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Story generation failed");
                self.error = Some(GENERATION_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// 设置新故事（整体替换，不合并）
    pub fn set_story(&mut self, story: Story) {
        self.story = Some(story);
        self.current_page = PageIndex::FIRST;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    // ========== 翻页 ==========

    /// 下一页；已在最后一页时不变，返回是否翻页
    pub fn advance(&mut self) -> bool {
        match self.current_page.next(self.total_pages()) {
            Some(next) => {
                self.current_page = next;
                true
            }
            None => false,
        }
    }

    /// 上一页；已在第一页时不变，返回是否翻页
    pub fn retreat(&mut self) -> bool {
        match self.current_page.prev() {
            Some(prev) => {
                self.current_page = prev;
                true
            }
            None => false,
        }
    }

    /// 跳到指定页（点击页码指示点），越界请求被忽略
    pub fn go_to(&mut self, page: usize) -> bool {
        match PageIndex::new(page, self.total_pages()) {
            Some(target) => {
                self.current_page = target;
                true
            }
            None => false,
        }
    }

    // ========== 派生数据 ==========

    pub fn total_pages(&self) -> usize {
        total_pages(self.story.as_ref().map_or(0, Story::part_count))
    }

    pub fn dots(&self) -> Vec<PageDot> {
        page_dots(self.total_pages(), self.current_page)
    }

    pub fn page_view(&self) -> PageView {
        PageView::build(self.story.as_ref(), self.current_page)
    }

    // Getters
    pub fn story(&self) -> Option<&Story> {
        self.story.as_ref()
    }

    pub fn current_page(&self) -> PageIndex {
        self.current_page
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::{Illustration, MarkupSegment};
    use crate::domain::story::StoryPart;

    fn story(n: usize) -> Story {
        Story::new(
            "Test",
            (0..n).map(|i| StoryPart::new(format!("p{}", i), "")).collect(),
        )
    }

    fn mouse_tale() -> Story {
        Story::new(
            "Mouse Tale",
            vec![
                StoryPart::new("**Once** upon a time", "data:image/png;base64,AAA"),
                StoryPart::new("## The End", ""),
            ],
        )
    }

    #[test]
    fn test_empty_prompt_sends_nothing() {
        let mut session = ReaderSession::new();
        assert!(session.begin_submission("   ").is_none());
        assert!(!session.is_in_flight());
        assert!(session.error().is_none());
    }

    #[test]
    fn test_submission_while_in_flight_is_noop() {
        let mut session = ReaderSession::new();
        let request = session.begin_submission("A brave little mouse").unwrap();
        assert_eq!(request.prompt.as_str(), "A brave little mouse");
        assert!(session.is_in_flight());

        assert!(session.begin_submission("Another idea").is_none());
        assert!(session.is_in_flight());
    }

    #[test]
    fn test_success_resets_page() {
        let mut session = ReaderSession::new();
        session.set_story(story(5));
        session.advance();
        session.advance();
        assert_eq!(session.current_page().get(), 3);

        session.begin_submission("again").unwrap();
        session.complete_submission::<String>(Ok(story(4)));

        assert!(!session.is_in_flight());
        assert_eq!(session.current_page(), PageIndex::FIRST);
        assert_eq!(session.total_pages(), 4);
    }

    #[test]
    fn test_failure_keeps_story_and_page() {
        let mut session = ReaderSession::new();
        session.set_story(story(3));
        session.advance();

        session.begin_submission("again").unwrap();
        session.complete_submission::<String>(Err("HTTP 500".to_string()));

        assert!(!session.is_in_flight());
        assert_eq!(session.error(), Some(GENERATION_FAILED_MESSAGE));
        assert_eq!(session.story(), Some(&story(3)));
        assert_eq!(session.current_page().get(), 2);

        session.dismiss_error();
        assert!(session.error().is_none());
    }

    #[test]
    fn test_new_submission_clears_error() {
        let mut session = ReaderSession::new();
        session.begin_submission("x").unwrap();
        session.complete_submission::<String>(Err("boom".to_string()));
        assert!(session.error().is_some());

        session.begin_submission("y").unwrap();
        assert!(session.error().is_none());
    }

    #[test]
    fn test_navigation_bounds() {
        let mut session = ReaderSession::new();
        assert_eq!(session.total_pages(), 1);
        assert!(!session.advance());
        assert!(!session.retreat());

        session.set_story(story(3));
        assert!(!session.retreat());
        assert!(session.advance());
        assert!(session.advance());
        assert!(!session.advance());
        assert_eq!(session.current_page().get(), 3);
        assert!(session.retreat());
        assert_eq!(session.current_page().get(), 2);
    }

    #[test]
    fn test_page_view_navigation_flags_follow_session() {
        let mut session = ReaderSession::new();
        session.set_story(story(2));

        let first = session.page_view();
        assert!(first.can_advance);
        assert!(!first.can_retreat);

        session.advance();
        let last = session.page_view();
        assert!(!last.can_advance);
        assert!(last.can_retreat);

        let empty = ReaderSession::new().page_view();
        assert!(!empty.can_advance);
        assert!(!empty.can_retreat);
    }

    #[test]
    fn test_page_always_in_bounds() {
        for n in 0..6 {
            let mut session = ReaderSession::new();
            session.set_story(story(n));
            for step in 0..10 {
                if step % 3 == 0 {
                    session.retreat();
                } else {
                    session.advance();
                }
                let page = session.current_page().get();
                assert!(page >= 1 && page <= session.total_pages());
            }
            assert_eq!(session.total_pages(), n.max(1));
        }
    }

    #[test]
    fn test_go_to_ignores_out_of_range() {
        let mut session = ReaderSession::new();
        session.set_story(story(3));
        assert!(session.go_to(3));
        assert!(!session.go_to(0));
        assert!(!session.go_to(4));
        assert_eq!(session.current_page().get(), 3);
        assert!(session.dots()[2].active);
    }

    #[test]
    fn test_mouse_tale_walkthrough() {
        let mut session = ReaderSession::new();
        session.begin_submission("A brave little mouse").unwrap();
        session.complete_submission::<String>(Ok(mouse_tale()));

        assert_eq!(session.total_pages(), 2);
        let page = session.page_view();
        assert_eq!(page.text[0], MarkupSegment::Bold("Once".into()));
        assert_eq!(
            page.illustration,
            Illustration::Image("data:image/png;base64,AAA".into())
        );

        assert!(session.advance());
        let page = session.page_view();
        assert_eq!(page.text, vec![MarkupSegment::Heading(vec![MarkupSegment::Plain("The End".into())])]);
        assert_eq!(page.illustration, Illustration::Placeholder);

        assert!(!session.advance());
        assert_eq!(session.current_page().get(), 2);
    }
}
