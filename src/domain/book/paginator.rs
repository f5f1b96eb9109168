//! 分页器
//!
//! 把扁平的故事片段序列映射为“书页”。每页展示一个片段：
//! 左页是该片段的文本，右页是同一片段的插图。

use serde::{Deserialize, Serialize};

use crate::domain::story::StoryPart;

/// 每页展示的片段数
pub const PARTS_PER_PAGE: usize = 1;

/// 总页数，至少为 1（空故事也有一页占位页）
pub fn total_pages(part_count: usize) -> usize {
    part_count.div_ceil(PARTS_PER_PAGE).max(1)
}

/// 页码（从 1 开始）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageIndex(usize);

impl PageIndex {
    pub const FIRST: PageIndex = PageIndex(1);

    /// 仅当 `1 <= page <= total` 时返回页码
    pub fn new(page: usize, total: usize) -> Option<Self> {
        (1..=total.max(1)).contains(&page).then_some(Self(page))
    }

    /// 把任意页码收敛到 `[1, total]`
    pub fn clamped(page: usize, total: usize) -> Self {
        Self(page.clamp(1, total.max(1)))
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// 下一页；已是最后一页时返回 None
    pub fn next(self, total: usize) -> Option<Self> {
        Self::new(self.0 + 1, total)
    }

    /// 上一页；已是第一页时返回 None
    pub fn prev(self) -> Option<Self> {
        (self.0 > 1).then(|| Self(self.0 - 1))
    }
}

impl Default for PageIndex {
    fn default() -> Self {
        Self::FIRST
    }
}

impl std::fmt::Display for PageIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 某一页的可见内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageContent {
    pub left_text: String,
    pub right_image: String,
    pub total_pages: usize,
}

/// 推导指定页的内容
///
/// 页码越界时左右两页都为空字符串，由视图渲染占位内容。
pub fn derive(parts: &[StoryPart], page: PageIndex) -> PageContent {
    let part = page
        .get()
        .checked_sub(1)
        .map(|i| i * PARTS_PER_PAGE)
        .and_then(|i| parts.get(i));

    PageContent {
        left_text: part.map(|p| p.text.clone()).unwrap_or_default(),
        right_image: part.map(|p| p.image.clone()).unwrap_or_default(),
        total_pages: total_pages(parts.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(n: usize) -> Vec<StoryPart> {
        (0..n)
            .map(|i| StoryPart::new(format!("text {}", i), format!("img {}", i)))
            .collect()
    }

    #[test]
    fn test_total_pages_is_at_least_one() {
        assert_eq!(total_pages(0), 1);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(8), 8);
    }

    #[test]
    fn test_page_index_bounds() {
        assert!(PageIndex::new(0, 3).is_none());
        assert!(PageIndex::new(4, 3).is_none());
        assert_eq!(PageIndex::new(3, 3).map(PageIndex::get), Some(3));
        // 空故事仍有第 1 页
        assert_eq!(PageIndex::new(1, 0), Some(PageIndex::FIRST));
    }

    #[test]
    fn test_page_index_clamped() {
        assert_eq!(PageIndex::clamped(0, 5).get(), 1);
        assert_eq!(PageIndex::clamped(9, 5).get(), 5);
        assert_eq!(PageIndex::clamped(9, 0).get(), 1);
    }

    #[test]
    fn test_next_and_prev_stop_at_edges() {
        let last = PageIndex::new(2, 2).unwrap();
        assert!(last.next(2).is_none());
        assert!(PageIndex::FIRST.prev().is_none());
        assert_eq!(PageIndex::FIRST.next(2), Some(last));
        assert_eq!(last.prev(), Some(PageIndex::FIRST));
    }

    #[test]
    fn test_derive_shows_same_part_on_both_sides() {
        let parts = parts(3);
        let content = derive(&parts, PageIndex::new(2, 3).unwrap());
        assert_eq!(content.left_text, "text 1");
        assert_eq!(content.right_image, "img 1");
        assert_eq!(content.total_pages, 3);
    }

    #[test]
    fn test_derive_empty_story() {
        let content = derive(&[], PageIndex::FIRST);
        assert_eq!(content.left_text, "");
        assert_eq!(content.right_image, "");
        assert_eq!(content.total_pages, 1);
    }

    #[test]
    fn test_derive_out_of_range_is_empty() {
        let parts = parts(2);
        let content = derive(&parts, PageIndex::clamped(7, 10));
        assert_eq!(content.left_text, "");
        assert_eq!(content.total_pages, 2);
    }
}
