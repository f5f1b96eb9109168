//! Book Context - 阅读上下文
//!
//! 职责:
//! - 分页（一页一个故事片段）
//! - 翻页与页码指示
//! - 文本标记转换与单页视图

mod markup;
mod paginator;
mod session;
mod view;

pub use markup::{render_markup, MarkupSegment};
pub use paginator::{derive, total_pages, PageContent, PageIndex, PARTS_PER_PAGE};
pub use session::{ReaderSession, GENERATION_FAILED_MESSAGE};
pub use view::{page_dots, Illustration, PageDot, PageView};
