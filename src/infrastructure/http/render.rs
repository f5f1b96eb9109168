//! HTML 渲染
//!
//! 把 [`PageView`] 排版为 HTML 片段。所有文本与属性都经过转义，
//! 标记只通过 [`MarkupSegment`] 的类型体现。

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::domain::book::{Illustration, MarkupSegment, PageView};

/// 左页无内容时的提示
pub const EMPTY_PAGE_PROMPT: &str = "Enter a prompt to begin your story";

pub fn render_page_html(view: &PageView) -> String {
    let mut html = String::from("<article class=\"book\">");

    if let Some(title) = &view.title {
        html.push_str(&format!("<header class=\"book-title\">{}</header>", encode_text(title)));
    }

    html.push_str("<section class=\"page page-left\">");
    if view.is_blank() {
        html.push_str(&format!("<p class=\"placeholder\">{}</p>", EMPTY_PAGE_PROMPT));
    } else {
        for segment in &view.text {
            html.push_str(&render_segment(segment));
        }
    }
    html.push_str("</section>");

    html.push_str("<section class=\"page page-right\">");
    match &view.illustration {
        Illustration::Image(src) => html.push_str(&format!(
            "<img src=\"{}\" alt=\"Illustration for page {}\">",
            encode_double_quoted_attribute(src),
            view.page
        )),
        Illustration::Placeholder => html.push_str(
            "<div class=\"illustration-placeholder\" role=\"img\" aria-label=\"No illustration\"></div>",
        ),
    }
    html.push_str("</section>");

    html.push_str("<nav class=\"book-nav\">");
    html.push_str(&nav_button("retreat", "Previous", view.can_retreat));
    for dot in &view.dots {
        html.push_str(&format!(
            "<span class=\"dot{}\" data-page=\"{}\"></span>",
            if dot.active { " active" } else { "" },
            dot.page
        ));
    }
    html.push_str(&nav_button("advance", "Next", view.can_advance));
    html.push_str("</nav></article>");

    html
}

fn render_segment(segment: &MarkupSegment) -> String {
    match segment {
        MarkupSegment::Plain(text) => encode_text(text).replace('\n', "<br>"),
        MarkupSegment::Bold(text) => format!("<strong>{}</strong>", encode_text(text)),
        MarkupSegment::Heading(children) => {
            let inner: String = children.iter().map(render_segment).collect();
            format!("<h2>{}</h2>", inner)
        }
    }
}

fn nav_button(action: &str, label: &str, enabled: bool) -> String {
    format!(
        "<button data-action=\"{}\"{}>{}</button>",
        action,
        if enabled { "" } else { " disabled" },
        label
    )
}
