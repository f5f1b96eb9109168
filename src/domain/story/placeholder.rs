//! 占位插图
//!
//! 图片生成失败或配额耗尽时使用的彩色 SVG 插图

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// 占位图调色板，按片段序号轮换
const PALETTE: [&str; 8] = [
    "#ff6b6b", "#4ecdc4", "#45b7d1", "#96ceb4", "#ffeaa7", "#dda0dd", "#98d8c8", "#f7dc6f",
];

/// SVG data URI 前缀
pub const SVG_DATA_URI_PREFIX: &str = "data:image/svg+xml;base64,";

/// 生成第 `part_number` 段（从 1 开始）的占位插图 data URI
pub fn placeholder_image(part_number: usize) -> String {
    let color = PALETTE[part_number % PALETTE.len()];

    let svg = format!(
        r##"<svg width="400" height="400" xmlns="http://www.w3.org/2000/svg">
    <defs>
        <linearGradient id="grad{n}" x1="0%" y1="0%" x2="100%" y2="100%">
            <stop offset="0%" style="stop-color:{color};stop-opacity:0.8" />
            <stop offset="100%" style="stop-color:#ffffff;stop-opacity:0.6" />
        </linearGradient>
    </defs>
    <rect width="400" height="400" fill="url(#grad{n})"/>
    <circle cx="200" cy="150" r="30" fill="#ffffff" opacity="0.7"/>
    <circle cx="150" cy="250" r="20" fill="#ffffff" opacity="0.5"/>
    <circle cx="250" cy="280" r="25" fill="#ffffff" opacity="0.6"/>
    <text x="200" y="350" font-family="Arial, sans-serif" font-size="18" fill="#333" text-anchor="middle" font-weight="bold">Story Part {n}</text>
</svg>"##,
        n = part_number,
        color = color,
    );

    format!("{}{}", SVG_DATA_URI_PREFIX, STANDARD.encode(svg))
}

/// 把模型返回的原始图片字节编码成 data URI
pub fn image_data_uri(mime_type: &str, data: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(data))
}

/// 是否为占位插图
pub fn is_placeholder(image: &str) -> bool {
    image.starts_with(SVG_DATA_URI_PREFIX)
}
