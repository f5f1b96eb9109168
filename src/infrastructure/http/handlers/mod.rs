//! HTTP Handlers

mod book;
mod ping;
mod story;

pub use book::*;
pub use ping::*;
pub use story::*;
