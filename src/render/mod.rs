pub mod markdown;
pub mod wrap;

pub use markdown::{HighlightRenderer, MarkdownRenderer, RenderError};
