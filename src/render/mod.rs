//! Rendering module for turning documents into output formats.

#[cfg(feature = "docx")]
pub mod docx;
mod json;
mod markdown;
mod options;
mod stats;
mod text;

#[cfg(feature = "docx")]
pub use docx::{to_docx, DocxRenderer};
pub use json::{to_json, JsonFormat};
pub use markdown::{to_markdown, to_markdown_with_stats, MarkdownRenderer};
pub use options::RenderOptions;
pub use stats::DocumentStats;
pub use text::to_text;
