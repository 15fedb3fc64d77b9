//! Document model types.
//!
//! A [`Document`] is an append-only list of immutable [`Block`] values plus
//! the style defaults it was created with. Renderers consume the model
//! without ever mutating it.

mod block;
mod document;
mod paragraph;
mod style;

pub use block::{
    rule_text, style_id_for_level, Block, Heading, HEADING_MAX_LEVEL, RULE_CHAR, RULE_WIDTH,
};
pub use document::{Document, Metadata};
pub use paragraph::{Alignment, Paragraph, TextRun, TextStyle};
pub use style::{StyleDefaults, TextDirection, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE};
