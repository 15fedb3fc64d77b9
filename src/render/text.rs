//! Plain text rendering for worksheet documents.

use crate::error::Result;
use crate::model::Document;

use super::RenderOptions;

/// Convert a document to plain text.
///
/// Blocks are separated by blank lines; separator rules keep their
/// underscores.
pub fn to_text(doc: &Document, options: &RenderOptions) -> Result<String> {
    let mut output = doc.plain_text();

    if !options.preserve_line_breaks {
        output = output
            .split("\n\n")
            .map(|block| block.replace('\n', " "))
            .collect::<Vec<_>>()
            .join("\n\n");
    }

    Ok(output.trim().to_string())
}
