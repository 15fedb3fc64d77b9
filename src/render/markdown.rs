//! Markdown rendering for worksheet documents.

use crate::error::Result;
use crate::model::{Block, Document, Heading, Paragraph, TextRun, TextStyle};

use super::{DocumentStats, RenderOptions};

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to Markdown with statistics.
pub fn to_markdown_with_stats(
    doc: &Document,
    options: &RenderOptions,
) -> Result<(String, DocumentStats)> {
    let mut options = options.clone();
    options.collect_stats = true;
    let renderer = MarkdownRenderer::new(options);
    renderer.render_with_stats(doc)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
    stats: DocumentStats,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: DocumentStats::new(),
        }
    }

    /// Render a document to Markdown.
    pub fn render(mut self, doc: &Document) -> Result<String> {
        self.render_internal(doc)
    }

    /// Render a document to Markdown with statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> Result<(String, DocumentStats)> {
        self.options.collect_stats = true;
        let content = self.render_internal(doc)?;
        Ok((content, self.stats))
    }

    fn render_internal(&mut self, doc: &Document) -> Result<String> {
        let mut output = String::new();

        if self.options.include_frontmatter {
            output.push_str(&doc.metadata.to_yaml_frontmatter());
        }

        for block in doc.blocks() {
            if self.options.collect_stats {
                self.stats.add_block(block);
            }
            self.render_block(&mut output, block);
        }

        log::debug!("rendered {} bytes of markdown", output.len());
        Ok(output.trim().to_string())
    }

    fn render_block(&self, output: &mut String, block: &Block) {
        match block {
            Block::Heading(h) => self.render_heading(output, h),
            Block::Paragraph(p) => self.render_paragraph(output, p),
            Block::Rule => output.push_str("\n---\n\n"),
        }
    }

    fn render_heading(&self, output: &mut String, heading: &Heading) {
        // Title maps to `#`, Heading n to n + 1 hashes.
        let depth = heading.level.saturating_add(1).min(self.options.max_heading_level);
        output.push_str(&"#".repeat(depth as usize));
        output.push(' ');
        // Headings are single-line in Markdown.
        let mut line = String::new();
        self.render_runs(&mut line, &heading.runs, false);
        output.push_str(line.trim());
        output.push_str("\n\n");
    }

    fn render_paragraph(&self, output: &mut String, para: &Paragraph) {
        if para.is_empty() {
            return;
        }
        self.render_runs(output, &para.runs, self.options.preserve_line_breaks);
        output.push_str("\n\n");
    }

    fn render_runs(&self, output: &mut String, runs: &[TextRun], hard_breaks: bool) {
        for run in coalesce(runs) {
            let text = if self.options.escape_special_chars {
                escape_markdown(&run.text)
            } else {
                run.text.clone()
            };

            // Emphasis cannot span a line break, so style each line on its own.
            let lines: Vec<String> = text
                .split('\n')
                .map(|line| apply_text_style(line, &run.style))
                .collect();
            let separator = if hard_breaks { "  \n" } else { " " };
            output.push_str(&lines.join(separator));
        }
    }
}

/// Merge neighbouring runs that share a style.
fn coalesce(runs: &[TextRun]) -> Vec<TextRun> {
    let mut merged: Vec<TextRun> = Vec::with_capacity(runs.len());
    for run in runs {
        match merged.last_mut() {
            Some(last) if last.style == run.style => last.text.push_str(&run.text),
            _ => merged.push(run.clone()),
        }
    }
    merged
}

/// Wrap the non-whitespace core of `text` in emphasis markers.
fn apply_text_style(text: &str, style: &TextStyle) -> String {
    let core = text.trim();
    if core.is_empty() || !style.has_styling() {
        return text.to_string();
    }

    let start = text.len() - text.trim_start().len();
    let end = start + core.len();

    let mut styled = core.to_string();
    if style.italic {
        styled = format!("*{}*", styled);
    }
    if style.bold {
        styled = format!("**{}**", styled);
    }

    format!("{}{}{}", &text[..start], styled, &text[end..])
}

/// Escape special Markdown characters.
/// Only escape characters that could be misinterpreted as Markdown syntax.
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '|' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}
