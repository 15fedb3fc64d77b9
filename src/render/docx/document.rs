//! `word/document.xml` generation.

use crate::error::Result;
use crate::model::{Alignment, Block, Document, Heading, Paragraph, TextDirection, TextRun};
use std::fmt::Write as FmtWrite;

use super::escape_xml;

/// WordprocessingML main namespace.
pub const WML_MAIN: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Office relationships namespace.
pub const OFC_RELATIONSHIPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

// US Letter with 1" top/bottom and 1.25" side margins, in twentieths of a point.
const PAGE_WIDTH: u32 = 12240;
const PAGE_HEIGHT: u32 = 15840;
const MARGIN_VERTICAL: u32 = 1440;
const MARGIN_HORIZONTAL: u32 = 1800;
const HEADER_FOOTER_DISTANCE: u32 = 720;

/// Generate the main document part.
pub fn document_xml(doc: &Document) -> Result<String> {
    let direction = doc.defaults().direction;
    let mut xml = String::with_capacity(4096 + doc.len() * 512);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    write!(
        xml,
        r#"<w:document xmlns:w="{}" xmlns:r="{}"><w:body>"#,
        WML_MAIN, OFC_RELATIONSHIPS
    )?;

    for block in doc.blocks() {
        write_block(&mut xml, block, direction)?;
    }

    write_section_properties(&mut xml, direction)?;
    xml.push_str("</w:body></w:document>");

    Ok(xml)
}

fn write_block(xml: &mut String, block: &Block, direction: TextDirection) -> Result<()> {
    match block {
        Block::Heading(heading) => write_heading(xml, heading, direction),
        Block::Paragraph(para) => write_paragraph(xml, None, para, direction),
        Block::Rule => write_paragraph(xml, None, &Block::rule_paragraph(), direction),
    }
}

fn write_heading(xml: &mut String, heading: &Heading, direction: TextDirection) -> Result<()> {
    let para = Paragraph {
        runs: heading.runs.clone(),
        alignment: heading.alignment,
    };
    write_paragraph(xml, Some(&heading.style_id()), &para, direction)
}

fn write_paragraph(
    xml: &mut String,
    style_id: Option<&str>,
    para: &Paragraph,
    direction: TextDirection,
) -> Result<()> {
    let rtl = direction.is_rtl(&para.plain_text());

    xml.push_str("<w:p>");
    write_paragraph_properties(xml, style_id, para.alignment, rtl)?;
    for run in &para.runs {
        write_run(xml, run, rtl)?;
    }
    xml.push_str("</w:p>");

    Ok(())
}

fn write_paragraph_properties(
    xml: &mut String,
    style_id: Option<&str>,
    alignment: Option<Alignment>,
    rtl: bool,
) -> Result<()> {
    if style_id.is_none() && alignment.is_none() && !rtl {
        return Ok(());
    }

    // Child order follows the CT_PPr sequence: pStyle, bidi, jc.
    xml.push_str("<w:pPr>");
    if let Some(id) = style_id {
        write!(xml, r#"<w:pStyle w:val="{}"/>"#, escape_xml(id))?;
    }
    if rtl {
        xml.push_str("<w:bidi/>");
    }
    if let Some(alignment) = alignment {
        write!(xml, r#"<w:jc w:val="{}"/>"#, alignment.as_ooxml())?;
    }
    xml.push_str("</w:pPr>");

    Ok(())
}

/// Write a run, turning embedded `\n` into `<w:br/>` and `\t` into `<w:tab/>`.
fn write_run(xml: &mut String, run: &TextRun, rtl: bool) -> Result<()> {
    xml.push_str("<w:r>");

    if run.style.has_styling() || rtl {
        xml.push_str("<w:rPr>");
        if run.style.bold {
            xml.push_str("<w:b/><w:bCs/>");
        }
        if run.style.italic {
            xml.push_str("<w:i/><w:iCs/>");
        }
        if rtl {
            xml.push_str("<w:rtl/>");
        }
        xml.push_str("</w:rPr>");
    }

    for (i, line) in run.lines().enumerate() {
        if i > 0 {
            xml.push_str("<w:br/>");
        }
        for (j, segment) in line.split('\t').enumerate() {
            if j > 0 {
                xml.push_str("<w:tab/>");
            }
            if !segment.is_empty() {
                write!(
                    xml,
                    r#"<w:t xml:space="preserve">{}</w:t>"#,
                    escape_xml(segment)
                )?;
            }
        }
    }

    xml.push_str("</w:r>");
    Ok(())
}

fn write_section_properties(xml: &mut String, direction: TextDirection) -> Result<()> {
    xml.push_str("<w:sectPr>");
    write!(xml, r#"<w:pgSz w:w="{}" w:h="{}"/>"#, PAGE_WIDTH, PAGE_HEIGHT)?;
    write!(
        xml,
        r#"<w:pgMar w:top="{v}" w:right="{h}" w:bottom="{v}" w:left="{h}" w:header="{hf}" w:footer="{hf}" w:gutter="0"/>"#,
        v = MARGIN_VERTICAL,
        h = MARGIN_HORIZONTAL,
        hf = HEADER_FOOTER_DISTANCE
    )?;
    if direction == TextDirection::RightToLeft {
        xml.push_str("<w:bidi/>");
    }
    xml.push_str("</w:sectPr>");
    Ok(())
}
