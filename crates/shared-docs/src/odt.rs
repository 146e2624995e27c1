//! ODT (OpenDocument Text) reader
//!
//! ODT input is handled as plain structure: only paragraph text is kept,
//! one line per `text:p`.

use crate::error::DocumentError;
use crate::model::PlainDocument;
use crate::read_part;
use roxmltree::Node;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use tracing::debug;
use zip::ZipArchive;

pub const TEXT_NS: &str = "urn:oasis:names:tc:opendocument:xmlns:text:1.0";
pub const OFFICE_NS: &str = "urn:oasis:names:tc:opendocument:xmlns:office:1.0";

const CONTENT_PART: &str = "content.xml";

pub fn read_odt(path: &Path) -> Result<PlainDocument, DocumentError> {
    let file = File::open(path)?;
    read_odt_from(BufReader::new(file))
}

pub fn read_odt_from<R: Read + Seek>(reader: R) -> Result<PlainDocument, DocumentError> {
    let mut archive =
        ZipArchive::new(reader).map_err(|e| DocumentError::Unreadable(e.to_string()))?;
    let content =
        read_part(&mut archive, CONTENT_PART)?.ok_or(DocumentError::MissingPart(CONTENT_PART))?;
    let doc = parse_content(&content)?;
    debug!("ODT loaded: {} paragraphs", doc.lines.len());
    Ok(doc)
}

/// Collect the text of every `text:p` of a `content.xml` part, in order
pub fn parse_content(xml: &str) -> Result<PlainDocument, DocumentError> {
    let doc = roxmltree::Document::parse(xml)
        .map_err(|e| DocumentError::Unreadable(format!("{}: {}", CONTENT_PART, e)))?;

    let lines = doc
        .descendants()
        .filter(|n| is_text(*n, "p") && !in_annotation(*n))
        .map(|p| {
            let mut line = String::new();
            push_text(p, &mut line);
            line
        })
        .collect();

    Ok(PlainDocument { lines })
}

fn push_text(node: Node, out: &mut String) {
    for child in node.children() {
        if child.is_text() {
            out.push_str(child.text().unwrap_or(""));
            continue;
        }
        if !child.is_element() {
            continue;
        }

        let tag = child.tag_name();
        match (tag.namespace(), tag.name()) {
            (Some(TEXT_NS), "s") => {
                let count = child
                    .attribute((TEXT_NS, "c"))
                    .and_then(|c| c.parse::<usize>().ok())
                    .unwrap_or(1);
                out.extend(std::iter::repeat(' ').take(count));
            }
            (Some(TEXT_NS), "tab") => out.push('\t'),
            (Some(TEXT_NS), "line-break") => out.push('\n'),
            // Comment bodies are not part of the visible text
            (Some(OFFICE_NS), "annotation") => {}
            _ => push_text(child, out),
        }
    }
}

fn in_annotation(node: Node) -> bool {
    node.ancestors().any(|a| {
        a.tag_name().namespace() == Some(OFFICE_NS) && a.tag_name().name() == "annotation"
    })
}

fn is_text(node: Node, name: &str) -> bool {
    node.is_element()
        && node.tag_name().namespace() == Some(TEXT_NS)
        && node.tag_name().name() == name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::tests::build_package;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn content_xml(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-content xmlns:office="{}" xmlns:text="{}">
<office:body><office:text>{}</office:text></office:body>
</office:document-content>"#,
            OFFICE_NS, TEXT_NS, body
        )
    }

    #[test]
    fn test_expands_spacing_elements() {
        let doc = parse_content(&content_xml(
            r#"<text:p>1.1<text:s text:c="2"/>Nome<text:tab/>[__]</text:p>"#,
        ))
        .unwrap();
        assert_eq!(doc.lines, vec!["1.1  Nome\t[__]"]);
    }

    #[test]
    fn test_recurses_into_spans() {
        let doc = parse_content(&content_xml(
            r#"<text:p>Data <text:span text:style-name="T1">OU</text:span> idade</text:p>
               <text:p/>"#,
        ))
        .unwrap();
        assert_eq!(doc.lines, vec!["Data OU idade", ""]);
    }

    #[test]
    fn test_skips_annotation_bodies() {
        let doc = parse_content(&content_xml(
            r#"<text:p>Campo<office:annotation><text:p>nota</text:p></office:annotation></text:p>"#,
        ))
        .unwrap();
        assert_eq!(doc.lines, vec!["Campo"]);
    }

    #[test]
    fn test_reads_package() {
        let content = content_xml(r#"<text:p>2.1 Endereço</text:p>"#);
        let bytes = build_package(&[("content.xml", content.as_str())]);
        let doc = read_odt_from(Cursor::new(bytes)).unwrap();
        assert_eq!(doc.lines, vec!["2.1 Endereço"]);
    }
}
