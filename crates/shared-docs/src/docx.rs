//! DOCX (WordprocessingML) reader
//!
//! Lowers `word/document.xml` into [`ParagraphNode`]s, keeping only the
//! attributes used for optionality detection, and loads the comment table
//! from `word/comments.xml` when the package has one.

use crate::annotations::AnnotationStore;
use crate::error::DocumentError;
use crate::model::{ParagraphNode, RichDocument, RunColor, RunNode};
use crate::{read_part, ReadOptions};
use roxmltree::Node;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use tracing::{debug, warn};
use zip::ZipArchive;

pub const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const DOCUMENT_PART: &str = "word/document.xml";
const COMMENTS_PART: &str = "word/comments.xml";

pub fn read_docx(path: &Path, options: &ReadOptions) -> Result<RichDocument, DocumentError> {
    let file = File::open(path)?;
    read_docx_from(BufReader::new(file), options)
}

pub fn read_docx_from<R: Read + Seek>(
    reader: R,
    options: &ReadOptions,
) -> Result<RichDocument, DocumentError> {
    let mut archive =
        ZipArchive::new(reader).map_err(|e| DocumentError::Unreadable(e.to_string()))?;

    let body = read_part(&mut archive, DOCUMENT_PART)?
        .ok_or(DocumentError::MissingPart(DOCUMENT_PART))?;
    let paragraphs = parse_body(&body, options)?;

    let annotations = match read_part(&mut archive, COMMENTS_PART) {
        Ok(Some(xml)) => AnnotationStore::from_comments_xml(&xml),
        Ok(None) => AnnotationStore::default(),
        Err(e) => {
            warn!("Ignoring comments part: {}", e);
            AnnotationStore::default()
        }
    };

    debug!(
        "DOCX loaded: {} paragraphs, {} comments",
        paragraphs.len(),
        annotations.len()
    );

    Ok(RichDocument {
        paragraphs,
        annotations,
    })
}

/// Parse the main document part into body-level paragraphs
pub fn parse_body(xml: &str, options: &ReadOptions) -> Result<Vec<ParagraphNode>, DocumentError> {
    let doc = roxmltree::Document::parse(xml)
        .map_err(|e| DocumentError::Unreadable(format!("{}: {}", DOCUMENT_PART, e)))?;

    let body = doc
        .root_element()
        .children()
        .find(|n| is_w(*n, "body"))
        .ok_or_else(|| DocumentError::Unreadable(format!("{}: no w:body", DOCUMENT_PART)))?;

    let mut paragraphs = Vec::new();
    collect_paragraphs(body, options.include_table_paragraphs, &mut paragraphs);
    Ok(paragraphs)
}

fn collect_paragraphs(parent: Node, include_tables: bool, out: &mut Vec<ParagraphNode>) {
    for child in parent.children() {
        if is_w(child, "p") {
            out.push(paragraph_node(child));
        } else if include_tables && is_w(child, "tbl") {
            for row in child.children().filter(|n| is_w(*n, "tr")) {
                for cell in row.children().filter(|n| is_w(*n, "tc")) {
                    collect_paragraphs(cell, include_tables, out);
                }
            }
        }
    }
}

/// Inline wrappers whose runs belong to the enclosing paragraph.
/// Drawings, VML pictures and alternate content (text boxes) are not among
/// them: their runs belong to the nested text box paragraphs.
const RUN_CONTAINERS: &[&str] = &[
    "hyperlink",
    "ins",
    "smartTag",
    "fldSimple",
    "customXml",
    "sdt",
    "sdtContent",
];

fn paragraph_node(p: Node) -> ParagraphNode {
    let style = w_child(p, "pPr")
        .and_then(|ppr| w_child(ppr, "pStyle"))
        .and_then(|s| w_attr(s, "val"));

    let mut run_elements = Vec::new();
    collect_runs(p, &mut run_elements);

    let comment_refs = run_elements
        .iter()
        .flat_map(|r| r.children())
        .filter(|n| is_w(*n, "commentReference"))
        .filter_map(|r| w_attr(r, "id"))
        .collect();

    let runs: Vec<RunNode> = run_elements.into_iter().map(run_node).collect();

    ParagraphNode {
        text: runs.iter().map(|r| r.text.as_str()).collect(),
        style,
        runs,
        comment_refs,
    }
}

fn collect_runs<'a, 'input>(parent: Node<'a, 'input>, out: &mut Vec<Node<'a, 'input>>) {
    for child in parent.children() {
        if is_w(child, "r") {
            out.push(child);
        } else if RUN_CONTAINERS.iter().any(|name| is_w(child, name)) {
            collect_runs(child, out);
        }
    }
}

fn run_node(r: Node) -> RunNode {
    let mut text = String::new();
    for child in r.children().filter(|n| n.is_element()) {
        if child.tag_name().namespace() != Some(W_NS) {
            continue;
        }
        match child.tag_name().name() {
            "t" => text.push_str(child.text().unwrap_or("")),
            "tab" | "ptab" => text.push('\t'),
            "br" | "cr" => text.push('\n'),
            "noBreakHyphen" => text.push('-'),
            _ => {}
        }
    }

    let rpr = w_child(r, "rPr");
    let prop = |name: &str| rpr.and_then(|rpr| w_child(rpr, name));

    RunNode {
        text,
        style: prop("rStyle").and_then(|s| w_attr(s, "val")),
        color: prop("color").map(|c| RunColor {
            value: w_attr(c, "val"),
            theme: w_attr(c, "themeColor"),
        }),
        highlight: prop("highlight").and_then(|h| w_attr(h, "val")),
        shading_fill: prop("shd").and_then(|s| w_attr(s, "fill")),
    }
}

pub(crate) fn is_w(node: Node, name: &str) -> bool {
    node.is_element()
        && node.tag_name().namespace() == Some(W_NS)
        && node.tag_name().name() == name
}

pub(crate) fn w_child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| is_w(*n, name))
}

pub(crate) fn w_attr(node: Node, name: &str) -> Option<String> {
    node.attribute((W_NS, name)).map(str::to_string)
}
