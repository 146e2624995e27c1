//! End-to-end scenarios: documents on disk through to report rows

use field_engine::{EngineConfig, FieldEngine};
use pretty_assertions::assert_eq;
use shared_docs::{FlatRenderer, NoopRenderer};
use shared_types::{FieldLabel, Language, Obligation};
use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Flat rendering served from memory instead of LibreOffice
struct StaticRenderer(String);

impl FlatRenderer for StaticRenderer {
    fn render(&self, _path: &Path) -> Option<String> {
        Some(self.0.clone())
    }
}

fn paragraph(text: &str) -> String {
    format!(r#"<w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#, text)
}

fn colored_paragraph(text: &str, color: &str) -> String {
    format!(
        r#"<w:p><w:r><w:rPr><w:color w:val="{}"/></w:rPr><w:t>{}</w:t></w:r></w:p>"#,
        color, text
    )
}

fn write_docx(dir: &TempDir, name: &str, paragraphs: &[String]) -> PathBuf {
    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{}"><w:body>{}</w:body></w:document>"#,
        W_NS,
        paragraphs.concat()
    );

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("word/document.xml", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(document.as_bytes()).unwrap();
    let bytes = writer.finish().unwrap().into_inner();

    let path = dir.path().join(name);
    fs::write(&path, bytes).unwrap();
    path
}

fn write_text(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn engine() -> FieldEngine {
    FieldEngine::new(EngineConfig::default()).unwrap()
}

#[test]
fn numbered_placeholder_line() {
    let dir = TempDir::new().unwrap();
    let path = write_text(&dir, "cadastro.txt", "1.1 Nome completo: [________]\n");

    let fields = engine().extract_file(&path, &NoopRenderer).unwrap();

    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].index(), Some("1.1"));
    assert_eq!(fields[0].text(), "Nome completo: [________]");
    assert!(fields[0].field_type().contains(FieldLabel::Placeholder));
    assert_eq!(fields[0].obligation(), Obligation::Mandatory);
}

#[test]
fn alternative_without_style() {
    let dir = TempDir::new().unwrap();
    let path = write_docx(
        &dir,
        "cadastro.docx",
        &[paragraph("Data de nascimento OU idade aproximada")],
    );

    let report = engine().map_documents(&path, None, &NoopRenderer).unwrap();

    assert_eq!(
        report.records(),
        vec![vec![
            "",
            "Data de nascimento OU idade aproximada",
            "Alternativa",
            "Obrigatório",
            ""
        ]]
    );
}

#[test]
fn colored_run_marks_optional_choice() {
    let dir = TempDir::new().unwrap();
    let path = write_docx(
        &dir,
        "cadastro.docx",
        &[colored_paragraph("Observação do responsável", "C00000")],
    );

    let fields = engine().extract_file(&path, &NoopRenderer).unwrap();

    assert_eq!(fields[0].obligation(), Obligation::Optional);
    assert!(fields[0]
        .field_type()
        .render(Language::Portuguese)
        .contains("Escolha"));
}

#[test]
fn field_missing_from_compared_document() {
    let dir = TempDir::new().unwrap();
    let a = write_docx(
        &dir,
        "A.docx",
        &[paragraph("Nome completo"), paragraph("Endereço completo")],
    );
    let b = write_text(&dir, "B.txt", "1 NOME COMPLETO:\n2 Telefone\n");
    let renderer = StaticRenderer("1. Nome completo\n2. Endereço completo\n".to_string());

    let report = engine().map_documents(&a, Some(&b), &renderer).unwrap();

    assert_eq!(report.headers()[5..].to_vec(), vec!["ID (B)", "Presente em B?"]);
    assert_eq!(
        report.records(),
        vec![
            vec!["1.", "Nome completo", "Texto Fixo", "Obrigatório", "", "1", "Sim"],
            vec!["2.", "Endereço completo", "Texto Fixo", "Obrigatório", "", "X", "Não"],
        ]
    );
}

#[test]
fn english_report_labels() {
    let dir = TempDir::new().unwrap();
    let a = write_text(&dir, "A.txt", "1 Endereço completo\n");
    let b = write_text(&dir, "B.txt", "1 Telefone\n");
    let config = EngineConfig {
        language: Language::English,
        ..EngineConfig::default()
    };

    let report = FieldEngine::new(config)
        .unwrap()
        .map_documents(&a, Some(&b), &NoopRenderer)
        .unwrap();

    assert_eq!(report.headers()[6], "Present in B?");
    assert_eq!(report.records()[0][5..].to_vec(), vec!["X", "No"]);
}

#[test]
fn renderer_unavailable_leaves_locators_empty() {
    let dir = TempDir::new().unwrap();
    let path = write_docx(
        &dir,
        "cadastro.docx",
        &[
            paragraph("Identificação"),
            paragraph("Nome completo: [____]"),
            paragraph("CPF: XX"),
        ],
    );

    let report = engine().map_documents(&path, None, &NoopRenderer).unwrap();

    assert_eq!(report.rows.len(), 3);
    assert!(report.records().iter().all(|row| row[0].is_empty()));
}

#[test]
fn text_box_does_not_leak_into_anchor_paragraph() {
    let dir = TempDir::new().unwrap();
    let text_box = r#"<w:txbxContent><w:p><w:r><w:rPr><w:color w:val="FF0000"/></w:rPr><w:t>Caixa</w:t></w:r></w:p></w:txbxContent>"#;
    let anchor = format!(
        r#"<w:p><w:r><w:t>Nome completo</w:t></w:r><w:r><mc:AlternateContent xmlns:mc="http://schemas.openxmlformats.org/markup-compatibility/2006"><mc:Choice Requires="wps"><w:drawing>{0}</w:drawing></mc:Choice><mc:Fallback><w:pict>{0}</w:pict></mc:Fallback></mc:AlternateContent></w:r></w:p>"#,
        text_box
    );
    let path = write_docx(&dir, "cadastro.docx", &[anchor]);
    let renderer = StaticRenderer("1.1 Nome completo\n".to_string());

    let fields = engine().extract_file(&path, &renderer).unwrap();

    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].index(), Some("1.1"));
    assert_eq!(fields[0].text(), "Nome completo");
    assert_eq!(fields[0].obligation(), Obligation::Mandatory);
}

#[test]
fn text_file_with_byte_order_mark_keeps_first_locator() {
    let dir = TempDir::new().unwrap();
    let path = write_text(
        &dir,
        "cadastro.txt",
        "\u{feff}1.1 Nome completo: [____]\n1.2 Telefone\n",
    );

    let fields = engine().extract_file(&path, &NoopRenderer).unwrap();

    let rows: Vec<_> = fields.iter().map(|f| (f.index_or_empty(), f.text())).collect();
    assert_eq!(
        rows,
        vec![("1.1", "Nome completo: [____]"), ("1.2", "Telefone")]
    );
}
