//! Integration tests for pdf-core
//!
//! These tests verify end-to-end functionality by reloading the written
//! bytes with lopdf.

use lopdf::Document;
use pdf_core::{PageSize, PdfDocument, PdfError, StandardFont};

/// Decompressed content of a page in a reloaded document
fn reloaded_page_content(bytes: &[u8], page: u32) -> String {
    let doc = Document::load_mem(bytes).expect("Failed to reload PDF");
    let pages = doc.get_pages();
    let page_id = *pages.get(&page).expect("Page missing");
    let content = doc.get_page_content(page_id).expect("Failed to read content");
    String::from_utf8_lossy(&content).into_owned()
}

#[test]
fn test_empty_document_roundtrip() {
    let doc = PdfDocument::new(PageSize::A4);
    let bytes = doc.to_bytes().expect("Failed to save PDF");

    assert!(bytes.starts_with(b"%PDF-1.5"));
    let reloaded = Document::load_mem(&bytes).expect("Failed to reload PDF");
    assert_eq!(reloaded.get_pages().len(), 1);
}

#[test]
fn test_text_survives_compression() {
    let mut doc = PdfDocument::new(PageSize::A4);
    doc.set_font(StandardFont::HelveticaBold, 18.0);
    doc.insert_text("RESIDENTIAL TENANCY AGREEMENT", 1, 50.0, 780.0)
        .expect("Failed to insert text");
    doc.set_font(StandardFont::Helvetica, 12.0);
    doc.insert_text("Premises: Flat A, 12/F (Block 3)", 1, 50.0, 700.0)
        .expect("Failed to insert text");

    let bytes = doc.to_bytes().expect("Failed to save PDF");
    let content = reloaded_page_content(&bytes, 1);

    assert!(content.contains("(RESIDENTIAL TENANCY AGREEMENT) Tj"));
    assert!(content.contains(r"(Premises: Flat A, 12/F \(Block 3\)) Tj"));
    assert!(content.contains("/F2 18 Tf"));
    assert!(content.contains("/F1 12 Tf"));
}

#[test]
fn test_font_resources_are_registered() {
    let mut doc = PdfDocument::new(PageSize::A4);
    doc.set_font(StandardFont::Helvetica, 12.0);
    doc.insert_text("Hello", 1, 50.0, 700.0).unwrap();

    let bytes = doc.to_bytes().unwrap();
    let reloaded = Document::load_mem(&bytes).unwrap();
    let page_id = *reloaded.get_pages().get(&1).unwrap();
    let fonts = reloaded.get_page_fonts(page_id);

    assert_eq!(fonts.len(), 1);
    let font = fonts.get(b"F1".as_slice()).expect("F1 missing");
    assert_eq!(font.get(b"BaseFont").unwrap().as_name().unwrap(), b"Helvetica");
}

#[test]
fn test_text_on_multiple_pages() {
    let mut doc = PdfDocument::new(PageSize::A4);
    let second = doc.add_blank_page();
    doc.set_font(StandardFont::Helvetica, 12.0);
    doc.insert_text("Page one", 1, 50.0, 700.0).unwrap();
    doc.insert_text("Page two", second, 50.0, 700.0).unwrap();

    let bytes = doc.to_bytes().unwrap();
    assert_eq!(Document::load_mem(&bytes).unwrap().get_pages().len(), 2);
    assert!(reloaded_page_content(&bytes, 1).contains("(Page one)"));
    assert!(reloaded_page_content(&bytes, 2).contains("(Page two)"));
    assert!(!reloaded_page_content(&bytes, 2).contains("(Page one)"));
}

#[test]
fn test_lines_are_written() {
    let mut doc = PdfDocument::new(PageSize::A4);
    doc.draw_line(1, 50.0, 100.0, 250.0, 100.0).unwrap();
    doc.draw_line(1, 350.0, 100.0, 550.0, 100.0).unwrap();

    let content = reloaded_page_content(&doc.to_bytes().unwrap(), 1);
    assert_eq!(content.matches(" l\nS\n").count(), 2);
}

#[test]
fn test_title_in_info_dictionary() {
    let mut doc = PdfDocument::new(PageSize::A4);
    doc.set_title("tenancy_101");

    let bytes = doc.to_bytes().unwrap();
    let reloaded = Document::load_mem(&bytes).unwrap();
    let info_id = reloaded.trailer.get(b"Info").unwrap().as_reference().unwrap();
    let info = reloaded.get_dictionary(info_id).unwrap();
    assert_eq!(info.get(b"Title").unwrap().as_str().unwrap(), b"tenancy_101");
}

#[test]
fn test_save_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.pdf");

    let mut doc = PdfDocument::new(PageSize::A4);
    doc.set_font(StandardFont::Helvetica, 12.0);
    doc.insert_text("Saved", 1, 50.0, 700.0).unwrap();
    doc.save(&path).expect("Failed to save PDF");

    let bytes = std::fs::read(&path).unwrap();
    assert!(reloaded_page_content(&bytes, 1).contains("(Saved) Tj"));
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.pdf");

    let doc = PdfDocument::new(PageSize::A4);
    assert!(matches!(doc.save(&path), Err(PdfError::SaveError(_))));
}
