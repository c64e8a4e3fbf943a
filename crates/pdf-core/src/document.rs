//! PDF Document builder

use crate::text::{encode_literal, generate_line_operators, generate_text_operators, TextRenderContext};
use crate::{PdfError, Result, StandardFont};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::path::Path;

/// RGB Color (values 0.0 - 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a new RGB color (values 0.0 - 1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Black color
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }
}

/// Stroke width of drawn lines, in points
const LINE_WIDTH: f64 = 1.0;

/// Page dimensions in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    /// ISO A4 (210 x 297 mm)
    pub const A4: PageSize = PageSize {
        width: 595.2756,
        height: 841.8898,
    };
}

/// Operators and font usage for one page
#[derive(Debug, Default)]
struct PageBuffer {
    content: Vec<u8>,
    fonts: BTreeSet<StandardFont>,
}

/// PDF Document builder providing high-level drawing operations
///
/// Content is buffered per page and the lopdf object graph is only built
/// when the document is saved.
pub struct PdfDocument {
    /// Media box shared by every page
    page_size: PageSize,
    /// Buffered content per page (index 0 is page 1)
    pages: Vec<PageBuffer>,
    /// Current font
    current_font: Option<StandardFont>,
    /// Current font size
    current_font_size: f32,
    /// Document title for the Info dictionary
    title: Option<String>,
}

impl PdfDocument {
    /// Create a new document with a single blank page
    ///
    /// # Example
    /// ```
    /// use pdf_core::{PageSize, PdfDocument};
    /// let doc = PdfDocument::new(PageSize::A4);
    /// assert_eq!(doc.page_count(), 1);
    /// ```
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            pages: vec![PageBuffer::default()],
            current_font: None,
            current_font_size: 12.0,
            title: None,
        }
    }

    /// Get the number of pages in the document
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Page size shared by all pages
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Append a blank page and return its page number (1-indexed)
    pub fn add_blank_page(&mut self) -> usize {
        self.pages.push(PageBuffer::default());
        self.pages.len()
    }

    /// Set the document title written to the Info dictionary
    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    /// Set the current font and size
    pub fn set_font(&mut self, font: StandardFont, size: f32) {
        self.current_font = Some(font);
        self.current_font_size = size;
    }

    /// Insert text with its baseline at a specific position
    ///
    /// # Arguments
    /// * `text` - Text to insert
    /// * `page` - Page number (1-indexed)
    /// * `x` - X coordinate in points
    /// * `y` - Y coordinate in points (from bottom)
    pub fn insert_text(&mut self, text: &str, page: usize, x: f64, y: f64) -> Result<()> {
        let index = self.page_index(page)?;

        // Skip empty text - nothing to render
        if text.is_empty() {
            return Ok(());
        }

        let font = self.current_font.ok_or(PdfError::FontNotSet)?;
        let ctx = TextRenderContext {
            font_name: font.resource_name().to_string(),
            font_size: self.current_font_size,
            color: Color::black(),
        };
        let ops = generate_text_operators(&encode_literal(text), x, y, &ctx);

        let buffer = &mut self.pages[index];
        buffer.fonts.insert(font);
        buffer.content.extend_from_slice(&ops);

        Ok(())
    }

    /// Draw a straight black line, 1pt wide
    pub fn draw_line(&mut self, page: usize, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<()> {
        let index = self.page_index(page)?;
        let ops = generate_line_operators((x1, y1), (x2, y2), LINE_WIDTH, Color::black());
        self.pages[index].content.extend_from_slice(&ops);
        Ok(())
    }

    /// Raw (uncompressed) content operators buffered for a page
    pub fn page_content(&self, page: usize) -> Result<&[u8]> {
        let index = self.page_index(page)?;
        Ok(&self.pages[index].content)
    }

    /// Save the document to a file
    ///
    /// # Arguments
    /// * `path` - Output file path
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut doc = self.build()?;
        doc.save(path)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;
        Ok(())
    }

    /// Save the document to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut doc = self.build()?;

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;

        Ok(buffer)
    }

    fn page_index(&self, page: usize) -> Result<usize> {
        if page == 0 || page > self.pages.len() {
            return Err(PdfError::InvalidPage(page, self.pages.len()));
        }
        Ok(page - 1)
    }

    /// Build the lopdf object graph: catalog, page tree, fonts, content streams
    fn build(&self) -> Result<Document> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        // One font object per face, shared by every page that uses it
        let used_fonts: BTreeSet<StandardFont> = self
            .pages
            .iter()
            .flat_map(|page| page.fonts.iter().copied())
            .collect();
        let font_ids: BTreeMap<StandardFont, ObjectId> = used_fonts
            .into_iter()
            .map(|font| (font, doc.add_object(font.to_pdf_dict())))
            .collect();

        let mut kids = Vec::with_capacity(self.pages.len());
        for page in &self.pages {
            let mut font_resources = Dictionary::new();
            for font in &page.fonts {
                if let Some(id) = font_ids.get(font) {
                    font_resources.set(font.resource_name(), Object::Reference(*id));
                }
            }

            let content_id = doc.add_object(compress_content(&page.content)?);
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(self.page_size.width as _),
                    Object::Real(self.page_size.height as _),
                ],
                "Resources" => dictionary! { "Font" => font_resources },
                "Contents" => content_id,
            });
            kids.push(Object::Reference(page_id));
        }

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Count" => self.pages.len() as i64,
                "Kids" => kids,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        if let Some(title) = &self.title {
            let info_id = doc.add_object(dictionary! {
                "Title" => Object::string_literal(title.as_str()),
                "Producer" => Object::string_literal("pdf-core"),
            });
            doc.trailer.set("Info", info_id);
        }

        Ok(doc)
    }
}

/// Flate-compress a content stream
fn compress_content(content: &[u8]) -> Result<Stream> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(content)?;
    let compressed = encoder.finish()?;

    Ok(Stream::new(
        dictionary! { "Filter" => "FlateDecode" },
        compressed,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_creation() {
        let doc = PdfDocument::new(PageSize::A4);
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.page_size(), PageSize::A4);
    }

    #[test]
    fn test_add_blank_page() {
        let mut doc = PdfDocument::new(PageSize::A4);
        assert_eq!(doc.add_blank_page(), 2);
        assert_eq!(doc.page_count(), 2);
    }

    #[test]
    fn test_insert_text_requires_font() {
        let mut doc = PdfDocument::new(PageSize::A4);
        let result = doc.insert_text("Hello", 1, 50.0, 700.0);
        assert!(matches!(result, Err(PdfError::FontNotSet)));
    }

    #[test]
    fn test_insert_text_invalid_page() {
        let mut doc = PdfDocument::new(PageSize::A4);
        doc.set_font(StandardFont::Helvetica, 12.0);
        assert!(matches!(
            doc.insert_text("Hello", 0, 50.0, 700.0),
            Err(PdfError::InvalidPage(0, 1))
        ));
        assert!(matches!(
            doc.insert_text("Hello", 2, 50.0, 700.0),
            Err(PdfError::InvalidPage(2, 1))
        ));
    }

    #[test]
    fn test_insert_empty_text_is_noop() {
        let mut doc = PdfDocument::new(PageSize::A4);
        doc.insert_text("", 1, 50.0, 700.0).unwrap();
        assert!(doc.page_content(1).unwrap().is_empty());
    }

    #[test]
    fn test_insert_text_buffers_operators() {
        let mut doc = PdfDocument::new(PageSize::A4);
        doc.set_font(StandardFont::HelveticaBold, 18.0);
        doc.insert_text("TITLE", 1, 50.0, 780.0).unwrap();

        let content = String::from_utf8(doc.page_content(1).unwrap().to_vec()).unwrap();
        assert!(content.contains("/F2 18 Tf"));
        assert!(content.contains("50 780 Td"));
        assert!(content.contains("(TITLE) Tj"));
    }

    #[test]
    fn test_draw_line_is_black_and_thin() {
        let mut doc = PdfDocument::new(PageSize::A4);
        doc.draw_line(1, 50.0, 100.0, 250.0, 100.0).unwrap();

        let content = String::from_utf8(doc.page_content(1).unwrap().to_vec()).unwrap();
        assert!(content.contains("1 w\n0 0 0 RG"));
        assert!(content.contains("50 100 m"));
        assert!(content.contains("250 100 l"));
    }
}
