//! Document model

use crate::package::write_package;
use crate::{DocxError, Result};
use log::debug;
use std::io::Cursor;
use std::path::Path;

/// A span of text with uniform formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    text: String,
    bold: bool,
}

impl Run {
    /// Plain run
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    /// Bold run
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }
}

/// A paragraph of runs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    runs: Vec<Run>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a run
    pub fn run(mut self, run: Run) -> Self {
        self.runs.push(run);
        self
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Concatenated text of all runs
    pub fn text(&self) -> String {
        self.runs.iter().map(Run::text).collect()
    }
}

/// A fixed-size grid of plain-text cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    rows: usize,
    columns: usize,
    cells: Vec<String>,
}

impl Table {
    /// Create an empty table
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![String::new(); rows * columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Set the text of a cell (0-indexed)
    pub fn set_cell(&mut self, row: usize, column: usize, text: impl Into<String>) -> Result<()> {
        let index = self.index(row, column)?;
        self.cells[index] = text.into();
        Ok(())
    }

    /// Text of a cell (0-indexed)
    pub fn cell(&self, row: usize, column: usize) -> Result<&str> {
        let index = self.index(row, column)?;
        Ok(&self.cells[index])
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: usize) -> &[String] {
        let start = row * self.columns;
        &self.cells[start..start + self.columns]
    }

    fn index(&self, row: usize, column: usize) -> Result<usize> {
        if row >= self.rows || column >= self.columns {
            return Err(DocxError::CellOutOfRange(row, column, self.rows, self.columns));
        }
        Ok(row * self.columns + column)
    }
}

/// Body content in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Level 0 is the document title, 1-9 are Heading1-Heading9
    Heading { level: u8, text: String },
    Paragraph(Paragraph),
    Table(Table),
}

/// A rich-text document
#[derive(Debug, Clone, Default)]
pub struct DocxDocument {
    blocks: Vec<Block>,
}

impl DocxDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a heading; levels above 9 are clamped
    pub fn add_heading(&mut self, text: impl Into<String>, level: u8) {
        self.blocks.push(Block::Heading {
            level: level.min(9),
            text: text.into(),
        });
    }

    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.blocks.push(Block::Paragraph(paragraph));
    }

    pub fn add_table(&mut self, table: Table) {
        self.blocks.push(Block::Table(table));
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Save the document to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        std::fs::write(path, &bytes)?;
        debug!("Wrote {} bytes of DOCX to {}", bytes.len(), path.display());
        Ok(())
    }

    /// Save the document to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut cursor = Cursor::new(Vec::new());
        write_package(&mut cursor, &self.blocks)?;
        Ok(cursor.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_paragraph_runs() {
        let mut doc = DocxDocument::new();
        doc.add_paragraph(
            Paragraph::new()
                .run(Run::bold("Summary: "))
                .run(Run::new("Client visited.")),
        );

        let Block::Paragraph(paragraph) = &doc.blocks()[0] else {
            panic!("expected a paragraph");
        };
        assert_eq!(paragraph.runs().len(), 2);
        assert!(paragraph.runs()[0].is_bold());
        assert!(!paragraph.runs()[1].is_bold());
        assert_eq!(paragraph.text(), "Summary: Client visited.");
    }

    #[test]
    fn test_table_cells() {
        let mut table = Table::new(3, 2);
        table.set_cell(0, 0, "File Ref:").unwrap();
        table.set_cell(2, 1, "Peter CHAN").unwrap();

        assert_eq!(table.cell(0, 0).unwrap(), "File Ref:");
        assert_eq!(table.cell(1, 1).unwrap(), "");
        assert_eq!(table.row(2), &["".to_string(), "Peter CHAN".to_string()]);
    }

    #[test]
    fn test_table_out_of_range() {
        let mut table = Table::new(3, 2);
        assert!(matches!(
            table.set_cell(3, 0, "x"),
            Err(DocxError::CellOutOfRange(3, 0, 3, 2))
        ));
        assert!(table.cell(0, 2).is_err());
    }

    #[test]
    fn test_heading_level_clamped() {
        let mut doc = DocxDocument::new();
        doc.add_heading("Deep", 12);
        assert_eq!(
            doc.blocks()[0],
            Block::Heading {
                level: 9,
                text: "Deep".to_string()
            }
        );
    }
}
