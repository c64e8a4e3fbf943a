//! WordprocessingML part generation

use crate::document::{Block, Paragraph, Table};

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Usable text width of a Letter page with 1.25" side margins, in twentieths of a point
const TEXT_WIDTH_TWIPS: usize = 8640;

/// Escape text for XML character data and attribute values
///
/// # Examples
/// ```
/// use docx_core::escape;
/// assert_eq!(escape("Tom & Jerry <3"), "Tom &amp; Jerry &lt;3");
/// ```
pub fn escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            _ => result.push(c),
        }
    }
    result
}

/// Paragraph style id for a heading level
pub(crate) fn heading_style(level: u8) -> String {
    if level == 0 {
        "Title".to_string()
    } else {
        format!("Heading{level}")
    }
}

/// `word/document.xml`
pub(crate) fn document_xml(blocks: &[Block]) -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    xml.push_str(&format!(r#"<w:document xmlns:w="{W_NS}"><w:body>"#));

    for block in blocks {
        match block {
            Block::Heading { level, text } => {
                xml.push_str(&format!(
                    r#"<w:p><w:pPr><w:pStyle w:val="{}"/></w:pPr>{}</w:p>"#,
                    heading_style(*level),
                    run_xml(text, false)
                ));
            }
            Block::Paragraph(paragraph) => xml.push_str(&paragraph_xml(paragraph)),
            Block::Table(table) => xml.push_str(&table_xml(table)),
        }
    }

    xml.push_str(concat!(
        r#"<w:sectPr><w:pgSz w:w="12240" w:h="15840"/>"#,
        r#"<w:pgMar w:top="1440" w:right="1800" w:bottom="1440" w:left="1800" w:header="720" w:footer="720" w:gutter="0"/>"#,
        r#"</w:sectPr>"#,
    ));
    xml.push_str("</w:body></w:document>");
    xml
}

fn run_xml(text: &str, bold: bool) -> String {
    let properties = if bold { "<w:rPr><w:b/></w:rPr>" } else { "" };
    format!(
        r#"<w:r>{properties}<w:t xml:space="preserve">{}</w:t></w:r>"#,
        escape(text)
    )
}

fn paragraph_xml(paragraph: &Paragraph) -> String {
    let runs: String = paragraph
        .runs()
        .iter()
        .map(|run| run_xml(run.text(), run.is_bold()))
        .collect();
    format!("<w:p>{runs}</w:p>")
}

fn table_xml(table: &Table) -> String {
    let column_width = TEXT_WIDTH_TWIPS / table.columns().max(1);

    let mut xml = String::new();
    xml.push_str(r#"<w:tbl><w:tblPr><w:tblStyle w:val="TableGrid"/><w:tblW w:w="0" w:type="auto"/></w:tblPr>"#);

    xml.push_str("<w:tblGrid>");
    for _ in 0..table.columns() {
        xml.push_str(&format!(r#"<w:gridCol w:w="{column_width}"/>"#));
    }
    xml.push_str("</w:tblGrid>");

    for row in 0..table.rows() {
        xml.push_str("<w:tr>");
        for text in table.row(row) {
            xml.push_str(&format!(
                r#"<w:tc><w:tcPr><w:tcW w:w="{column_width}" w:type="dxa"/></w:tcPr><w:p>{}</w:p></w:tc>"#,
                run_xml(text, false)
            ));
        }
        xml.push_str("</w:tr>");
    }

    xml.push_str("</w:tbl>");
    xml
}

/// `word/styles.xml`: Normal, Title, Heading1-9 and TableGrid
pub(crate) fn styles_xml() -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    xml.push_str(&format!(r#"<w:styles xmlns:w="{W_NS}">"#));

    xml.push_str(concat!(
        r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal">"#,
        r#"<w:name w:val="Normal"/><w:qFormat/>"#,
        r#"<w:rPr><w:sz w:val="22"/></w:rPr></w:style>"#,
    ));
    xml.push_str(concat!(
        r#"<w:style w:type="paragraph" w:styleId="Title">"#,
        r#"<w:name w:val="Title"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/>"#,
        r#"<w:pPr><w:spacing w:after="300"/></w:pPr>"#,
        r#"<w:rPr><w:color w:val="17365D"/><w:sz w:val="52"/></w:rPr></w:style>"#,
    ));
    for level in 1..=9u8 {
        // Sizes in half-points: 14pt for level 1 down to 11pt
        let size = 28u8.saturating_sub(2 * (level - 1)).max(22);
        xml.push_str(&format!(
            concat!(
                r#"<w:style w:type="paragraph" w:styleId="Heading{level}">"#,
                r#"<w:name w:val="heading {level}"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/>"#,
                r#"<w:pPr><w:keepNext/><w:spacing w:before="480"/><w:outlineLvl w:val="{outline}"/></w:pPr>"#,
                r#"<w:rPr><w:b/><w:color w:val="365F91"/><w:sz w:val="{size}"/></w:rPr></w:style>"#,
            ),
            level = level,
            outline = level - 1,
            size = size,
        ));
    }
    xml.push_str(concat!(
        r#"<w:style w:type="table" w:styleId="TableGrid">"#,
        r#"<w:name w:val="Table Grid"/><w:tblPr><w:tblBorders>"#,
        r#"<w:top w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
        r#"<w:left w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
        r#"<w:bottom w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
        r#"<w:right w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
        r#"<w:insideH w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
        r#"<w:insideV w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
        r#"</w:tblBorders></w:tblPr></w:style>"#,
    ));

    xml.push_str("</w:styles>");
    xml
}

/// `[Content_Types].xml`
pub(crate) fn content_types_xml() -> &'static str {
    concat!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
        "\n",
        r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
        r#"<Default Extension="xml" ContentType="application/xml"/>"#,
        r#"<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>"#,
        r#"<Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>"#,
        r#"<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>"#,
        r#"</Types>"#,
    )
}

/// `_rels/.rels`
pub(crate) fn package_rels_xml() -> &'static str {
    concat!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
        "\n",
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>"#,
        r#"<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>"#,
        r#"</Relationships>"#,
    )
}

/// `word/_rels/document.xml.rels`
pub(crate) fn document_rels_xml() -> &'static str {
    concat!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
        "\n",
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>"#,
        r#"</Relationships>"#,
    )
}

/// `docProps/core.xml`
pub(crate) fn core_properties_xml() -> &'static str {
    concat!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
        "\n",
        r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
        r#"xmlns:dc="http://purl.org/dc/elements/1.1/">"#,
        r#"<dc:creator>docx-core</dc:creator>"#,
        r#"</cp:coreProperties>"#,
    )
}
