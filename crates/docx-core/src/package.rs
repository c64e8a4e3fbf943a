//! OPC zip packaging

use crate::document::Block;
use crate::xml;
use crate::Result;
use std::io::{Seek, Write};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Part names in the order they are written
pub(crate) const PARTS: [&str; 6] = [
    "[Content_Types].xml",
    "_rels/.rels",
    "word/document.xml",
    "word/styles.xml",
    "word/_rels/document.xml.rels",
    "docProps/core.xml",
];

/// Write a complete WordprocessingML package
pub(crate) fn write_package<W: Write + Seek>(writer: W, blocks: &[Block]) -> Result<()> {
    let mut zip = ZipWriter::new(writer);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    let document = xml::document_xml(blocks);
    let styles = xml::styles_xml();
    let contents: [&str; 6] = [
        xml::content_types_xml(),
        xml::package_rels_xml(),
        &document,
        &styles,
        xml::document_rels_xml(),
        xml::core_properties_xml(),
    ];

    for (name, content) in PARTS.iter().zip(contents) {
        zip.start_file(*name, options)?;
        zip.write_all(content.as_bytes())?;
    }

    zip.finish()?;
    Ok(())
}
