//! Standard Type1 fonts
//!
//! Only the base-14 Helvetica faces are supported. They need no embedding,
//! so the document stays small and every viewer can render it.

use lopdf::{dictionary, Dictionary};

/// One of the standard (non-embedded) Helvetica faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
}

impl StandardFont {
    /// PostScript name written to `/BaseFont`
    pub fn base_font(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Resource name used in content streams (e.g. `/F1 12 Tf`)
    pub fn resource_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "F1",
            StandardFont::HelveticaBold => "F2",
        }
    }

    /// Font dictionary for the page resources
    pub fn to_pdf_dict(&self) -> Dictionary {
        dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => self.base_font(),
            "Encoding" => "WinAnsiEncoding",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_names_are_distinct() {
        assert_ne!(
            StandardFont::Helvetica.resource_name(),
            StandardFont::HelveticaBold.resource_name()
        );
    }

    #[test]
    fn test_to_pdf_dict() {
        let dict = StandardFont::HelveticaBold.to_pdf_dict();
        let base = dict.get(b"BaseFont").unwrap().as_name().unwrap();
        assert_eq!(base, b"Helvetica-Bold");
        let subtype = dict.get(b"Subtype").unwrap().as_name().unwrap();
        assert_eq!(subtype, b"Type1");
    }
}
