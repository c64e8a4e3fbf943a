//! Text and path operator generation

use crate::document::Color;

/// Context for rendering text
pub struct TextRenderContext {
    /// PDF font resource name (e.g., "F1")
    pub font_name: String,
    /// Font size in points
    pub font_size: f32,
    /// Text color (RGB)
    pub color: Color,
}

/// Encode text as a PDF literal string for a WinAnsi-encoded font
///
/// Delimiters and backslashes are escaped, Latin-1 characters are written
/// as octal escapes and anything outside WinAnsi becomes `?`.
///
/// # Examples
/// ```
/// use pdf_core::encode_literal;
/// assert_eq!(encode_literal("HKD $4,500"), "(HKD $4,500)");
/// assert_eq!(encode_literal("a (b)"), "(a \\(b\\))");
/// ```
pub fn encode_literal(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 2);
    result.push('(');
    for c in text.chars() {
        match c {
            '(' | ')' | '\\' => {
                result.push('\\');
                result.push(c);
            }
            ' '..='~' => result.push(c),
            '\u{a0}'..='\u{ff}' => result.push_str(&format!("\\{:03o}", c as u32)),
            _ => result.push('?'),
        }
    }
    result.push(')');
    result
}

/// Generate PDF operators for text insertion
///
/// Creates the PDF text operators (BT, rg, Tf, Td, Tj, ET) to render text
/// with its baseline starting at a specific position.
///
/// # Arguments
/// * `literal` - Encoded literal string (see [`encode_literal`])
/// * `x` - X coordinate in points (PDF coordinates, from left)
/// * `y` - Y coordinate in points (PDF coordinates, from bottom)
/// * `ctx` - Text rendering context
pub fn generate_text_operators(literal: &str, x: f64, y: f64, ctx: &TextRenderContext) -> Vec<u8> {
    let mut ops = String::new();

    ops.push_str("BT\n");
    ops.push_str(&format!(
        "{} {} {} rg\n",
        ctx.color.r, ctx.color.g, ctx.color.b
    ));
    ops.push_str(&format!("/{} {} Tf\n", ctx.font_name, ctx.font_size));
    ops.push_str(&format!("{x} {y} Td\n"));
    ops.push_str(&format!("{literal} Tj\n"));
    ops.push_str("ET\n");

    ops.into_bytes()
}

/// Generate PDF operators for a single stroked line segment
///
/// The graphics state is saved and restored around the path so line width
/// and stroke color do not leak into later operators.
pub fn generate_line_operators(
    from: (f64, f64),
    to: (f64, f64),
    width: f64,
    color: Color,
) -> Vec<u8> {
    let mut ops = String::new();

    ops.push_str("q\n");
    ops.push_str(&format!("{width} w\n"));
    ops.push_str(&format!("{} {} {} RG\n", color.r, color.g, color.b));
    ops.push_str(&format!("{} {} m\n", from.0, from.1));
    ops.push_str(&format!("{} {} l\n", to.0, to.1));
    ops.push_str("S\n");
    ops.push_str("Q\n");

    ops.into_bytes()
}
