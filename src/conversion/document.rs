//! Code list to PDF
//!
//! One US Letter page, one line per code, top to bottom. There is no
//! pagination: entries past the bottom edge are written below the page and
//! will not be visible.

use printpdf::{BuiltinFont, Mm, PdfDocument, Pt};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use super::RenderResult;

/// US Letter width in points
pub const PAGE_WIDTH_PT: f32 = 612.0;
/// US Letter height in points
pub const PAGE_HEIGHT_PT: f32 = 792.0;
/// Horizontal position of every line
pub const LEFT_MARGIN_PT: f32 = 100.0;
/// Vertical distance between consecutive lines
pub const LINE_HEIGHT_PT: f32 = 20.0;
pub const FONT_SIZE: f32 = 12.0;

/// Text written for one code
pub fn line_text(code: &str) -> String {
    format!("GTIN: {}", code)
}

/// Baseline of the line at `index` (0-based), in points from the page bottom
pub fn line_y(index: usize) -> f32 {
    PAGE_HEIGHT_PT - (index as f32 + 1.0) * LINE_HEIGHT_PT
}

/// Renders `codes` into a PDF at `destination`, overwriting any existing file
///
/// # Arguments
/// * `codes` - Codes in display order
/// * `destination` - Output file path
pub fn render_codes<S, P>(codes: &[S], destination: P) -> RenderResult<()>
where
    S: AsRef<str>,
    P: AsRef<Path>,
{
    let destination = destination.as_ref();

    let (doc, page, layer) = PdfDocument::new(
        "GTIN list",
        Mm::from(Pt(PAGE_WIDTH_PT)),
        Mm::from(Pt(PAGE_HEIGHT_PT)),
        "Layer 1",
    );
    let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let canvas = doc.get_page(page).get_layer(layer);

    for (index, code) in codes.iter().enumerate() {
        canvas.use_text(
            line_text(code.as_ref()),
            FONT_SIZE,
            Mm::from(Pt(LEFT_MARGIN_PT)),
            Mm::from(Pt(line_y(index))),
            &font,
        );
    }

    let mut writer = BufWriter::new(File::create(destination)?);
    doc.save(&mut writer)?;

    log::info!("PDF with {} code(s) written to {}", codes.len(), destination.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_line_layout() {
        assert_eq!(line_y(0), 772.0);
        assert_eq!(line_y(1), 752.0);
        assert_eq!(line_text("4601234567890"), "GTIN: 4601234567890");
    }

    #[test]
    fn test_render_writes_pdf() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("codes.pdf");

        render_codes(&["4601234567890", "4600000000017"], &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_empty_list() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.pdf");

        render_codes::<&str, _>(&[], &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_render_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("codes.pdf");

        let err = render_codes(&["1"], &path).unwrap_err();
        assert!(matches!(err, crate::conversion::RenderError::IoError(_)));
    }
}
