use std::fmt::Write as _;

const MM_TO_PT: f64 = 72.0 / 25.4;

/// Minimal single-page PDF builder for fixed-layout documents.
///
/// Text coordinates are millimetres from the top-left corner of the page.
/// Rendering is fully deterministic: no timestamps, no document IDs, no
/// compression, so the same builder calls always yield byte-identical
/// output.
pub struct PdfPage {
    width_pt: f64,
    height_pt: f64,
    font_size: f64,
    texts: Vec<Text>,
}

struct Text {
    x_pt: f64,
    y_pt: f64,
    size: f64,
    value: String,
}

impl PdfPage {
    pub fn portrait_mm(width_mm: f64, height_mm: f64) -> Self {
        Self {
            width_pt: width_mm * MM_TO_PT,
            height_pt: height_mm * MM_TO_PT,
            font_size: 16.0,
            texts: Vec::new(),
        }
    }

    /// Size in points for all text placed after this call.
    pub fn set_font_size(&mut self, size: f64) {
        self.font_size = size;
    }

    pub fn text(&mut self, value: &str, x_mm: f64, y_mm: f64) {
        self.texts.push(Text {
            x_pt: x_mm * MM_TO_PT,
            // PDF user space has its origin at the bottom-left corner.
            y_pt: self.height_pt - y_mm * MM_TO_PT,
            size: self.font_size,
            value: value.to_owned(),
        });
    }

    pub fn render(&self) -> Vec<u8> {
        let mut content = String::new();
        for text in &self.texts {
            let _ = writeln!(
                content,
                "BT /F1 {:.2} Tf {:.2} {:.2} Td ({}) Tj ET",
                text.size,
                text.x_pt,
                text.y_pt,
                escape_text(&text.value)
            );
        }

        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_owned(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_owned(),
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>",
                self.width_pt, self.height_pt
            ),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>".to_owned(),
            format!("<< /Length {} >>\nstream\n{}endstream", content.len(), content),
        ];

        let mut buffer: Vec<u8> = Vec::with_capacity(1024);
        buffer.extend_from_slice(b"%PDF-1.4\n");

        let mut offsets = Vec::with_capacity(objects.len());
        for (index, object) in objects.iter().enumerate() {
            offsets.push(buffer.len());
            buffer.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", index + 1, object).as_bytes());
        }

        let xref_offset = buffer.len();
        let mut trailer = String::new();
        let _ = write!(trailer, "xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
        for offset in &offsets {
            let _ = write!(trailer, "{:010} 00000 n \n", offset);
        }
        let _ = write!(
            trailer,
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        );
        buffer.extend_from_slice(trailer.as_bytes());
        buffer
    }
}

// Parentheses and backslashes are the only characters needing escapes
// inside a PDF literal string.
fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '(' | ')' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}
