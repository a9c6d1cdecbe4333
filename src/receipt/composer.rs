use super::pdf::PdfPage;

pub const PAGE_WIDTH_MM: f64 = 80.0;
pub const PAGE_HEIGHT_MM: f64 = 100.0;
const FONT_SIZE: f64 = 9.0;

const LINES: [(&str, f64, f64); 4] = [
    ("Receipt", 10.0, 10.0),
    ("Item: Product A", 10.0, 20.0),
    ("Price: $100", 10.0, 30.0),
    ("Thank you for your purchase!", 10.0, 40.0),
];

/// Build the receipt document.
///
/// Pure and deterministic: no clock, no input, no failure mode. Real
/// deployments would feed purchase data in here; the layout contract
/// (80mm x 100mm portrait page, 9pt text at fixed coordinates) stays
/// fixed either way.
pub fn compose() -> Vec<u8> {
    let mut page = PdfPage::portrait_mm(PAGE_WIDTH_MM, PAGE_HEIGHT_MM);
    page.set_font_size(FONT_SIZE);
    for (text, x_mm, y_mm) in LINES {
        page.text(text, x_mm, y_mm);
    }
    page.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_is_deterministic() {
        assert_eq!(compose(), compose());
    }

    #[test]
    fn compose_yields_a_pdf_with_all_receipt_lines() {
        let text = String::from_utf8(compose()).unwrap();
        assert!(text.starts_with("%PDF-1.4\n"));
        for (line, _, _) in LINES {
            assert!(text.contains(&format!("({}) Tj", line)), "missing line: {}", line);
        }
    }
}
