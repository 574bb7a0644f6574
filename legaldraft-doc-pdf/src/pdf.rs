//! A canvas that records placed text and serializes it with `pdf-writer`.
//!
//! Only the standard Helvetica faces are used, so no fonts are embedded.

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

use crate::{Canvas, PageLayout, PlacedText, RenderError, Weight};

const REGULAR: Name<'static> = Name(b"F1");
const BOLD: Name<'static> = Name(b"F2");

/// Records pages in memory and encodes them with [`PdfCanvas::to_bytes`].
#[derive(Debug, Clone)]
pub struct PdfCanvas {
    page_width: f32,
    page_height: f32,
    pages: Vec<Vec<PlacedText>>,
    page_limit: Option<usize>,
}

impl PdfCanvas {
    /// Create a canvas with the page size of `layout` and no pages.
    pub fn new(layout: &PageLayout) -> Self {
        Self {
            page_width: layout.page_width,
            page_height: layout.page_height,
            pages: Vec::new(),
            page_limit: None,
        }
    }

    /// Refuse to allocate more than `limit` pages.
    pub fn with_page_limit(mut self, limit: usize) -> Self {
        self.page_limit = Some(limit);
        self
    }

    /// The text placed on each page so far.
    pub fn pages(&self) -> &[Vec<PlacedText>] {
        &self.pages
    }

    /// Serialize all pages as a PDF document.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut pdf = Pdf::new();
        let mut next_id = 1i32;
        let mut alloc = || {
            let r = Ref::new(next_id);
            next_id += 1;
            r
        };

        let catalog_id = alloc();
        let pages_id = alloc();
        let regular_id = alloc();
        let bold_id = alloc();
        let page_ids: Vec<Ref> = self.pages.iter().map(|_| alloc()).collect();
        let content_ids: Vec<Ref> = self.pages.iter().map(|_| alloc()).collect();

        pdf.catalog(catalog_id).pages(pages_id);
        pdf.pages(pages_id)
            .kids(page_ids.iter().copied())
            .count(self.pages.len() as i32);

        for (font_id, base) in [(regular_id, "Helvetica"), (bold_id, "Helvetica-Bold")] {
            pdf.type1_font(font_id)
                .base_font(Name(base.as_bytes()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        for (i, page) in self.pages.iter().enumerate() {
            {
                let mut writer = pdf.page(page_ids[i]);
                writer
                    .media_box(Rect::new(0.0, 0.0, self.page_width, self.page_height))
                    .parent(pages_id)
                    .contents(content_ids[i]);
                writer
                    .resources()
                    .fonts()
                    .pair(REGULAR, regular_id)
                    .pair(BOLD, bold_id);
            }

            pdf.stream(content_ids[i], &self.content_stream(page));
        }

        pdf.finish()
    }

    fn content_stream(&self, page: &[PlacedText]) -> Vec<u8> {
        let mut content = Content::new();
        for text in page {
            let font = match text.weight {
                Weight::Regular => REGULAR,
                Weight::Bold => BOLD,
            };
            // PDF user space grows upwards from the bottom; place the baseline
            // one font size below the top of the line box.
            let baseline = self.page_height - text.y - text.size;
            content
                .begin_text()
                .set_font(font, text.size)
                .next_line(text.x, baseline)
                .show(Str(&to_winansi_bytes(&text.text)))
                .end_text();
        }
        content.finish().to_vec()
    }
}

impl Canvas for PdfCanvas {
    fn begin_page(&mut self) -> Result<(), RenderError> {
        match self.page_limit {
            Some(limit) if self.pages.len() >= limit => {
                return Err(RenderError::PageLimit { limit });
            }
            _ => {}
        }
        self.pages.push(Vec::new());
        Ok(())
    }

    fn draw_text(&mut self, text: PlacedText) -> Result<(), RenderError> {
        let page = self
            .pages
            .last_mut()
            .ok_or_else(|| anyhow::anyhow!("text drawn before the first page"))?;
        page.push(text);
        Ok(())
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Encode text for the standard fonts' WinAnsiEncoding.
///
/// Latin-1 maps to itself; a few common typographic characters map into the
/// 0x80..0x9F block. Anything else becomes `?`.
fn to_winansi_bytes(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            ' '..='~' | '\u{a0}'..='\u{ff}' => c as u8,
            '€' => 0x80,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(y: f32, text: &str) -> PlacedText {
        PlacedText {
            x: 72.0,
            y,
            size: 11.0,
            weight: Weight::Regular,
            text: text.to_string(),
        }
    }

    #[test]
    fn winansi_encoding() {
        assert_eq!(to_winansi_bytes("a (b)"), b"a (b)");
        assert_eq!(to_winansi_bytes("Zoë"), b"Zo\xeb");
        assert_eq!(to_winansi_bytes("’€"), vec![0x92u8, 0x80]);
        assert_eq!(to_winansi_bytes("日"), b"?");
    }

    #[test]
    fn drawing_without_a_page_fails() {
        let mut canvas = PdfCanvas::new(&PageLayout::default());
        assert!(matches!(
            canvas.draw_text(line(72.0, "x")),
            Err(RenderError::Canvas(_))
        ));
    }

    #[test]
    fn page_limit_is_enforced() {
        let mut canvas = PdfCanvas::new(&PageLayout::default()).with_page_limit(1);
        canvas.begin_page().unwrap();
        assert!(matches!(
            canvas.begin_page(),
            Err(RenderError::PageLimit { limit: 1 })
        ));
        assert_eq!(canvas.page_count(), 1);
    }

    #[test]
    fn encodes_every_page() {
        let mut canvas = PdfCanvas::new(&PageLayout::default());
        canvas.begin_page().unwrap();
        canvas.draw_text(line(72.0, "Hello world")).unwrap();
        canvas.begin_page().unwrap();
        canvas.draw_text(line(72.0, "Page two")).unwrap();

        let bytes = canvas.to_bytes();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.starts_with("%PDF-"));
        assert!(text.contains("%%EOF"));
        assert!(text.contains("/Count 2"));
        assert!(text.contains("/BaseFont /Helvetica-Bold"));
        assert!(text.contains("/WinAnsiEncoding"));
        assert!(text.contains("(Hello world) Tj"));
        assert!(text.contains("(Page two) Tj"));
    }

    #[test]
    fn baseline_is_measured_from_the_top() {
        let mut canvas = PdfCanvas::new(&PageLayout::default());
        canvas.begin_page().unwrap();
        canvas.draw_text(line(72.0, "x")).unwrap();
        let stream = canvas.content_stream(&canvas.pages()[0]);
        assert!(String::from_utf8_lossy(&stream).contains("72 709 Td"));
    }
}
