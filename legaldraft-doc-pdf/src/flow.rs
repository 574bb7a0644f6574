//! Vertical cursor management: places wrapped lines and breaks pages.

use crate::{Canvas, PageLayout, PlacedText, RenderError, Weight, wrap};

/// Places lines top to bottom, opening a new page whenever the next line
/// would cross the bottom margin.
pub(crate) struct Flow<'a> {
    layout: &'a PageLayout,
    canvas: &'a mut dyn Canvas,
    y: f32,
}

impl<'a> Flow<'a> {
    /// Open the first page and put the cursor at the top margin.
    pub fn start(layout: &'a PageLayout, canvas: &'a mut dyn Canvas) -> Result<Self, RenderError> {
        canvas.begin_page()?;
        Ok(Self {
            layout,
            canvas,
            y: layout.margin_top,
        })
    }

    /// Draw one pre-wrapped line.
    pub fn line(&mut self, text: &str, weight: Weight, size: f32) -> Result<(), RenderError> {
        if self.y + self.layout.line_height > self.layout.bottom_limit() {
            self.canvas.begin_page()?;
            self.y = self.layout.margin_top;
            tracing::trace!(page = self.canvas.page_count(), "page break");
        }
        self.canvas.draw_text(PlacedText {
            x: self.layout.margin_left,
            y: self.y,
            size,
            weight,
            text: text.to_string(),
        })?;
        self.y += self.layout.line_height;
        Ok(())
    }

    /// Wrap `text` to the content width and draw every resulting line.
    pub fn paragraph(&mut self, text: &str, weight: Weight) -> Result<(), RenderError> {
        for line in wrap(text, self.layout.columns()) {
            self.line(&line, weight, self.layout.font_size)?;
        }
        Ok(())
    }

    /// Move the cursor down without drawing.
    pub fn skip(&mut self, amount: f32) {
        self.y += amount;
    }
}
