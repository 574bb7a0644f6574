use serde::{Deserialize, Serialize};

use crate::RenderError;

/// Page geometry and typography, in PDF points (1/72 inch).
///
/// Positions are measured from the top edge of the page: the flow cursor
/// starts at `margin_top` and grows downwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub margin_right: f32,

    /// Font size of body text.
    pub font_size: f32,

    /// Font size of the document title.
    pub title_size: f32,

    /// Vertical advance per line.
    pub line_height: f32,

    /// Extra space after each section.
    pub section_spacing: f32,

    /// Average glyph advance as a fraction of the font size, used to turn the
    /// content width into a column budget for wrapping.
    pub glyph_width: f32,

    /// Shown in place of any missing or blank answer.
    pub placeholder: String,
}

impl Default for PageLayout {
    /// US Letter with one-inch margins and 11pt Helvetica.
    fn default() -> Self {
        Self {
            page_width: 612.0,
            page_height: 792.0,
            margin_top: 72.0,
            margin_bottom: 72.0,
            margin_left: 72.0,
            margin_right: 72.0,
            font_size: 11.0,
            title_size: 16.0,
            line_height: 16.0,
            section_spacing: 8.0,
            glyph_width: 0.5,
            placeholder: "__________".to_string(),
        }
    }
}

impl PageLayout {
    /// Create the default layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a layout from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, RenderError> {
        let layout: Self = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Set the placeholder text for missing answers.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the line height.
    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    /// Lowest cursor position a line may start at and still fit.
    pub fn bottom_limit(&self) -> f32 {
        self.page_height - self.margin_bottom
    }

    /// Number of text columns that fit between the side margins.
    pub fn columns(&self) -> usize {
        let width = self.page_width - self.margin_left - self.margin_right;
        let advance = self.font_size * self.glyph_width;
        ((width / advance).floor() as usize).max(1)
    }

    /// Lines that fit on one page.
    pub fn lines_per_page(&self) -> usize {
        ((self.bottom_limit() - self.margin_top) / self.line_height).floor() as usize
    }

    /// Check that at least one line fits on a page and one glyph fits on a line.
    pub fn validate(&self) -> Result<(), RenderError> {
        let numbers = [
            self.page_width,
            self.page_height,
            self.margin_top,
            self.margin_bottom,
            self.margin_left,
            self.margin_right,
            self.font_size,
            self.title_size,
            self.line_height,
            self.section_spacing,
            self.glyph_width,
        ];
        if numbers.iter().any(|n| !n.is_finite() || *n < 0.0) {
            return Err(RenderError::InvalidLayout(
                "dimensions must be finite and non-negative".into(),
            ));
        }
        if self.line_height <= 0.0 || self.font_size <= 0.0 || self.glyph_width <= 0.0 {
            return Err(RenderError::InvalidLayout(
                "line height, font size and glyph width must be positive".into(),
            ));
        }
        if self.margin_top + self.line_height > self.bottom_limit() {
            return Err(RenderError::InvalidLayout(format!(
                "no line fits between top margin {} and bottom limit {}",
                self.margin_top,
                self.bottom_limit()
            )));
        }
        if self.margin_left + self.margin_right + self.font_size * self.glyph_width
            > self.page_width
        {
            return Err(RenderError::InvalidLayout(
                "side margins leave no room for text".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let layout = PageLayout::default();
        layout.validate().unwrap();
        assert_eq!(layout.columns(), 85);
        assert_eq!(layout.lines_per_page(), 40);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let layout = PageLayout::from_json(r#"{ "line_height": 20.0, "placeholder": "[blank]" }"#)
            .unwrap();
        assert_eq!(layout.line_height, 20.0);
        assert_eq!(layout.placeholder, "[blank]");
        assert_eq!(layout.page_width, 612.0);
    }

    #[test]
    fn cramped_layout_is_rejected() {
        let layout = PageLayout {
            margin_top: 400.0,
            margin_bottom: 400.0,
            ..PageLayout::default()
        };
        assert!(matches!(layout.validate(), Err(RenderError::InvalidLayout(_))));
        assert!(matches!(
            PageLayout::from_json(r#"{ "page_height": 100.0 }"#),
            Err(RenderError::InvalidLayout(_))
        ));
        assert!(matches!(
            PageLayout::from_json("not json"),
            Err(RenderError::Config(_))
        ));
    }
}
