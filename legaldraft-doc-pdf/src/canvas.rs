use crate::RenderError;

/// Font weight of a drawn line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Regular,
    Bold,
}

/// A line of text placed on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    /// Left edge, in points from the left of the page.
    pub x: f32,
    /// Top of the line box, in points from the top of the page.
    pub y: f32,
    pub size: f32,
    pub weight: Weight,
    pub text: String,
}

/// Drawing surface the flow algorithm writes to.
///
/// `draw_text` always targets the page opened by the most recent
/// `begin_page`.
pub trait Canvas {
    /// Start a new page.
    fn begin_page(&mut self) -> Result<(), RenderError>;

    /// Draw one line of text on the current page.
    fn draw_text(&mut self, text: PlacedText) -> Result<(), RenderError>;

    /// Number of pages begun so far.
    fn page_count(&self) -> usize;
}
