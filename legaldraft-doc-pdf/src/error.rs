/// Error type for document rendering.
///
/// `DocumentRenderer::generate` converts these into an error notification and
/// a `None` result; the `render*` methods return them directly.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The page geometry leaves no room for a single line.
    #[error("Invalid page layout: {0}")]
    InvalidLayout(String),

    /// The canvas refused to allocate another page.
    #[error("Document exceeds the limit of {limit} pages")]
    PageLimit { limit: usize },

    /// Layout configuration could not be parsed.
    #[error("Invalid layout configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Saving the artifact failed.
    #[error("Could not save document: {0}")]
    Io(#[from] std::io::Error),

    /// Any other canvas backend failure.
    #[error("Rendering failed: {0}")]
    Canvas(#[from] anyhow::Error),
}
