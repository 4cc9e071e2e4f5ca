//! `genpdf::Document` construction for the `bundled-fonts` backend.

use genpdf::error::Error;
use genpdf::fonts::{FontData, FontFamily};
use genpdf::Size;

use crate::fonts;

/// Builder for `genpdf::Document` instances pre-configured for resume export.
#[derive(Default)]
pub struct DocumentBuilder {
    paper_size: Option<Size>,
    title: Option<String>,
    font_family: Option<FontFamily<FontData>>,
}

impl DocumentBuilder {
    /// Creates a new builder instance with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the paper size used for newly created documents.
    pub fn with_paper_size(mut self, paper_size: impl Into<Size>) -> Self {
        self.paper_size = Some(paper_size.into());
        self
    }

    /// Sets the document title stored in the PDF metadata.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Uses an already loaded font family instead of searching for the bundled one.
    pub fn with_font_family(mut self, family: FontFamily<FontData>) -> Self {
        self.font_family = Some(family);
        self
    }

    /// Builds the document.  No page decorator is installed, so elements see
    /// the full paper area and place text in page coordinates.
    pub fn build(self) -> Result<genpdf::Document, Error> {
        let font_family = match self.font_family {
            Some(family) => family,
            None => fonts::default_font_family()?,
        };
        let mut document = genpdf::Document::new(font_family);
        document.set_minimal_conformance();

        if let Some(paper_size) = self.paper_size {
            document.set_paper_size(paper_size);
        }

        if let Some(title) = self.title {
            document.set_title(title);
        }

        Ok(document)
    }
}
