//! The document exporter: compose, paginate, encode.

use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::compose::compose;
use crate::config::ExportConfig;
use crate::error::GenerationError;
use crate::layout::{paginate, Layout, SectionMark};
use crate::model::ResumeDocument;
use crate::render::Renderer;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Suggested filename for the exported resume: whitespace runs in `name`
/// become `_` and `_Resume.pdf` is appended.
pub fn suggested_file_name(name: &str) -> String {
    format!("{}_Resume.pdf", WHITESPACE_RUN.replace_all(name, "_"))
}

/// A fully generated PDF, ready for delivery.
#[derive(Clone, Debug)]
pub struct Artifact {
    bytes: Vec<u8>,
    file_name: String,
    layout: Layout,
}

impl Artifact {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn page_count(&self) -> usize {
        self.layout.page_count()
    }

    /// The page layout the bytes were encoded from.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Pages on which each section heading landed.
    pub fn sections(&self) -> &[SectionMark] {
        self.layout.sections()
    }
}

/// Exports [`ResumeDocument`]s with a fixed configuration.
#[derive(Clone, Debug, Default)]
pub struct Exporter {
    config: ExportConfig,
}

impl Exporter {
    /// Creates an exporter after validating `config`.
    pub fn new(config: ExportConfig) -> Result<Self, GenerationError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Lays out `document` with the metrics of the configured backend.
    pub fn layout(&self, document: &ResumeDocument) -> Result<Layout, GenerationError> {
        let renderer = Renderer::for_backend(self.config.backend)?;
        Ok(self.layout_with(document, &renderer))
    }

    fn layout_with(&self, document: &ResumeDocument, renderer: &Renderer) -> Layout {
        let blocks = compose(document, &self.config.typography);
        paginate(&blocks, &self.config, renderer.measure())
    }

    /// Generates the complete PDF for `document`.
    ///
    /// Nothing is handed out until every page has been encoded.
    pub fn export(&self, document: &ResumeDocument) -> Result<Artifact, GenerationError> {
        let renderer = Renderer::for_backend(self.config.backend)?;
        let layout = self.layout_with(document, &renderer);

        let name = document.personal_info().name();
        let file_name = suggested_file_name(name);
        let title = format!("{} - Resume", name);
        let bytes = renderer.render(&layout, &self.config.page, &title)?;
        let bytes = self.apply_outline(bytes, &layout)?;

        info!(
            "Exported {} ({} page(s), {} bytes)",
            file_name,
            layout.page_count(),
            bytes.len()
        );

        Ok(Artifact {
            bytes,
            file_name,
            layout,
        })
    }

    #[cfg(feature = "bookmarks")]
    fn apply_outline(&self, bytes: Vec<u8>, layout: &Layout) -> Result<Vec<u8>, GenerationError> {
        if !self.config.outline {
            return Ok(bytes);
        }
        debug!("Adding {} outline entries", layout.sections().len());
        Ok(crate::bookmarks::apply_section_outline(
            &bytes,
            layout.sections(),
        )?)
    }

    #[cfg(not(feature = "bookmarks"))]
    fn apply_outline(&self, bytes: Vec<u8>, _layout: &Layout) -> Result<Vec<u8>, GenerationError> {
        if self.config.outline {
            debug!("Section outline requested but the `bookmarks` feature is disabled");
        }
        Ok(bytes)
    }
}
