//! PDF backends that turn a finished [`Layout`] into bytes.

use std::fmt;
use std::io::{BufWriter, Cursor};

use genpdf::elements::PageBreak;
use genpdf::fonts::{FontData, FontFamily};
use genpdf::Size;
use log::debug;
use printpdf::{BuiltinFont, CustomPdfConformance, PdfConformance, PdfDocument};

use crate::builder::DocumentBuilder;
use crate::config::{Backend, PageGeometry};
use crate::elements::{mm_from_f64, PositionedPage};
use crate::error::GenerationError;
use crate::fonts;
use crate::layout::Layout;
use crate::metrics::{BuiltinMetrics, FontCacheMetrics, TextMeasure};

/// A backend together with the metrics the paginator must use for it.
pub enum Renderer {
    Builtin(BuiltinMetrics),
    BundledFonts {
        family: FontFamily<FontData>,
        metrics: FontCacheMetrics,
    },
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Renderer::Builtin(_) => f.write_str("Renderer::Builtin"),
            Renderer::BundledFonts { .. } => f.write_str("Renderer::BundledFonts"),
        }
    }
}

impl Renderer {
    /// Prepares the renderer for `backend`, loading fonts when required.
    pub fn for_backend(backend: Backend) -> Result<Self, GenerationError> {
        match backend {
            Backend::Builtin => Ok(Renderer::Builtin(BuiltinMetrics)),
            Backend::BundledFonts => {
                let family = fonts::default_font_family()?;
                let metrics = FontCacheMetrics::new(family.clone());
                Ok(Renderer::BundledFonts { family, metrics })
            }
        }
    }

    /// Metrics consistent with what [`Renderer::render`] draws.
    pub fn measure(&self) -> &dyn TextMeasure {
        match self {
            Renderer::Builtin(metrics) => metrics,
            Renderer::BundledFonts { metrics, .. } => metrics,
        }
    }

    /// Encodes every page of `layout` into a PDF.
    pub fn render(
        &self,
        layout: &Layout,
        page: &PageGeometry,
        title: &str,
    ) -> Result<Vec<u8>, GenerationError> {
        let bytes = match self {
            Renderer::Builtin(_) => render_builtin(layout, page, title)?,
            Renderer::BundledFonts { family, .. } => {
                render_genpdf(layout, page, title, family.clone())?
            }
        };
        debug!(
            "Encoded {} page(s) into {} bytes with {:?}",
            layout.page_count(),
            bytes.len(),
            self
        );
        Ok(bytes)
    }
}

fn pdf_error(err: impl fmt::Debug) -> GenerationError {
    GenerationError::Pdf(format!("{:?}", err))
}

fn render_builtin(
    layout: &Layout,
    page: &PageGeometry,
    title: &str,
) -> Result<Vec<u8>, GenerationError> {
    let width = printpdf::Mm(page.width_mm);
    let height = printpdf::Mm(page.height_mm);
    let (document, first_page, first_layer) = PdfDocument::new(title, width, height, "Page 1");
    // Standard fonts need neither an ICC profile nor XMP metadata.
    let document = document.with_conformance(PdfConformance::Custom(CustomPdfConformance {
        requires_icc_profile: false,
        requires_xmp_metadata: false,
        ..Default::default()
    }));

    let regular = document
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_error)?;
    let bold = document
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_error)?;

    let mut targets = vec![(first_page, first_layer)];
    for number in 2..=layout.page_count() {
        targets.push(document.add_page(width, height, format!("Page {number}")));
    }

    for (laid_out, (page_index, layer_index)) in layout.pages().iter().zip(targets) {
        let layer = document.get_page(page_index).get_layer(layer_index);
        for line in laid_out.lines() {
            let font = if line.style.bold { &bold } else { &regular };
            // printpdf measures from the bottom edge.
            layer.use_text(
                line.text.clone(),
                f64::from(line.style.size),
                printpdf::Mm(line.x_mm),
                printpdf::Mm(page.height_mm - line.y_mm),
                font,
            );
        }
    }

    let mut writer = BufWriter::new(Cursor::new(Vec::new()));
    document.save(&mut writer).map_err(pdf_error)?;
    let cursor = writer
        .into_inner()
        .map_err(|err| GenerationError::Pdf(err.to_string()))?;
    Ok(cursor.into_inner())
}

fn render_genpdf(
    layout: &Layout,
    page: &PageGeometry,
    title: &str,
    family: FontFamily<FontData>,
) -> Result<Vec<u8>, GenerationError> {
    let mut document = DocumentBuilder::new()
        .with_paper_size(Size::new(
            mm_from_f64(page.width_mm),
            mm_from_f64(page.height_mm),
        ))
        .with_title(title)
        .with_font_family(family)
        .build()?;

    for (index, laid_out) in layout.pages().iter().enumerate() {
        if index > 0 {
            document.push(PageBreak::new());
        }
        document.push(PositionedPage::new(laid_out.clone()));
    }

    let mut bytes = Vec::new();
    document.render(&mut bytes)?;
    Ok(bytes)
}
