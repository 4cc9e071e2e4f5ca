//! `genpdf` element that draws a pre-computed page of lines.
//!
//! `genpdf` normally flows elements down the page and breaks pages itself.
//! The exporter already decided where every line goes, so this element only
//! prints each line at its absolute position; callers separate pages with
//! `genpdf::elements::PageBreak`.

use genpdf::error::{Error, ErrorKind};
use genpdf::style::Style;
use genpdf::{render, Element, Mm, Position, RenderResult};

use crate::layout::LaidOutPage;

pub(crate) fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

pub(crate) fn mm_to_f64(value: Mm) -> f64 {
    let mm: printpdf::Mm = value.into();
    mm.0
}

/// Renders one [`LaidOutPage`] at absolute positions.
pub struct PositionedPage {
    page: LaidOutPage,
}

impl PositionedPage {
    pub fn new(page: LaidOutPage) -> Self {
        Self { page }
    }
}

impl Element for PositionedPage {
    fn render(
        &mut self,
        context: &genpdf::Context,
        area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        for line in self.page.lines() {
            let mut line_style = style.with_font_size(line.style.size);
            if line.style.bold {
                line_style.set_bold();
            }

            // Layout positions are baselines; text sections are anchored at the top.
            let ascent = line_style
                .font(&context.font_cache)
                .glyph_height(line.style.size);
            let top = (mm_from_f64(line.y_mm) - ascent).max(Mm::default());
            let position = Position::new(mm_from_f64(line.x_mm), top);

            match area.text_section(&context.font_cache, position, line_style) {
                Some(mut section) => section.print_str(&line.text, line_style)?,
                None => {
                    return Err(Error::new(
                        format!(
                            "Line at {:.1} mm does not fit on the page: {}",
                            line.y_mm, line.text
                        ),
                        ErrorKind::PageSizeExceeded,
                    ))
                }
            }
        }

        // Zero height keeps the following page break from opening a blank page.
        Ok(RenderResult::default())
    }
}
