//! Line-cursor pagination.
//!
//! A single vertical cursor walks down the page.  Before a line is placed the
//! cursor is compared with the bottom limit; if it is already past the limit a
//! new page is opened and the cursor returns to the top margin.  Lines are
//! therefore never placed below the limit.  Entries are not kept together
//! across page breaks.

use log::debug;

use crate::compose::{Block, BlockKind, ResumeSection};
use crate::config::ExportConfig;
use crate::metrics::{TextMeasure, TextStyle};

/// A line of text at its final position.  `y_mm` is the baseline measured
/// from the top edge of the page.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub style: TextStyle,
    pub x_mm: f64,
    pub y_mm: f64,
}

/// All lines placed on one page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LaidOutPage {
    lines: Vec<PlacedLine>,
}

impl LaidOutPage {
    pub fn lines(&self) -> &[PlacedLine] {
        &self.lines
    }
}

/// Page on which a section heading was placed (1-indexed).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionMark {
    pub section: ResumeSection,
    pub page: usize,
}

/// The finished page layout.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pages: Vec<LaidOutPage>,
    sections: Vec<SectionMark>,
}

impl Layout {
    pub fn pages(&self) -> &[LaidOutPage] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Section headings in emission order with their pages.
    pub fn sections(&self) -> &[SectionMark] {
        &self.sections
    }

    /// Iterates over every line together with its 1-indexed page number.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &PlacedLine)> + '_ {
        self.pages
            .iter()
            .enumerate()
            .flat_map(|(index, page)| page.lines.iter().map(move |line| (index + 1, line)))
    }
}

/// Wraps `text` so that no line is wider than `max_width_mm`.
///
/// Words are separated by spaces and packed greedily; a word that alone is
/// wider than the limit is split between characters.  Explicit newlines start
/// a new line.  Empty input yields a single empty line.
pub fn wrap_text(
    text: &str,
    max_width_mm: f64,
    style: TextStyle,
    measure: &dyn TextMeasure,
) -> Vec<String> {
    let mut lines = Vec::new();
    let space = measure.width_mm(" ", style);

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0.0;

        for word in paragraph.split(' ').filter(|word| !word.is_empty()) {
            let word_width = measure.width_mm(word, style);

            if current.is_empty() {
                if word_width <= max_width_mm {
                    current.push_str(word);
                    current_width = word_width;
                } else {
                    let mut pieces = split_word(word, max_width_mm, style, measure);
                    let last = pieces.pop().unwrap_or_default();
                    lines.extend(pieces);
                    current_width = measure.width_mm(&last, style);
                    current = last;
                }
                continue;
            }

            if current_width + space + word_width <= max_width_mm {
                current.push(' ');
                current.push_str(word);
                current_width += space + word_width;
            } else {
                lines.push(std::mem::take(&mut current));
                if word_width <= max_width_mm {
                    current.push_str(word);
                    current_width = word_width;
                } else {
                    let mut pieces = split_word(word, max_width_mm, style, measure);
                    let last = pieces.pop().unwrap_or_default();
                    lines.extend(pieces);
                    current_width = measure.width_mm(&last, style);
                    current = last;
                }
            }
        }

        lines.push(current);
    }

    lines
}

fn split_word(
    word: &str,
    max_width_mm: f64,
    style: TextStyle,
    measure: &dyn TextMeasure,
) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();

    for ch in word.chars() {
        let mut candidate = current.clone();
        candidate.push(ch);
        if !current.is_empty() && measure.width_mm(&candidate, style) > max_width_mm {
            pieces.push(std::mem::take(&mut current));
            current.push(ch);
        } else {
            current = candidate;
        }
    }

    pieces.push(current);
    pieces
}

struct Paginator<'a> {
    config: &'a ExportConfig,
    measure: &'a dyn TextMeasure,
    pages: Vec<LaidOutPage>,
    sections: Vec<SectionMark>,
    cursor: f64,
}

impl<'a> Paginator<'a> {
    fn new(config: &'a ExportConfig, measure: &'a dyn TextMeasure) -> Self {
        Self {
            config,
            measure,
            pages: vec![LaidOutPage::default()],
            sections: Vec::new(),
            cursor: config.page.top_margin_mm,
        }
    }

    fn break_if_needed(&mut self) {
        if self.cursor > self.config.page.bottom_limit_mm {
            debug!(
                "Cursor at {:.1} mm passed bottom limit {:.1} mm; starting page {}",
                self.cursor,
                self.config.page.bottom_limit_mm,
                self.pages.len() + 1
            );
            self.pages.push(LaidOutPage::default());
            self.cursor = self.config.page.top_margin_mm;
        }
    }

    fn emit(&mut self, text: String, style: TextStyle) {
        self.break_if_needed();
        let line = PlacedLine {
            text,
            style,
            x_mm: self.config.page.left_margin_mm,
            y_mm: self.cursor,
        };
        if let Some(page) = self.pages.last_mut() {
            page.lines.push(line);
        }
    }

    fn push_block(&mut self, block: &Block) {
        let text = self.measure.normalize(&block.text);
        match block.kind {
            BlockKind::Fixed { advance_mm } => {
                self.emit(text.into_owned(), block.style);
                self.cursor += advance_mm;
            }
            BlockKind::Heading(_) | BlockKind::Paragraph => {
                let lines = wrap_text(
                    &text,
                    self.config.page.max_line_width_mm,
                    block.style,
                    self.measure,
                );
                let advance = self.config.typography.line_advance(block.style.size);
                for (index, line) in lines.into_iter().enumerate() {
                    self.emit(line, block.style);
                    if index == 0 {
                        if let BlockKind::Heading(section) = block.kind {
                            self.sections.push(SectionMark {
                                section,
                                page: self.pages.len(),
                            });
                        }
                    }
                    self.cursor += advance;
                }
                self.cursor += self.config.typography.paragraph_gap_mm;
            }
        }
    }

    fn finish(self) -> Layout {
        Layout {
            pages: self.pages,
            sections: self.sections,
        }
    }
}

/// Places every block on pages according to `config`.
pub fn paginate(blocks: &[Block], config: &ExportConfig, measure: &dyn TextMeasure) -> Layout {
    let mut paginator = Paginator::new(config, measure);
    for block in blocks {
        paginator.push_block(block);
    }
    let layout = paginator.finish();
    debug!(
        "Laid out {} blocks on {} page(s)",
        blocks.len(),
        layout.page_count()
    );
    layout
}
