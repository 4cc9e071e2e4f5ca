//! Text measurement used by the line wrapper.
//!
//! The paginator never talks to a renderer directly; it asks a [`TextMeasure`]
//! how wide a string is.  Two implementations exist, one per backend, so the
//! lines computed during layout are exactly the lines that get rendered.

use std::borrow::Cow;

use genpdf::fonts::{FontCache, FontData, FontFamily};
use genpdf::style::{Style, StyledString};

const MM_PER_POINT: f64 = 25.4 / 72.0;

/// Font size (points) and weight of a single line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextStyle {
    pub size: u8,
    pub bold: bool,
}

impl TextStyle {
    /// Regular weight at `size` points.
    pub fn regular(size: u8) -> Self {
        Self { size, bold: false }
    }

    /// Bold weight at `size` points.
    pub fn bold(size: u8) -> Self {
        Self { size, bold: true }
    }
}

/// Measures rendered text widths in millimetres.
pub trait TextMeasure {
    /// Rewrites `text` into what the backend can actually draw.
    fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(text)
    }

    /// Width of `text` when drawn with `style`.
    fn width_mm(&self, text: &str, style: TextStyle) -> f64;
}

/// Advance widths (1/1000 em) for Helvetica, code points 32..=126.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Advance widths (1/1000 em) for Helvetica-Bold, code points 32..=126.
#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const FALLBACK_WIDTH: u16 = 556;

/// Metrics of the PDF standard Helvetica family.
///
/// The builtin fonts only cover a single-byte encoding, so [`normalize`]
/// folds common typographic characters to ASCII and replaces anything else
/// outside printable ASCII with `?`.
///
/// [`normalize`]: TextMeasure::normalize
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinMetrics;

impl BuiltinMetrics {
    fn glyph_width(ch: char, bold: bool) -> u16 {
        let table = if bold {
            &HELVETICA_BOLD_WIDTHS
        } else {
            &HELVETICA_WIDTHS
        };
        let code = ch as u32;
        if (32..=126).contains(&code) {
            table[(code - 32) as usize]
        } else {
            FALLBACK_WIDTH
        }
    }
}

fn fold_char(ch: char) -> Option<&'static str> {
    let folded = match ch {
        '\u{2022}' | '\u{2023}' | '\u{25CF}' => "-",
        '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2032}' => "'",
        '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => "\"",
        '\u{2010}'..='\u{2015}' | '\u{2212}' => "-",
        '\u{2026}' => "...",
        '\u{00A0}' | '\u{2002}'..='\u{200A}' => " ",
        _ => return fold_latin1_letter(ch),
    };
    Some(folded)
}

/// ASCII base of an accented Latin-1 letter.
fn fold_latin1_letter(ch: char) -> Option<&'static str> {
    let folded = match ch {
        'À'..='Å' => "A",
        'Æ' => "AE",
        'Ç' => "C",
        'È'..='Ë' => "E",
        'Ì'..='Ï' => "I",
        'Ð' => "D",
        'Ñ' => "N",
        'Ò'..='Ö' | 'Ø' => "O",
        'Ù'..='Ü' => "U",
        'Ý' => "Y",
        'Þ' => "Th",
        'ß' => "ss",
        'à'..='å' => "a",
        'æ' => "ae",
        'ç' => "c",
        'è'..='ë' => "e",
        'ì'..='ï' => "i",
        'ð' => "d",
        'ñ' => "n",
        'ò'..='ö' | 'ø' => "o",
        'ù'..='ü' => "u",
        'ý' | 'ÿ' => "y",
        'þ' => "th",
        _ => return None,
    };
    Some(folded)
}

impl TextMeasure for BuiltinMetrics {
    fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if text.chars().all(|ch| (' '..='~').contains(&ch)) {
            return Cow::Borrowed(text);
        }

        let mut normalized = String::with_capacity(text.len());
        for ch in text.chars() {
            if (' '..='~').contains(&ch) {
                normalized.push(ch);
            } else if let Some(folded) = fold_char(ch) {
                normalized.push_str(folded);
            } else if ch == '\t' {
                normalized.push(' ');
            } else {
                normalized.push('?');
            }
        }
        Cow::Owned(normalized)
    }

    fn width_mm(&self, text: &str, style: TextStyle) -> f64 {
        let units: u32 = text
            .chars()
            .map(|ch| u32::from(Self::glyph_width(ch, style.bold)))
            .sum();
        f64::from(units) / 1000.0 * f64::from(style.size) * MM_PER_POINT
    }
}

/// Metrics backed by a loaded `genpdf` font family.
pub struct FontCacheMetrics {
    cache: FontCache,
}

impl FontCacheMetrics {
    /// Builds a font cache whose default family is `family`.
    pub fn new(family: FontFamily<FontData>) -> Self {
        Self {
            cache: FontCache::new(family),
        }
    }
}

impl TextMeasure for FontCacheMetrics {
    fn width_mm(&self, text: &str, style: TextStyle) -> f64 {
        let mut pdf_style = Style::new().with_font_size(style.size);
        if style.bold {
            pdf_style.set_bold();
        }
        let width = StyledString::new(text.to_owned(), pdf_style).width(&self.cache);
        crate::elements::mm_to_f64(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helvetica_widths_scale_with_size() {
        let metrics = BuiltinMetrics;
        let small = metrics.width_mm("Resume", TextStyle::regular(10));
        let large = metrics.width_mm("Resume", TextStyle::regular(20));
        assert!((large - 2.0 * small).abs() < 1e-9);
    }

    #[test]
    fn bold_is_wider_than_regular() {
        let metrics = BuiltinMetrics;
        let regular = metrics.width_mm("Experience", TextStyle::regular(11));
        let bold = metrics.width_mm("Experience", TextStyle::bold(11));
        assert!(bold > regular);
    }

    #[test]
    fn space_width_matches_table() {
        // 278/1000 em at 72pt is 278/1000 inch.
        let width = BuiltinMetrics.width_mm(" ", TextStyle::regular(72));
        assert!((width - 0.278 * 25.4).abs() < 1e-9);
    }

    #[test]
    fn normalize_folds_bullets_and_quotes() {
        let metrics = BuiltinMetrics;
        assert_eq!(metrics.normalize("\u{2022} Dean\u{2019}s List"), "- Dean's List");
        assert!(matches!(metrics.normalize("plain"), Cow::Borrowed("plain")));
        assert_eq!(metrics.normalize("\u{6F22}"), "?");
    }

    #[test]
    fn normalize_folds_accented_letters() {
        let metrics = BuiltinMetrics;
        assert_eq!(metrics.normalize("caf\u{00E9}"), "cafe");
        assert_eq!(metrics.normalize("Jos\u{00E9} Mu\u{00F1}oz"), "Jose Munoz");
        assert_eq!(metrics.normalize("\u{00C5}sa Stra\u{00DF}e"), "Asa Strasse");
    }
}
