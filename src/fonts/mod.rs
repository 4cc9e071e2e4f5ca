//! TrueType font lookup for the `bundled-fonts` backend.
//!
//! Roboto is searched in `PORTFOLIO_RESUME_FONTS_DIR`, then in `assets/fonts`
//! next to the running executable, then in `assets/fonts` of this crate.  If
//! no directory holds all four styles, Arial is loaded from
//! `PORTFOLIO_RESUME_WINDOWS_FONTS_DIR` or `%WINDIR%\Fonts`.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use genpdf::error::Error;
use genpdf::fonts::{self, FontData, FontFamily};
use log::{debug, warn};

/// Name of the bundled font family.
pub const DEFAULT_FONT_FAMILY_NAME: &str = "Roboto";

/// Environment variable overriding the bundled font directory.
pub const FONTS_DIR_ENV: &str = "PORTFOLIO_RESUME_FONTS_DIR";

/// Environment variable overriding the Windows fallback font directory.
pub const WINDOWS_FONTS_DIR_ENV: &str = "PORTFOLIO_RESUME_WINDOWS_FONTS_DIR";

const ROBOTO_STYLES: [&str; 4] = ["Regular", "Bold", "Italic", "BoldItalic"];

/// Regular, bold, italic and bold italic, in `FontFamily` field order.
const ARIAL_FILES: [&str; 4] = ["arial.ttf", "arialbd.ttf", "ariali.ttf", "arialbi.ttf"];

/// `assets/fonts` inside the crate sources.
pub fn bundled_fonts_source_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join("fonts")
}

fn candidate_directories() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(dir) = env::var_os(FONTS_DIR_ENV).filter(|value| !value.is_empty()) {
        candidates.push(PathBuf::from(dir));
    }
    if let Some(exe_dir) = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        candidates.push(exe_dir.join("assets").join("fonts"));
    }
    candidates.push(bundled_fonts_source_dir());
    candidates
}

fn holds_family(dir: &Path) -> bool {
    ROBOTO_STYLES.iter().all(|style| {
        dir.join(format!("{}-{}.ttf", DEFAULT_FONT_FAMILY_NAME, style))
            .is_file()
    })
}

/// First search directory that holds every Roboto style.
pub fn bundled_fonts_dir() -> Option<PathBuf> {
    candidate_directories()
        .into_iter()
        .find(|dir| holds_family(dir))
}

fn windows_fonts_dir() -> Option<PathBuf> {
    if let Some(dir) = env::var_os(WINDOWS_FONTS_DIR_ENV).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    ["WINDIR", "SystemRoot"]
        .into_iter()
        .filter_map(env::var_os)
        .map(|root| PathBuf::from(root).join("Fonts"))
        .find(|dir| dir.is_dir())
}

fn load_arial(dir: &Path) -> Result<FontFamily<FontData>, Error> {
    let load = |file: &str| FontData::load(dir.join(file), None);
    let [regular, bold, italic, bold_italic] = ARIAL_FILES;
    Ok(FontFamily {
        regular: load(regular)?,
        bold: load(bold)?,
        italic: load(italic)?,
        bold_italic: load(bold_italic)?,
    })
}

/// Loads Roboto, or Arial when Roboto cannot be found.
pub fn default_font_family() -> Result<FontFamily<FontData>, Error> {
    if let Some(dir) = bundled_fonts_dir() {
        debug!("Loading {} from {}", DEFAULT_FONT_FAMILY_NAME, dir.display());
        return fonts::from_files(&dir, DEFAULT_FONT_FAMILY_NAME, None);
    }

    let searched = candidate_directories()
        .iter()
        .map(|dir| dir.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");

    match windows_fonts_dir() {
        Some(dir) => {
            warn!(
                "{} not found in [{}]; falling back to Arial from {}",
                DEFAULT_FONT_FAMILY_NAME,
                searched,
                dir.display()
            );
            load_arial(&dir)
        }
        None => Err(Error::new(
            format!(
                "No {} fonts found in [{}]; set {} to a directory with the TTF files",
                DEFAULT_FONT_FAMILY_NAME, searched, FONTS_DIR_ENV
            ),
            io::Error::new(io::ErrorKind::NotFound, "font directory not found"),
        )),
    }
}

/// Whether the Roboto files can be found.
pub fn default_fonts_available() -> bool {
    bundled_fonts_dir().is_some()
}
