//! Export configuration: page geometry, typography and backend selection.
//!
//! All values are in millimetres except font sizes, which are points.  Every
//! field has a default, so a TOML file only needs to list the values it
//! overrides:
//!
//! ```toml
//! backend = "builtin"
//!
//! [page]
//! bottom_limit_mm = 260.0
//!
//! [typography]
//! body_size = 11
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Which renderer produces the PDF bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    /// PDF standard Helvetica fonts through `printpdf`; needs no font files.
    #[default]
    Builtin,
    /// TrueType fonts resolved by [`crate::fonts`] and rendered through `genpdf`.
    BundledFonts,
}

/// Physical page layout.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageGeometry {
    pub width_mm: f64,
    pub height_mm: f64,
    /// Cursor position at the top of every page.
    pub top_margin_mm: f64,
    /// Horizontal position of every emitted line.
    pub left_margin_mm: f64,
    /// No line is placed below this position.
    pub bottom_limit_mm: f64,
    /// Maximum width of a wrapped line.
    pub max_line_width_mm: f64,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            width_mm: 210.0,
            height_mm: 297.0,
            top_margin_mm: 20.0,
            left_margin_mm: 20.0,
            bottom_limit_mm: 270.0,
            max_line_width_mm: 170.0,
        }
    }
}

/// Font sizes and vertical rhythm.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Typography {
    pub name_size: u8,
    pub title_size: u8,
    pub contact_size: u8,
    pub heading_size: u8,
    pub entry_size: u8,
    pub body_size: u8,
    pub detail_size: u8,
    /// Cursor advance per wrapped line, as a multiple of the font size.
    pub line_advance_factor: f64,
    /// Extra space after every paragraph.
    pub paragraph_gap_mm: f64,
    pub name_advance_mm: f64,
    pub title_advance_mm: f64,
    pub contact_advance_mm: f64,
    pub location_advance_mm: f64,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            name_size: 18,
            title_size: 12,
            contact_size: 10,
            heading_size: 12,
            entry_size: 11,
            body_size: 10,
            detail_size: 9,
            line_advance_factor: 0.5,
            paragraph_gap_mm: 5.0,
            name_advance_mm: 12.0,
            title_advance_mm: 8.0,
            contact_advance_mm: 6.0,
            location_advance_mm: 10.0,
        }
    }
}

impl Typography {
    /// Cursor advance for one wrapped line at `font_size`.
    pub fn line_advance(&self, font_size: u8) -> f64 {
        f64::from(font_size) * self.line_advance_factor
    }
}

/// Complete exporter configuration.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    pub page: PageGeometry,
    pub typography: Typography,
    pub backend: Backend,
    /// Adds a section outline when the `bookmarks` feature is enabled.
    pub outline: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            page: PageGeometry::default(),
            typography: Typography::default(),
            backend: Backend::default(),
            outline: true,
        }
    }
}

impl ExportConfig {
    /// Parses a TOML configuration and validates it.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a TOML configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Sets the backend and returns the updated configuration.
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Rejects geometries under which the paginator could not make progress.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let page = &self.page;
        if page.top_margin_mm < 0.0 || page.left_margin_mm < 0.0 {
            return Err(ConfigError::InvalidGeometry(
                "margins must not be negative".to_owned(),
            ));
        }
        if page.bottom_limit_mm <= page.top_margin_mm {
            return Err(ConfigError::InvalidGeometry(format!(
                "bottom limit {} mm must lie below the top margin {} mm",
                page.bottom_limit_mm, page.top_margin_mm
            )));
        }
        if page.bottom_limit_mm >= page.height_mm {
            return Err(ConfigError::InvalidGeometry(format!(
                "bottom limit {} mm must lie inside the page height {} mm",
                page.bottom_limit_mm, page.height_mm
            )));
        }
        if page.max_line_width_mm <= 0.0
            || page.left_margin_mm + page.max_line_width_mm > page.width_mm
        {
            return Err(ConfigError::InvalidGeometry(format!(
                "line width {} mm does not fit the page width {} mm",
                page.max_line_width_mm, page.width_mm
            )));
        }
        if self.typography.line_advance_factor <= 0.0 {
            return Err(ConfigError::InvalidGeometry(
                "line advance factor must be positive".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(ExportConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let config = ExportConfig::from_toml_str(
            "backend = \"bundled-fonts\"\n[page]\nbottom_limit_mm = 250.0\n",
        )
        .expect("config parses");
        assert_eq!(config.backend, Backend::BundledFonts);
        assert_eq!(config.page.bottom_limit_mm, 250.0);
        assert_eq!(config.page.top_margin_mm, 20.0);
        assert_eq!(config.typography.body_size, 10);
    }

    #[test]
    fn rejects_bottom_limit_above_top_margin() {
        let err = ExportConfig::from_toml_str("[page]\nbottom_limit_mm = 10.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidGeometry(_)));
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(matches!(
            ExportConfig::from_toml_str("[page]\nbottom = 1.0\n"),
            Err(ConfigError::Parse(_))
        ));
    }
}
