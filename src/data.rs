//! Loading the canonical resume and portfolio data.
//!
//! The bundled files under `assets/` are compiled into the crate; callers can
//! point at their own TOML files with the same layout instead.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::ResumeDataError;
use crate::model::ResumeDocument;
use crate::site::portfolio::Portfolio;

const BUNDLED_RESUME: &str = include_str!("../assets/resume.toml");
const BUNDLED_PORTFOLIO: &str = include_str!("../assets/portfolio.toml");

fn parse<T: DeserializeOwned>(source: &str) -> Result<T, ResumeDataError> {
    Ok(toml::from_str(source)?)
}

fn read(path: &Path) -> Result<String, ResumeDataError> {
    fs::read_to_string(path).map_err(|source| ResumeDataError::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl ResumeDocument {
    /// Parses a resume from TOML.  Every section table must be present.
    pub fn from_toml_str(source: &str) -> Result<Self, ResumeDataError> {
        parse(source)
    }

    /// Reads a resume TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ResumeDataError> {
        Self::from_toml_str(&read(path.as_ref())?)
    }

    /// The resume compiled into the crate.
    pub fn bundled() -> Result<Self, ResumeDataError> {
        Self::from_toml_str(BUNDLED_RESUME)
    }
}

impl Portfolio {
    /// Parses portfolio projects and categories from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self, ResumeDataError> {
        parse(source)
    }

    /// Reads a portfolio TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ResumeDataError> {
        Self::from_toml_str(&read(path.as_ref())?)
    }

    /// The portfolio compiled into the crate.
    pub fn bundled() -> Result<Self, ResumeDataError> {
        Self::from_toml_str(BUNDLED_PORTFOLIO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_resume_parses() {
        let resume = ResumeDocument::bundled().expect("bundled resume parses");
        assert_eq!(resume.personal_info().name(), "Fredrick Kitonyi Kiio");
        assert_eq!(resume.education().len(), 4);
        assert_eq!(resume.experience().len(), 3);
        assert_eq!(resume.projects().len(), 4);
        assert_eq!(resume.technical_skills()[0].key(), "programming");
        assert_eq!(resume.technical_skills().len(), 7);
        assert_eq!(resume.achievements().len(), 8);
        assert_eq!(resume.certifications().len(), 10);
    }

    #[test]
    fn bundled_portfolio_parses() {
        let portfolio = Portfolio::bundled().expect("bundled portfolio parses");
        assert_eq!(portfolio.projects().len(), 6);
        assert_eq!(portfolio.categories()[0], "All");
    }

    #[test]
    fn missing_section_is_rejected() {
        let source = r#"
            achievements = []
            certifications = []
            education = []
            experience = []
            projects = []

            [personal_info]
            name = "A"
            title = "B"
            email = "c"
            phone = "d"
            location = "e"
            objective = "f"
        "#;
        assert!(matches!(
            ResumeDocument::from_toml_str(source),
            Err(ResumeDataError::Parse(_))
        ));

        let complete = format!("technical_skills = []\n{source}");
        let resume = ResumeDocument::from_toml_str(&complete).expect("empty sections are fine");
        assert!(resume.technical_skills().is_empty());
    }
}
