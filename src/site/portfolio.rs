//! Portfolio showcase and its category filter.

use serde::Deserialize;

/// Category that disables filtering.
pub const ALL_CATEGORIES: &str = "All";

/// A showcased project card.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortfolioProject {
    pub title: String,
    pub description: String,
    pub category: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub live_url: String,
    pub github_url: String,
}

/// Projects plus the category buttons offered above them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Portfolio {
    categories: Vec<String>,
    projects: Vec<PortfolioProject>,
}

impl Portfolio {
    pub fn new(categories: Vec<String>, projects: Vec<PortfolioProject>) -> Self {
        Self {
            categories,
            projects,
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn projects(&self) -> &[PortfolioProject] {
        &self.projects
    }
}

/// Currently selected category; starts at [`ALL_CATEGORIES`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryFilter {
    active: String,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self {
            active: ALL_CATEGORIES.to_owned(),
        }
    }
}

impl CategoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn select(&mut self, category: impl Into<String>) {
        self.active = category.into();
    }

    /// Projects whose category equals the selection, in their original order,
    /// or every project when the selection is `All`.
    pub fn visible<'a>(&self, projects: &'a [PortfolioProject]) -> Vec<&'a PortfolioProject> {
        projects
            .iter()
            .filter(|project| self.active == ALL_CATEGORIES || project.category == self.active)
            .collect()
    }
}
