//! Data structures describing the structured resume record.
//!
//! The types in this module are plain values: they are deserialized once from
//! TOML (see [`crate::data`]) or assembled in code through the `with_*`
//! builders, and are never mutated afterwards.  The same [`ResumeDocument`] is
//! handed to the preview renderer and to the exporter so both always agree.

use serde::Deserialize;

/// Contact details and the career objective shown in the document header.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersonalInfo {
    name: String,
    title: String,
    email: String,
    phone: String,
    location: String,
    objective: String,
    #[serde(default)]
    linkedin: Option<String>,
}

impl PersonalInfo {
    /// Creates the personal information block with an empty objective.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            email: email.into(),
            phone: phone.into(),
            location: location.into(),
            ..Self::default()
        }
    }

    /// Full name; also drives the suggested output filename.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Professional headline.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Career objective paragraph.
    pub fn objective(&self) -> &str {
        &self.objective
    }

    /// LinkedIn handle, shown in the preview only.
    pub fn linkedin(&self) -> Option<&str> {
        self.linkedin.as_deref()
    }

    /// Sets the objective and returns the updated block.
    pub fn with_objective(mut self, objective: impl Into<String>) -> Self {
        self.objective = objective.into();
        self
    }

    /// Sets the LinkedIn handle and returns the updated block.
    pub fn with_linkedin(mut self, linkedin: impl Into<Option<String>>) -> Self {
        self.linkedin = linkedin.into();
        self
    }
}

/// A single education entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Education {
    degree: String,
    institution: String,
    period: String,
    #[serde(default)]
    gpa: Option<String>,
    description: String,
    #[serde(default)]
    relevant_coursework: Option<Vec<String>>,
}

impl Education {
    /// Creates an entry without GPA or coursework.
    pub fn new(
        degree: impl Into<String>,
        institution: impl Into<String>,
        period: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            degree: degree.into(),
            institution: institution.into(),
            period: period.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn degree(&self) -> &str {
        &self.degree
    }

    pub fn institution(&self) -> &str {
        &self.institution
    }

    pub fn period(&self) -> &str {
        &self.period
    }

    pub fn gpa(&self) -> Option<&str> {
        self.gpa.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Relevant coursework; an empty list is treated the same as no list.
    pub fn relevant_coursework(&self) -> Option<&[String]> {
        self.relevant_coursework
            .as_deref()
            .filter(|courses| !courses.is_empty())
    }

    /// Sets the GPA line and returns the updated entry.
    pub fn with_gpa(mut self, gpa: impl Into<Option<String>>) -> Self {
        self.gpa = gpa.into();
        self
    }

    /// Sets the coursework list and returns the updated entry.
    pub fn with_coursework<I, S>(mut self, courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.relevant_coursework = Some(courses.into_iter().map(Into::into).collect());
        self
    }
}

/// A single professional experience entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Experience {
    title: String,
    company: String,
    period: String,
    description: String,
    #[serde(default)]
    achievements: Option<Vec<String>>,
}

impl Experience {
    /// Creates an entry without achievements.
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        period: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            period: period.into(),
            description: description.into(),
            achievements: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn period(&self) -> &str {
        &self.period
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Key achievements; an empty list is treated the same as no list.
    pub fn achievements(&self) -> Option<&[String]> {
        self.achievements.as_deref().filter(|items| !items.is_empty())
    }

    /// Sets the achievement list and returns the updated entry.
    pub fn with_achievements<I, S>(mut self, achievements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.achievements = Some(achievements.into_iter().map(Into::into).collect());
        self
    }
}

/// An academic or personal project listed on the resume.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectEntry {
    title: String,
    technologies: String,
    description: String,
    #[serde(default)]
    features: Option<String>,
    #[serde(default)]
    link: Option<String>,
}

impl ProjectEntry {
    pub fn new(
        title: impl Into<String>,
        technologies: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            technologies: technologies.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn technologies(&self) -> &str {
        &self.technologies
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn features(&self) -> Option<&str> {
        self.features.as_deref()
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    /// Sets the feature summary and returns the updated entry.
    pub fn with_features(mut self, features: impl Into<Option<String>>) -> Self {
        self.features = features.into();
        self
    }

    /// Sets the project link and returns the updated entry.
    pub fn with_link(mut self, link: impl Into<Option<String>>) -> Self {
        self.link = link.into();
        self
    }
}

/// One technical skill category; document order is display order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillCategory {
    category: String,
    skills: Vec<String>,
}

impl SkillCategory {
    /// Creates a category from its camelCase key and skills.
    pub fn new<I, S>(category: impl Into<String>, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category: category.into(),
            skills: skills.into_iter().map(Into::into).collect(),
        }
    }

    /// Raw category key, e.g. `cloudPlatforms`.
    pub fn key(&self) -> &str {
        &self.category
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Human readable label: `cloudPlatforms` becomes `Cloud Platforms`.
    pub fn label(&self) -> String {
        humanize_key(&self.category)
    }
}

fn humanize_key(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_uppercase() {
            spaced.push(' ');
        }
        spaced.push(ch);
    }

    let trimmed = spaced.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The complete resume record.
///
/// Every section must be present when deserializing; sections may be empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResumeDocument {
    personal_info: PersonalInfo,
    education: Vec<Education>,
    experience: Vec<Experience>,
    projects: Vec<ProjectEntry>,
    technical_skills: Vec<SkillCategory>,
    achievements: Vec<String>,
    certifications: Vec<String>,
}

impl ResumeDocument {
    /// Creates a document with the given header and empty sections.
    pub fn new(personal_info: PersonalInfo) -> Self {
        Self {
            personal_info,
            ..Self::default()
        }
    }

    pub fn personal_info(&self) -> &PersonalInfo {
        &self.personal_info
    }

    pub fn education(&self) -> &[Education] {
        &self.education
    }

    pub fn experience(&self) -> &[Experience] {
        &self.experience
    }

    pub fn projects(&self) -> &[ProjectEntry] {
        &self.projects
    }

    pub fn technical_skills(&self) -> &[SkillCategory] {
        &self.technical_skills
    }

    pub fn achievements(&self) -> &[String] {
        &self.achievements
    }

    pub fn certifications(&self) -> &[String] {
        &self.certifications
    }

    /// Appends an education entry and returns the updated document.
    pub fn with_education(mut self, entry: Education) -> Self {
        self.education.push(entry);
        self
    }

    /// Appends an experience entry and returns the updated document.
    pub fn with_experience(mut self, entry: Experience) -> Self {
        self.experience.push(entry);
        self
    }

    /// Appends a project entry and returns the updated document.
    pub fn with_project(mut self, entry: ProjectEntry) -> Self {
        self.projects.push(entry);
        self
    }

    /// Appends a skill category and returns the updated document.
    pub fn with_skill_category(mut self, category: SkillCategory) -> Self {
        self.technical_skills.push(category);
        self
    }

    /// Appends an achievement and returns the updated document.
    pub fn with_achievement(mut self, achievement: impl Into<String>) -> Self {
        self.achievements.push(achievement.into());
        self
    }

    /// Appends a certification and returns the updated document.
    pub fn with_certification(mut self, certification: impl Into<String>) -> Self {
        self.certifications.push(certification.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{Education, Experience, SkillCategory};

    #[test]
    fn label_splits_camel_case() {
        let category = SkillCategory::new("cloudPlatforms", ["AWS"]);
        assert_eq!(category.label(), "Cloud Platforms");
        assert_eq!(
            SkillCategory::new("softwareEngineering", Vec::<String>::new()).label(),
            "Software Engineering"
        );
        assert_eq!(SkillCategory::new("tools", ["Git"]).label(), "Tools");
    }

    #[test]
    fn empty_optional_lists_read_as_absent() {
        let education = Education::new("BSc", "Uni", "2020", "desc")
            .with_coursework(Vec::<String>::new());
        assert!(education.relevant_coursework().is_none());

        let experience =
            Experience::new("Dev", "Co", "2021", "desc").with_achievements(["Shipped"]);
        assert_eq!(experience.achievements().map(<[String]>::len), Some(1));
    }
}
