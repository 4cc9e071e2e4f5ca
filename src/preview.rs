//! The resume preview dialog and its download action.

use std::error::Error as _;
use std::fmt::Write as _;

use log::error;

use crate::compose::ResumeSection;
use crate::delivery::{deliver, ClientKind, Delivered, DeliveryTarget};
use crate::error::ExportError;
use crate::export::Exporter;
use crate::model::ResumeDocument;
use crate::notify::{Notifier, DOWNLOAD_FAILURE, DOWNLOAD_SUCCESS};

/// Open/closed state of the preview dialog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResumePreview {
    open: bool,
}

impl ResumePreview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Exports `document` and delivers it.
    ///
    /// On success the user is notified and the dialog closes.  On failure the
    /// error is logged, a generic failure is shown, and the dialog stays open.
    pub fn download(
        &mut self,
        exporter: &Exporter,
        document: &ResumeDocument,
        client: ClientKind,
        target: &mut dyn DeliveryTarget,
        notifier: &mut dyn Notifier,
    ) -> Result<Delivered, ExportError> {
        let outcome = exporter
            .export(document)
            .map_err(ExportError::from)
            .and_then(|artifact| deliver(&artifact, client, target).map_err(ExportError::from));

        match outcome {
            Ok(delivered) => {
                notifier.success(DOWNLOAD_SUCCESS);
                self.close();
                Ok(delivered)
            }
            Err(err) => {
                error!("Error generating PDF: {}", describe(&err));
                notifier.failure(DOWNLOAD_FAILURE);
                Err(err)
            }
        }
    }
}

fn describe(err: &ExportError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = write!(message, ": {}", cause);
        source = cause.source();
    }
    message
}

/// Renders the on-page preview of `document` as plain text.
pub fn render_text_preview(document: &ResumeDocument) -> String {
    let mut out = String::new();
    let info = document.personal_info();

    let _ = writeln!(out, "{}", info.name());
    let _ = writeln!(out, "{}", info.title());
    let _ = writeln!(
        out,
        "{} \u{2022} {} \u{2022} {}",
        info.email(),
        info.phone(),
        info.location()
    );
    if let Some(linkedin) = info.linkedin() {
        let _ = writeln!(out, "{}", linkedin);
    }
    let _ = writeln!(out, "\n{}", info.objective());

    heading(&mut out, ResumeSection::Education);
    for education in document.education() {
        let _ = writeln!(out, "\n{}", education.degree());
        let _ = writeln!(out, "{}", education.institution());
        let _ = writeln!(out, "{}", education.period());
        if let Some(gpa) = education.gpa() {
            let _ = writeln!(out, "{}", gpa);
        }
        let _ = writeln!(out, "{}", education.description());
        if let Some(courses) = education.relevant_coursework() {
            let _ = writeln!(out, "Relevant Coursework: {}", courses.join(" | "));
        }
    }

    heading(&mut out, ResumeSection::Experience);
    for experience in document.experience() {
        let _ = writeln!(out, "\n{}", experience.title());
        let _ = writeln!(out, "{}", experience.company());
        let _ = writeln!(out, "{}", experience.period());
        let _ = writeln!(out, "{}", experience.description());
        if let Some(achievements) = experience.achievements() {
            let _ = writeln!(out, "Key Achievements:");
            for achievement in achievements {
                let _ = writeln!(out, "  \u{2022} {}", achievement);
            }
        }
    }

    heading(&mut out, ResumeSection::Projects);
    for project in document.projects() {
        let _ = writeln!(out, "\n{}", project.title());
        let _ = writeln!(out, "{}", project.technologies());
        let _ = writeln!(out, "{}", project.description());
        if let Some(features) = project.features() {
            let _ = writeln!(out, "Features: {}", features);
        }
    }

    heading(&mut out, ResumeSection::TechnicalSkills);
    for category in document.technical_skills() {
        let _ = writeln!(out, "\n{}", category.label());
        let _ = writeln!(out, "{}", category.skills().join(" | "));
    }

    heading(&mut out, ResumeSection::Achievements);
    for achievement in document.achievements() {
        let _ = writeln!(out, "\u{2022} {}", achievement);
    }

    heading(&mut out, ResumeSection::Certifications);
    for certification in document.certifications() {
        let _ = writeln!(out, "\u{2022} {}", certification);
    }

    out
}

fn heading(out: &mut String, section: ResumeSection) {
    let title = section.title();
    let _ = writeln!(out, "\n{}\n{}", title, "=".repeat(title.chars().count()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Experience, PersonalInfo};

    #[test]
    fn dialog_starts_closed() {
        let mut preview = ResumePreview::new();
        assert!(!preview.is_open());
        preview.open();
        assert!(preview.is_open());
        preview.close();
        assert!(!preview.is_open());
    }

    #[test]
    fn text_preview_lists_sections_in_order() {
        let document = ResumeDocument::new(
            PersonalInfo::new("Jane Doe", "Engineer", "jane@example.com", "555", "Nairobi")
                .with_objective("Build things."),
        )
        .with_experience(
            Experience::new("Intern", "Hub", "2024", "Helped.").with_achievements(["Won"]),
        )
        .with_certification("AWS CCP");

        let text = render_text_preview(&document);
        assert!(text.starts_with(
            "Jane Doe\nEngineer\njane@example.com \u{2022} 555 \u{2022} Nairobi\n"
        ));
        assert!(text.contains("  \u{2022} Won"));

        let positions: Vec<_> = [
            "Education",
            "Professional Experience",
            "Projects",
            "Technical Skills",
            "Achievements & Awards",
            "Certifications",
        ]
        .iter()
        .map(|title| text.find(&format!("\n{}\n=", title)).expect(title))
        .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
