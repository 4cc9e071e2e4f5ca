//! Turns a [`ResumeDocument`] into the ordered list of text blocks the
//! paginator consumes.
//!
//! Section order is fixed and entries keep their document order; nothing here
//! knows about pages or fonts beyond the point sizes from [`Typography`].

use crate::config::Typography;
use crate::metrics::TextStyle;
use crate::model::ResumeDocument;

/// Resume sections in the order they are emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResumeSection {
    Objective,
    Education,
    Experience,
    Projects,
    TechnicalSkills,
    Achievements,
    Certifications,
}

impl ResumeSection {
    /// All sections in emission order.
    pub const ALL: [ResumeSection; 7] = [
        ResumeSection::Objective,
        ResumeSection::Education,
        ResumeSection::Experience,
        ResumeSection::Projects,
        ResumeSection::TechnicalSkills,
        ResumeSection::Achievements,
        ResumeSection::Certifications,
    ];

    /// Heading printed in the PDF.
    pub fn heading(self) -> &'static str {
        match self {
            ResumeSection::Objective => "OBJECTIVE",
            ResumeSection::Education => "EDUCATION",
            ResumeSection::Experience => "PROFESSIONAL EXPERIENCE",
            ResumeSection::Projects => "ACADEMIC & PERSONAL PROJECTS",
            ResumeSection::TechnicalSkills => "TECHNICAL SKILLS",
            ResumeSection::Achievements => "ACHIEVEMENTS & AWARDS",
            ResumeSection::Certifications => "CERTIFICATIONS",
        }
    }

    /// Title used for outline entries and the text preview.
    pub fn title(self) -> &'static str {
        match self {
            ResumeSection::Objective => "Objective",
            ResumeSection::Education => "Education",
            ResumeSection::Experience => "Professional Experience",
            ResumeSection::Projects => "Projects",
            ResumeSection::TechnicalSkills => "Technical Skills",
            ResumeSection::Achievements => "Achievements & Awards",
            ResumeSection::Certifications => "Certifications",
        }
    }
}

/// How a block advances the cursor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BlockKind {
    /// Single unwrapped header line followed by a fixed advance.
    Fixed { advance_mm: f64 },
    /// Wrapped section heading.
    Heading(ResumeSection),
    /// Wrapped body paragraph.
    Paragraph,
}

/// One unit of text handed to the paginator.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub text: String,
    pub style: TextStyle,
    pub kind: BlockKind,
}

impl Block {
    fn fixed(text: impl Into<String>, style: TextStyle, advance_mm: f64) -> Self {
        Self {
            text: text.into(),
            style,
            kind: BlockKind::Fixed { advance_mm },
        }
    }

    fn heading(section: ResumeSection, size: u8) -> Self {
        Self {
            text: section.heading().to_owned(),
            style: TextStyle::bold(size),
            kind: BlockKind::Heading(section),
        }
    }

    fn paragraph(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
            kind: BlockKind::Paragraph,
        }
    }
}

/// Builds the full block sequence for `document`.
pub fn compose(document: &ResumeDocument, typography: &Typography) -> Vec<Block> {
    let mut blocks = Vec::new();
    let t = typography;
    let info = document.personal_info();

    blocks.push(Block::fixed(
        info.name(),
        TextStyle::bold(t.name_size),
        t.name_advance_mm,
    ));
    blocks.push(Block::fixed(
        info.title(),
        TextStyle::regular(t.title_size),
        t.title_advance_mm,
    ));
    blocks.push(Block::fixed(
        format!("Email: {} | Phone: {}", info.email(), info.phone()),
        TextStyle::regular(t.contact_size),
        t.contact_advance_mm,
    ));
    blocks.push(Block::fixed(
        format!("Location: {}", info.location()),
        TextStyle::regular(t.contact_size),
        t.location_advance_mm,
    ));

    let body = TextStyle::regular(t.body_size);
    let entry = TextStyle::bold(t.entry_size);
    let detail = TextStyle::regular(t.detail_size);
    let label = TextStyle::bold(t.body_size);

    for section in ResumeSection::ALL {
        blocks.push(Block::heading(section, t.heading_size));
        match section {
            ResumeSection::Objective => {
                blocks.push(Block::paragraph(info.objective(), body));
            }
            ResumeSection::Education => {
                for education in document.education() {
                    blocks.push(Block::paragraph(
                        format!("{} - {}", education.degree(), education.institution()),
                        entry,
                    ));
                    let period = match education.gpa() {
                        Some(gpa) => format!("{} | {}", education.period(), gpa),
                        None => education.period().to_owned(),
                    };
                    blocks.push(Block::paragraph(period, body));
                    blocks.push(Block::paragraph(education.description(), body));
                    if let Some(courses) = education.relevant_coursework() {
                        blocks.push(Block::paragraph("Relevant Coursework:", label));
                        blocks.push(Block::paragraph(courses.join(", "), detail));
                    }
                }
            }
            ResumeSection::Experience => {
                for experience in document.experience() {
                    blocks.push(Block::paragraph(
                        format!("{} - {}", experience.title(), experience.company()),
                        entry,
                    ));
                    blocks.push(Block::paragraph(experience.period(), body));
                    blocks.push(Block::paragraph(experience.description(), body));
                    if let Some(achievements) = experience.achievements() {
                        blocks.push(Block::paragraph("Key Achievements:", label));
                        blocks.extend(
                            achievements
                                .iter()
                                .map(|item| Block::paragraph(bullet(item), detail)),
                        );
                    }
                }
            }
            ResumeSection::Projects => {
                for project in document.projects() {
                    blocks.push(Block::paragraph(
                        format!("{} ({})", project.title(), project.technologies()),
                        entry,
                    ));
                    blocks.push(Block::paragraph(project.description(), body));
                    if let Some(features) = project.features() {
                        blocks.push(Block::paragraph(format!("Features: {features}"), detail));
                    }
                }
            }
            ResumeSection::TechnicalSkills => {
                blocks.extend(document.technical_skills().iter().map(|category| {
                    Block::paragraph(
                        format!("{}: {}", category.label(), category.skills().join(", ")),
                        body,
                    )
                }));
            }
            ResumeSection::Achievements => {
                blocks.extend(
                    document
                        .achievements()
                        .iter()
                        .map(|item| Block::paragraph(bullet(item), body)),
                );
            }
            ResumeSection::Certifications => {
                blocks.extend(
                    document
                        .certifications()
                        .iter()
                        .map(|item| Block::paragraph(bullet(item), body)),
                );
            }
        }
    }

    blocks
}

fn bullet(item: &str) -> String {
    format!("\u{2022} {item}")
}
