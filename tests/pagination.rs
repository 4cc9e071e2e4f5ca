use portfolio_resume::config::PageGeometry;
use portfolio_resume::layout::Layout;
use portfolio_resume::metrics::{BuiltinMetrics, TextMeasure};
use portfolio_resume::model::{Experience, PersonalInfo};
use portfolio_resume::{suggested_file_name, ExportConfig, Exporter, ResumeDocument};
use pretty_assertions::assert_eq;

fn bundled() -> ResumeDocument {
    ResumeDocument::bundled().expect("bundled resume parses")
}

fn long_document(entries: usize) -> ResumeDocument {
    let mut document = ResumeDocument::new(
        PersonalInfo::new(
            "Jane Q. Doe",
            "Systems Engineer",
            "jane@example.com",
            "+1 555 0100",
            "Nairobi, Kenya",
        )
        .with_objective("Ship reliable software. ".repeat(30)),
    );
    for index in 0..entries {
        document = document.with_experience(
            Experience::new(
                format!("Engineer {index}"),
                "Example Corp",
                "2020 - Present",
                "Maintained services and wrote tooling for the platform team. ".repeat(6),
            )
            .with_achievements(["Cut build times in half", "Mentored two interns"]),
        );
    }
    document
}

fn assert_within_bounds(layout: &Layout, page: &PageGeometry) {
    for (number, laid_out) in layout.pages().iter().enumerate() {
        let lines = laid_out.lines();
        assert!(!lines.is_empty(), "page {} is empty", number + 1);
        assert_eq!(
            lines[0].y_mm,
            page.top_margin_mm,
            "page {} should start at the top margin",
            number + 1
        );
        for line in lines {
            assert!(
                line.y_mm <= page.bottom_limit_mm,
                "line {:?} on page {} sits below the bottom limit",
                line.text,
                number + 1
            );
            assert_eq!(line.x_mm, page.left_margin_mm);
        }
        assert!(
            lines.windows(2).all(|pair| pair[0].y_mm < pair[1].y_mm),
            "lines on page {} must move down the page",
            number + 1
        );
    }
}

#[test]
fn bundled_resume_respects_page_bounds() {
    let exporter = Exporter::default();
    let layout = exporter.layout(&bundled()).expect("layout");

    assert!(layout.page_count() >= 2, "the full resume spans pages");
    assert_within_bounds(&layout, &exporter.config().page);
}

#[test]
fn wrapped_lines_fit_the_line_width() {
    let exporter = Exporter::default();
    let layout = exporter.layout(&bundled()).expect("layout");
    let limit = exporter.config().page.max_line_width_mm;

    for (page, line) in layout.lines() {
        if line.text.contains(' ') {
            let width = BuiltinMetrics.width_mm(&line.text, line.style);
            assert!(
                width <= limit + 1e-6,
                "line {:?} on page {} is {:.1} mm wide",
                line.text,
                page,
                width
            );
        }
    }
}

#[test]
fn long_documents_keep_paginating() {
    let exporter = Exporter::default();
    let short = exporter.layout(&long_document(2)).expect("layout");
    let long = exporter.layout(&long_document(40)).expect("layout");

    assert!(long.page_count() > short.page_count());
    assert_within_bounds(&long, &exporter.config().page);
}

#[test]
fn tighter_bottom_limit_adds_pages() {
    let document = bundled();
    let default_pages = Exporter::default()
        .layout(&document)
        .expect("layout")
        .page_count();

    let mut config = ExportConfig::default();
    config.page.bottom_limit_mm = 150.0;
    let exporter = Exporter::new(config).expect("valid config");
    let layout = exporter.layout(&document).expect("layout");

    assert!(layout.page_count() > default_pages);
    assert_within_bounds(&layout, &config.page);
}

#[test]
fn layout_is_repeatable() {
    let exporter = Exporter::default();
    let document = bundled();
    let first = exporter.layout(&document).expect("layout");
    let second = exporter.layout(&document).expect("layout");
    assert_eq!(first, second);

    let artifact = exporter.export(&document).expect("export");
    assert_eq!(artifact.layout(), &first);
    assert_eq!(artifact.page_count(), first.page_count());
}

#[test]
fn section_marks_follow_emission_order() {
    let layout = Exporter::default().layout(&bundled()).expect("layout");
    let sections = layout.sections();

    assert_eq!(sections.len(), 7);
    assert_eq!(sections[0].page, 1);
    assert!(sections.windows(2).all(|pair| pair[0].page <= pair[1].page));
    assert!(sections
        .iter()
        .all(|mark| mark.page >= 1 && mark.page <= layout.page_count()));
}

#[test]
fn header_opens_the_first_page() {
    let layout = Exporter::default().layout(&bundled()).expect("layout");
    let first_page = &layout.pages()[0];
    let texts: Vec<&str> = first_page
        .lines()
        .iter()
        .take(5)
        .map(|line| line.text.as_str())
        .collect();

    assert_eq!(texts[0], "Fredrick Kitonyi Kiio");
    assert!(texts[2].starts_with("Email: "));
    assert!(texts[3].starts_with("Location: "));
    assert_eq!(texts[4], "OBJECTIVE");

    let ys: Vec<f64> = first_page.lines().iter().take(5).map(|l| l.y_mm).collect();
    assert_eq!(ys, vec![20.0, 32.0, 40.0, 46.0, 56.0]);
}

#[test]
fn empty_sections_still_export() {
    let document = ResumeDocument::new(PersonalInfo::new(
        "Jane Q. Doe",
        "Engineer",
        "jane@example.com",
        "555",
        "Remote",
    ));
    let artifact = Exporter::default().export(&document).expect("export");

    assert_eq!(artifact.file_name(), "Jane_Q._Doe_Resume.pdf");
    assert_eq!(artifact.page_count(), 1);
    assert!(artifact.bytes().starts_with(b"%PDF"));
}

#[test]
fn file_names_collapse_whitespace() {
    assert_eq!(suggested_file_name("Jane Q. Doe"), "Jane_Q._Doe_Resume.pdf");
    assert_eq!(suggested_file_name("Ada  \tLovelace"), "Ada_Lovelace_Resume.pdf");
    assert_eq!(suggested_file_name(""), "_Resume.pdf");
}
