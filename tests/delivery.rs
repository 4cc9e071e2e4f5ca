use portfolio_resume::delivery::{
    deliver, BlobUrl, ClientKind, Delivered, DeliveryTarget, FsDelivery, PDF_MIME,
};
use portfolio_resume::model::PersonalInfo;
use portfolio_resume::notify::{RecordingNotifier, DOWNLOAD_FAILURE, DOWNLOAD_SUCCESS};
use portfolio_resume::preview::ResumePreview;
use portfolio_resume::{Artifact, DeliveryError, ExportError, Exporter, ResumeDocument};
use pretty_assertions::assert_eq;

#[derive(Debug, PartialEq, Eq)]
enum Call {
    Save(String),
    OpenInline(String),
    CreateBlob(String),
    Trigger(String, String),
    Revoke(String),
}

/// Records every call and fails the operations it is told to fail.
#[derive(Default)]
struct RecordingTarget {
    calls: Vec<Call>,
    popup_blocked: bool,
    fail_save: bool,
    fail_trigger: bool,
    created: usize,
}

impl DeliveryTarget for RecordingTarget {
    fn save_file(&mut self, file_name: &str, _bytes: &[u8]) -> Result<(), DeliveryError> {
        self.calls.push(Call::Save(file_name.to_owned()));
        if self.fail_save {
            return Err(DeliveryError::Unavailable("disk full".to_owned()));
        }
        Ok(())
    }

    fn open_inline(&mut self, file_name: &str, html: &str) -> Result<bool, DeliveryError> {
        assert!(html.contains("data:application/pdf;base64,"));
        self.calls.push(Call::OpenInline(file_name.to_owned()));
        Ok(!self.popup_blocked)
    }

    fn create_blob_url(&mut self, _bytes: &[u8], mime: &str) -> Result<BlobUrl, DeliveryError> {
        self.created += 1;
        let url = format!("blob:test-{}", self.created);
        self.calls.push(Call::CreateBlob(mime.to_owned()));
        Ok(BlobUrl::new(url))
    }

    fn trigger_download(&mut self, url: &BlobUrl, file_name: &str) -> Result<(), DeliveryError> {
        self.calls
            .push(Call::Trigger(url.to_string(), file_name.to_owned()));
        if self.fail_trigger {
            return Err(DeliveryError::Unavailable("download blocked".to_owned()));
        }
        Ok(())
    }

    fn revoke_blob_url(&mut self, url: BlobUrl) {
        self.calls.push(Call::Revoke(url.to_string()));
    }
}

impl RecordingTarget {
    fn revocations(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, Call::Revoke(_)))
            .count()
    }
}

fn sample_document() -> ResumeDocument {
    ResumeDocument::new(
        PersonalInfo::new("Jane Q. Doe", "Engineer", "jane@example.com", "555", "Remote")
            .with_objective("Deliver PDFs."),
    )
}

fn sample_artifact() -> Artifact {
    Exporter::default()
        .export(&sample_document())
        .expect("export sample")
}

#[test]
fn desktop_saves_directly() {
    let artifact = sample_artifact();
    let mut target = RecordingTarget::default();

    let delivered = deliver(&artifact, ClientKind::Desktop, &mut target).expect("deliver");

    assert_eq!(delivered, Delivered::Saved);
    assert_eq!(
        target.calls,
        vec![Call::Save("Jane_Q._Doe_Resume.pdf".to_owned())]
    );
}

#[test]
fn mobile_opens_inline_viewer() {
    let artifact = sample_artifact();
    let mut target = RecordingTarget::default();

    let delivered = deliver(&artifact, ClientKind::Mobile, &mut target).expect("deliver");

    assert_eq!(delivered, Delivered::OpenedInline);
    assert_eq!(
        target.calls,
        vec![Call::OpenInline("Jane_Q._Doe_Resume.pdf".to_owned())]
    );
}

#[test]
fn blocked_popup_falls_back_to_blob_download() {
    let artifact = sample_artifact();
    let mut target = RecordingTarget {
        popup_blocked: true,
        ..RecordingTarget::default()
    };

    let delivered = deliver(&artifact, ClientKind::Mobile, &mut target).expect("deliver");

    assert_eq!(delivered, Delivered::BlobDownload);
    assert_eq!(
        target.calls,
        vec![
            Call::OpenInline("Jane_Q._Doe_Resume.pdf".to_owned()),
            Call::CreateBlob(PDF_MIME.to_owned()),
            Call::Trigger("blob:test-1".to_owned(), "Jane_Q._Doe_Resume.pdf".to_owned()),
            Call::Revoke("blob:test-1".to_owned()),
        ]
    );
}

#[test]
fn failed_blob_download_still_revokes_once() {
    let artifact = sample_artifact();
    let mut target = RecordingTarget {
        popup_blocked: true,
        fail_trigger: true,
        ..RecordingTarget::default()
    };

    let result = deliver(&artifact, ClientKind::Mobile, &mut target);

    assert!(matches!(result, Err(DeliveryError::Unavailable(_))));
    assert_eq!(target.revocations(), 1);
    assert_eq!(target.calls.last(), Some(&Call::Revoke("blob:test-1".to_owned())));
}

#[test]
fn fs_delivery_writes_the_artifact() {
    let dir = tempfile::tempdir().expect("tempdir");
    let artifact = sample_artifact();
    let mut target = FsDelivery::new(dir.path());

    deliver(&artifact, ClientKind::Desktop, &mut target).expect("deliver");

    let written = std::fs::read(dir.path().join("Jane_Q._Doe_Resume.pdf")).expect("saved file");
    assert_eq!(written, artifact.bytes());
}

#[test]
fn fs_delivery_writes_inline_viewer() {
    let dir = tempfile::tempdir().expect("tempdir");
    let artifact = sample_artifact();
    let mut target = FsDelivery::new(dir.path());

    let delivered = deliver(&artifact, ClientKind::Mobile, &mut target).expect("deliver");

    assert_eq!(delivered, Delivered::OpenedInline);
    let html =
        std::fs::read_to_string(dir.path().join("Jane_Q._Doe_Resume.html")).expect("viewer");
    assert!(html.contains("<iframe src=\"data:application/pdf;base64,"));
}

#[test]
fn fs_blob_fallback_leaves_no_temporary_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let artifact = sample_artifact();
    let mut target = FsDelivery::new(dir.path()).with_inline_viewer(false);

    let delivered = deliver(&artifact, ClientKind::Mobile, &mut target).expect("deliver");

    assert_eq!(delivered, Delivered::BlobDownload);
    assert_eq!(target.live_blobs(), 0);

    let names: Vec<String> = std::fs::read_dir(dir.path())
        .expect("read dir")
        .map(|entry| entry.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["Jane_Q._Doe_Resume.pdf".to_owned()]);
}

#[test]
fn unknown_blob_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut target = FsDelivery::new(dir.path());
    let stray = BlobUrl::new("blob:missing");

    let result = target.trigger_download(&stray, "x.pdf");

    assert!(matches!(result, Err(DeliveryError::UnknownBlob(_))));
    target.revoke_blob_url(stray);
}

#[test]
fn preview_download_success_closes_dialog() {
    let mut preview = ResumePreview::new();
    preview.open();
    let mut target = RecordingTarget::default();
    let mut notifier = RecordingNotifier::default();

    let delivered = preview
        .download(
            &Exporter::default(),
            &sample_document(),
            ClientKind::Desktop,
            &mut target,
            &mut notifier,
        )
        .expect("download");

    assert_eq!(delivered, Delivered::Saved);
    assert!(!preview.is_open());
    assert_eq!(notifier.successes, vec![DOWNLOAD_SUCCESS.to_owned()]);
    assert!(notifier.failures.is_empty());
}

#[test]
fn preview_download_failure_keeps_dialog_open() {
    let mut preview = ResumePreview::new();
    preview.open();
    let mut target = RecordingTarget {
        fail_save: true,
        ..RecordingTarget::default()
    };
    let mut notifier = RecordingNotifier::default();

    let result = preview.download(
        &Exporter::default(),
        &sample_document(),
        ClientKind::Desktop,
        &mut target,
        &mut notifier,
    );

    assert!(matches!(result, Err(ExportError::Delivery(_))));
    assert!(preview.is_open());
    assert!(notifier.successes.is_empty());
    assert_eq!(notifier.failures, vec![DOWNLOAD_FAILURE.to_owned()]);
}

fn artifact_for(name: &str) -> Artifact {
    let document = ResumeDocument::new(PersonalInfo::new(name, "Engineer", "e", "p", "l"));
    Exporter::default().export(&document).expect("export")
}

#[test]
fn names_with_separators_are_not_saved() {
    let dir = tempfile::tempdir().expect("tempdir");
    let artifact = artifact_for("Jane/Doe");
    assert_eq!(artifact.file_name(), "Jane/Doe_Resume.pdf");

    let mut target = FsDelivery::new(dir.path());
    for client in [ClientKind::Desktop, ClientKind::Mobile] {
        let result = deliver(&artifact, client, &mut target);
        assert!(matches!(result, Err(DeliveryError::Unavailable(_))), "{client:?}");
    }
    assert_eq!(std::fs::read_dir(dir.path()).expect("read dir").count(), 0);
}

#[test]
fn parent_components_cannot_escape_the_directory() {
    let root = tempfile::tempdir().expect("tempdir");
    let out = root.path().join("a").join("b");
    let artifact = artifact_for("../../escape");

    let mut target = FsDelivery::new(&out);
    let result = deliver(&artifact, ClientKind::Desktop, &mut target);

    assert!(matches!(result, Err(DeliveryError::Unavailable(_))));
    assert!(!root.path().join("escape_Resume.pdf").exists());

    let mut blobs = FsDelivery::new(&out).with_inline_viewer(false);
    let result = deliver(&artifact, ClientKind::Mobile, &mut blobs);
    assert!(matches!(result, Err(DeliveryError::Unavailable(_))));
    assert_eq!(blobs.live_blobs(), 0);
    assert!(!root.path().join("escape_Resume.pdf").exists());
}

#[test]
fn blob_download_rejects_nested_destination() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut target = FsDelivery::new(dir.path());
    let url = target.create_blob_url(b"%PDF-1.3", PDF_MIME).expect("blob");

    let result = target.trigger_download(&url, "../outside.pdf");

    assert!(matches!(result, Err(DeliveryError::Unavailable(_))));
    target.revoke_blob_url(url);
    assert_eq!(target.live_blobs(), 0);
}
