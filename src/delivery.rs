//! Hands a finished artifact to the user.
//!
//! Desktop clients get a direct file save.  Mobile clients get the PDF inline
//! in a new viewing context; if that context cannot be opened, a temporary
//! blob URL is created, downloaded and revoked.
//!
//! The surface itself is abstracted behind [`DeliveryTarget`];
//! [`FsDelivery`] maps it onto an output directory.

use std::collections::HashMap;
use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use tempfile::NamedTempFile;

use crate::error::DeliveryError;
use crate::export::Artifact;

/// MIME type of the exported artifact.
pub const PDF_MIME: &str = "application/pdf";

static MOBILE_USER_AGENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Android|webOS|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini")
        .expect("mobile user agent pattern is valid")
});

/// Device class deciding the delivery path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientKind {
    Desktop,
    Mobile,
}

impl ClientKind {
    /// Classifies a user agent string with the mobile keyword heuristic.
    pub fn detect(user_agent: &str) -> Self {
        if MOBILE_USER_AGENT.is_match(user_agent) {
            ClientKind::Mobile
        } else {
            ClientKind::Desktop
        }
    }
}

/// Handle to a temporary blob URL.  Revoking consumes it.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct BlobUrl(String);

impl BlobUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlobUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Operations a delivery surface offers.
pub trait DeliveryTarget {
    /// Saves `bytes` under `file_name` directly.
    fn save_file(&mut self, file_name: &str, bytes: &[u8]) -> Result<(), DeliveryError>;

    /// Opens `html` in a new viewing context.  `Ok(false)` means the context
    /// could not be opened (for example a blocked popup).
    fn open_inline(&mut self, file_name: &str, html: &str) -> Result<bool, DeliveryError>;

    /// Creates a temporary URL holding `bytes`.
    fn create_blob_url(&mut self, bytes: &[u8], mime: &str) -> Result<BlobUrl, DeliveryError>;

    /// Triggers a download of `url` under `file_name`.
    fn trigger_download(&mut self, url: &BlobUrl, file_name: &str) -> Result<(), DeliveryError>;

    /// Releases a URL created by [`DeliveryTarget::create_blob_url`].
    fn revoke_blob_url(&mut self, url: BlobUrl);
}

/// How the artifact reached the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivered {
    Saved,
    OpenedInline,
    BlobDownload,
}

/// Builds a `data:` URI for `bytes`.
pub fn data_uri(bytes: &[u8], mime: &str) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Minimal HTML page that shows the PDF in a full-size iframe.
pub fn inline_viewer_html(file_name: &str, bytes: &[u8]) -> String {
    format!(
        "<html>\n  <head>\n    <title>{title}</title>\n    \
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n  \
         </head>\n  <body style=\"margin:0;padding:0;\">\n    \
         <iframe src=\"{src}\" style=\"width:100%;height:100vh;border:none;\" title=\"Resume PDF\"></iframe>\n  \
         </body>\n</html>\n",
        title = escape_html(file_name),
        src = data_uri(bytes, PDF_MIME),
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Delivers `artifact` according to `client`.
pub fn deliver(
    artifact: &Artifact,
    client: ClientKind,
    target: &mut dyn DeliveryTarget,
) -> Result<Delivered, DeliveryError> {
    let file_name = artifact.file_name();
    match client {
        ClientKind::Desktop => {
            target.save_file(file_name, artifact.bytes())?;
            Ok(Delivered::Saved)
        }
        ClientKind::Mobile => {
            let html = inline_viewer_html(file_name, artifact.bytes());
            if target.open_inline(file_name, &html)? {
                return Ok(Delivered::OpenedInline);
            }

            warn!("Inline viewer unavailable; falling back to a blob download");
            let url = target.create_blob_url(artifact.bytes(), PDF_MIME)?;
            let triggered = target.trigger_download(&url, file_name);
            debug!("Revoking {}", url);
            target.revoke_blob_url(url);
            triggered.map(|()| Delivered::BlobDownload)
        }
    }
}

/// Delivery into a local directory.
///
/// * `save_file` writes `<dir>/<file_name>`.
/// * `open_inline` writes `<dir>/<file_name stem>.html` unless inline viewing
///   is disabled, in which case it reports the context as unavailable.
/// * Blob URLs are backed by temporary files in `<dir>` that disappear on
///   revocation.
///
/// File names must be a single path component; anything else is rejected
/// with [`DeliveryError::Unavailable`] so nothing lands outside `<dir>`.
#[derive(Debug)]
pub struct FsDelivery {
    directory: PathBuf,
    inline_viewer: bool,
    blobs: HashMap<String, NamedTempFile>,
}

impl FsDelivery {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            inline_viewer: true,
            blobs: HashMap::new(),
        }
    }

    /// Enables or disables the inline viewer and returns the updated target.
    pub fn with_inline_viewer(mut self, enabled: bool) -> Self {
        self.inline_viewer = enabled;
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Number of blob URLs created but not yet revoked.
    pub fn live_blobs(&self) -> usize {
        self.blobs.len()
    }

    fn ensure_directory(&self) -> Result<(), DeliveryError> {
        fs::create_dir_all(&self.directory).map_err(|source| DeliveryError::Io {
            path: self.directory.clone(),
            source,
        })
    }

    fn destination(&self, file_name: &str) -> Result<PathBuf, DeliveryError> {
        match Path::new(file_name).file_name() {
            Some(name) if name == OsStr::new(file_name) => Ok(self.directory.join(name)),
            _ => Err(DeliveryError::Unavailable(format!(
                "file name {:?} is not a plain file name",
                file_name
            ))),
        }
    }

    fn write(&self, file_name: &str, contents: &[u8]) -> Result<PathBuf, DeliveryError> {
        let path = self.destination(file_name)?;
        self.ensure_directory()?;
        fs::write(&path, contents).map_err(|source| DeliveryError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

impl DeliveryTarget for FsDelivery {
    fn save_file(&mut self, file_name: &str, bytes: &[u8]) -> Result<(), DeliveryError> {
        let path = self.write(file_name, bytes)?;
        info!("Saved {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    fn open_inline(&mut self, file_name: &str, html: &str) -> Result<bool, DeliveryError> {
        self.destination(file_name)?;
        if !self.inline_viewer {
            return Ok(false);
        }
        let stem = Path::new(file_name)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| file_name.to_owned());
        let path = self.write(&format!("{stem}.html"), html.as_bytes())?;
        info!("Wrote inline viewer {}", path.display());
        Ok(true)
    }

    fn create_blob_url(&mut self, bytes: &[u8], _mime: &str) -> Result<BlobUrl, DeliveryError> {
        self.ensure_directory()?;
        let io_error = |source| DeliveryError::Io {
            path: self.directory.clone(),
            source,
        };
        let mut file = tempfile::Builder::new()
            .prefix(".blob-")
            .tempfile_in(&self.directory)
            .map_err(io_error)?;
        file.write_all(bytes).map_err(io_error)?;
        file.flush().map_err(io_error)?;

        let url = format!("blob:{}", uuid::Uuid::new_v4());
        self.blobs.insert(url.clone(), file);
        Ok(BlobUrl::new(url))
    }

    fn trigger_download(&mut self, url: &BlobUrl, file_name: &str) -> Result<(), DeliveryError> {
        let destination = self.destination(file_name)?;
        let blob = self
            .blobs
            .get(url.as_str())
            .ok_or_else(|| DeliveryError::UnknownBlob(url.to_string()))?;
        fs::copy(blob.path(), &destination).map_err(|source| DeliveryError::Io {
            path: destination.clone(),
            source,
        })?;
        info!("Downloaded {} to {}", url, destination.display());
        Ok(())
    }

    fn revoke_blob_url(&mut self, url: BlobUrl) {
        if self.blobs.remove(url.as_str()).is_none() {
            warn!("Revoked unknown blob URL {}", url);
        }
    }
}
