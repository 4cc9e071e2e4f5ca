//! Resume export and page logic for a single-page portfolio.
//!
//! The centre of the crate is the [`export::Exporter`]: it turns the static
//! [`model::ResumeDocument`] into a paginated PDF using a line-cursor
//! paginator, and [`delivery`] hands the result to the user.  The [`site`]
//! module holds the small stateful pieces of the page around it.

pub mod builder;
pub mod compose;
pub mod config;
pub mod data;
pub mod delivery;
pub mod elements;
pub mod error;
pub mod export;
pub mod fonts;
pub mod layout;
pub mod metrics;
pub mod model;
pub mod notify;
pub mod preview;
pub mod render;
pub mod site;

#[cfg(feature = "bookmarks")]
pub mod bookmarks;

pub use config::{Backend, ExportConfig};
pub use error::{DeliveryError, ExportError, GenerationError};
pub use export::{suggested_file_name, Artifact, Exporter};
pub use model::ResumeDocument;
