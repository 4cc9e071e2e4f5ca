//! Page-level collaborators of the exporter: anchors, navigation, the
//! portfolio filter, the contact form and entrance reveals.
//!
//! Each type owns its own state; nothing here is shared between views.

use std::fmt;
use std::str::FromStr;

pub mod contact;
pub mod navigation;
pub mod portfolio;
pub mod reveal;

/// In-page section targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    Home,
    About,
    Services,
    Skills,
    Portfolio,
    Resume,
    Contact,
}

impl Anchor {
    /// Every anchor in page order.
    pub const ALL: [Anchor; 7] = [
        Anchor::Home,
        Anchor::About,
        Anchor::Services,
        Anchor::Skills,
        Anchor::Portfolio,
        Anchor::Resume,
        Anchor::Contact,
    ];

    /// Element id without the leading `#`.
    pub fn id(self) -> &'static str {
        match self {
            Anchor::Home => "home",
            Anchor::About => "about",
            Anchor::Services => "services",
            Anchor::Skills => "skills",
            Anchor::Portfolio => "portfolio",
            Anchor::Resume => "resume",
            Anchor::Contact => "contact",
        }
    }

    /// Fragment reference, e.g. `#about`.
    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.id())
    }
}

/// Error for strings that name no anchor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section anchor '{0}'")]
pub struct UnknownAnchor(pub String);

impl FromStr for Anchor {
    type Err = UnknownAnchor;

    /// Accepts `about` as well as `#about`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let id = value.trim().trim_start_matches('#');
        Anchor::ALL
            .into_iter()
            .find(|anchor| anchor.id().eq_ignore_ascii_case(id))
            .ok_or_else(|| UnknownAnchor(value.to_owned()))
    }
}
