//! One module per page affordance. Each exposes an `install` that wires the affordance
//! into a [`Page`](crate::Page) and reports an [`Outcome`]; pure helpers carry the math.

pub mod active_section;
pub mod back_to_top;
pub mod collapsible;
pub mod copy_email;
pub mod freshness;
pub mod print_button;
pub mod reading_progress;
pub mod skip_link;
pub mod smooth_scroll;

use crate::dom::Query;
use std::fmt;

/// Result of installing one routine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Installed,
    Skipped(SkipReason),
}

impl Outcome {
    pub(crate) fn missing(query: Query<'_>) -> Self {
        Self::Skipped(SkipReason::MissingElement(query.to_string()))
    }

    #[must_use]
    pub const fn is_installed(&self) -> bool {
        matches!(self, Self::Installed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Turned off by configuration.
    Disabled,
    /// No element matched the selector.
    MissingElement(String),
    /// The configured date does not parse.
    UnparsableDate(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => f.write_str("disabled"),
            Self::MissingElement(selector) => write!(f, "missing element `{selector}`"),
            Self::UnparsableDate(date) => write!(f, "unparsable date `{date}`"),
        }
    }
}
