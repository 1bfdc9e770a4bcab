//! Section view models.
//!
//! Each builder takes the current snapshots and produces display-ready rows. Surfaces
//! render these without any further computation.

pub mod dashboard;
pub mod orders;
pub mod products;
pub mod stock;

/// Visual indicator attached to a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Healthy
    Success,

    /// Needs attention
    Warning,

    /// Needs action
    Danger,
}

impl Tone {
    /// CSS-friendly name of the tone.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// A list that is either populated or replaced by a placeholder message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing<T> {
    /// At least one row.
    Rows(Vec<T>),

    /// Nothing to show.
    Empty(&'static str),
}

impl<T> Listing<T> {
    /// Wrap rows, falling back to `placeholder` when there are none.
    #[must_use]
    pub fn from_rows(rows: Vec<T>, placeholder: &'static str) -> Self {
        if rows.is_empty() {
            Self::Empty(placeholder)
        } else {
            Self::Rows(rows)
        }
    }

    /// The rows, empty for a placeholder.
    #[must_use]
    pub fn rows(&self) -> &[T] {
        match self {
            Self::Rows(rows) => rows,
            Self::Empty(_) => &[],
        }
    }

    /// The placeholder message, if there are no rows.
    #[must_use]
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Rows(_) => None,
            Self::Empty(message) => Some(message),
        }
    }
}
