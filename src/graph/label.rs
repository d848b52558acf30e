//! Tri-state edge labels.
//!
//! An edge's existence and its label are one piece of state: a cell (or map
//! entry) holding [`Label::Absent`] means "no edge", [`Label::Unlabeled`]
//! means "edge with no meaningful label", and [`Label::Labeled`] carries a
//! caller-supplied value. The sentinel is distinct from any user value, so
//! `Labeled(None::<T>)` and `Absent` never collapse into each other.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The label state of a directed edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Label<L> {
    /// No edge exists.
    #[default]
    Absent,
    /// The edge exists but carries no explicit label.
    Unlabeled,
    /// The edge exists and carries `L`.
    Labeled(L),
}

impl<L> Label<L> {
    /// Returns true if an edge exists (`Unlabeled` or `Labeled`).
    pub fn is_present(&self) -> bool {
        !matches!(self, Label::Absent)
    }

    /// Returns true if no edge exists.
    pub fn is_absent(&self) -> bool {
        matches!(self, Label::Absent)
    }

    /// Converts from `&Label<L>` to `Label<&L>`.
    pub fn as_ref(&self) -> Label<&L> {
        match self {
            Label::Absent => Label::Absent,
            Label::Unlabeled => Label::Unlabeled,
            Label::Labeled(x) => Label::Labeled(x),
        }
    }

    /// Returns the explicit label value, if any.
    ///
    /// `None` for both `Absent` and `Unlabeled`; use [`Label::is_present`]
    /// to tell those apart.
    pub fn value(&self) -> Option<&L> {
        match self {
            Label::Labeled(x) => Some(x),
            _ => None,
        }
    }

    /// Maps a `Label<L>` to `Label<M>` by applying `f` to a contained value.
    pub fn map<M, F: FnOnce(L) -> M>(self, f: F) -> Label<M> {
        match self {
            Label::Absent => Label::Absent,
            Label::Unlabeled => Label::Unlabeled,
            Label::Labeled(x) => Label::Labeled(f(x)),
        }
    }
}

impl<L: Clone> Label<&L> {
    /// Maps `Label<&L>` to `Label<L>` by cloning the contained value.
    pub fn cloned(self) -> Label<L> {
        self.map(Clone::clone)
    }
}

impl<L: fmt::Display> fmt::Display for Label<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Absent => write!(f, "Absent"),
            Label::Unlabeled => write!(f, "Unlabeled"),
            Label::Labeled(x) => write!(f, "Labeled({x})"),
        }
    }
}
