//! Choice presentation seam

use crate::domain::DisplayRow;
use crate::error::Result;

/// Outcome of presenting a list of choices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Index of the picked row
    Picked(usize),
    /// The user closed the list without picking
    Dismissed,
}

impl Choice {
    /// Convert a host index where `-1` (or any negative value) means dismissed
    pub fn from_index(index: isize) -> Self {
        usize::try_from(index).map_or(Choice::Dismissed, Choice::Picked)
    }

    pub fn index(self) -> Option<usize> {
        match self {
            Choice::Picked(index) => Some(index),
            Choice::Dismissed => None,
        }
    }
}

/// The host's choice-presentation facility
///
/// Blocks until the user picks a row or dismisses the list. Presenters that
/// support live preview call `on_highlight` with each row index the user
/// moves over; others ignore it.
pub trait Presenter {
    fn show_choices(
        &mut self,
        rows: &[DisplayRow],
        on_highlight: Option<&mut dyn FnMut(usize)>,
    ) -> Result<Choice>;
}
