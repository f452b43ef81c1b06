#![forbid(unsafe_code)]

//! Row storage and dirty-span tracking.
//!
//! A [`Row`] is one line of a window's character buffer: a fixed-length
//! run of [`Cell`]s plus the inclusive span of columns changed since the
//! last refresh.
//!
//! # Invariants
//!
//! 1. `cells.len()` equals the window width and never changes.
//! 2. When the span is not [`DirtySpan::Clean`],
//!    `0 <= first <= last < width`.
//! 3. Between refreshes the span only ever widens; it shrinks back to
//!    `Clean` only through the refresh-reset entry points on the window.
//! 4. A mutation that changes no cell leaves the span untouched.

use crate::cell::Cell;

/// Inclusive span of columns changed since the last refresh.
///
/// `Clean` is the "no change pending" sentinel. A refresh pass reads the
/// span, repaints `first..=last`, and resets the row to `Clean`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirtySpan {
    /// No change pending.
    #[default]
    Clean,
    /// Columns `first..=last` changed.
    Dirty {
        /// Leftmost changed column (inclusive).
        first: u16,
        /// Rightmost changed column (inclusive).
        last: u16,
    },
}

impl DirtySpan {
    /// Check for the "no change pending" sentinel.
    #[inline]
    pub const fn is_clean(self) -> bool {
        matches!(self, Self::Clean)
    }

    /// The `(first, last)` bounds, or `None` when clean.
    #[inline]
    pub const fn bounds(self) -> Option<(u16, u16)> {
        match self {
            Self::Clean => None,
            Self::Dirty { first, last } => Some((first, last)),
        }
    }

    /// Grow the span to cover `col`. Never shrinks.
    #[inline]
    pub(crate) fn widen(&mut self, col: u16) {
        *self = match *self {
            Self::Clean => Self::Dirty {
                first: col,
                last: col,
            },
            Self::Dirty { first, last } => Self::Dirty {
                first: first.min(col),
                last: last.max(col),
            },
        };
    }
}

/// One line of a window's character buffer.
#[derive(Debug, Clone)]
pub struct Row {
    cells: Vec<Cell>,
    dirty: DirtySpan,
}

impl Row {
    /// A clean row of blank cells.
    pub(crate) fn blank(width: u16) -> Self {
        Self {
            cells: vec![Cell::BLANK; width as usize],
            dirty: DirtySpan::Clean,
        }
    }

    /// Row width in cells.
    #[inline]
    pub fn width(&self) -> u16 {
        self.cells.len() as u16
    }

    /// The cell at column `x`, or `None` past the right edge.
    #[inline]
    pub fn cell(&self, x: u16) -> Option<&Cell> {
        self.cells.get(x as usize)
    }

    /// All cells, left to right.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The span of columns changed since the last refresh.
    #[inline]
    pub fn dirty_span(&self) -> DirtySpan {
        self.dirty
    }

    /// Reset the span to clean. Called by the refresh pass after repaint.
    #[inline]
    pub(crate) fn mark_clean(&mut self) {
        self.dirty = DirtySpan::Clean;
    }

    /// Mark every column changed, forcing a full repaint of the row.
    pub(crate) fn mark_all_dirty(&mut self) {
        let width = self.width();
        if width > 0 {
            self.dirty = DirtySpan::Dirty {
                first: 0,
                last: width - 1,
            };
        }
    }

    /// Change-detected single-cell write.
    ///
    /// Replaces the cell at `col` and widens the span only when the
    /// incoming value genuinely differs. The index must be in bounds.
    #[inline]
    pub(crate) fn replace(&mut self, col: usize, cell: Cell) {
        debug_assert!(col < self.cells.len());
        if self.cells[col] != cell {
            self.cells[col] = cell;
            self.dirty.widen(col as u16);
        }
    }
}
