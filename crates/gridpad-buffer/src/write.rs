#![forbid(unsafe_code)]

//! The overwrite writer.
//!
//! Copies a bounded run of source cells into a row in place, starting at a
//! column and stopping at the first of: the count consumed, the source's
//! terminator sentinel, or the row's right edge. Existing content is never
//! shifted and the cursor is never moved.
//!
//! Validation is eager: a bad argument is reported before any cell is
//! touched, so a failed overwrite is always all-or-nothing.

use gridpad_core::{GridError, Position};

use crate::cell::Cell;
use crate::count::Count;
use crate::row::Row;
use crate::window::Window;

impl Row {
    /// Overwrite cells in place starting at column `x`.
    ///
    /// Copies from `src` into consecutive columns, stopping at the first
    /// of: `count` cells consumed, a [`Cell::TERMINATOR`] in the source,
    /// or the right edge. A count exceeding the remaining width is clipped
    /// silently. Columns whose cell already equals the incoming value are
    /// skipped and do not widen the dirty span.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidArgument`] if `count` is `Bounded(0)` or `x` is
    /// past the right edge. No cell is touched on failure.
    pub fn overwrite(&mut self, x: u16, src: &[Cell], count: Count) -> Result<(), GridError> {
        if matches!(count, Count::Bounded(0)) || x >= self.width() {
            return Err(GridError::InvalidArgument);
        }

        let avail = (self.width() - x) as usize;
        let n = count.clip(avail);

        for (i, cell) in src.iter().take(n).enumerate() {
            if cell.is_terminator() {
                break;
            }
            self.replace(x as usize + i, *cell);
        }

        Ok(())
    }
}

impl Window {
    /// Overwrite cells at the current cursor position.
    ///
    /// The cursor itself is not moved. See [`Row::overwrite`] for the
    /// copy and clipping rules.
    ///
    /// # Errors
    ///
    /// Propagates [`Row::overwrite`] validation failures.
    pub fn overwrite(&mut self, src: &[Cell], count: Count) -> Result<(), GridError> {
        let Position { y, x } = self.cursor();

        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("overwrite", y, x, n = src.len());
        #[cfg(feature = "tracing")]
        let _guard = _span.enter();

        let row = self.row_mut(y).ok_or(GridError::InvalidArgument)?;
        row.overwrite(x, src, count)
    }

    /// Overwrite cells in row `y` starting at column `x`, addressing the
    /// row directly instead of through the cursor. The cursor is not
    /// consulted and not moved.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidArgument`] if `y` names no row, plus
    /// [`Row::overwrite`] validation failures.
    pub fn overwrite_at(
        &mut self,
        y: u16,
        x: u16,
        src: &[Cell],
        count: Count,
    ) -> Result<(), GridError> {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("overwrite_at", y, x, n = src.len());
        #[cfg(feature = "tracing")]
        let _guard = _span.enter();

        let row = self.row_mut(y).ok_or(GridError::InvalidArgument)?;
        row.overwrite(x, src, count)
    }
}
