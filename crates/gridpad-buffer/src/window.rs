#![forbid(unsafe_code)]

//! Window state: rows, cursor, bounds, and the current attribute word.
//!
//! A [`Window`] owns its rows exclusively. The mutation engine reads the
//! width/height/cursor and mutates row contents and dirty spans; it never
//! resizes the window. Access is single-threaded by contract: callers in
//! a multi-threaded host serialize access to a window externally.
//!
//! The overwrite and insert operations themselves live in the `write` and
//! `insert` modules; this module carries the state they act on plus the
//! collaborator surface consumed by position-taking callers ([`move_to`])
//! and by the external refresh pass ([`dirty_span`], [`mark_row_clean`],
//! [`mark_clean`], [`touch`]).
//!
//! [`move_to`]: Window::move_to
//! [`dirty_span`]: Window::dirty_span
//! [`mark_row_clean`]: Window::mark_row_clean
//! [`mark_clean`]: Window::mark_clean
//! [`touch`]: Window::touch

use gridpad_core::{GridError, Position};

use crate::cell::Attrs;
use crate::row::{DirtySpan, Row};

/// A window's character buffer: rows of cells plus cursor and attributes.
///
/// # Example
///
/// ```
/// use gridpad_buffer::window::Window;
///
/// let mut win = Window::new(80, 24);
/// win.move_to(3, 10).unwrap();
/// assert_eq!(win.cursor().y, 3);
/// ```
#[derive(Debug, Clone)]
pub struct Window {
    width: u16,
    height: u16,
    rows: Vec<Row>,
    cursor: Position,
    attrs: Attrs,
}

impl Window {
    /// Create a window of blank cells with the cursor at the origin.
    ///
    /// # Panics
    ///
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0, "window width must be > 0");
        assert!(height > 0, "window height must be > 0");

        let rows = (0..height).map(|_| Row::blank(width)).collect();

        Self {
            width,
            height,
            rows,
            cursor: Position::ORIGIN,
            attrs: Attrs::empty(),
        }
    }

    /// Window width in cells.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Window height in rows.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Current cursor position.
    #[inline]
    pub const fn cursor(&self) -> Position {
        self.cursor
    }

    /// The attribute word applied to cells synthesized by the char and
    /// byte insert paths.
    #[inline]
    pub const fn attrs(&self) -> Attrs {
        self.attrs
    }

    /// Set the current attribute word.
    #[inline]
    pub fn set_attrs(&mut self, attrs: Attrs) {
        self.attrs = attrs;
    }

    /// Move the cursor to `(y, x)`.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidArgument`] if the position is outside the
    /// window; the cursor is left where it was.
    pub fn move_to(&mut self, y: u16, x: u16) -> Result<(), GridError> {
        if y >= self.height || x >= self.width {
            return Err(GridError::InvalidArgument);
        }
        self.cursor = Position::new(y, x);
        Ok(())
    }

    /// The row at index `y`, or `None` past the bottom edge.
    #[inline]
    pub fn row(&self, y: u16) -> Option<&Row> {
        self.rows.get(y as usize)
    }

    #[inline]
    pub(crate) fn row_mut(&mut self, y: u16) -> Option<&mut Row> {
        self.rows.get_mut(y as usize)
    }

    /// The dirty span of row `y`, or `None` past the bottom edge.
    ///
    /// This is the surface the external refresh pass reads to repaint
    /// only the columns that changed.
    #[inline]
    pub fn dirty_span(&self, y: u16) -> Option<DirtySpan> {
        self.rows.get(y as usize).map(Row::dirty_span)
    }

    /// Reset row `y` to clean. Out-of-range rows are ignored.
    pub fn mark_row_clean(&mut self, y: u16) {
        if let Some(row) = self.rows.get_mut(y as usize) {
            row.mark_clean();
        }
    }

    /// Reset every row to clean, as the refresh pass does after a repaint.
    pub fn mark_clean(&mut self) {
        for row in &mut self.rows {
            row.mark_clean();
        }
    }

    /// Mark the whole window changed, forcing the next refresh to repaint
    /// every row in full.
    pub fn touch(&mut self) {
        for row in &mut self.rows {
            row.mark_all_dirty();
        }
    }
}
