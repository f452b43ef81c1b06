#![forbid(unsafe_code)]

//! gridpad public facade crate.
//!
//! Re-exports the window-buffer mutation engine behind one import and
//! offers a lightweight prelude for day-to-day usage.
//!
//! # Example
//!
//! ```
//! use gridpad::prelude::*;
//!
//! let mut win = Window::new(10, 2);
//! win.overwrite_at(0, 0, &cells("ABCDEFGHIJ"), Count::Unbounded)?;
//! win.mark_clean();
//!
//! win.move_to(0, 2)?;
//! win.insert_str("xy", Count::Unbounded)?;
//!
//! assert_eq!(win.dirty_span(0).unwrap().bounds(), Some((2, 9)));
//! # Ok::<(), gridpad::GridError>(())
//! ```

// --- Core re-exports -------------------------------------------------------

pub use gridpad_core::error::{GridError, Status};
pub use gridpad_core::geometry::Position;

// --- Buffer re-exports -----------------------------------------------------

pub use gridpad_buffer::cell::{Attrs, Cell, Glyph};
pub use gridpad_buffer::count::Count;
pub use gridpad_buffer::mbstr;
pub use gridpad_buffer::row::{DirtySpan, Row};
pub use gridpad_buffer::window::Window;

/// Build a cell run from string text, one cell per code point.
///
/// A convenience for assembling overwrite/insert sources; the cells carry
/// empty attributes.
pub fn cells(text: &str) -> Vec<Cell> {
    text.chars().map(Cell::from_char).collect()
}

/// Common imports for working with the engine.
pub mod prelude {
    pub use crate::cells;
    pub use gridpad_buffer::cell::{Attrs, Cell, Glyph};
    pub use gridpad_buffer::count::Count;
    pub use gridpad_buffer::row::{DirtySpan, Row};
    pub use gridpad_buffer::window::Window;
    pub use gridpad_core::error::{GridError, Status};
    pub use gridpad_core::geometry::Position;
}
