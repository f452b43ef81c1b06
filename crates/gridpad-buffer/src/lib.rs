#![forbid(unsafe_code)]

//! Window buffer mutation kernel: cells, rows with dirty spans, and the
//! overwrite/insert writers.
//!
//! This crate owns the in-memory text grid of a window and the two ways of
//! mutating it:
//!
//! - **overwrite** ([`Row::overwrite`](row::Row::overwrite)) copies source
//!   cells in place, clipped to the right edge, without disturbing
//!   neighbors;
//! - **insert** ([`Window::insert_cells`](window::Window::insert_cells))
//!   shifts the row suffix right one column per inserted cell, discarding
//!   what falls off the edge.
//!
//! Every mutated row tracks the inclusive span of changed columns
//! ([`row::DirtySpan`]) so a later refresh pass can repaint only what moved.

pub mod cell;
pub mod count;
pub mod mbstr;
pub mod row;
pub mod window;

mod insert;
mod write;

pub use cell::{Attrs, Cell, Glyph};
pub use count::Count;
pub use row::{DirtySpan, Row};
pub use window::Window;
