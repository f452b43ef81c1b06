#![forbid(unsafe_code)]

//! The insert shifter.
//!
//! Inserts cells at the cursor one at a time. Each step shifts every cell
//! at and to the right of the cursor one column right (the cell that
//! falls off the right edge is discarded), then writes the new cell at
//! the cursor column. The cursor itself never advances.
//!
//! # Traversal order
//!
//! The single-cell step always inserts *at the cursor*, pushing earlier
//! insertions right. Bulk insertion therefore walks the source from its
//! **last** element to its **first** so the cells end up in source order.
//! Walking forward instead reverses the inserted text; the order is part
//! of the contract, not an implementation accident.
//!
//! # Failure policy
//!
//! Unlike the overwrite writer, insertion offers only weak safety: if a
//! single-cell step fails partway through, the operation stops and
//! reports the error, and cells inserted by earlier steps remain in
//! place. There is no rollback; weak safety is the documented contract
//! of these operations.

use gridpad_core::{GridError, Position};

use crate::cell::Cell;
use crate::count::Count;
use crate::mbstr;
use crate::row::Row;
use crate::window::Window;

/// Effective source length: the slice up to its terminator sentinel.
fn effective_len(src: &[Cell]) -> usize {
    src.iter()
        .position(Cell::is_terminator)
        .unwrap_or(src.len())
}

impl Row {
    /// Shift cells at and right of `x` one column right, dropping the
    /// rightmost, and write `cell` at `x`. Every column whose content
    /// genuinely changes widens the dirty span; nothing else does.
    pub(crate) fn insert_shift(&mut self, x: usize, cell: Cell) {
        let width = self.cells().len();
        debug_assert!(x < width);

        // Right to left so each column reads its left neighbor's old value.
        for col in (x + 1..width).rev() {
            let incoming = self.cells()[col - 1];
            self.replace(col, incoming);
        }
        self.replace(x, cell);
    }
}

impl Window {
    /// Insert one cell at the cursor, shifting the rest of the line right.
    ///
    /// This is the primitive the bulk insert paths are built on. The
    /// cursor does not move.
    ///
    /// # Errors
    ///
    /// [`GridError::OperationFailed`] if the cursor does not address a
    /// valid cell.
    pub fn insert_cell(&mut self, cell: Cell) -> Result<(), GridError> {
        let Position { y, x } = self.cursor();
        let width = self.width();
        if x >= width {
            return Err(GridError::OperationFailed);
        }
        let row = self.row_mut(y).ok_or(GridError::OperationFailed)?;
        row.insert_shift(x as usize, cell);
        Ok(())
    }

    /// Insert a run of cells at the cursor, preserving source order.
    ///
    /// The effective source ends at the first [`Cell::TERMINATOR`] and is
    /// clipped by `count`; `Bounded(0)` or an empty effective source is a
    /// successful no-op. The source is traversed back to front (see the
    /// module docs) so the inserted cells read left to right in source
    /// order. A failing step aborts the operation with earlier insertions
    /// left in place.
    ///
    /// # Errors
    ///
    /// Propagates the first [`Window::insert_cell`] failure.
    pub fn insert_cells(&mut self, src: &[Cell], count: Count) -> Result<(), GridError> {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("insert_cells", n = src.len());
        #[cfg(feature = "tracing")]
        let _guard = _span.enter();

        let n = count.clip(effective_len(src));
        for &cell in src[..n].iter().rev() {
            self.insert_cell(cell)?;
        }
        Ok(())
    }

    /// Insert code points at the cursor under the window's current
    /// attributes. This is the wide-string insert path.
    ///
    /// The effective source ends at the first NUL code point and is
    /// clipped by `count`.
    ///
    /// # Errors
    ///
    /// Propagates the first [`Window::insert_cell`] failure.
    pub fn insert_wide(&mut self, chars: &[char], count: Count) -> Result<(), GridError> {
        let len = chars
            .iter()
            .position(|&ch| ch == '\0')
            .unwrap_or(chars.len());
        let n = count.clip(len);
        let attrs = self.attrs();
        for &ch in chars[..n].iter().rev() {
            self.insert_cell(Cell::from_char_with(ch, attrs))?;
        }
        Ok(())
    }

    /// Insert a byte string at the cursor. This is the narrow insert
    /// path.
    ///
    /// `count` bounds the *bytes examined*, not the cells inserted. The
    /// bytes are decoded to code points first (see [`mbstr::decode`]:
    /// decoding stops at a NUL, the byte cap, or the first undecodable
    /// sequence) and the decoded run is then inserted per
    /// [`Window::insert_wide`].
    ///
    /// # Errors
    ///
    /// Propagates the first [`Window::insert_cell`] failure.
    pub fn insert_bytes(&mut self, bytes: &[u8], count: Count) -> Result<(), GridError> {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("insert_bytes", n = bytes.len());
        #[cfg(feature = "tracing")]
        let _guard = _span.enter();

        let cap = count.clip(bytes.len());
        let decoded = mbstr::decode(bytes, cap);
        let attrs = self.attrs();
        for &ch in decoded.iter().rev() {
            self.insert_cell(Cell::from_char_with(ch, attrs))?;
        }
        Ok(())
    }

    /// Insert string text at the cursor. Convenience over
    /// [`Window::insert_bytes`].
    ///
    /// # Errors
    ///
    /// Propagates the first [`Window::insert_cell`] failure.
    pub fn insert_str(&mut self, s: &str, count: Count) -> Result<(), GridError> {
        self.insert_bytes(s.as_bytes(), count)
    }
}

#[cfg(test)]
mod tests {
    use gridpad_core::Position;

    use crate::cell::{Attrs, Cell};
    use crate::count::Count;
    use crate::window::Window;

    fn cells(s: &str) -> Vec<Cell> {
        s.chars().map(Cell::from_char).collect()
    }

    fn row_text(win: &Window, y: u16) -> String {
        win.row(y)
            .unwrap()
            .cells()
            .iter()
            .map(|c| c.glyph.ch())
            .collect()
    }

    /// A 10-wide window with row 0 holding "ABCDEFGHIJ" and no pending
    /// dirty span.
    fn seeded() -> Window {
        let mut win = Window::new(10, 3);
        win.overwrite_at(0, 0, &cells("ABCDEFGHIJ"), Count::Unbounded)
            .unwrap();
        win.mark_clean();
        win
    }

    #[test]
    fn insert_shifts_and_discards_at_the_edge() {
        let mut win = seeded();
        win.move_to(0, 2).unwrap();
        win.insert_cells(&cells("xy"), Count::Unbounded).unwrap();
        // I and J fell off the right edge.
        assert_eq!(row_text(&win, 0), "ABxyCDEFGH");
        assert_eq!(win.dirty_span(0).unwrap().bounds(), Some((2, 9)));
        assert_eq!(win.cursor(), Position::new(0, 2));
    }

    #[test]
    fn insert_preserves_source_order() {
        let mut win = seeded();
        win.move_to(0, 0).unwrap();
        win.insert_cells(&cells("abc"), Count::Unbounded).unwrap();
        assert_eq!(row_text(&win, 0), "abcABCDEFG");
    }

    #[test]
    fn single_cell_insert_at_cursor() {
        let mut win = seeded();
        win.move_to(0, 5).unwrap();
        win.insert_cell(Cell::from_char('!')).unwrap();
        assert_eq!(row_text(&win, 0), "ABCDE!FGHI");
        assert_eq!(win.dirty_span(0).unwrap().bounds(), Some((5, 9)));
    }

    #[test]
    fn insert_at_last_column_replaces_only_it() {
        let mut win = seeded();
        win.move_to(0, 9).unwrap();
        win.insert_cell(Cell::from_char('!')).unwrap();
        assert_eq!(row_text(&win, 0), "ABCDEFGHI!");
        assert_eq!(win.dirty_span(0).unwrap().bounds(), Some((9, 9)));
    }

    #[test]
    fn zero_count_is_a_successful_noop() {
        let mut win = seeded();
        win.move_to(0, 2).unwrap();
        win.insert_cells(&cells("xy"), Count::Bounded(0)).unwrap();
        assert_eq!(row_text(&win, 0), "ABCDEFGHIJ");
        assert!(win.dirty_span(0).unwrap().is_clean());
    }

    #[test]
    fn empty_source_is_a_successful_noop() {
        let mut win = seeded();
        win.insert_cells(&[], Count::Unbounded).unwrap();
        win.insert_wide(&[], Count::Unbounded).unwrap();
        win.insert_str("", Count::Unbounded).unwrap();
        assert_eq!(row_text(&win, 0), "ABCDEFGHIJ");
        assert!(win.dirty_span(0).unwrap().is_clean());
    }

    #[test]
    fn bounded_count_takes_the_source_prefix() {
        let mut win = seeded();
        win.move_to(0, 0).unwrap();
        win.insert_cells(&cells("abc"), Count::Bounded(2)).unwrap();
        assert_eq!(row_text(&win, 0), "abABCDEFGH");
    }

    #[test]
    fn terminator_ends_the_cell_source() {
        let mut win = seeded();
        let mut src = cells("ab");
        src.push(Cell::TERMINATOR);
        src.extend(cells("cd"));
        win.move_to(0, 0).unwrap();
        win.insert_cells(&src, Count::Unbounded).unwrap();
        assert_eq!(row_text(&win, 0), "abABCDEFGH");
    }

    #[test]
    fn nul_ends_the_wide_source() {
        let mut win = seeded();
        win.move_to(0, 0).unwrap();
        win.insert_wide(&['a', 'b', '\0', 'c'], Count::Unbounded)
            .unwrap();
        assert_eq!(row_text(&win, 0), "abABCDEFGH");
    }

    #[test]
    fn identical_shift_leaves_the_span_clean() {
        // A row of one repeated character: shifting it right and writing
        // the same character changes no cell value at all.
        let mut win = Window::new(6, 1);
        win.overwrite_at(0, 0, &cells("AAAAAA"), Count::Unbounded)
            .unwrap();
        win.mark_clean();
        win.insert_cell(Cell::from_char('A')).unwrap();
        assert_eq!(row_text(&win, 0), "AAAAAA");
        assert!(win.dirty_span(0).unwrap().is_clean());
    }

    #[test]
    fn inserted_text_carries_the_window_attrs() {
        let mut win = seeded();
        win.set_attrs(Attrs::BOLD);
        win.move_to(0, 0).unwrap();
        win.insert_str("ok", Count::Unbounded).unwrap();
        assert_eq!(win.row(0).unwrap().cell(0).unwrap().attrs, Attrs::BOLD);
        assert_eq!(win.row(0).unwrap().cell(1).unwrap().attrs, Attrs::BOLD);
        // Shifted pre-existing cells keep their own attrs.
        assert!(win.row(0).unwrap().cell(2).unwrap().attrs.is_empty());
    }

    #[test]
    fn ascii_bytes_and_wide_chars_insert_identically() {
        let text = "hello";
        let mut narrow = Window::new(10, 1);
        narrow.insert_str(text, Count::Unbounded).unwrap();

        let wide: Vec<char> = text.chars().collect();
        let mut direct = Window::new(10, 1);
        direct.insert_wide(&wide, Count::Unbounded).unwrap();

        assert_eq!(narrow.row(0).unwrap().cells(), direct.row(0).unwrap().cells());
    }

    #[test]
    fn byte_cap_cuts_a_multibyte_sequence() {
        // "hé" is [0x68, 0xC3, 0xA9]; a 2-byte cap strands the C3 lead
        // byte, so only 'h' decodes and is inserted.
        let mut win = seeded();
        win.move_to(0, 0).unwrap();
        win.insert_str("héllo", Count::Bounded(2)).unwrap();
        assert_eq!(row_text(&win, 0), "hABCDEFGHI");
    }

    #[test]
    fn nul_byte_ends_the_narrow_source() {
        let mut win = seeded();
        win.move_to(0, 0).unwrap();
        win.insert_bytes(b"AB\0CD", Count::Unbounded).unwrap();
        assert_eq!(row_text(&win, 0), "ABABCDEFGH");
    }

    #[test]
    fn non_ascii_insert_produces_wide_cells() {
        let mut win = Window::new(10, 1);
        win.insert_str("中a", Count::Unbounded).unwrap();
        let row = win.row(0).unwrap();
        assert_eq!(row.cell(0).unwrap().glyph.ch(), '中');
        assert_eq!(row.cell(0).unwrap().glyph.display_width(), 2);
        assert_eq!(row.cell(1).unwrap().glyph.ch(), 'a');
        assert_eq!(win.dirty_span(0).unwrap().bounds(), Some((0, 1)));
    }

    #[test]
    fn insert_into_lower_row_tracks_that_row_only() {
        let mut win = seeded();
        win.move_to(2, 0).unwrap();
        win.insert_str("zz", Count::Unbounded).unwrap();
        assert!(win.dirty_span(0).unwrap().is_clean());
        assert!(win.dirty_span(1).unwrap().is_clean());
        // Row 2 was blank: shifting blanks over blanks changes nothing,
        // so only the two columns that received glyphs are dirty.
        assert_eq!(win.dirty_span(2).unwrap().bounds(), Some((0, 1)));
    }
}

/// Property tests for the insert shifter. Top-level `#[cfg(test)]` scope
/// for edition-2024 `proptest!` compatibility.
#[cfg(test)]
mod insert_proptests {
    use proptest::prelude::*;

    use crate::cell::Cell;
    use crate::count::Count;
    use crate::window::Window;

    proptest! {
        #[test]
        fn insertion_is_order_preserving(
            width in 1u16..40,
            x in 0u16..40,
            text in "[a-z]{0,24}",
        ) {
            let x = x % width;
            let mut win = Window::new(width, 1);
            win.move_to(0, x).unwrap();
            win.insert_str(&text, Count::Unbounded).unwrap();

            // Expected: blanks up to x, then the text, then the shifted
            // blanks, all clipped to the row width.
            let mut expected: Vec<char> = vec![' '; x as usize];
            expected.extend(text.chars());
            expected.resize(width as usize, ' ');

            let got: Vec<char> = win
                .row(0)
                .unwrap()
                .cells()
                .iter()
                .map(|c| c.glyph.ch())
                .collect();
            prop_assert_eq!(got, expected);
        }

        #[test]
        fn cursor_never_moves(
            width in 1u16..40,
            x in 0u16..40,
            text in "[a-z]{0,24}",
        ) {
            let x = x % width;
            let mut win = Window::new(width, 1);
            win.move_to(0, x).unwrap();
            win.insert_str(&text, Count::Unbounded).unwrap();
            prop_assert_eq!(win.cursor().x, x);
            prop_assert_eq!(win.cursor().y, 0);
        }

        #[test]
        fn span_stays_inside_the_row(
            width in 1u16..40,
            x in 0u16..40,
            text in "[a-z]{1,24}",
        ) {
            let x = x % width;
            let mut win = Window::new(width, 1);
            win.move_to(0, x).unwrap();
            win.insert_cells(
                &text.chars().map(Cell::from_char).collect::<Vec<_>>(),
                Count::Unbounded,
            )
            .unwrap();
            if let Some((first, last)) = win.dirty_span(0).unwrap().bounds() {
                prop_assert!(first <= last);
                prop_assert!(last < width);
                prop_assert!(first >= x);
            }
        }
    }
}
