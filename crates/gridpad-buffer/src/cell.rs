#![forbid(unsafe_code)]

//! Cell types and invariants.
//!
//! A [`Cell`] is one grid position's character-plus-attributes value. Cells
//! are immutable once constructed: mutation operations replace them
//! wholesale, never edit them in place, so change detection is a plain
//! equality test.
//!
//! # Narrow and wide representations
//!
//! The engine stores two character representations behind one type:
//!
//! - [`Glyph::Simple`]: a single-column character stored directly, the
//!   common case for ASCII and other narrow text.
//! - [`Glyph::Wide`]: a code point decoded from a multibyte source,
//!   carrying its display width as auxiliary data.
//!
//! Either variant occupies exactly one logical column in this engine's
//! model; the auxiliary width is advisory data for the presentation layer.
//!
//! # Change detection
//!
//! `Cell` equality compares the whole value, glyph and attributes alike.
//! Two cells with the same glyph but different attributes are *different*
//! for dirty-span purposes; the writers rely on this.

use unicode_width::UnicodeWidthChar;

bitflags::bitflags! {
    /// 8-bit cell rendering attributes.
    ///
    /// Opaque to this engine: attribute bits travel with the glyph and
    /// participate in change detection, nothing more. What a bit means
    /// visually is the presentation layer's business.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Attrs: u8 {
        /// Bold / increased intensity.
        const BOLD          = 0b0000_0001;
        /// Dim / decreased intensity.
        const DIM           = 0b0000_0010;
        /// Italic text.
        const ITALIC        = 0b0000_0100;
        /// Underlined text.
        const UNDERLINE     = 0b0000_1000;
        /// Blinking text.
        const BLINK         = 0b0001_0000;
        /// Reverse video (swap fg/bg).
        const REVERSE       = 0b0010_0000;
        /// Strikethrough text.
        const STRIKETHROUGH = 0b0100_0000;
        /// Hidden / invisible text.
        const HIDDEN        = 0b1000_0000;
    }
}

/// Character payload of a cell: narrow or wide representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// A single-column character stored directly.
    Simple(char),
    /// A decoded code point with its display width as auxiliary data.
    Wide {
        /// The code point.
        ch: char,
        /// Display width in terminal columns (0 for combining marks).
        width: u8,
    },
}

impl Glyph {
    /// Build the natural representation for a code point.
    ///
    /// ASCII stays in the narrow [`Simple`](Self::Simple) form; everything
    /// else becomes [`Wide`](Self::Wide) with its Unicode display width.
    pub fn from_char(ch: char) -> Self {
        if ch.is_ascii() {
            Self::Simple(ch)
        } else {
            let width = ch.width().unwrap_or(0) as u8;
            Self::Wide { ch, width }
        }
    }

    /// The underlying code point.
    #[inline]
    pub const fn ch(self) -> char {
        match self {
            Self::Simple(ch) | Self::Wide { ch, .. } => ch,
        }
    }

    /// Display width in terminal columns.
    #[inline]
    pub const fn display_width(self) -> u8 {
        match self {
            Self::Simple(_) => 1,
            Self::Wide { width, .. } => width,
        }
    }

    /// Check for the NUL end-of-source convention.
    #[inline]
    pub const fn is_nul(self) -> bool {
        matches!(self, Self::Simple('\0'))
    }
}

/// One grid position's character-plus-attributes value.
///
/// # Example
///
/// ```
/// use gridpad_buffer::cell::{Attrs, Cell, Glyph};
///
/// let plain = Cell::from_char('A');
/// let bold = plain.with_attrs(Attrs::BOLD);
///
/// assert_eq!(plain.glyph, Glyph::Simple('A'));
/// // Same glyph, different attrs: still a different cell.
/// assert_ne!(plain, bold);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Character content.
    pub glyph: Glyph,
    /// Rendering attribute bits.
    pub attrs: Attrs,
}

impl Cell {
    /// A blank cell: space, no attributes. Rows start filled with these.
    pub const BLANK: Self = Self {
        glyph: Glyph::Simple(' '),
        attrs: Attrs::empty(),
    };

    /// The by-convention end-of-source sentinel inside source slices.
    ///
    /// A source sequence ends at the first terminator cell even when the
    /// slice continues past it, mirroring NUL-terminated strings.
    pub const TERMINATOR: Self = Self {
        glyph: Glyph::Simple('\0'),
        attrs: Attrs::empty(),
    };

    /// Create a cell from a glyph and attributes.
    #[inline]
    pub const fn new(glyph: Glyph, attrs: Attrs) -> Self {
        Self { glyph, attrs }
    }

    /// Create an unattributed cell from a single code point.
    #[inline]
    pub fn from_char(ch: char) -> Self {
        Self::new(Glyph::from_char(ch), Attrs::empty())
    }

    /// Create a cell from a code point under the given attributes.
    #[inline]
    pub fn from_char_with(ch: char, attrs: Attrs) -> Self {
        Self::new(Glyph::from_char(ch), attrs)
    }

    /// Check for the end-of-source sentinel.
    #[inline]
    pub const fn is_terminator(&self) -> bool {
        self.glyph.is_nul()
    }

    /// Return a copy with different attributes.
    #[inline]
    pub const fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = attrs;
        self
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}
