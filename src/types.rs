/// A position within the host editor's document.
///
/// Positions are zero-indexed and column values are counted in grapheme clusters,
/// not bytes or chars. This matches what a user sees as one character on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Zero-based row.
    pub row: u32,
    /// Zero-based column in grapheme clusters.
    pub column: u32,
}

impl Position {
    /// The origin position (0, 0).
    pub const ZERO: Position = Position { row: 0, column: 0 };

    pub fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }
}

/// A host-native range between two positions.
///
/// An empty range (`start == end`) is a bare caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    /// The start position.
    pub start: Position,
    /// The end position.
    pub end: Position,
}

impl Range {
    /// A range covering `start..end` on a single row.
    pub fn on_row(row: u32, start: u32, end: u32) -> Self {
        Self {
            start: Position::new(row, start),
            end: Position::new(row, end),
        }
    }

    /// A collapsed range at `pos`.
    pub fn caret(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Line-relative character offsets as seen by the expansion engine.
///
/// Both offsets count from the start of the caret's row, never from the
/// start of the document. `start == end` means a caret with no selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OffsetRange {
    pub start: u32,
    pub end: u32,
}

impl OffsetRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }
}

bitflags::bitflags! {
    /// Hints passed to the host along with inserted text.
    ///
    /// Hosts without the matching behavior are free to ignore a flag.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct InsertOptions: u8 {
        /// Insert the text verbatim, without the host re-indenting new lines.
        const NO_INDENT = 0b0001;
    }
}

/// A tab stop reported by the engine after extraction.
///
/// Offsets point into [`Extracted::text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabStop {
    /// Group name; stops sharing a group are linked.
    pub group: String,
    pub start: u32,
    pub end: u32,
}

/// Result of resolving tab-stop markers in a payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Extracted {
    /// The payload with every marker resolved to plain text.
    pub text: String,
    /// The stops the engine found, in payload order.
    pub tab_stops: Vec<TabStop>,
}

impl Extracted {
    /// A payload that carried no markers.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tab_stops: Vec::new(),
        }
    }
}

/// Options handed to [`crate::TabStopResolver::extract`].
pub struct ExtractOptions<'a> {
    /// Applied by the engine to characters that would otherwise need escaping.
    pub escape: &'a dyn Fn(char) -> String,
}

impl std::fmt::Debug for ExtractOptions<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractOptions").finish_non_exhaustive()
    }
}
