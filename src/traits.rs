use crate::types::{ExtractOptions, Extracted, InsertOptions, OffsetRange, Position, Range};

/// The capabilities a host editor must expose to be driven by the proxy.
///
/// Columns are grapheme clusters. Implementations report rejected calls
/// (an out-of-range column, a missing row) through `Self::Error`; the proxy
/// hands those errors back to its caller untouched.
pub trait EditorHost {
    type Error;

    // Caret
    fn cursor_position(&self) -> Position;
    fn move_cursor_to(&mut self, row: u32, column: u32) -> Result<(), Self::Error>;

    // Selection; an empty range means no selection, collapsed at the caret
    fn selection_range(&self) -> Range;
    fn set_selection_range(&mut self, range: Range) -> Result<(), Self::Error>;

    // Text
    fn line(&self, row: u32) -> Result<String, Self::Error>;
    fn text_range(&self, range: Range) -> Result<String, Self::Error>;
    // Replaces the current selection, or inserts at the caret when it is empty
    fn insert(&mut self, text: &str, options: InsertOptions) -> Result<(), Self::Error>;

    // Session
    fn mode(&self) -> String;
    fn file_path(&self) -> String;
}

/// Blocking, modal text input.
pub trait Prompter {
    /// Asks the user for a value. `None` means the request was cancelled.
    fn prompt(&mut self, title: &str) -> Option<String>;
}

/// The engine's tab-stop extraction facility.
pub trait TabStopResolver {
    fn extract(&self, text: &str, options: &ExtractOptions<'_>) -> Extracted;
}

/// The engine's output-profile detection facility.
pub trait ProfileDetector {
    /// Picks a profile for the editor's current state. `Ok(None)` lets the
    /// engine fall back to its default.
    fn detect_profile<E>(&self, editor: &E) -> Result<Option<String>, E::Error>
    where
        E: ExpansionEditor + ?Sized;
}

/// Everything the expansion engine may ask of an editor.
///
/// Offsets are relative to the start of the caret's row.
pub trait ExpansionEditor {
    type Error;

    fn selection_range(&self) -> OffsetRange;
    fn create_selection(&mut self, start: u32, end: Option<u32>) -> Result<(), Self::Error>;
    fn current_line_range(&self) -> Result<OffsetRange, Self::Error>;

    /// Row of the caret. Note: a row, unlike the column-based setter.
    fn caret_pos(&self) -> u32;
    fn set_caret_pos(&mut self, pos: u32) -> Result<(), Self::Error>;

    fn current_line(&self) -> Result<String, Self::Error>;
    fn content(&self) -> Result<String, Self::Error>;
    fn replace_content(
        &mut self,
        value: &str,
        start: Option<u32>,
        end: Option<u32>,
        no_indent: bool,
    ) -> Result<(), Self::Error>;

    fn syntax(&self) -> &str;
    fn profile_name(&self) -> Result<Option<String>, Self::Error>;
    fn prompt(&mut self, title: &str) -> Option<String>;
    fn selection(&self) -> Result<String, Self::Error>;
    fn file_path(&self) -> String;
}
