use emmet_proxy::{EditorHost, InsertOptions, Position, Range};
use ropey::Rope;
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("row {0} out of range")]
    Row(u32),
    #[error("column {column} out of range on row {row}")]
    Column { row: u32, column: u32 },
}

/// Rope-backed editor with an anchor/cursor selection model.
pub struct MockHost {
    rope: Rope,
    cursor: Position,
    anchor: Option<Position>,
    mode: String,
    path: String,
    pub inserts: Vec<(String, InsertOptions)>,
}

impl MockHost {
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: Position::ZERO,
            anchor: None,
            mode: "html".to_string(),
            path: "file:///workspace/index.html".to_string(),
            inserts: Vec::new(),
        }
    }

    pub fn with_cursor(mut self, cursor: Position) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn with_mode(mut self, mode: &str) -> Self {
        self.mode = mode.to_string();
        self
    }

    pub fn with_path(mut self, path: &str) -> Self {
        self.path = path.to_string();
        self
    }

    pub fn set_mode(&mut self, mode: &str) {
        self.mode = mode.to_string();
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn has_selection(&self) -> bool {
        matches!(self.anchor, Some(a) if a != self.cursor)
    }

    fn line_str(&self, row: u32) -> Option<String> {
        if row as usize >= self.rope.len_lines() {
            return None;
        }
        let mut s = self.rope.line(row as usize).to_string();
        // Remove trailing newline if present
        if s.ends_with('\n') {
            s.pop();
        }
        Some(s)
    }

    fn to_char_idx(&self, pos: Position) -> Result<usize, HostError> {
        let line = self.line_str(pos.row).ok_or(HostError::Row(pos.row))?;
        let mut graphemes = line.graphemes(true);
        let mut chars = 0;
        for _ in 0..pos.column {
            let g = graphemes.next().ok_or(HostError::Column {
                row: pos.row,
                column: pos.column,
            })?;
            chars += g.chars().count();
        }
        Ok(self.rope.line_to_char(pos.row as usize) + chars)
    }

    fn to_position(&self, char_idx: usize) -> Position {
        let row = self.rope.char_to_line(char_idx);
        let prefix = self
            .rope
            .slice(self.rope.line_to_char(row)..char_idx)
            .to_string();
        Position::new(row as u32, prefix.graphemes(true).count() as u32)
    }
}

impl EditorHost for MockHost {
    type Error = HostError;

    fn cursor_position(&self) -> Position {
        self.cursor
    }

    fn move_cursor_to(&mut self, row: u32, column: u32) -> Result<(), HostError> {
        let pos = Position::new(row, column);
        self.to_char_idx(pos)?;
        self.cursor = pos;
        self.anchor = None;
        Ok(())
    }

    fn selection_range(&self) -> Range {
        match self.anchor {
            Some(anchor) if anchor != self.cursor => Range {
                start: anchor.min(self.cursor),
                end: anchor.max(self.cursor),
            },
            _ => Range::caret(self.cursor),
        }
    }

    fn set_selection_range(&mut self, range: Range) -> Result<(), HostError> {
        self.to_char_idx(range.start)?;
        self.to_char_idx(range.end)?;
        self.anchor = (!range.is_empty()).then_some(range.start);
        self.cursor = range.end;
        Ok(())
    }

    fn line(&self, row: u32) -> Result<String, HostError> {
        self.line_str(row).ok_or(HostError::Row(row))
    }

    fn text_range(&self, range: Range) -> Result<String, HostError> {
        let a = self.to_char_idx(range.start)?;
        let b = self.to_char_idx(range.end)?;
        Ok(self.rope.slice(a.min(b)..a.max(b)).to_string())
    }

    fn insert(&mut self, text: &str, options: InsertOptions) -> Result<(), HostError> {
        let range = self.selection_range();
        let a = self.to_char_idx(range.start)?;
        let b = self.to_char_idx(range.end)?;
        self.rope.remove(a..b);
        self.rope.insert(a, text);
        self.cursor = self.to_position(a + text.chars().count());
        self.anchor = None;
        self.inserts.push((text.to_string(), options));
        Ok(())
    }

    fn mode(&self) -> String {
        self.mode.clone()
    }

    fn file_path(&self) -> String {
        self.path.clone()
    }
}
