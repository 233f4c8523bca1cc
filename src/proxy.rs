use unicode_segmentation::UnicodeSegmentation;

use crate::syntax::SyntaxMap;
use crate::traits::{EditorHost, ExpansionEditor, ProfileDetector, Prompter, TabStopResolver};
use crate::types::{ExtractOptions, InsertOptions, OffsetRange, Range};

/// Escape callback handed to the engine: characters pass through unchanged.
fn keep_char(ch: char) -> String {
    ch.to_string()
}

/// Drives a bound [`EditorHost`] on behalf of the expansion engine.
///
/// Every operation works on the row the caret occupies when it is called.
pub struct EditorProxy<H, R, D, P> {
    host: H,
    resolver: R,
    detector: D,
    prompter: P,
    syntax_map: SyntaxMap,
}

pub struct EditorProxyBuilder<R, D, P> {
    resolver: R,
    detector: D,
    prompter: P,
    syntax_map: SyntaxMap,
}

impl<R, D, P> EditorProxyBuilder<R, D, P> {
    pub fn new(resolver: R, detector: D, prompter: P) -> Self {
        Self {
            resolver,
            detector,
            prompter,
            syntax_map: SyntaxMap::default(),
        }
    }

    pub fn syntax_map(mut self, syntax_map: SyntaxMap) -> Self {
        self.syntax_map = syntax_map;
        self
    }

    /// Binds `host` and produces the proxy.
    pub fn build<H: EditorHost>(self, host: H) -> EditorProxy<H, R, D, P> {
        tracing::debug!(mode = %host.mode(), "editor bound");
        EditorProxy {
            host,
            resolver: self.resolver,
            detector: self.detector,
            prompter: self.prompter,
            syntax_map: self.syntax_map,
        }
    }
}

impl<H: EditorHost, R, D, P> EditorProxy<H, R, D, P> {
    /// Replaces the bound editor, returning the previous one.
    pub fn bind(&mut self, host: H) -> H {
        tracing::debug!(mode = %host.mode(), "editor rebound");
        std::mem::replace(&mut self.host, host)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn syntax_map(&self) -> &SyntaxMap {
        &self.syntax_map
    }

    fn row(&self) -> u32 {
        self.host.cursor_position().row
    }
}

impl<H, R, D, P> ExpansionEditor for EditorProxy<H, R, D, P>
where
    H: EditorHost,
    R: TabStopResolver,
    D: ProfileDetector,
    P: Prompter,
{
    type Error = H::Error;

    fn selection_range(&self) -> OffsetRange {
        // Rows are dropped: the engine only ever sees the caret's line.
        let range = self.host.selection_range();
        OffsetRange::new(range.start.column, range.end.column)
    }

    fn create_selection(&mut self, start: u32, end: Option<u32>) -> Result<(), Self::Error> {
        let row = self.row();
        match end {
            Some(end) if end != start => {
                tracing::debug!(row, start, end, "select");
                self.host.set_selection_range(Range::on_row(row, start, end))
            }
            _ => {
                tracing::debug!(row, column = start, "move caret");
                self.host.move_cursor_to(row, start)
            }
        }
    }

    fn current_line_range(&self) -> Result<OffsetRange, Self::Error> {
        let len = self.current_line()?.graphemes(true).count() as u32;
        Ok(OffsetRange::new(0, len))
    }

    fn caret_pos(&self) -> u32 {
        self.row()
    }

    fn set_caret_pos(&mut self, pos: u32) -> Result<(), Self::Error> {
        let row = self.row();
        tracing::debug!(row, column = pos, "move caret");
        self.host.move_cursor_to(row, pos)
    }

    fn current_line(&self) -> Result<String, Self::Error> {
        self.host.line(self.row())
    }

    fn content(&self) -> Result<String, Self::Error> {
        self.current_line()
    }

    fn replace_content(
        &mut self,
        value: &str,
        start: Option<u32>,
        end: Option<u32>,
        no_indent: bool,
    ) -> Result<(), Self::Error> {
        let end = end.or(start).unwrap_or(0);
        let start = start.unwrap_or(0);
        let row = self.row();

        let extracted = self.resolver.extract(value, &ExtractOptions { escape: &keep_char });

        let mut options = InsertOptions::empty();
        options.set(InsertOptions::NO_INDENT, no_indent);

        tracing::debug!(
            row,
            start,
            end,
            tab_stops = extracted.tab_stops.len(),
            no_indent,
            "replace content"
        );
        self.host.set_selection_range(Range::on_row(row, start, end))?;
        self.host.insert(&extracted.text, options)
    }

    fn syntax(&self) -> &str {
        self.syntax_map.resolve(&self.host.mode())
    }

    fn profile_name(&self) -> Result<Option<String>, Self::Error> {
        self.detector.detect_profile(self)
    }

    fn prompt(&mut self, title: &str) -> Option<String> {
        let answer = self.prompter.prompt(title);
        tracing::trace!(title, cancelled = answer.is_none(), "prompt");
        answer
    }

    fn selection(&self) -> Result<String, Self::Error> {
        self.host.text_range(self.host.selection_range())
    }

    fn file_path(&self) -> String {
        self.host.file_path()
    }
}
