//! Search bar widget.

use crate::state::SearchInputState;
use crate::view::CardStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Search bar: a labelled, bordered input line with the validation error
/// in the bottom border.
pub struct SearchInput<'a> {
    state: &'a SearchInputState,
    focused: bool,
    styles: &'a CardStyles,
}

impl<'a> SearchInput<'a> {
    /// Create new SearchInput widget.
    pub fn new(state: &'a SearchInputState, focused: bool, styles: &'a CardStyles) -> Self {
        Self {
            state,
            focused,
            styles,
        }
    }

    fn input_line(&self, width: usize) -> Line<'a> {
        let value = &self.state.value;

        if !self.focused {
            if value.is_empty() {
                return Line::from(Span::styled("press / to search", self.styles.muted));
            }
            return Line::from(value.clone());
        }

        // Split value around the cursor so the cursor cell can be highlighted
        let mut before: String = value.chars().take(self.state.cursor).collect();
        // Drop leading characters until the cursor cell fits in the box
        while !before.is_empty() && before.width() + 1 > width {
            before.remove(0);
        }
        let mut after = value.chars().skip(self.state.cursor);
        let cursor_char = after.next().map(String::from).unwrap_or_else(|| " ".to_string());
        let after: String = after.collect();

        Line::from(vec![
            Span::raw(before),
            Span::styled(cursor_char, self.styles.cursor),
            Span::raw(after),
        ])
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(" Search Name ");
        if self.focused {
            block = block.border_style(self.styles.focused_border);
        }
        if let Some(message) = self.state.error_message() {
            block = block.title_bottom(Line::from(Span::styled(
                format!(" {message} "),
                self.styles.error,
            )));
        }

        let width = usize::from(area.width.saturating_sub(2));
        Paragraph::new(self.input_line(width)).block(block).render(area, buf);
    }
}
