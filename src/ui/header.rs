use crate::ui::search::SearchState;
use crate::ui::theme::{ACCENT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const PLACEHOLDER: &str = "Search movies...";

/// Nav bar: logo, search input and result count.
pub struct Header<'a> {
    search: &'a SearchState,
    focused: bool,
}

impl<'a> Header<'a> {
    pub fn new(search: &'a SearchState, focused: bool) -> Self {
        Self { search, focused }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let query = if self.search.query.is_empty() {
            Span::styled(PLACEHOLDER, Style::default().fg(MUTED_TEXT))
        } else {
            Span::styled(self.search.query.clone(), text_style)
        };

        let line = Line::from(vec![
            Span::styled(" 🎬 ", text_style),
            Span::styled("FRate", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", Style::default().fg(MUTED_TEXT)),
            query,
            Span::styled("  │  ", Style::default().fg(MUTED_TEXT)),
            Span::styled("Found ", text_style),
            Span::styled(
                self.search.results.len().to_string(),
                text_style.add_modifier(Modifier::BOLD),
            ),
            Span::styled(" results", text_style),
        ]);

        let border = if self.focused { FOCUS_BORDER } else { GLOBAL_BORDER };
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
    }

    /// Column of the text cursor relative to the header's left edge.
    pub fn cursor_offset(&self) -> u16 {
        // " 🎬 " is four cells wide, "FRate" five, the separator five.
        let prefix = 4 + 5 + 5;
        let query = self.search.query.chars().count() as u16;
        1 + prefix + query
    }
}
