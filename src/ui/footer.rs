use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer<'a> {
    error: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(error: Option<&'a str>) -> Self {
        Self { error }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = " Tab: Focus │ Enter: Open │ 1-0: Rate │ A: Add │ D: Remove │ F2/F3: Fold │ Ctrl+R: Reload │ Ctrl+Q: Quit";
        let version = format!("v{} ", VERSION);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let left = match self.error {
            Some(error) => Span::styled(format!(" {error}"), Style::default().fg(STATUS_ERROR)),
            None => Span::styled(hints, text_style),
        };

        // Calculate padding using char count, not byte count (for Unicode)
        let left_width = left.content.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(left_width)
            .saturating_sub(version_width);

        let line = Line::from(vec![
            left,
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
