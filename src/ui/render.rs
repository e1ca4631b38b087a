use crate::ui::app::{App, Focus, Panel};
use crate::ui::details::DetailsState;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, split_body};
use crate::ui::search::SearchState;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, RATING,
    STATUS_ERROR,
};
use crate::ui::watchlist::{WatchedMovie, WatchedSummary, WatchlistState};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(app.search(), app.focus() == Focus::Search);
    frame.render_widget(header_widget.widget(), header);
    if app.focus() == Focus::Search && header.width > 2 && header.height > 1 {
        let x = header.x + header_widget.cursor_offset().min(header.width - 2);
        frame.set_cursor_position((x, header.y + 1));
    }

    frame.render_widget(Clear, body);
    let (left, right) = split_body(body);
    draw_results_box(frame, app, left);
    draw_watched_box(frame, app, right);

    let footer_widget = Footer::new(app.last_error());
    frame.render_widget(footer_widget.widget(footer), footer);
}

fn draw_results_box(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let open = app.is_panel_open(Panel::Results);
    let block = panel_block("Results", open, app.focus() == Focus::Results);
    let lines = if open {
        results_lines(app.search(), app.result_cursor())
    } else {
        Vec::new()
    };
    let scroll = scroll_offset(app.result_cursor(), inner_height(area));
    frame.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), area);
}

fn draw_watched_box(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let open = app.is_panel_open(Panel::Watched);
    let focused = app.focus() == Focus::Watched;

    if app.selection().is_open() {
        let block = panel_block("Details", open, focused);
        let lines = if open {
            details_lines(app.details(), app.watched_selection())
        } else {
            Vec::new()
        };
        let widget = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(widget, area);
        return;
    }

    let block = panel_block("Watched", open, focused);
    let mut lines = Vec::new();
    if open {
        lines.extend(summary_lines(&app.watchlist().summary()));
        lines.push(Line::from(""));
        lines.extend(watchlist_lines(app.watchlist(), app.watched_cursor(), focused));
    }
    let header_rows = lines.len().saturating_sub(app.watchlist().len());
    let scroll = scroll_offset(header_rows + app.watched_cursor(), inner_height(area));
    frame.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), area);
}

fn inner_height(area: Rect) -> usize {
    usize::from(area.height.saturating_sub(2))
}

/// First visible row so that `row` fits in a viewport of `visible` rows.
pub fn scroll_offset(row: usize, visible: usize) -> u16 {
    if visible == 0 || row < visible {
        return 0;
    }
    u16::try_from(row + 1 - visible).unwrap_or(u16::MAX)
}

fn panel_block(title: &str, open: bool, focused: bool) -> Block<'static> {
    let toggle = if open { "[-]" } else { "[+]" };
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .title(Span::styled(
            format!(" {title} {toggle} "),
            Style::default().fg(HEADER_TEXT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

/// Loader, error or list. Never more than one.
pub fn results_lines(search: &SearchState, cursor: usize) -> Vec<Line<'static>> {
    if search.is_loading() {
        return vec![Line::from(Span::styled(
            "Loading...",
            Style::default().fg(MUTED_TEXT),
        ))];
    }
    if let Some(message) = search.error() {
        return vec![Line::from(vec![
            Span::raw("🛑 "),
            Span::styled(message.to_string(), Style::default().fg(STATUS_ERROR)),
        ])];
    }

    search
        .results
        .iter()
        .enumerate()
        .map(|(idx, movie)| {
            let line = Line::from(vec![
                Span::styled(movie.title.clone(), Style::default().fg(HEADER_TEXT)),
                Span::styled(
                    format!("  📅 {}", movie.year),
                    Style::default().fg(MUTED_TEXT),
                ),
            ]);
            if idx == cursor {
                line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
            } else {
                line
            }
        })
        .collect()
}

pub fn summary_lines(summary: &WatchedSummary) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "Movies you watched",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw(format!("#️⃣ {} movies", summary.count)),
            Span::styled(
                format!("  ⭐️ {:.2}", summary.avg_imdb_rating),
                Style::default().fg(RATING),
            ),
            Span::styled(
                format!("  🌟 {:.2}", summary.avg_user_rating),
                Style::default().fg(RATING),
            ),
            Span::raw(format!("  ⏳ {:.0} min", summary.avg_runtime)),
        ]),
    ]
}

pub fn watchlist_lines(
    watchlist: &WatchlistState,
    cursor: usize,
    focused: bool,
) -> Vec<Line<'static>> {
    watchlist
        .movies
        .iter()
        .enumerate()
        .map(|(idx, movie)| {
            let line = watched_line(movie);
            if focused && idx == cursor {
                line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
            } else {
                line
            }
        })
        .collect()
}

fn watched_line(movie: &WatchedMovie) -> Line<'static> {
    Line::from(vec![
        Span::styled(movie.title.clone(), Style::default().fg(HEADER_TEXT)),
        Span::styled(
            format!("  ⭐️ {}", movie.imdb_rating),
            Style::default().fg(RATING),
        ),
        Span::styled(
            format!("  🌟 {}", movie.user_rating),
            Style::default().fg(RATING),
        ),
        Span::styled(
            format!("  ⏳ {} min", movie.runtime),
            Style::default().fg(MUTED_TEXT),
        ),
    ])
}

pub fn details_lines(details: &DetailsState, watched: Option<&WatchedMovie>) -> Vec<Line<'static>> {
    let muted = Style::default().fg(MUTED_TEXT);
    match details {
        DetailsState::Empty => Vec::new(),
        DetailsState::Loading { .. } => vec![Line::from(Span::styled("Loading...", muted))],
        DetailsState::Failed { message, .. } => vec![
            Line::from(vec![
                Span::raw("🛑 "),
                Span::styled(message.clone(), Style::default().fg(STATUS_ERROR)),
            ]),
            Line::from(Span::styled("Esc: Back", muted)),
        ],
        DetailsState::Loaded {
            details,
            user_rating,
        } => {
            let mut lines = vec![
                Line::from(Span::styled(
                    details.title.clone(),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("{} • {}", details.released, details.runtime),
                    muted,
                )),
                Line::from(Span::styled(details.genre.clone(), muted)),
                Line::from(Span::styled(
                    format!("⭐️ {} IMDb rating", details.imdb_rating),
                    Style::default().fg(RATING),
                )),
                Line::from(""),
            ];

            match watched {
                Some(movie) => lines.push(Line::from(format!(
                    "You rated this movie {} 🌟",
                    movie.user_rating
                ))),
                None => {
                    let stars = match user_rating {
                        Some(rating) => format!("Your rating: {rating}/10  (A: Add to list)"),
                        None => "Your rating: press 1-9, 0 for 10".to_string(),
                    };
                    lines.push(Line::from(Span::styled(stars, Style::default().fg(RATING))));
                }
            }

            lines.push(Line::from(""));
            lines.push(Line::from(details.plot.clone()));
            lines.push(Line::from(Span::styled(
                format!("Starring {}", details.actors),
                muted,
            )));
            lines.push(Line::from(Span::styled(
                format!("Directed by {}", details.director),
                muted,
            )));
            lines
        }
    }
}
