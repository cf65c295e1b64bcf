use crate::app::{AppState, InputMode};
use crate::tui::spinner;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

const SEARCH_PLACEHOLDER: &str = "Search by name, email or role…";

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", state.config.version_string),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
        Span::styled(
            "Admin Interface",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if state.is_loading {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            spinner::loading_label(state.spinner_frame),
            Style::default().fg(Color::Yellow),
        ));
    } else {
        spans.push(Span::styled(
            format!(" {}/{} records", state.filtered().len(), state.records.len()),
            Style::default().fg(Color::DarkGray),
        ));
        if let Some(at) = state.loaded_at {
            spans.push(Span::styled(
                format!(" · loaded {}", at.format("%H:%M:%S")),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    f.render_widget(header, area);
}

/// The search box. Shows the placeholder while the query is empty and a
/// caret while it has focus.
pub fn render_search(f: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.mode == InputMode::Search;
    let border = if focused { Color::Cyan } else { Color::DarkGray };

    let line = if state.query.is_empty() && !focused {
        Line::from(Span::styled(
            SEARCH_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let inner_width = area.width.saturating_sub(2) as usize;
        let mut spans = vec![Span::raw(tail_fit(&state.query, inner_width.saturating_sub(1)))];
        if focused {
            spans.push(Span::styled(
                "▏",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        Line::from(spans)
    };

    let search = Paragraph::new(line).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(search, area);
}

/// Keeps the end of `s` (where the caret is) when it overflows `max_width`.
fn tail_fit(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    let mut kept: Vec<char> = Vec::new();
    let mut width = 0;
    for c in s.chars().rev() {
        let cw = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if width + cw > max_width {
            break;
        }
        kept.push(c);
        width += cw;
    }
    kept.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_fit_short_unchanged() {
        assert_eq!(tail_fit("admin", 10), "admin");
    }

    #[test]
    fn tail_fit_keeps_end() {
        assert_eq!(tail_fit("mailinator", 4), "ator");
    }

    #[test]
    fn tail_fit_wide_chars() {
        // each CJK char is 2 columns wide
        assert_eq!(tail_fit("你好世界", 5), "世界");
    }

    #[test]
    fn tail_fit_zero_width() {
        assert_eq!(tail_fit("abc", 0), "");
    }
}
