use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, InputMode, NARROW_WIDTH_THRESHOLD};

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let narrow = area.width < NARROW_WIDTH_THRESHOLD;

    let line = if let Some(notif) = state.notifications.last() {
        Line::from(vec![
            Span::styled("★ ", Style::default().fg(Color::Yellow)),
            Span::styled(&notif.message, Style::default().fg(Color::Yellow)),
        ])
    } else {
        let mut spans: Vec<Span> = Vec::new();
        for (i, (key, desc)) in hints(state.mode, narrow).iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
            spans.push(Span::styled(
                format!(" {desc}"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        Line::from(spans)
    };

    let footer = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(footer, area);
}

fn hints(mode: InputMode, narrow: bool) -> &'static [(&'static str, &'static str)] {
    match mode {
        InputMode::Search => &[("type", "filter"), ("^U", "clear"), ("Enter/Esc", "done")],
        InputMode::Edit => &[("type", "rename"), ("Enter/Esc", "save")],
        InputMode::Browse if narrow => &[
            ("/", "search"),
            ("spc", "sel"),
            ("e", "edit"),
            ("x", "del"),
            ("h/l", "page"),
            ("q", "quit"),
        ],
        InputMode::Browse => &[
            ("/", "search"),
            ("↑↓/jk", "move"),
            ("space", "select"),
            ("a", "select page"),
            ("e", "edit"),
            ("x", "delete"),
            ("X", "delete selected"),
            ("←→/hl", "page"),
            ("0-9", "go to page"),
            ("q", "quit"),
        ],
    }
}
