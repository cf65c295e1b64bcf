use crate::app::AppState;
use crate::tui::{footer, header, pager, table};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

pub fn render(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header
            Constraint::Length(3), // search
            Constraint::Min(3),    // table
            Constraint::Length(1), // delete selected
            Constraint::Length(1), // pagination
            Constraint::Length(2), // footer
        ])
        .split(f.area());

    header::render(f, chunks[0], state);
    header::render_search(f, chunks[1], state);
    table::render(f, chunks[2], state);
    pager::render_actions(f, chunks[3], state);
    pager::render(f, chunks[4], state);
    footer::render(f, chunks[5], state);
}
