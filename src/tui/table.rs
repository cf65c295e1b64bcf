use crate::app::{AppState, Record, NARROW_WIDTH_THRESHOLD};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let page = state.page_records();
    let narrow = area.width < NARROW_WIDTH_THRESHOLD;

    if page.is_empty() {
        // header row and its spacer, then the message
        let [head, body] =
            Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).areas(area);
        let table = Table::new(Vec::<Row>::new(), column_widths(narrow))
            .header(header_row(state, narrow))
            .column_spacing(1);
        f.render_widget(table, head);
        let para = Paragraph::new(empty_message(state))
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::NONE));
        f.render_widget(para, body);
        return;
    }

    let rows: Vec<Row> = page
        .iter()
        .enumerate()
        .map(|(i, record)| render_row(state, record, i == state.cursor, narrow))
        .collect();

    let table = Table::new(rows, column_widths(narrow))
        .header(header_row(state, narrow))
        .column_spacing(1)
        .block(Block::default().borders(Borders::NONE));
    f.render_widget(table, area);
}

fn header_row(state: &AppState, narrow: bool) -> Row<'static> {
    let mut cells = vec![
        Cell::from(checkbox(state.select_all_checked)),
        Cell::from("ID"),
        Cell::from("Name"),
    ];
    if !narrow {
        cells.push(Cell::from("Email"));
    }
    cells.push(Cell::from("Role"));
    cells.push(Cell::from("Actions"));
    Row::new(cells)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .bottom_margin(1)
}

fn column_widths(narrow: bool) -> Vec<Constraint> {
    let mut widths = vec![Constraint::Length(3), Constraint::Length(5), Constraint::Fill(2)];
    if !narrow {
        widths.push(Constraint::Fill(3));
    }
    widths.push(Constraint::Length(8));
    widths.push(Constraint::Length(13));
    widths
}

fn render_row<'a>(state: &AppState, record: &'a Record, is_cursor: bool, narrow: bool) -> Row<'a> {
    let selected = state.is_selected(record.id);
    let editing = state.is_editing(record.id);

    let name_cell = if editing {
        Cell::from(Line::from(vec![
            Span::styled(
                record.name.as_str(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            Span::styled("▏", Style::default().fg(Color::Yellow)),
        ]))
    } else {
        Cell::from(record.name.as_str())
    };

    let mut cells = vec![
        Cell::from(checkbox(selected)),
        Cell::from(record.id.to_string()).style(Style::default().fg(Color::DarkGray)),
        name_cell,
    ];
    if !narrow {
        cells.push(Cell::from(record.email.as_str()));
    }
    cells.push(Cell::from(record.role.as_str()).style(role_style(&record.role)));
    cells.push(Cell::from(actions_label(editing)).style(Style::default().fg(Color::Blue)));

    let mut style = Style::default();
    if selected {
        style = style.bg(Color::Rgb(40, 40, 70));
    }
    if is_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Row::new(cells).style(style)
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

fn actions_label(editing: bool) -> &'static str {
    if editing {
        "save  delete"
    } else {
        "edit  delete"
    }
}

fn role_style(role: &str) -> Style {
    if role.eq_ignore_ascii_case("admin") {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default()
    }
}

fn empty_message(state: &AppState) -> String {
    if state.is_loading {
        "Loading records…".to_string()
    } else if state.records.is_empty() {
        "No records".to_string()
    } else {
        format!("No records match \"{}\"", state.query)
    }
}
