use crate::app::AppState;
use crate::paging::{self, PagerButton, PagerKind};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// The "Delete Selected" action line. Always enabled; pressing it with an
/// empty selection does nothing.
pub fn render_actions(f: &mut Frame, area: Rect, state: &AppState) {
    let count = state.selected_ids.len();
    let line = Line::from(vec![
        Span::styled(
            " Delete Selected ",
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {count} selected"),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let buttons = paging::pager_buttons(state.current_page, state.total_pages());
    let slots = fit_buttons(&buttons, state.current_page, area.width as usize);
    let line = Line::from(button_spans(&slots));
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// One position on the drawn bar.
#[derive(Debug, PartialEq, Eq)]
enum Slot<'a> {
    Button(&'a PagerButton),
    /// Run of page numbers left out.
    Gap,
}

fn slots_width(slots: &[Slot<'_>]) -> usize {
    let cells: usize = slots
        .iter()
        .map(|slot| match slot {
            Slot::Button(b) => b.label.len() + 2,
            Slot::Gap => 1,
        })
        .sum();
    cells + slots.len().saturating_sub(1)
}

/// Picks the buttons to draw within `width` columns. Arrows, the first and
/// the last page are always kept; other page numbers are windowed around
/// `current`, narrowing until the bar fits.
fn fit_buttons(buttons: &[PagerButton], current: usize, width: usize) -> Vec<Slot<'_>> {
    let all: Vec<Slot<'_>> = buttons.iter().map(Slot::Button).collect();
    if slots_width(&all) <= width {
        return all;
    }

    let total = buttons
        .iter()
        .filter(|b| matches!(b.kind, PagerKind::Page(_)))
        .count();
    let mut radius = total;
    loop {
        let slots = windowed(buttons, current, total, radius);
        if radius == 0 || slots_width(&slots) <= width {
            return slots;
        }
        radius -= 1;
    }
}

fn windowed(buttons: &[PagerButton], current: usize, total: usize, radius: usize) -> Vec<Slot<'_>> {
    let lo = current.saturating_sub(radius);
    let hi = current.saturating_add(radius);
    let mut slots = Vec::new();
    let mut skipping = false;
    for button in buttons {
        let keep = match button.kind {
            PagerKind::Page(n) => n == 1 || n == total || (lo..=hi).contains(&n),
            _ => true,
        };
        if keep {
            slots.push(Slot::Button(button));
            skipping = false;
        } else if !skipping {
            slots.push(Slot::Gap);
            skipping = true;
        }
    }
    slots
}

fn button_spans(slots: &[Slot<'_>]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(slots.len() * 2);
    for (i, slot) in slots.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(match slot {
            Slot::Button(button) => {
                Span::styled(format!("[{}]", button.label), button_style(button))
            }
            Slot::Gap => Span::styled("…", Style::default().fg(Color::DarkGray)),
        });
    }
    spans
}

fn button_style(button: &PagerButton) -> Style {
    match (button.kind, button.enabled) {
        // a disabled page number is the current page
        (PagerKind::Page(_), false) => Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        (_, false) => Style::default().fg(Color::DarkGray),
        (_, true) => Style::default().fg(Color::Cyan),
    }
}
