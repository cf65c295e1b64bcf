use crate::app::InputMode;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    FocusSearch,
    LeaveSearch,
    QueryInput(char),
    QueryBackspace,
    QueryClear,
    MoveUp,
    MoveDown,
    ToggleSelect,
    SelectAllOnPage,
    BeginEdit,
    EditInput(char),
    EditBackspace,
    CommitEdit,
    DeleteRow,
    DeleteSelected,
    FirstPage,
    PrevPage,
    NextPage,
    LastPage,
    /// One digit of a direct page jump.
    PageDigit(usize),
    None,
}

/// Captures the UI state needed to interpret a key press.
#[derive(Debug, Clone, Default)]
pub struct InputContext {
    pub mode: InputMode,
}

pub fn map_key(key: KeyEvent, ctx: &InputContext) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Ctrl+C always quits
    if ctrl && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match ctx.mode {
        InputMode::Search => match key.code {
            KeyCode::Char('u') if ctrl => Action::QueryClear,
            KeyCode::Char(c) if !ctrl => Action::QueryInput(c),
            KeyCode::Backspace => Action::QueryBackspace,
            KeyCode::Enter | KeyCode::Esc | KeyCode::Down => Action::LeaveSearch,
            _ => Action::None,
        },
        InputMode::Edit => match key.code {
            KeyCode::Char(c) if !ctrl => Action::EditInput(c),
            KeyCode::Backspace => Action::EditBackspace,
            KeyCode::Enter | KeyCode::Esc => Action::CommitEdit,
            _ => Action::None,
        },
        InputMode::Browse => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('/') => Action::FocusSearch,
            KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
            KeyCode::Char(' ') => Action::ToggleSelect,
            KeyCode::Char('a') => Action::SelectAllOnPage,
            KeyCode::Char('e') | KeyCode::Enter => Action::BeginEdit,
            KeyCode::Char('x') | KeyCode::Delete => Action::DeleteRow,
            KeyCode::Char('X') => Action::DeleteSelected,
            KeyCode::Left | KeyCode::Char('h') => Action::PrevPage,
            KeyCode::Right | KeyCode::Char('l') => Action::NextPage,
            KeyCode::Home | KeyCode::Char('g') => Action::FirstPage,
            KeyCode::End | KeyCode::Char('G') => Action::LastPage,
            KeyCode::Char(c) if c.is_ascii_digit() => Action::PageDigit((c as u8 - b'0') as usize),
            _ => Action::None,
        },
    }
}
