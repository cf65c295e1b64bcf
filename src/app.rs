use crate::filter;
use crate::input::Action;
use crate::paging;
use chrono::{DateTime, Local};
use std::collections::HashSet;

// UI constants
pub const NOTIFICATION_TTL_SECS: u64 = 4;
pub const SPINNER_FRAME_COUNT: usize = 10;
pub const NARROW_WIDTH_THRESHOLD: u16 = 80;

pub const DEFAULT_ENDPOINT: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Record {
    #[serde(deserialize_with = "crate::source::parser::deserialize_id")]
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Which widget currently receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Browse,
    Search,
    Edit,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub timestamp: std::time::Instant,
}

/// Immutable configuration set at startup.
pub struct AppConfig {
    pub endpoint: String,
    pub version_string: String,
}

pub struct AppState {
    pub config: AppConfig,

    // Record collection
    pub records: Vec<Record>,
    pub loaded_at: Option<DateTime<Local>>,

    // View state
    pub query: String,
    pub current_page: usize,
    pub selected_ids: HashSet<u64>,
    pub select_all_checked: bool,
    pub editing_id: Option<u64>,
    pub cursor: usize,
    pub mode: InputMode,
    /// Digits typed so far for a direct page jump; 0 when none.
    pub page_jump: usize,

    // Transient UI
    pub notifications: Vec<Notification>,
    pub spinner_frame: usize,
    pub is_loading: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(endpoint: String) -> Self {
        Self {
            config: AppConfig {
                endpoint,
                version_string: format!("adt v{}", env!("CARGO_PKG_VERSION")),
            },
            records: Vec::new(),
            loaded_at: None,
            query: String::new(),
            current_page: 1,
            selected_ids: HashSet::new(),
            select_all_checked: false,
            editing_id: None,
            cursor: 0,
            mode: InputMode::Browse,
            page_jump: 0,
            notifications: Vec::new(),
            spinner_frame: 0,
            is_loading: false,
            should_quit: false,
        }
    }

    // --- Derivations ---

    pub fn filtered(&self) -> Vec<&Record> {
        filter::filter_records(&self.records, &self.query)
    }

    pub fn total_pages(&self) -> usize {
        paging::total_pages(self.filtered().len())
    }

    /// Records shown on the current page, in collection order.
    pub fn page_records(&self) -> Vec<&Record> {
        let filtered = self.filtered();
        paging::page_slice(&filtered, self.current_page).to_vec()
    }

    pub fn page_ids(&self) -> Vec<u64> {
        self.page_records().iter().map(|r| r.id).collect()
    }

    pub fn current_record(&self) -> Option<&Record> {
        self.page_records().get(self.cursor).copied()
    }

    pub fn current_id(&self) -> Option<u64> {
        self.current_record().map(|r| r.id)
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.selected_ids.contains(&id)
    }

    pub fn is_editing(&self, id: u64) -> bool {
        self.editing_id == Some(id)
    }

    /// Re-derives the page count and pulls `current_page` and `cursor` back
    /// into range. Called after anything that can change the filtered set.
    pub fn reconcile(&mut self) {
        let total = self.total_pages();
        self.current_page = paging::clamp_page(self.current_page, total);
        let rows = self.page_records().len();
        if rows == 0 {
            self.cursor = 0;
        } else if self.cursor >= rows {
            self.cursor = rows - 1;
        }
    }

    // --- Loader ---

    pub fn apply_loaded(&mut self, records: Vec<Record>) {
        tracing::info!("loaded {} records", records.len());
        self.records = records;
        self.current_page = 1;
        self.cursor = 0;
        self.is_loading = false;
        self.loaded_at = Some(Local::now());
        self.reconcile();
    }

    /// Keeps the collection empty; the failure only goes to the log.
    pub fn apply_load_failure(&mut self, message: &str) {
        tracing::error!(endpoint = %self.config.endpoint, "failed to load records: {message}");
        self.is_loading = false;
        self.reconcile();
    }

    // --- Search ---

    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.current_page = 1;
        self.cursor = 0;
        self.reconcile();
    }

    pub fn push_query_char(&mut self, c: char) {
        let mut query = std::mem::take(&mut self.query);
        query.push(c);
        self.set_query(query);
    }

    pub fn pop_query_char(&mut self) {
        let mut query = std::mem::take(&mut self.query);
        query.pop();
        self.set_query(query);
    }

    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    // --- Pagination ---

    /// Jumps to `page`, clamped into the valid range. No-op without pages.
    pub fn go_to_page(&mut self, page: usize) {
        let total = self.total_pages();
        if total == 0 {
            return;
        }
        let target = paging::clamp_page(page, total);
        if target != self.current_page {
            self.current_page = target;
            self.cursor = 0;
        }
    }

    pub fn first_page(&mut self) {
        self.go_to_page(1);
    }

    pub fn prev_page(&mut self) {
        self.go_to_page(self.current_page.saturating_sub(1));
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.current_page + 1);
    }

    pub fn last_page(&mut self) {
        self.go_to_page(self.total_pages());
    }

    /// Extends the pending page number with `digit` and jumps there. A
    /// number past the last page starts over from `digit` alone, so with
    /// 25 pages "1" "2" lands on 12 and a further "3" on 3.
    pub fn push_page_digit(&mut self, digit: usize) {
        let total = self.total_pages();
        if total == 0 {
            self.page_jump = 0;
            return;
        }
        let extended = self.page_jump.saturating_mul(10).saturating_add(digit);
        self.page_jump = if (1..=total).contains(&extended) {
            extended
        } else {
            digit
        };
        if self.page_jump > 0 {
            self.go_to_page(self.page_jump);
        }
    }

    pub fn move_cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_cursor_down(&mut self) {
        let rows = self.page_records().len();
        if rows > 0 && self.cursor < rows - 1 {
            self.cursor += 1;
        }
    }

    // --- Selection ---

    pub fn toggle_select(&mut self, id: u64) {
        if !self.selected_ids.remove(&id) {
            self.selected_ids.insert(id);
        }
    }

    pub fn toggle_select_current(&mut self) {
        if let Some(id) = self.current_id() {
            self.toggle_select(id);
        }
    }

    /// Header checkbox. Clears the selection when it holds as many ids as
    /// the current page shows, otherwise replaces it with the page's ids.
    /// Only the counts are compared, so an equally sized selection on
    /// another page is cleared too. Selections on other pages are dropped
    /// either way.
    pub fn select_all_on_page(&mut self) {
        let page_ids: HashSet<u64> = self.page_ids().into_iter().collect();
        if page_ids.len() == self.selected_ids.len() {
            self.selected_ids.clear();
            self.select_all_checked = false;
        } else {
            self.selected_ids = page_ids;
            self.select_all_checked = true;
        }
    }

    // --- Editing ---

    pub fn begin_edit(&mut self, id: u64) {
        self.editing_id = Some(id);
        self.mode = InputMode::Edit;
    }

    pub fn begin_edit_current(&mut self) {
        if let Some(id) = self.current_id() {
            self.begin_edit(id);
        }
    }

    /// Leaves edit mode. The name was already written on every keystroke.
    pub fn commit_edit(&mut self, id: u64) {
        if self.editing_id == Some(id) {
            self.editing_id = None;
        }
        if self.editing_id.is_none() && self.mode == InputMode::Edit {
            self.mode = InputMode::Browse;
        }
    }

    pub fn commit_current_edit(&mut self) {
        match self.editing_id {
            Some(id) => self.commit_edit(id),
            None => self.mode = InputMode::Browse,
        }
    }

    fn editing_record_mut(&mut self) -> Option<&mut Record> {
        let id = self.editing_id?;
        self.records.iter_mut().find(|r| r.id == id)
    }

    pub fn edit_push(&mut self, c: char) {
        if let Some(record) = self.editing_record_mut() {
            record.name.push(c);
        }
        self.reconcile();
    }

    pub fn edit_pop(&mut self) {
        if let Some(record) = self.editing_record_mut() {
            record.name.pop();
        }
        self.reconcile();
    }

    // --- Mutation ---

    /// Removes the record with `id`. Returns how many records were removed.
    pub fn delete_one(&mut self, id: u64) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.selected_ids.remove(&id);
        if self.editing_id == Some(id) {
            self.editing_id = None;
            if self.mode == InputMode::Edit {
                self.mode = InputMode::Browse;
            }
        }
        self.reconcile();
        before - self.records.len()
    }

    pub fn delete_current(&mut self) -> usize {
        match self.current_id() {
            Some(id) => self.delete_one(id),
            None => 0,
        }
    }

    /// Removes every selected record and clears the selection.
    pub fn delete_selected(&mut self) -> usize {
        let before = self.records.len();
        let selected = std::mem::take(&mut self.selected_ids);
        self.records.retain(|r| !selected.contains(&r.id));
        if self.editing_id.is_some_and(|id| selected.contains(&id)) {
            self.editing_id = None;
            if self.mode == InputMode::Edit {
                self.mode = InputMode::Browse;
            }
        }
        self.reconcile();
        before - self.records.len()
    }

    // --- Dispatch ---

    /// Applies one mapped key action to the view.
    pub fn apply(&mut self, action: Action) {
        if !matches!(action, Action::PageDigit(_) | Action::None) {
            self.page_jump = 0;
        }
        match action {
            Action::Quit => self.should_quit = true,
            Action::FocusSearch => self.mode = InputMode::Search,
            Action::LeaveSearch => self.mode = InputMode::Browse,
            Action::QueryInput(c) => self.push_query_char(c),
            Action::QueryBackspace => self.pop_query_char(),
            Action::QueryClear => self.clear_query(),
            Action::MoveUp => self.move_cursor_up(),
            Action::MoveDown => self.move_cursor_down(),
            Action::ToggleSelect => self.toggle_select_current(),
            Action::SelectAllOnPage => self.select_all_on_page(),
            Action::BeginEdit => self.begin_edit_current(),
            Action::EditInput(c) => self.edit_push(c),
            Action::EditBackspace => self.edit_pop(),
            Action::CommitEdit => self.commit_current_edit(),
            Action::DeleteRow => {
                if let Some(id) = self.current_id() {
                    if self.delete_one(id) > 0 {
                        self.notify(format!("Deleted record {id}"));
                    }
                }
            }
            Action::DeleteSelected => {
                let removed = self.delete_selected();
                if removed > 0 {
                    let noun = if removed == 1 { "record" } else { "records" };
                    self.notify(format!("Deleted {removed} {noun}"));
                }
            }
            Action::FirstPage => self.first_page(),
            Action::PrevPage => self.prev_page(),
            Action::NextPage => self.next_page(),
            Action::LastPage => self.last_page(),
            Action::PageDigit(d) => self.push_page_digit(d),
            Action::None => {}
        }
    }

    // --- Transient UI ---

    pub fn notify(&mut self, message: String) {
        self.notifications.push(Notification {
            message,
            timestamp: std::time::Instant::now(),
        });
    }

    pub fn prune_notifications(&mut self) {
        let now = std::time::Instant::now();
        self.notifications
            .retain(|n| now.duration_since(n.timestamp).as_secs() < NOTIFICATION_TTL_SECS);
    }

    pub fn advance_spinner(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAME_COUNT;
    }
}
