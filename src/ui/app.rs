use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::config::Config;
use crate::error::Result;
use crate::store::{DeleteOutcome, TaskStore};
use crate::task::{Category, Priority, Task};

use super::editor::{EditorAction, EditorKind, EditorState};
use super::view;

const EVENT_POLL_MS: u64 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Page {
    ViewAll,
    AddTask,
    UpdateTask,
    DeleteTask,
    FilterCategory,
    FilterPriority,
    Upcoming,
    MarkComplete,
    Statistics,
}

impl Page {
    pub(crate) const ALL: [Page; 9] = [
        Page::ViewAll,
        Page::AddTask,
        Page::UpdateTask,
        Page::DeleteTask,
        Page::FilterCategory,
        Page::FilterPriority,
        Page::Upcoming,
        Page::MarkComplete,
        Page::Statistics,
    ];

    pub(crate) fn title(self) -> &'static str {
        match self {
            Page::ViewAll => "View All Tasks",
            Page::AddTask => "Add New Task",
            Page::UpdateTask => "Update Task",
            Page::DeleteTask => "Delete Task",
            Page::FilterCategory => "Filter by Category",
            Page::FilterPriority => "Filter by Priority",
            Page::Upcoming => "Upcoming Tasks",
            Page::MarkComplete => "Mark as Complete",
            Page::Statistics => "Statistics",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Sidebar,
    Content,
}

#[derive(Clone, Copy)]
pub(crate) enum StatusKind {
    Info,
    Error,
}

pub(crate) struct DeleteConfirmState {
    pub(crate) task_id: u32,
    pub(crate) title: String,
}

pub struct AppState {
    pub(crate) store: TaskStore,
    pub(crate) upcoming_days: u64,
    pub(crate) page: Page,
    pub(crate) focus: Focus,
    pub(crate) sidebar_index: usize,
    pub(crate) selected: usize,
    pub(crate) category_index: usize,
    pub(crate) priority_index: usize,
    pub(crate) editor: Option<EditorState>,
    pub(crate) delete_confirm: Option<DeleteConfirmState>,
    pub(crate) status: Option<(StatusKind, String)>,
    should_quit: bool,
}

impl AppState {
    fn new(store: TaskStore, upcoming_days: u64) -> Self {
        Self {
            store,
            upcoming_days,
            page: Page::ViewAll,
            focus: Focus::Sidebar,
            sidebar_index: 0,
            selected: 0,
            category_index: 0,
            priority_index: 0,
            editor: None,
            delete_confirm: None,
            status: None,
            should_quit: false,
        }
    }

    /// Tasks shown on the current page, in stored order.
    pub(crate) fn visible_tasks(&self) -> Vec<Task> {
        match self.page {
            Page::ViewAll | Page::UpdateTask | Page::DeleteTask => self.store.tasks().to_vec(),
            Page::FilterCategory => self
                .store
                .by_category(self.filter_category())
                .cloned()
                .collect(),
            Page::FilterPriority => self
                .store
                .by_priority(self.filter_priority())
                .cloned()
                .collect(),
            Page::Upcoming => self
                .store
                .upcoming(self.upcoming_days)
                .into_iter()
                .cloned()
                .collect(),
            Page::MarkComplete => self.store.incomplete().cloned().collect(),
            Page::AddTask | Page::Statistics => Vec::new(),
        }
    }

    pub(crate) fn filter_category(&self) -> Category {
        Category::ALL[self.category_index % Category::ALL.len()]
    }

    pub(crate) fn filter_priority(&self) -> Priority {
        Priority::ALL[self.priority_index % Priority::ALL.len()]
    }

    fn set_info(&mut self, message: String) {
        self.status = Some((StatusKind::Info, message));
    }

    fn set_error(&mut self, message: String) {
        self.status = Some((StatusKind::Error, message));
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.delete_confirm.is_some() {
            self.handle_confirm_key(key);
            return;
        }

        if self.editor.is_some() {
            self.handle_editor_key(key);
            return;
        }

        if key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }

        match self.focus {
            Focus::Sidebar => self.handle_sidebar_key(key),
            Focus::Content => self.handle_content_key(key),
        }
    }

    fn handle_sidebar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.sidebar_index == 0 {
                    self.sidebar_index = Page::ALL.len() - 1;
                } else {
                    self.sidebar_index -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.sidebar_index = (self.sidebar_index + 1) % Page::ALL.len();
            }
            KeyCode::Enter | KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => {
                self.enter_page();
            }
            _ => {}
        }
    }

    fn enter_page(&mut self) {
        self.page = Page::ALL[self.sidebar_index];
        self.selected = 0;
        self.status = None;
        self.focus = Focus::Content;
        if self.page == Page::AddTask {
            self.editor = Some(EditorState::new_task());
        }
    }

    fn handle_content_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Left | KeyCode::Char('h') => {
                self.focus = Focus::Sidebar;
                return;
            }
            _ => {}
        }

        match self.page {
            Page::FilterCategory => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.category_index =
                        (self.category_index + Category::ALL.len() - 1) % Category::ALL.len();
                }
                KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                    self.category_index = (self.category_index + 1) % Category::ALL.len();
                }
                _ => {}
            },
            Page::FilterPriority => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.priority_index =
                        (self.priority_index + Priority::ALL.len() - 1) % Priority::ALL.len();
                }
                KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                    self.priority_index = (self.priority_index + 1) % Priority::ALL.len();
                }
                _ => {}
            },
            Page::ViewAll | Page::Upcoming => match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
                KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
                _ => {}
            },
            Page::UpdateTask => match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
                KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
                KeyCode::Enter => {
                    if let Some(task) = self.selected_task() {
                        self.editor = Some(EditorState::edit_task(&task));
                    }
                }
                _ => {}
            },
            Page::DeleteTask => match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
                KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
                KeyCode::Enter => {
                    if let Some(task) = self.selected_task() {
                        self.delete_confirm = Some(DeleteConfirmState {
                            task_id: task.id,
                            title: task.title.clone(),
                        });
                    }
                }
                _ => {}
            },
            Page::MarkComplete => match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
                KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
                KeyCode::Enter => self.complete_selected(),
                _ => {}
            },
            Page::AddTask | Page::Statistics => {}
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        match editor.handle_key(key) {
            EditorAction::None => {}
            EditorAction::Cancel => {
                self.editor = None;
                self.focus = Focus::Sidebar;
                self.set_info("Edit cancelled".to_string());
            }
            EditorAction::Submit => self.submit_editor(),
        }
    }

    fn submit_editor(&mut self) {
        let Some(editor) = self.editor.as_ref() else {
            return;
        };
        let submit = match editor.build_submit() {
            Ok(submit) => submit,
            Err(message) => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.set_error(message);
                }
                return;
            }
        };

        let result = match (editor.kind(), editor.task_id()) {
            (EditorKind::NewTask, _) => self.store.add(
                &submit.title,
                &submit.description,
                submit.category,
                submit.priority,
                submit.due_date,
            ),
            (EditorKind::EditTask, Some(id)) => self.store.update(
                id,
                &submit.title,
                &submit.description,
                submit.category,
                submit.priority,
                submit.due_date,
            ),
            (EditorKind::EditTask, None) => return,
        };

        match result {
            Ok(task) => {
                let verb = match editor.kind() {
                    EditorKind::NewTask => "added",
                    EditorKind::EditTask => "updated",
                };
                self.set_info(format!("Task '{}' {} (#{})", task.title, verb, task.id));
                self.editor = None;
                self.focus = Focus::Sidebar;
            }
            Err(err) => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.set_error(err.to_string());
                }
            }
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                let Some(confirm) = self.delete_confirm.take() else {
                    return;
                };
                match self.store.delete(confirm.task_id, true) {
                    Ok(DeleteOutcome::Deleted(task)) => {
                        self.set_info(format!("Task '{}' deleted", task.title));
                    }
                    Ok(DeleteOutcome::ConfirmationRequired) => {}
                    Err(err) => self.set_error(err.to_string()),
                }
                self.clamp_selection();
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                self.delete_confirm = None;
                self.set_info("Deletion cancelled".to_string());
            }
            _ => {}
        }
    }

    fn complete_selected(&mut self) {
        let Some(task) = self.selected_task() else {
            return;
        };
        match self.store.mark_complete(task.id) {
            Ok(task) => self.set_info(format!("Task '{}' marked as complete", task.title)),
            Err(err) => self.set_error(err.to_string()),
        }
        self.clamp_selection();
    }

    fn selected_task(&self) -> Option<Task> {
        self.visible_tasks().get(self.selected).cloned()
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.visible_tasks().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let next = self.selected as isize + delta;
        self.selected = next.rem_euclid(len as isize) as usize;
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_tasks().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

pub fn run(file: Option<&Path>) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = Config::load_from_dir(&cwd);
    let store = TaskStore::load(config.task_file(file));
    let mut app = AppState::new(store, config.ui.upcoming_days);
    run_terminal(&mut app)
}

fn run_terminal(app: &mut AppState) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let mut dirty = true;
    loop {
        if dirty {
            terminal.draw(|frame| view::render(frame, app))?;
            dirty = false;
        }

        if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
            match event::read()? {
                Event::Key(key) => {
                    app.handle_key(key);
                    if app.should_quit {
                        break;
                    }
                    dirty = true;
                }
                Event::Resize(_, _) => {
                    dirty = true;
                }
                _ => {}
            }
        }
    }
    Ok(())
}
