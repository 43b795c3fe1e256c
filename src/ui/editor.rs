//! Field-by-field form editor for the add and update pages.
//!
//! Tab/arrows move between fields, Enter on the last field asks for a
//! submit confirmation, Esc cancels. Category, priority, and due date are
//! typed as text and validated on submit.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::task::{Category, Priority, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKind {
    NewTask,
    EditTask,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorFieldId {
    Title,
    Description,
    Category,
    Priority,
    DueDate,
}

#[derive(Debug, Clone)]
pub struct EditorField {
    pub id: EditorFieldId,
    pub label: &'static str,
    pub value: String,
    pub required: bool,
}

/// Validated form values ready to hand to the store.
///
/// On edit, `title` may be empty: the store keeps the old title then.
#[derive(Debug, Clone)]
pub struct EditorSubmit {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    None,
    Cancel,
    Submit,
}

#[derive(Debug, Clone)]
pub struct EditorState {
    kind: EditorKind,
    fields: Vec<EditorField>,
    active: usize,
    confirming: bool,
    error: Option<String>,
    task_id: Option<u32>,
}

impl EditorState {
    pub fn new_task() -> Self {
        Self {
            kind: EditorKind::NewTask,
            fields: vec![
                EditorField {
                    id: EditorFieldId::Title,
                    label: "Title",
                    value: String::new(),
                    required: true,
                },
                EditorField {
                    id: EditorFieldId::Description,
                    label: "Description",
                    value: String::new(),
                    required: false,
                },
                EditorField {
                    id: EditorFieldId::Category,
                    label: "Category",
                    value: Category::default().to_string(),
                    required: false,
                },
                EditorField {
                    id: EditorFieldId::Priority,
                    label: "Priority",
                    value: Priority::default().to_string(),
                    required: false,
                },
                EditorField {
                    id: EditorFieldId::DueDate,
                    label: "Due date",
                    value: String::new(),
                    required: false,
                },
            ],
            active: 0,
            confirming: false,
            error: None,
            task_id: None,
        }
    }

    /// Editor pre-filled with the task's current values. Blanking the
    /// title keeps the old one on submit.
    pub fn edit_task(task: &Task) -> Self {
        Self {
            kind: EditorKind::EditTask,
            fields: vec![
                EditorField {
                    id: EditorFieldId::Title,
                    label: "Title",
                    value: task.title.clone(),
                    required: false,
                },
                EditorField {
                    id: EditorFieldId::Description,
                    label: "Description",
                    value: task.description.clone(),
                    required: false,
                },
                EditorField {
                    id: EditorFieldId::Category,
                    label: "Category",
                    value: task.category.to_string(),
                    required: false,
                },
                EditorField {
                    id: EditorFieldId::Priority,
                    label: "Priority",
                    value: task.priority.to_string(),
                    required: false,
                },
                EditorField {
                    id: EditorFieldId::DueDate,
                    label: "Due date",
                    value: task
                        .due_date
                        .map(|date| date.to_string())
                        .unwrap_or_default(),
                    required: false,
                },
            ],
            active: 0,
            confirming: false,
            error: None,
            task_id: Some(task.id),
        }
    }

    pub fn kind(&self) -> EditorKind {
        self.kind
    }

    pub fn task_id(&self) -> Option<u32> {
        self.task_id
    }

    pub fn fields(&self) -> &[EditorField] {
        &self.fields
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn confirming(&self) -> bool {
        self.confirming
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
        self.confirming = false;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> EditorAction {
        if self.confirming {
            return self.handle_confirm_key(key);
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('u') {
            if let Some(field) = self.current_field_mut() {
                field.value.clear();
            }
            self.error = None;
            return EditorAction::None;
        }

        match key.code {
            KeyCode::Esc => return EditorAction::Cancel,
            KeyCode::Tab | KeyCode::Down => {
                self.move_active(1);
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.move_active(-1);
            }
            KeyCode::Enter => {
                if self.active + 1 >= self.fields.len() {
                    return self.attempt_confirm();
                }
                self.move_active(1);
            }
            KeyCode::Backspace => {
                if let Some(field) = self.current_field_mut() {
                    field.value.pop();
                }
            }
            KeyCode::Char(ch) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return EditorAction::None;
                }
                if !ch.is_control() {
                    if let Some(field) = self.current_field_mut() {
                        field.value.push(ch);
                    }
                }
            }
            _ => {}
        }

        self.error = None;
        EditorAction::None
    }

    pub fn build_submit(&self) -> Result<EditorSubmit, String> {
        self.validate()?;
        let title = self.field_value(EditorFieldId::Title).trim().to_string();
        let description = self.field_value(EditorFieldId::Description).to_string();
        let category: Category = self
            .field_value(EditorFieldId::Category)
            .parse()
            .map_err(|_| "category must be work, personal, study, health, or other".to_string())?;
        let priority: Priority = self
            .field_value(EditorFieldId::Priority)
            .parse()
            .map_err(|_| "priority must be high, medium, or low".to_string())?;
        let due_date = parse_due_field(self.field_value(EditorFieldId::DueDate))?;

        Ok(EditorSubmit {
            title,
            description,
            category,
            priority,
            due_date,
        })
    }

    fn attempt_confirm(&mut self) -> EditorAction {
        match self.validate() {
            Ok(()) => {
                self.confirming = true;
                EditorAction::None
            }
            Err(err) => {
                self.error = Some(err);
                self.confirming = false;
                EditorAction::None
            }
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) -> EditorAction {
        match key.code {
            KeyCode::Esc => EditorAction::Cancel,
            KeyCode::Backspace | KeyCode::Char('e') => {
                self.confirming = false;
                self.error = None;
                EditorAction::None
            }
            KeyCode::Char('y') | KeyCode::Enter => EditorAction::Submit,
            _ => EditorAction::None,
        }
    }

    fn validate(&self) -> Result<(), String> {
        let title = self.field_value(EditorFieldId::Title).trim();
        if self.kind == EditorKind::NewTask && title.is_empty() {
            return Err("title is required".to_string());
        }
        if self.field_value(EditorFieldId::Category).parse::<Category>().is_err() {
            return Err("category must be work, personal, study, health, or other".to_string());
        }
        if self.field_value(EditorFieldId::Priority).parse::<Priority>().is_err() {
            return Err("priority must be high, medium, or low".to_string());
        }
        parse_due_field(self.field_value(EditorFieldId::DueDate))?;
        Ok(())
    }

    fn move_active(&mut self, delta: isize) {
        let len = self.fields.len() as isize;
        if len == 0 {
            self.active = 0;
            return;
        }
        let next = (self.active as isize + delta).rem_euclid(len);
        self.active = next as usize;
    }

    fn current_field_mut(&mut self) -> Option<&mut EditorField> {
        self.fields.get_mut(self.active)
    }

    fn field_value(&self, id: EditorFieldId) -> &str {
        self.fields
            .iter()
            .find(|field| field.id == id)
            .map(|field| field.value.as_str())
            .unwrap_or("")
    }
}

fn parse_due_field(value: &str) -> Result<Option<NaiveDate>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| "due date must be YYYY-MM-DD".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn set_field(editor: &mut EditorState, id: EditorFieldId, value: &str) {
        if let Some(field) = editor.fields.iter_mut().find(|f| f.id == id) {
            field.value = value.to_string();
        }
    }

    #[test]
    fn new_task_editor_requires_title() {
        let mut editor = EditorState::new_task();
        for _ in 0..editor.fields().len() {
            let action = editor.handle_key(key(KeyCode::Enter));
            assert_eq!(action, EditorAction::None);
        }
        assert_eq!(editor.error(), Some("title is required"));
    }

    #[test]
    fn new_task_editor_submits_after_confirm() {
        let mut editor = EditorState::new_task();
        set_field(&mut editor, EditorFieldId::Title, "Buy milk");
        for _ in 0..editor.fields().len() {
            editor.handle_key(key(KeyCode::Enter));
        }
        assert!(editor.confirming());

        let action = editor.handle_key(key(KeyCode::Char('y')));
        assert_eq!(action, EditorAction::Submit);

        let submit = editor.build_submit().expect("submit");
        assert_eq!(submit.title, "Buy milk");
        assert_eq!(submit.category, Category::Other);
        assert_eq!(submit.priority, Priority::Medium);
        assert!(submit.due_date.is_none());
    }

    #[test]
    fn editor_rejects_bad_due_date() {
        let mut editor = EditorState::new_task();
        set_field(&mut editor, EditorFieldId::Title, "Buy milk");
        set_field(&mut editor, EditorFieldId::DueDate, "soon");
        for _ in 0..editor.fields().len() {
            editor.handle_key(key(KeyCode::Enter));
        }
        assert_eq!(editor.error(), Some("due date must be YYYY-MM-DD"));
    }

    #[test]
    fn edit_editor_allows_blank_title() {
        let task = Task {
            id: 1,
            title: "Buy milk".to_string(),
            description: String::new(),
            category: Category::Work,
            priority: Priority::High,
            due_date: None,
            completed: false,
            created_at: NaiveDate::from_ymd_opt(2026, 8, 23).expect("date"),
        };
        let mut editor = EditorState::edit_task(&task);
        set_field(&mut editor, EditorFieldId::Title, "");

        let submit = editor.build_submit().expect("submit");
        assert!(submit.title.is_empty());
        assert_eq!(submit.category, Category::Work);
    }
}
