use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::task::{Category, Priority, Task};

use super::app::{AppState, DeleteConfirmState, Focus, Page, StatusKind};
use super::editor::EditorState;

const SIDEBAR_WIDTH: u16 = 26;
const COLOR_TEXT: Color = Color::Rgb(234, 236, 239);
const COLOR_MUTED: Color = Color::Rgb(160, 165, 172);
const COLOR_INFO: Color = Color::Rgb(116, 198, 219);
const COLOR_ERROR: Color = Color::Rgb(255, 107, 107);
const COLOR_SUCCESS: Color = Color::Rgb(126, 210, 146);
const COLOR_ACCENT: Color = Color::Rgb(122, 170, 255);
const COLOR_BORDER: Color = Color::Rgb(92, 126, 166);

pub fn render(frame: &mut Frame, app: &AppState) {
    let area = frame.size();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(area);
    let main = chunks[0];
    let footer = chunks[1];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)].as_ref())
        .split(main);
    render_sidebar(frame, app, columns[0]);
    render_page(frame, app, columns[1]);
    render_footer(frame, app, footer);

    if let Some(editor) = app.editor.as_ref() {
        render_editor_modal(frame, area, editor);
    }
    if let Some(confirm) = app.delete_confirm.as_ref() {
        render_delete_confirm_modal(frame, area, confirm);
    }
}

fn render_sidebar(frame: &mut Frame, app: &AppState, area: Rect) {
    let items: Vec<ListItem> = Page::ALL
        .iter()
        .map(|page| ListItem::new(page.title()))
        .collect();

    let border = if app.focus == Focus::Sidebar {
        COLOR_ACCENT
    } else {
        COLOR_BORDER
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title("Task Manager"),
        )
        .style(Style::default().fg(COLOR_MUTED))
        .highlight_style(
            Style::default()
                .fg(COLOR_TEXT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.sidebar_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_page(frame: &mut Frame, app: &AppState, area: Rect) {
    match app.page {
        Page::Statistics => render_stats(frame, app, area),
        Page::AddTask => render_placeholder(frame, app, area, "Fill in the form to add a task."),
        Page::FilterCategory => render_filtered_list(
            frame,
            app,
            area,
            &category_filter_line(app.filter_category()),
        ),
        Page::FilterPriority => render_filtered_list(
            frame,
            app,
            area,
            &priority_filter_line(app.filter_priority()),
        ),
        _ => render_task_list(frame, app, area),
    }
}

fn category_filter_line(current: Category) -> String {
    let names: Vec<String> = Category::ALL
        .iter()
        .map(|c| {
            if *c == current {
                format!("[{c}]")
            } else {
                c.to_string()
            }
        })
        .collect();
    format!("Category: {}", names.join("  "))
}

fn priority_filter_line(current: Priority) -> String {
    let names: Vec<String> = Priority::ALL
        .iter()
        .map(|p| {
            if *p == current {
                format!("[{p}]")
            } else {
                p.to_string()
            }
        })
        .collect();
    format!("Priority: {}", names.join("  "))
}

fn render_filtered_list(frame: &mut Frame, app: &AppState, area: Rect, filter_line: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)].as_ref())
        .split(area);
    let header = Paragraph::new(Line::from(Span::styled(
        filter_line.to_string(),
        Style::default().fg(COLOR_INFO),
    )));
    frame.render_widget(header, chunks[0]);
    render_task_list(frame, app, chunks[1]);
}

fn render_task_list(frame: &mut Frame, app: &AppState, area: Rect) {
    let tasks = app.visible_tasks();
    let border = if app.focus == Focus::Content {
        COLOR_ACCENT
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(app.page.title());

    if tasks.is_empty() {
        let widget = Paragraph::new("No tasks to show.")
            .style(Style::default().fg(COLOR_MUTED))
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(widget, area);
        return;
    }

    let items: Vec<ListItem> = tasks.iter().map(task_item).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(COLOR_TEXT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.selected.min(tasks.len() - 1)));
    frame.render_stateful_widget(list, area, &mut state);
}

fn task_item(task: &Task) -> ListItem<'static> {
    let marker = if task.completed { "done" } else { "open" };
    let marker_color = if task.completed {
        COLOR_SUCCESS
    } else {
        COLOR_INFO
    };
    let due = task
        .due_date
        .map(|date| format!(" due {date}"))
        .unwrap_or_default();
    let line = Line::from(vec![
        Span::styled(format!("#{:<3} ", task.id), Style::default().fg(COLOR_MUTED)),
        Span::styled(format!("{marker} "), Style::default().fg(marker_color)),
        Span::styled(task.title.clone(), Style::default().fg(COLOR_TEXT)),
        Span::styled(
            format!("  {}/{}{}", task.category, task.priority, due),
            Style::default().fg(COLOR_MUTED),
        ),
    ]);
    ListItem::new(line)
}

fn render_placeholder(frame: &mut Frame, app: &AppState, area: Rect, message: &str) {
    let widget = Paragraph::new(message.to_string())
        .style(Style::default().fg(COLOR_MUTED))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_BORDER))
                .title(app.page.title()),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

fn render_stats(frame: &mut Frame, app: &AppState, area: Rect) {
    let stats = app.store.stats();
    let mut lines = vec![
        stat_line("Total tasks", stats.total.to_string()),
        stat_line("Completed", stats.completed.to_string()),
        stat_line("Incomplete", stats.incomplete.to_string()),
        stat_line("Completion rate", format!("{:.1}%", stats.completion_rate)),
        Line::default(),
        Line::from(Span::styled(
            "By category",
            Style::default().fg(COLOR_ACCENT),
        )),
    ];
    for entry in &stats.by_category {
        lines.push(stat_line(entry.category.as_str(), entry.count.to_string()));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "By priority",
        Style::default().fg(COLOR_ACCENT),
    )));
    for entry in &stats.by_priority {
        lines.push(stat_line(entry.priority.as_str(), entry.count.to_string()));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_BORDER))
            .title("Statistics"),
    );
    frame.render_widget(widget, area);
}

fn stat_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<18}"), Style::default().fg(COLOR_MUTED)),
        Span::styled(value, Style::default().fg(COLOR_TEXT)),
    ])
}

fn render_footer(frame: &mut Frame, app: &AppState, area: Rect) {
    let line = if let Some((kind, message)) = app.status.as_ref() {
        let color = match kind {
            StatusKind::Info => COLOR_SUCCESS,
            StatusKind::Error => COLOR_ERROR,
        };
        Line::from(Span::styled(message.clone(), Style::default().fg(color)))
    } else {
        let hint = match app.focus {
            Focus::Sidebar => "j/k move  Enter open  q quit",
            Focus::Content => "j/k move  Enter select  Esc back  q quit",
        };
        Line::from(Span::styled(hint, Style::default().fg(COLOR_MUTED)))
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_editor_modal(frame: &mut Frame, area: Rect, editor: &EditorState) {
    let modal = centered_rect(area, 60, 14);
    frame.render_widget(Clear, modal);

    let mut lines = Vec::new();
    for (idx, field) in editor.fields().iter().enumerate() {
        let active = idx == editor.active_index();
        let label_style = if active {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_MUTED)
        };
        let cursor = if active && !editor.confirming() { "_" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<12}", field.label), label_style),
            Span::styled(
                format!("{}{}", field.value, cursor),
                Style::default().fg(COLOR_TEXT),
            ),
        ]));
    }
    lines.push(Line::default());
    if let Some(error) = editor.error() {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(COLOR_ERROR),
        )));
    } else if editor.confirming() {
        lines.push(Line::from(Span::styled(
            "Save? y/Enter confirm, e edit, Esc cancel",
            Style::default().fg(COLOR_INFO),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Tab next field, Enter on last field to save, Esc cancel",
            Style::default().fg(COLOR_MUTED),
        )));
    }

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_ACCENT))
                .title("Task"),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, modal);
}

fn render_delete_confirm_modal(frame: &mut Frame, area: Rect, confirm: &DeleteConfirmState) {
    let modal = centered_rect(area, 50, 7);
    frame.render_widget(Clear, modal);

    let lines = vec![
        Line::from(Span::styled(
            format!("Delete task #{} '{}'?", confirm.task_id, confirm.title),
            Style::default().fg(COLOR_TEXT),
        )),
        Line::default(),
        Line::from(Span::styled(
            "y delete, n cancel",
            Style::default().fg(COLOR_INFO),
        )),
    ];
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_ERROR))
                .title("Confirm deletion"),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, modal);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width,
        height,
    }
}
