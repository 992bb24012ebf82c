use crate::app::{App, AppMode};
use basket_domain::ItemFilter;
use basket_persistence::PersistenceStore;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};

pub fn render<S: PersistenceStore>(app: &App<S>, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_filter_tabs(app, frame, chunks[0]);
    render_list(app, frame, chunks[1]);
    render_footer(app, frame, chunks[2]);

    match app.mode {
        AppMode::AddItem => render_input_popup(app, frame, "New item"),
        AppMode::EditItem => render_input_popup(app, frame, "Edit item"),
        AppMode::Normal => {}
    }
}

fn render_filter_tabs<S: PersistenceStore>(app: &App<S>, frame: &mut Frame, area: Rect) {
    let titles: Vec<Line> = ItemFilter::ALL_FILTERS
        .iter()
        .map(|f| Line::from(f.label()))
        .collect();
    let selected = ItemFilter::ALL_FILTERS
        .iter()
        .position(|f| *f == app.filter)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL).title(" basket "));
    frame.render_widget(tabs, area);
}

fn render_list<S: PersistenceStore>(app: &App<S>, frame: &mut Frame, area: Rect) {
    let visible = app.visible_items();

    let rows: Vec<ListItem> = visible
        .iter()
        .map(|item| {
            let marker = if item.completed { "[x] " } else { "[ ] " };
            let style = if item.completed {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::styled(item.name.clone(), style),
            ]))
        })
        .collect();

    let title = format!(" {} of {} items ", visible.len(), app.items.len());
    let list = List::new(rows)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(app.selection.get());
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_footer<S: PersistenceStore>(app: &App<S>, frame: &mut Frame, area: Rect) {
    let line = match (&app.mode, &app.status) {
        (AppMode::Normal, Some(status)) => {
            Line::from(Span::styled(status.clone(), Style::default().fg(Color::Red)))
        }
        _ => Line::from(vec![
            Span::styled("a", Style::default().fg(Color::Yellow)),
            Span::raw(" add  "),
            Span::styled("enter", Style::default().fg(Color::Yellow)),
            Span::raw(" toggle  "),
            Span::styled("e", Style::default().fg(Color::Yellow)),
            Span::raw(" edit  "),
            Span::styled("d", Style::default().fg(Color::Yellow)),
            Span::raw(" delete  "),
            Span::styled("1-3", Style::default().fg(Color::Yellow)),
            Span::raw(" filter  "),
            Span::styled("C", Style::default().fg(Color::Yellow)),
            Span::raw(" clear all  "),
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::raw(" quit"),
        ]),
    };

    let footer = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

fn render_input_popup<S: PersistenceStore>(app: &App<S>, frame: &mut Frame, title: &str) {
    let area = centered_rect(50, 5, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![Line::from(app.input.as_str().to_string())];
    if let Some(ref notice) = app.status {
        lines.push(Line::from(Span::styled(
            notice.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    let popup = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {title} (enter to confirm, esc to cancel) ")),
    );
    frame.render_widget(popup, area);

    // Cursor column counts chars, not bytes.
    let cursor_col = app.input.as_str()[..app.input.cursor_pos()].chars().count() as u16;
    frame.set_cursor_position((area.x + 1 + cursor_col, area.y + 1));
}

fn centered_rect(width_percent: u16, height: u16, area: Rect) -> Rect {
    let width = (u32::from(area.width) * u32::from(width_percent) / 100) as u16;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width,
        height: height.min(area.height),
    }
}
