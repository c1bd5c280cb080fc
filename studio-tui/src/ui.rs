//! Rendering

use crate::app::{App, Notice, NoticeKind, Screen, ScheduleView};
use ratatui::layout::Flex;
use ratatui::{prelude::*, widgets::*};
use shared::models::{TimeSlot, Weekday};
use studio_core::services::ScheduleCell;

const LOGIN_HELP: &str = "[Enter] Login   [Ctrl+N / F2] Become a Member   [Esc] Quit";
const SCHEDULE_HELP: &str =
    "[←↑↓→ / hjkl] Move   [Enter / r] Reserve / Cancel   [v] View Members   [L] Logout   [q] Quit";

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Main Content
            Constraint::Length(1), // Help
        ])
        .split(f.area());

    let (status, help) = match &app.screen {
        Screen::Login => (Span::styled(" Login ", Style::default().fg(Color::Yellow)), LOGIN_HELP),
        Screen::Schedule(view) => (
            Span::styled(
                format!(" Logged in as {} ", view.session.member_name()),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            SCHEDULE_HELP,
        ),
    };

    let title = Paragraph::new(Line::from(vec![
        Span::raw(" Fitness Studio "),
        Span::styled(" Class Reservations ", Style::default().fg(Color::Yellow)),
        Span::raw(" | "),
        status,
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(title, chunks[0]);

    match &app.screen {
        Screen::Login => draw_login(f, app, chunks[1]),
        Screen::Schedule(view) => draw_schedule(f, view, chunks[1]),
    }

    f.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );

    if let Some(notice) = &app.notice {
        draw_notice(f, notice);
    }
}

fn draw_login(f: &mut Frame, app: &App, area: Rect) {
    let [form] = Layout::vertical([Constraint::Length(3)])
        .flex(Flex::Center)
        .areas(area);
    let [form] = Layout::horizontal([Constraint::Percentage(50)])
        .flex(Flex::Center)
        .areas(form);

    let width = form.width.max(3) - 3;
    let scroll = app.input.visual_scroll(width as usize);
    let input = Paragraph::new(app.input.value())
        .style(Style::default().fg(Color::Yellow))
        .scroll((0, scroll as u16))
        .block(Block::default().borders(Borders::ALL).title(" Member name "));
    f.render_widget(input, form);

    if app.notice.is_none() {
        f.set_cursor_position((
            form.x + ((app.input.visual_cursor().max(scroll) - scroll) as u16) + 1,
            form.y + 1,
        ));
    }
}

fn draw_schedule(f: &mut Frame, view: &ScheduleView, area: Rect) {
    let header = Row::new(
        std::iter::once(Cell::from("Day")).chain(TimeSlot::ALL.into_iter().map(|s| Cell::from(s.label()))),
    )
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows = Weekday::ALL.into_iter().enumerate().map(|(r, day)| {
        let cells = view.grid.row(day).iter().enumerate().map(|(c, cell)| {
            let selected = (r, c) == (view.row, view.col);
            schedule_cell(cell, selected)
        });
        Row::new(std::iter::once(Cell::from(day.as_str())).chain(cells)).height(2)
    });

    let widths = [
        Constraint::Length(10),
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Fill(1),
    ];
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(" Weekly Schedule ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White).add_modifier(Modifier::DIM)),
    );
    f.render_widget(table, area);
}

fn schedule_cell(cell: &ScheduleCell, selected: bool) -> Cell<'static> {
    let mut lines = vec![Line::from(Span::styled(
        cell.label().to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    if let Some(class) = &cell.class {
        let seats = format!("{}/{}", class.reserved, class.capacity);
        let seats_style = if class.is_full() {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        lines.push(Line::from(vec![
            Span::raw(format!("[{}] ", class.state.action_label())),
            Span::styled(seats, seats_style),
        ]));
    }

    let style = if selected {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    Cell::from(Text::from(lines)).style(style)
}

fn draw_notice(f: &mut Frame, notice: &Notice) {
    let [area] = Layout::vertical([Constraint::Length(7)])
        .flex(Flex::Center)
        .areas(f.area());
    let [area] = Layout::horizontal([Constraint::Percentage(60)])
        .flex(Flex::Center)
        .areas(area);

    let color = match notice.kind {
        NoticeKind::Info => Color::Green,
        NoticeKind::Error => Color::Red,
    };

    let body = Paragraph::new(vec![
        Line::from(notice.text.as_str()),
        Line::from(""),
        Line::from(Span::styled("[Enter] OK", Style::default().fg(Color::DarkGray))),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(format!(" {} ", notice.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );

    f.render_widget(Clear, area);
    f.render_widget(body, area);
}
