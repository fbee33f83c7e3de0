//! Team-member pane: the user table and the add/edit dialog.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::store::UsersSlice;
use crate::ui::layout::centered_rect;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, GLOBAL_BORDER, PANE_TITLE, POPUP_BORDER, STATUS_ERROR, TEXT, TEXT_DIM,
};
use crate::ui::users::state::{FormField, UserFormState};

const DIALOG_WIDTH: u16 = 52;

/// Render the member list. Loading and error flags come straight from
/// the users slice; an empty collection renders a placeholder.
pub fn render_users(
    frame: &mut Frame,
    area: Rect,
    slice: &UsersSlice,
    selected: usize,
    focused: bool,
) {
    let title = if slice.loading {
        " Team members (loading…) ".to_string()
    } else {
        format!(" Team members ({}) ", slice.users.len())
    };

    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(PANE_TITLE).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    if slice.users.is_empty() {
        let placeholder = match &slice.error {
            Some(error) => Line::from(Span::styled(
                error.clone(),
                Style::default().fg(STATUS_ERROR),
            )),
            None if slice.loading => Line::from(""),
            None => Line::from(Span::styled("No users yet", Style::default().fg(TEXT_DIM))),
        };
        frame.render_widget(
            Paragraph::new(vec![Line::from(""), placeholder]).block(block),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = slice
        .users
        .iter()
        .map(|user| {
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {:<20}", user.name), Style::default().fg(TEXT)),
                Span::styled(user.email.clone(), Style::default().fg(TEXT_DIM)),
            ]))
        })
        .collect();

    let highlight = if focused {
        Style::default().bg(ACTIVE_HIGHLIGHT).fg(TEXT)
    } else {
        Style::default()
    };

    let mut state = ListState::default();
    state.select(Some(selected.min(slice.users.len().saturating_sub(1))));

    frame.render_stateful_widget(
        List::new(items).block(block).highlight_style(highlight),
        area,
        &mut state,
    );

    if let Some(error) = &slice.error {
        let error_area = Rect {
            x: area.x + 1,
            y: area.y + area.height.saturating_sub(2),
            width: area.width.saturating_sub(2),
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                error.clone(),
                Style::default().fg(STATUS_ERROR),
            )),
            error_area,
        );
    }
}

/// Render the add/edit dialog when visible.
pub fn render_user_form(frame: &mut Frame, form: &UserFormState) {
    let UserFormState::Visible {
        user_id,
        name,
        email,
        password,
        focused,
        confirm_discard,
        ..
    } = form
    else {
        return;
    };

    let title = match user_id {
        Some(_) => " Edit member ",
        None => " Add member ",
    };

    let mut lines: Vec<Line> = vec![Line::from("")];
    for field in FormField::ORDER {
        let (label, value) = match field {
            FormField::Name => ("Name    ", name.clone()),
            FormField::Email => ("Email   ", email.clone()),
            FormField::Password => ("Password", "•".repeat(password.chars().count())),
        };
        let marker = if *focused == field { "▌ " } else { "  " };
        let style = if *focused == field {
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT)
        };
        lines.push(Line::from(vec![
            Span::styled(marker.to_string(), Style::default().fg(TEXT)),
            Span::styled(format!("{label}  "), Style::default().fg(TEXT_DIM)),
            Span::styled(value, style),
        ]));
    }
    lines.push(Line::from(""));
    if *confirm_discard {
        lines.push(Line::from(Span::styled(
            " Unsaved changes — press Esc again to discard",
            Style::default().fg(STATUS_ERROR),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            " Enter: save │ Tab: next │ Esc: close",
            Style::default().fg(TEXT_DIM),
        )));
    }

    let height = lines.len() as u16 + 2;
    let area = centered_rect(frame.area(), DIALOG_WIDTH, height);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER)),
        ),
        area,
    );
}
