use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::store::SessionSlice;
use crate::ui::layout::centered_rect;
use crate::ui::login::state::{AuthMode, LoginField, LoginFormState};
use crate::ui::theme::{POPUP_BORDER, STATUS_ERROR, TEXT, TEXT_DIM};

const DIALOG_WIDTH: u16 = 52;

/// Render the sign-in / registration dialog.
///
/// The session slice supplies everything beyond raw input: the spinner
/// while an action is in flight and the recorded error when one failed.
pub fn render_login(frame: &mut Frame, form: &LoginFormState, session: &SessionSlice) {
    let title = match form.mode {
        AuthMode::SignIn => " Sign in ",
        AuthMode::Register => " Create account ",
    };

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));
    for field in form.fields() {
        lines.push(field_line(form, *field));
    }
    lines.push(Line::from(""));
    lines.push(status_line(form, session));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Enter: submit │ Tab: next │ Ctrl+R: switch mode",
        Style::default().fg(TEXT_DIM),
    )));

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

fn field_line(form: &LoginFormState, field: LoginField) -> Line<'static> {
    let (label, value) = match field {
        LoginField::Name => ("Name    ", form.name.clone()),
        LoginField::Email => ("Email   ", form.email.clone()),
        LoginField::Password => ("Password", mask(&form.password)),
    };
    let focused = form.focused == field;
    let marker = if focused { "▌ " } else { "  " };
    let value_style = if focused {
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT)
    };
    Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(TEXT)),
        Span::styled(format!("{label}  "), Style::default().fg(TEXT_DIM)),
        Span::styled(value, value_style),
    ])
}

fn status_line(form: &LoginFormState, session: &SessionSlice) -> Line<'static> {
    if session.loading {
        let text = match form.mode {
            AuthMode::SignIn => " Signing in…",
            AuthMode::Register => " Creating account…",
        };
        return Line::from(Span::styled(text, Style::default().fg(TEXT_DIM)));
    }
    match &session.error {
        Some(error) => Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(STATUS_ERROR),
        )),
        None => Line::from(""),
    }
}

fn mask(password: &str) -> String {
    "•".repeat(password.chars().count())
}
