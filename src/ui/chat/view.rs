//! Chat transcript renderer.
//!
//! A pure function of its props: the same conversation, messages and
//! viewer id always produce the same lines. Absent inputs render a
//! placeholder instead of failing, and message sides are decided by
//! comparing each message's author id with the viewer's id.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::api::{Conversation, Message};
use crate::ui::chat::state::ChatPaneState;
use crate::ui::theme::{GLOBAL_BORDER, OTHER_MESSAGE, OWN_MESSAGE, PANE_TITLE, STATUS_ERROR, TEXT_DIM};

/// Already-resolved inputs of the chat pane. The view fetches nothing.
pub struct ChatProps<'a> {
    pub conversation: Option<&'a Conversation>,
    pub messages: &'a [Message],
    /// Id of the authenticated user, when known.
    pub current_user_id: Option<i64>,
    pub error: Option<&'a str>,
}

/// Whether a message was written by the viewer.
pub fn is_own(message: &Message, current_user_id: Option<i64>) -> bool {
    current_user_id == Some(message.user_id)
}

/// Build the transcript lines for the given props.
pub fn transcript_lines(props: &ChatProps<'_>) -> Vec<Line<'static>> {
    if let Some(error) = props.error {
        return vec![
            Line::from(""),
            Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(STATUS_ERROR),
            ))
            .alignment(Alignment::Center),
        ];
    }

    if props.conversation.is_none() {
        return vec![
            Line::from(""),
            Line::from(Span::styled(
                "No conversation loaded",
                Style::default().fg(TEXT_DIM),
            ))
            .alignment(Alignment::Center),
        ];
    }

    if props.messages.is_empty() {
        return vec![
            Line::from(""),
            Line::from(Span::styled("No messages yet", Style::default().fg(TEXT_DIM)))
                .alignment(Alignment::Center),
        ];
    }

    let mut lines = Vec::with_capacity(props.messages.len() * 3);
    for message in props.messages {
        let own = is_own(message, props.current_user_id);
        let alignment = if own {
            Alignment::Right
        } else {
            Alignment::Left
        };
        let color = if own { OWN_MESSAGE } else { OTHER_MESSAGE };

        let header = format!(
            "{} · {}",
            message.user.name,
            message.created_at.format("%H:%M")
        );
        lines.push(
            Line::from(Span::styled(header, Style::default().fg(TEXT_DIM)))
                .alignment(alignment),
        );
        lines.push(
            Line::from(Span::styled(
                message.content.clone(),
                Style::default().fg(color),
            ))
            .alignment(alignment),
        );
        lines.push(Line::from(""));
    }
    lines
}

/// Render the chat pane into `area`.
pub fn render_chat(frame: &mut Frame, area: Rect, props: &ChatProps<'_>, pane: &ChatPaneState) {
    let title = match props.conversation {
        Some(conversation) => format!(
            " {} ({} members) ",
            conversation.name,
            conversation.users.len()
        ),
        None => " Chat ".to_string(),
    };

    let lines = transcript_lines(props);
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = scroll_top(lines.len(), visible, pane.offset);

    frame.render_widget(
        Paragraph::new(lines)
            .scroll((scroll as u16, 0))
            .block(
                Block::default()
                    .title(Span::styled(
                        title,
                        Style::default().fg(PANE_TITLE).add_modifier(Modifier::BOLD),
                    ))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            ),
        area,
    );
}

/// First visible line given the transcript length, the viewport height
/// and the offset back from the bottom.
fn scroll_top(total: usize, visible: usize, offset: usize) -> usize {
    let max_top = total.saturating_sub(visible);
    max_top.saturating_sub(offset)
}
