//! Chat transcript rendering contract: pure, placeholder-friendly, and
//! ownership decided by the viewer's id.

use chrono::{TimeZone, Utc};
use ratatui::layout::Alignment;

use huddle::api::{Conversation, Message, MessageAuthor, Participant};
use huddle::ui::chat::{is_own, transcript_lines, ChatProps};

fn message(id: i64, user_id: i64, name: &str, content: &str) -> Message {
    Message {
        id,
        user_id,
        user: MessageAuthor {
            name: name.to_string(),
        },
        content: content.to_string(),
        created_at: Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 0).unwrap(),
    }
}

fn conversation() -> Conversation {
    Conversation {
        name: "general".to_string(),
        users: vec![
            Participant {
                id: 1,
                name: "Ada".to_string(),
            },
            Participant {
                id: 2,
                name: "Bob".to_string(),
            },
        ],
    }
}

#[test]
fn own_messages_align_right_and_others_left() {
    let conversation = conversation();
    let messages = vec![message(1, 1, "Ada", "hello"), message(2, 2, "Bob", "hi")];
    let props = ChatProps {
        conversation: Some(&conversation),
        messages: &messages,
        current_user_id: Some(1),
        error: None,
    };

    let lines = transcript_lines(&props);
    // Each message renders a header line, a content line and a spacer.
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0].alignment, Some(Alignment::Right));
    assert_eq!(lines[1].alignment, Some(Alignment::Right));
    assert_eq!(lines[3].alignment, Some(Alignment::Left));
    assert_eq!(lines[4].alignment, Some(Alignment::Left));
}

#[test]
fn header_carries_author_and_time() {
    let conversation = conversation();
    let messages = vec![message(1, 2, "Bob", "hi")];
    let props = ChatProps {
        conversation: Some(&conversation),
        messages: &messages,
        current_user_id: Some(1),
        error: None,
    };

    let lines = transcript_lines(&props);
    let header: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
    assert_eq!(header, "Bob · 09:26");
}

#[test]
fn an_unauthenticated_viewer_owns_nothing() {
    let msg = message(1, 1, "Ada", "hello");
    assert!(!is_own(&msg, None));
    assert!(is_own(&msg, Some(1)));
    assert!(!is_own(&msg, Some(2)));
}

#[test]
fn missing_conversation_renders_a_placeholder() {
    let props = ChatProps {
        conversation: None,
        messages: &[],
        current_user_id: None,
        error: None,
    };
    let text: String = transcript_lines(&props)
        .iter()
        .flat_map(|line| line.spans.iter())
        .map(|span| span.content.as_ref().to_string())
        .collect();
    assert_eq!(text, "No conversation loaded");
}

#[test]
fn empty_transcript_renders_a_placeholder() {
    let conversation = conversation();
    let props = ChatProps {
        conversation: Some(&conversation),
        messages: &[],
        current_user_id: Some(1),
        error: None,
    };
    let text: String = transcript_lines(&props)
        .iter()
        .flat_map(|line| line.spans.iter())
        .map(|span| span.content.as_ref().to_string())
        .collect();
    assert_eq!(text, "No messages yet");
}

#[test]
fn errors_take_precedence_over_the_transcript() {
    let conversation = conversation();
    let messages = vec![message(1, 1, "Ada", "hello")];
    let props = ChatProps {
        conversation: Some(&conversation),
        messages: &messages,
        current_user_id: Some(1),
        error: Some("Unable to load the conversation"),
    };
    let text: String = transcript_lines(&props)
        .iter()
        .flat_map(|line| line.spans.iter())
        .map(|span| span.content.as_ref().to_string())
        .collect();
    assert_eq!(text, "Unable to load the conversation");
}

#[test]
fn rendering_is_deterministic() {
    let conversation = conversation();
    let messages = vec![message(1, 1, "Ada", "hello"), message(2, 2, "Bob", "hi")];
    let props = ChatProps {
        conversation: Some(&conversation),
        messages: &messages,
        current_user_id: Some(1),
        error: None,
    };
    assert_eq!(transcript_lines(&props), transcript_lines(&props));
}
