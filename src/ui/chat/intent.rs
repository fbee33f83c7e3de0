use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy)]
pub enum ChatIntent {
    /// Scroll one line towards older messages.
    ScrollUp,
    /// Scroll one line towards newer messages.
    ScrollDown,
    /// Jump back to the newest message.
    JumpToLatest,
    /// A fresh transcript replaced the current one.
    TranscriptReplaced,
}

impl Intent for ChatIntent {}
