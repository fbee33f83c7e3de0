use crate::ui::mvi::UiState;

/// Scroll state of the chat pane.
///
/// `offset` counts lines back from the bottom of the transcript; zero
/// means following the newest message, which is also where every new
/// conversation starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChatPaneState {
    pub offset: usize,
}

impl UiState for ChatPaneState {}
