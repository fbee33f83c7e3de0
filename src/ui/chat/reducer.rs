use crate::ui::chat::intent::ChatIntent;
use crate::ui::chat::state::ChatPaneState;
use crate::ui::mvi::Reducer;

pub struct ChatReducer;

impl Reducer for ChatReducer {
    type State = ChatPaneState;
    type Intent = ChatIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ChatIntent::ScrollUp => ChatPaneState {
                offset: state.offset.saturating_add(1),
            },
            ChatIntent::ScrollDown => ChatPaneState {
                offset: state.offset.saturating_sub(1),
            },
            ChatIntent::JumpToLatest | ChatIntent::TranscriptReplaced => {
                ChatPaneState { offset: 0 }
            }
        }
    }
}
