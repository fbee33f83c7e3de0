mod intent;
mod reducer;
mod state;
mod view;

pub use intent::ChatIntent;
pub use reducer::ChatReducer;
pub use state::ChatPaneState;
pub use view::{is_own, render_chat, transcript_lines, ChatProps};
