mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_login;
pub use intent::LoginIntent;
pub use reducer::LoginReducer;
pub use state::{AuthMode, LoginField, LoginFormState};
