mod intent;
mod reducer;
mod state;
mod view;

pub use intent::UserFormIntent;
pub use reducer::UserFormReducer;
pub use state::{FormField, UserFormState};
pub use view::{render_user_form, render_users};
