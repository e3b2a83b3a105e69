pub mod app;
pub mod command;
pub mod event;
pub mod mode;
pub mod render_state;

pub use app::App;
pub use command::{command_to_app_event, parse_command, Command};
pub use event::AppEvent;
pub use mode::AppMode;
pub use render_state::RenderState;
