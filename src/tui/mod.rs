mod forms;
mod input;
mod log_view;
mod renderer;
mod status_bar;

pub use forms::{IdeaForm, SetupForm};
pub use input::handle_key;
pub use log_view::LogView;
pub use renderer::{RUNNING_CHROME_HEIGHT, Renderer};
pub use status_bar::{clamp_width, status_line, status_text};
