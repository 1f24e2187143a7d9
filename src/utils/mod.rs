pub mod format;
pub mod layout;
pub mod path;
pub mod text_input;

pub use format::{format_brl, format_play_duration};
pub use layout::{center_popup, center_rect, create_standard_layout};
pub use path::{get_config_dir, get_config_path, get_home_dir, get_log_dir};
pub use text_input::{InputFilter, TextInput};
