mod search_bar;
mod styles;
mod ui_config;
mod ui_text;

pub use search_bar::{SearchBar, navigate};

pub(crate) use styles::{UiStyleExt, colored_heading};

pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
