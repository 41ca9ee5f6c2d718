mod widget;

pub use widget::{PointerTarget, SearchWidget};
