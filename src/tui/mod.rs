pub mod picker_view;

pub use picker_view::{render_picker, PickerLayout};
