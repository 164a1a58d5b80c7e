pub mod about_panel;
pub mod info_panel;
pub mod report_panel;
pub mod tabs;

pub use about_panel::AboutPanel;
pub use info_panel::show_info_panel;
pub use report_panel::show_report_panel;
pub use tabs::{Tab, TabKind, TabViewer};
