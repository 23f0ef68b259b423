pub mod tab;
pub mod tabs;

pub use tab::TabButton;
pub use tabs::{TabBar, TabPanel};
