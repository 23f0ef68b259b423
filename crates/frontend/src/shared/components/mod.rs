pub mod banner;
pub mod strength_meter;
pub mod ui;
