pub mod app;
pub mod source;
pub mod ui;
