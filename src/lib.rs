pub mod audio;
pub mod catalog;
pub mod event;
pub mod ui;
pub mod util;
