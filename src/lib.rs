pub mod app;
pub mod stats;
pub mod ui;
pub mod util;
