pub mod browser;
pub mod config;
pub mod date;
pub mod time;
