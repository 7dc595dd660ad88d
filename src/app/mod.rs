pub mod actions;
pub mod event_loop;
pub mod location;
pub mod pagination;
pub mod state;
pub mod update;
pub mod view;
