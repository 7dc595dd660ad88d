pub mod client;
pub mod error;
pub mod models;

pub use client::StatsClient;
pub use error::{Endpoint, FetchError};
pub use models::*;
