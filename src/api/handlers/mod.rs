pub mod health;
pub mod track;

pub use health::health_handler;
pub use track::{preflight_handler, track_handler};
