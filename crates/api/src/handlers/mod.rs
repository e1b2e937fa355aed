pub mod auth;
pub mod callback;
pub mod content;
pub mod mission_control;
pub mod sync;
