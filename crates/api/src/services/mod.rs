//! Request-independent business logic used by the handlers.

pub mod content;
pub mod mission_control;
