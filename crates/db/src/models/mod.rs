//! Row structs and DTOs.
//!
//! Row structs derive `FromRow` and convert into the domain types from
//! `spacetour_core`; insert DTOs carry only caller-supplied columns.

pub mod achievement;
pub mod content;
pub mod mission;
pub mod profile;
