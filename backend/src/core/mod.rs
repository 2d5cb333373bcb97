//! Core timekeeping

pub mod time;
