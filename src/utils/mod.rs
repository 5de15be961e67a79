//! Shared text/markup helpers.

pub mod date;
pub mod html;
pub mod reading_time;
pub mod text;
