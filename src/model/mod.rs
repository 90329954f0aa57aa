// File: ./src/model/mod.rs
pub mod adapter;
pub mod display;
pub mod item;

pub use adapter::{parse_payload, sort_newest_first};
pub use display::RecordDisplay;
pub use item::{CLASS_FALLBACK, SyllabusRecord, parse_timestamp};
