// Crate root library declaration and module exports.
pub mod cli;
pub mod client;
pub mod config;
pub mod context;
pub mod controller;
pub mod error;
pub mod feed;
pub mod model;
pub mod navigation;
pub mod storage;

pub use error::FetchError;

// --- ANDROID SUPPORT ---
#[cfg(feature = "mobile")]
pub mod mobile;

#[cfg(feature = "mobile")]
uniffi::setup_scaffolding!();
