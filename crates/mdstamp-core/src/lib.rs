pub mod classifier;
pub mod config;
pub mod document;
pub mod error;
pub mod header;
pub mod io;
pub mod metadata;
pub mod patch;
pub mod paths;
pub mod rules;
pub mod stamp;
pub mod types;

pub use error::{Result, StampError};
