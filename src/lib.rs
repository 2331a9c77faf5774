pub mod config;
pub mod error;
pub mod reader;
pub mod tracker;
pub mod workbook;

pub type Result<T> = std::result::Result<T, error::TrackerError>;

pub use config::{GeneratorConfig, UserProfile};
pub use tracker::generate;
