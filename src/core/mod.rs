pub mod config;
pub mod detection;

pub use config::*;
pub use detection::*;
