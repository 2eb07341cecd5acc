// Re-export core types
pub mod core;
pub use self::core::*;

// Re-export processing types
pub mod processing;
pub use processing::*;

pub mod viewer;
pub use viewer::*;

// Keep error module at the top level
pub mod error;
pub use error::{Result, ScanError};
