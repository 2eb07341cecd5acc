pub mod annotate;
pub mod decoder;
pub mod geometry;
pub mod scanner;

pub use annotate::*;
pub use decoder::*;
pub use scanner::*;
