//! Report module - console summary and output artifacts

pub mod export;
pub mod summary;

pub use export::*;
pub use summary::*;
