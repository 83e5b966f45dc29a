//! Pipeline module - load, impute, compute

pub mod correlation;
pub mod error;
pub mod histogram;
pub mod loader;
pub mod missing;
pub mod record;
pub mod runner;
pub mod statistics;

pub use correlation::*;
pub use error::*;
pub use histogram::*;
pub use loader::*;
pub use missing::*;
pub use record::*;
pub use runner::*;
pub use statistics::*;
