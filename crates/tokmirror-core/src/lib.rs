pub mod analysis;
pub mod archive;
pub mod domain;
pub mod error;
pub mod export;
pub mod report;

pub use error::{Error, Result};
