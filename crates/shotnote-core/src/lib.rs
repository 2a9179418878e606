pub mod config;
pub mod error;
pub mod types;

pub use config::ShotnoteConfig;
pub use error::{Result, ShotnoteError};
pub use types::*;
