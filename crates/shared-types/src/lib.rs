pub mod config;
pub mod dish;
pub mod error;
pub mod mask;
pub mod time;

pub use config::*;
pub use dish::*;
pub use error::*;
pub use mask::*;
pub use time::*;
