pub mod cli;
pub mod command;
mod error;
mod options;
pub mod utils;

pub use command::LectorOutput;
pub use error::{LectorError, LectorResult};

pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
