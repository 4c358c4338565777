pub mod error;
pub mod path;

pub use error::{BinError, BinResult};
